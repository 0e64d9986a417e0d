//! Crate-level error types for `adapt-kernel`.
//!
//! Validation never produces errors: an invalid declaration is a data
//! outcome.  [`KernelError`] covers the integration boundaries instead:
//! loading manifests and talking to a registry.
//!
//! # Usage
//!
//! ```rust,ignore
//! use adapt_kernel::error::{KernelError, KernelResult};
//! use error_stack::ResultExt;
//!
//! fn install(path: &str) -> KernelResult<()> {
//!     let manifest = adapt_kernel::config::load_manifest(path)
//!         .attach("installing adapter bundle")?;
//!     Ok(())
//! }
//! ```

use crate::registry::RegistryError;
use thiserror::Error;

/// Crate-level error type for `adapt-kernel`.
///
/// Wraps each sub-module's typed error via `#[from]` so that the `?`
/// operator converts them automatically. Use
/// [`error_stack::Report<KernelError>`] (via [`KernelResult`]) to attach
/// human-readable context as the error propagates up the call stack.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KernelError {
    /// A manifest loading error (requires the `config` feature).
    #[cfg(feature = "config")]
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// A registry rejected an operation.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Convenience result alias using [`error_stack::Report`].
///
/// Equivalent to `Result<T, error_stack::Report<KernelError>>`.
pub type KernelResult<T> = Result<T, error_stack::Report<KernelError>>;
