//! `adapt-registry`: adapter registry runtime.
//!
//! Concrete implementations of the contracts defined in `adapt-kernel`:
//!
//! | Kernel contract | Implementation |
//! |----------------|----------------|
//! | [`AdapterRegistry`](adapt_kernel::AdapterRegistry) | [`backend::InMemoryAdapterRegistry`] |
//! | [`BundleManifest`](adapt_kernel::config::BundleManifest) | [`bundle::Bundle`] |
//!
//! The `adapt-status` binary loads manifests, installs them into an
//! in-memory registry and prints the status report.
//!
//! # Quick start
//!
//! ```rust
//! use adapt_registry::backend::InMemoryAdapterRegistry;
//! use adapt_registry::bundle::Bundle;
//! use adapt_registry::kernel::AdapterDeclaration;
//!
//! let bundle = Bundle::new("org.example.numbers").with_declaration(
//!     AdapterDeclaration::new("long-to-integer")
//!         .with_adaptable("i64")
//!         .with_adapter("i32"),
//! );
//!
//! let mut registry = InMemoryAdapterRegistry::new();
//! bundle.install_into(&mut registry).unwrap();
//!
//! assert!(registry.status_report().starts_with("Adaptable: i64\n"));
//! ```

pub mod adaption;
pub mod backend;
pub mod bundle;

// Re-export the kernel for convenience.
pub use adapt_kernel as kernel;
