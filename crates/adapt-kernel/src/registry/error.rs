//! Registry error types.

use thiserror::Error;

use super::ServiceId;

/// Failure modes of an [`AdapterRegistry`](super::AdapterRegistry).
///
/// Invalid declarations are *not* errors: they are registered like any other
/// record and suppressed by consumers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    /// The component name is empty or whitespace-only.
    #[error("component name cannot be empty")]
    EmptyComponentName,

    /// A component with this name has already been registered.
    #[error("component '{0}' is already registered")]
    DuplicateComponent(String),

    /// No component with this name is currently registered.
    #[error("component '{0}' is not registered")]
    ComponentNotFound(String),

    /// No service with this id is currently registered.
    #[error("service {0} is not registered")]
    ServiceNotFound(ServiceId),
}
