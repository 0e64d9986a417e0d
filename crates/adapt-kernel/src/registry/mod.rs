//! Adapter registry: kernel contract.
//!
//! The [`AdapterRegistry`] trait is the publication boundary for metadata
//! records: a registry receives one [`MetadataRecord`] per declaring
//! component, assigns it a [`ServiceId`] and exposes it for discovery.
//! Concrete implementations live in `adapt-registry`.

use crate::metadata::MetadataRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod error;

pub use error::RegistryError;

/// Registry-assigned identity of a published record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub u64);

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record as seen through a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredAdapter {
    /// Identity assigned at registration.
    pub id: ServiceId,
    /// Component name of the declaring handler.
    pub component: String,
    /// Symbolic name of the deployment unit that declared the handler.
    pub bundle: String,
    /// The published metadata.
    pub record: MetadataRecord,
}

/// Kernel contract for the adapter registry.
///
/// Implementations store [`RegisteredAdapter`]s and expose them in
/// registration order so reports built from them are deterministic.
pub trait AdapterRegistry: Send + Sync {
    /// Publish a record for `component`, declared by `bundle`.
    ///
    /// Returns [`RegistryError::DuplicateComponent`] if the component is
    /// already registered and [`RegistryError::EmptyComponentName`] if the
    /// name is blank.
    fn register(
        &mut self,
        component: &str,
        bundle: &str,
        record: MetadataRecord,
    ) -> Result<ServiceId, RegistryError>;

    /// Look up a published record by service id.
    fn lookup(&self, id: ServiceId) -> Option<&RegisteredAdapter>;

    /// Look up a published record by component name.
    fn lookup_component(&self, component: &str) -> Option<&RegisteredAdapter>;

    /// All published records, in registration order.
    fn list_all(&self) -> Vec<&RegisteredAdapter>;

    /// Withdraw a published record.
    ///
    /// Returns [`RegistryError::ServiceNotFound`] if the id is absent.
    fn deregister(&mut self, id: ServiceId) -> Result<RegisteredAdapter, RegistryError>;

    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
