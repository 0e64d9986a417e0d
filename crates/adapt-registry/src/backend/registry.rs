//! In-memory [`AdapterRegistry`] implementation.

use adapt_kernel::registry::{AdapterRegistry, RegisteredAdapter, RegistryError, ServiceId};
use adapt_kernel::status::status_report;
use adapt_kernel::MetadataRecord;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::info;

/// Registry shared between installers and readers.
pub type SharedAdapterRegistry = Arc<RwLock<InMemoryAdapterRegistry>>;

/// [`AdapterRegistry`] backed by ordered maps.
///
/// Service ids start at 1 and are never reused, so iteration order is
/// registration order.
#[derive(Debug, Default)]
pub struct InMemoryAdapterRegistry {
    store: BTreeMap<ServiceId, RegisteredAdapter>,
    by_component: HashMap<String, ServiceId>,
    last_id: u64,
}

impl InMemoryAdapterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry wrapped for sharing.
    pub fn shared() -> SharedAdapterRegistry {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Withdraw the record of a component by name.
    pub fn deregister_component(
        &mut self,
        component: &str,
    ) -> Result<RegisteredAdapter, RegistryError> {
        let id = self
            .by_component
            .get(component)
            .copied()
            .ok_or_else(|| RegistryError::ComponentNotFound(component.to_string()))?;
        self.deregister(id)
    }

    /// Records declared by one deployment unit, in registration order.
    pub fn list_by_bundle(&self, bundle: &str) -> Vec<&RegisteredAdapter> {
        self.store.values().filter(|a| a.bundle == bundle).collect()
    }

    /// Plain-text status report over every published record.
    pub fn status_report(&self) -> String {
        status_report(self.store.values())
    }
}

impl AdapterRegistry for InMemoryAdapterRegistry {
    fn register(
        &mut self,
        component: &str,
        bundle: &str,
        record: MetadataRecord,
    ) -> Result<ServiceId, RegistryError> {
        if component.trim().is_empty() {
            return Err(RegistryError::EmptyComponentName);
        }
        if self.by_component.contains_key(component) {
            return Err(RegistryError::DuplicateComponent(component.to_string()));
        }

        self.last_id += 1;
        let id = ServiceId(self.last_id);
        info!(
            service_id = %id,
            component = component,
            bundle = bundle,
            invalid = record.is_invalid(),
            "registered adapter"
        );
        self.by_component.insert(component.to_string(), id);
        self.store.insert(
            id,
            RegisteredAdapter {
                id,
                component: component.to_string(),
                bundle: bundle.to_string(),
                record,
            },
        );
        Ok(id)
    }

    fn lookup(&self, id: ServiceId) -> Option<&RegisteredAdapter> {
        self.store.get(&id)
    }

    fn lookup_component(&self, component: &str) -> Option<&RegisteredAdapter> {
        self.by_component
            .get(component)
            .and_then(|id| self.store.get(id))
    }

    fn list_all(&self) -> Vec<&RegisteredAdapter> {
        self.store.values().collect()
    }

    fn deregister(&mut self, id: ServiceId) -> Result<RegisteredAdapter, RegistryError> {
        let removed = self
            .store
            .remove(&id)
            .ok_or(RegistryError::ServiceNotFound(id))?;
        self.by_component.remove(&removed.component);
        info!(service_id = %id, component = %removed.component, "deregistered adapter");
        Ok(removed)
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}
