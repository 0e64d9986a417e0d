//! Process-wide registry with the reference bundle installed once.
//!
//! Every test binary shares one registry; whichever test asks first
//! performs the installation.

use crate::fixtures::test_bundle;
use adapt_kernel::AdapterRegistry;
use adapt_kernel::metadata::{DEFAULT_RANKING, SERVICE_RANKING, SERVICE_SCOPE};
use adapt_kernel::ServiceScope;
use adapt_registry::backend::{InMemoryAdapterRegistry, SharedAdapterRegistry};
use adapt_registry::bundle::InstallOnce;
use anyhow::{Context, anyhow};
use serde_json::Value;
use std::collections::BTreeMap;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

static REGISTRY: Lazy<SharedAdapterRegistry> = Lazy::new(InMemoryAdapterRegistry::shared);
static INSTALL: InstallOnce = InstallOnce::new();

/// The shared registry, installing the reference bundle on first use.
pub fn installed_registry() -> anyhow::Result<SharedAdapterRegistry> {
    INSTALL.install_with(|| {
        debug!("installing reference bundle");
        let mut registry = REGISTRY.write();
        test_bundle()
            .install_into(&mut *registry)
            .map(|_| ())
            .map_err(|report| anyhow!("{report:?}"))
    })?;
    Ok(Arc::clone(&REGISTRY))
}

/// Published properties of one component.
pub fn properties_of(component: &str) -> anyhow::Result<BTreeMap<String, Value>> {
    let registry = installed_registry()?;
    let registry = registry.read();
    let entry = registry
        .lookup_component(component)
        .with_context(|| format!("component {component} is not registered"))?;
    Ok(entry.record.properties().clone())
}

/// Registry-level properties every record carries by default.
pub fn base_properties() -> BTreeMap<String, Value> {
    BTreeMap::from([
        (SERVICE_RANKING.to_string(), Value::from(DEFAULT_RANKING)),
        (
            SERVICE_SCOPE.to_string(),
            Value::from(ServiceScope::Bundle.as_str()),
        ),
    ])
}

/// Plain-text status report of the shared registry.
pub fn status_report() -> anyhow::Result<String> {
    let registry = installed_registry()?;
    let report = registry.read().status_report();
    Ok(report)
}
