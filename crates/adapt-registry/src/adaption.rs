//! Adaption view over a registry.
//!
//! The adaptation runtime exposes one adaption per usable published record.
//! Records of invalid declarations, malformed records and records without
//! both class lists are left out.

use adapt_kernel::metadata::{ADAPTABLE_CLASSES, ADAPTER_CLASSES, SERVICE_SCOPE};
use adapt_kernel::{RegisteredAdapter, ServiceId, ServiceScope};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A usable adapter as offered by the adaptation runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adaption {
    pub service_id: ServiceId,
    pub component: String,
    pub adaptables: Vec<String>,
    pub adapters: Vec<String>,
}

impl Adaption {
    /// Properties the adaptation runtime publishes for this adaption.
    ///
    /// Adaptions are always singletons, whatever scope the record declares.
    pub fn properties(&self) -> BTreeMap<String, Value> {
        BTreeMap::from([
            (ADAPTABLE_CLASSES.to_string(), Value::from(self.adaptables.clone())),
            (ADAPTER_CLASSES.to_string(), Value::from(self.adapters.clone())),
            (
                SERVICE_SCOPE.to_string(),
                Value::from(ServiceScope::Singleton.as_str()),
            ),
        ])
    }
}

/// Usable adaptions, in the order the entries are given.
pub fn adaptions<'a, I>(entries: I) -> Vec<Adaption>
where
    I: IntoIterator<Item = &'a RegisteredAdapter>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let record = &entry.record;
            if record.is_invalid() {
                debug!(component = %entry.component, "no adaption for invalid declaration");
                return None;
            }
            let classes = record
                .adaptable_classes()
                .and_then(|adaptables| Ok((adaptables, record.adapter_classes()?)));
            let (adaptables, adapters) = match classes {
                Ok((Some(adaptables), Some(adapters)))
                    if !adaptables.is_empty() && !adapters.is_empty() =>
                {
                    (adaptables, adapters)
                }
                Ok(_) => {
                    debug!(component = %entry.component, "no adaption for record without classes");
                    return None;
                }
                Err(err) => {
                    warn!(component = %entry.component, error = %err, "skipping malformed adapter record");
                    return None;
                }
            };

            Some(Adaption {
                service_id: entry.id,
                component: entry.component.clone(),
                adaptables,
                adapters,
            })
        })
        .collect()
}
