//! Adapter status report.
//!
//! Groups published records by adaptable type and renders them as the
//! plain-text report consumed by console and monitoring tooling:
//!
//! ```text
//! Adaptable: i64
//! Condition: If the value fits
//! Providing Bundle: org.example.numbers
//! Available Adapters:
//!  * i32
//!
//! ```
//!
//! The line layout is a compatibility contract for tools parsing the report.
//! Records published for invalid declarations never appear in it.
//!
//! A block's condition is the one declared by the record that opened the
//! block; records merged into it later contribute adapters only.

use crate::metadata::{MetadataRecord, RecordError};
use crate::registry::RegisteredAdapter;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// One block of the status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterDescriptor {
    pub adaptable: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    pub providing_bundle: String,
    /// De-duplicated, in first-seen declaration order.
    pub adapters: Vec<String>,
}

impl fmt::Display for AdapterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adaptable: {}", self.adaptable)?;
        if let Some(condition) = &self.condition {
            writeln!(f, "Condition: {condition}")?;
        }
        writeln!(f, "Providing Bundle: {}", self.providing_bundle)?;
        writeln!(f, "Available Adapters:")?;
        for adapter in &self.adapters {
            writeln!(f, " * {adapter}")?;
        }
        writeln!(f)
    }
}

/// Group published records into report blocks, one per adaptable type.
///
/// Blocks appear in the order their adaptable type is first seen.  When
/// several records share an adaptable, the block keeps the providing bundle
/// and condition of the record that opened it, and merges the adapter types
/// of all of them.  Invalid records are dropped; malformed ones are
/// logged and skipped.
pub fn status_descriptors<'a, I>(entries: I) -> Vec<AdapterDescriptor>
where
    I: IntoIterator<Item = &'a RegisteredAdapter>,
{
    let mut descriptors: Vec<AdapterDescriptor> = Vec::new();
    let mut by_adaptable: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let record = &entry.record;
        if record.is_invalid() {
            debug!(component = %entry.component, "omitting invalid adapter from status");
            continue;
        }

        let (adaptables, adapters, condition) = match read_classes(record) {
            Ok((Some(adaptables), Some(adapters), condition)) => (adaptables, adapters, condition),
            Ok(_) => {
                warn!(component = %entry.component, "skipping adapter record without classes");
                continue;
            }
            Err(err) => {
                warn!(component = %entry.component, error = %err, "skipping malformed adapter record");
                continue;
            }
        };

        for adaptable in adaptables {
            let slot = match by_adaptable.get(&adaptable) {
                Some(&slot) => slot,
                None => {
                    by_adaptable.insert(adaptable.clone(), descriptors.len());
                    descriptors.push(AdapterDescriptor {
                        adaptable,
                        condition: condition.clone(),
                        providing_bundle: entry.bundle.clone(),
                        adapters: Vec::new(),
                    });
                    descriptors.len() - 1
                }
            };

            let descriptor = &mut descriptors[slot];
            for adapter in &adapters {
                if !descriptor.adapters.contains(adapter) {
                    descriptor.adapters.push(adapter.clone());
                }
            }
        }
    }

    descriptors
}

type Classes = (Option<Vec<String>>, Option<Vec<String>>, Option<String>);

fn read_classes(record: &MetadataRecord) -> Result<Classes, RecordError> {
    Ok((
        record.adaptable_classes()?,
        record.adapter_classes()?,
        record.condition()?.map(str::to_string),
    ))
}

/// Render descriptors as the plain-text report.
pub fn render_status(descriptors: &[AdapterDescriptor]) -> String {
    descriptors.iter().map(ToString::to_string).collect()
}

/// Render descriptors as a JSON array.
pub fn render_status_json(descriptors: &[AdapterDescriptor]) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(descriptors)
}

/// Shorthand for `render_status(&status_descriptors(entries))`.
pub fn status_report<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a RegisteredAdapter>,
{
    render_status(&status_descriptors(entries))
}
