//! Declaration → [`MetadataRecord`] mapping.

use super::{
    ADAPTABLE_CLASSES, ADAPTER_CLASSES, ADAPTER_CONDITION, ADAPTER_DEPRECATED, DEFAULT_RANKING,
    MetadataRecord, SERVICE_RANKING, SERVICE_SCOPE,
};
use crate::declaration::{AdapterDeclaration, VOID_TYPE, ValidationResult};
use serde_json::Value;

/// Build the record published for `declaration`.
///
/// Never fails.  For a valid declaration both class lists are copied
/// verbatim.  For an invalid one the author's condition is replaced by the
/// invalid-configuration message, and the class key *opposite* each
/// non-empty list is filled with [`VOID_TYPE`] so nothing can match it; a
/// declaration with both lists empty publishes neither class key.
pub fn to_record(declaration: &AdapterDeclaration, validation: &ValidationResult) -> MetadataRecord {
    let mut record = MetadataRecord::new();

    match validation.reason() {
        None => {
            record.insert(ADAPTABLE_CLASSES, type_list(&declaration.adaptables));
            record.insert(ADAPTER_CLASSES, type_list(&declaration.adapters));
            if let Some(condition) = declaration.condition.as_deref().filter(|c| !c.is_empty()) {
                record.insert(ADAPTER_CONDITION, condition);
            }
        }
        Some(reason) => {
            record.insert(ADAPTER_CONDITION, reason);
            if !declaration.adaptables.is_empty() {
                record.insert(ADAPTER_CLASSES, void_list());
            }
            if !declaration.adapters.is_empty() {
                record.insert(ADAPTABLE_CLASSES, void_list());
            }
        }
    }

    if declaration.deprecated {
        record.insert(ADAPTER_DEPRECATED, true);
    }
    record.insert(SERVICE_RANKING, declaration.ranking.unwrap_or(DEFAULT_RANKING));
    record.insert(SERVICE_SCOPE, declaration.scope.as_str());

    record
}

fn type_list(types: &[String]) -> Value {
    Value::Array(types.iter().cloned().map(Value::String).collect())
}

fn void_list() -> Value {
    Value::Array(vec![Value::String(VOID_TYPE.to_string())])
}
