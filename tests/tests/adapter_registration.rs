//! Adaptions offered by the adaptation runtime for the reference bundle.

use adapt_kernel::{AdapterRegistry, VOID_TYPE};
use adapt_registry::adaption::adaptions;
use adapt_testing::fixtures::types::*;
use adapt_testing::installed_registry;
use serde_json::{Value, json};
use std::collections::BTreeMap;

fn registered_adaptions() -> Vec<BTreeMap<String, Value>> {
    let registry = installed_registry().unwrap();
    let registry = registry.read();
    adaptions(registry.list_all()).iter().map(|a| a.properties()).collect()
}

fn assert_adaption(adaptables: &[&str], adapters: &[&str]) {
    let expected = BTreeMap::from([
        ("adaptable.classes".to_string(), json!(adaptables)),
        ("adapter.classes".to_string(), json!(adapters)),
        ("service.scope".to_string(), json!("singleton")),
    ]);
    let found = registered_adaptions();
    assert!(
        found.contains(&expected),
        "no adaption {expected:?} among {found:?}"
    );
}

#[test]
fn test_long_to_integer_if_fits() {
    assert_adaption(&[LONG], &[INTEGER]);
}

#[test]
fn test_text_length_if_fits() {
    assert_adaption(&[STR, STRING], &[SHORT, INTEGER, LONG, BIG_INTEGER]);
}

#[test]
fn test_short_to_integer_and_long() {
    assert_adaption(&[SHORT], &[INTEGER, LONG]);
}

#[test]
fn test_integer_and_short_to_long() {
    assert_adaption(&[INTEGER, SHORT], &[LONG]);
}

#[test]
fn test_deprecated() {
    assert_adaption(&[REQUEST], &[RESOURCE]);
}

#[test]
fn test_invalid_adapter_factories() {
    let void = json!([VOID_TYPE]);
    let found = registered_adaptions();

    assert_eq!(found.len(), 5);
    assert!(!found.iter().any(|properties| properties.values().any(|v| *v == void)));
}
