//! Published properties of every reference component.

use adapt_kernel::{AdapterRegistry, INVALID_CONFIGURATION_MESSAGE, VOID_TYPE};
use adapt_testing::assert_properties;
use adapt_testing::fixtures::types::*;
use adapt_testing::fixtures::{LONG_TO_INTEGER_CONDITION, TEXT_LENGTH_CONDITION, components};

#[test]
fn test_long_to_integer_if_fits() {
    assert_properties!(components::LONG_TO_INTEGER_IF_FITS, {
        "adaptable.classes" => [LONG],
        "adapter.classes" => [INTEGER],
        "adapter.condition" => LONG_TO_INTEGER_CONDITION,
    });
}

#[test]
fn test_text_length_if_fits() {
    assert_properties!(components::TEXT_LENGTH_IF_FITS, {
        "adaptable.classes" => [STR, STRING],
        "adapter.classes" => [SHORT, INTEGER, LONG, BIG_INTEGER],
        "adapter.condition" => TEXT_LENGTH_CONDITION,
    });
}

#[test]
fn test_short_to_integer_and_long() {
    assert_properties!(components::SHORT_TO_INTEGER_AND_LONG, {
        "adaptable.classes" => [SHORT],
        "adapter.classes" => [INTEGER, LONG],
    });
}

#[test]
fn test_integer_and_short_to_long() {
    assert_properties!(components::INTEGER_AND_SHORT_TO_LONG, {
        "adaptable.classes" => [INTEGER, SHORT],
        "adapter.classes" => [LONG],
    });
}

#[test]
fn test_deprecated() {
    assert_properties!(components::DEPRECATED, {
        "adapter.deprecated" => true,
        "adaptable.classes" => [REQUEST],
        "adapter.classes" => [RESOURCE],
    });
}

#[test]
fn test_invalid_missing_adaptables_and_adapters() {
    assert_properties!(components::INVALID_EMPTY, {
        "adapter.condition" => INVALID_CONFIGURATION_MESSAGE,
    });
}

#[test]
fn test_invalid_missing_adaptables() {
    // The declared adapters are not published; the adaptable side is voided.
    assert_properties!(components::INVALID_NO_ADAPTABLES, {
        "adapter.condition" => INVALID_CONFIGURATION_MESSAGE,
        "adaptable.classes" => [VOID_TYPE],
    });
}

#[test]
fn test_invalid_missing_adapters() {
    assert_properties!(components::INVALID_NO_ADAPTERS, {
        "adapter.condition" => INVALID_CONFIGURATION_MESSAGE,
        "adapter.classes" => [VOID_TYPE],
    });
}

#[test]
fn test_every_component_is_registered_once() {
    let registry = adapt_testing::installed_registry().unwrap();
    // Installing again is a no-op.
    adapt_testing::installed_registry().unwrap();

    let registry = registry.read();
    let names: Vec<_> = registry.list_all().into_iter().map(|e| e.component.clone()).collect();
    let expected: Vec<_> = adapt_testing::fixtures::all_declarations()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, expected);
}
