//! Status report of the reference bundle.

use adapt_kernel::{INVALID_CONFIGURATION_MESSAGE, VOID_TYPE};
use adapt_testing::assert_status_block;
use adapt_testing::fixtures::types::*;
use adapt_testing::fixtures::{LONG_TO_INTEGER_CONDITION, TEXT_LENGTH_CONDITION};
use adapt_testing::status_report;

#[test]
fn test_long_to_integer_if_fits() {
    let report = status_report().unwrap();
    assert_status_block!(report, LONG, Some(LONG_TO_INTEGER_CONDITION), [INTEGER]);
}

#[test]
fn test_short_adapters_are_merged_across_declarations() {
    let report = status_report().unwrap();
    // Declared by short-to-integer-and-long first, then integer-and-short-to-long.
    assert_status_block!(report, SHORT, None, [INTEGER, LONG]);
    assert_eq!(report.matches("Adaptable: i16\n").count(), 1);
}

#[test]
fn test_integer_and_short_to_long() {
    let report = status_report().unwrap();
    assert_status_block!(report, INTEGER, None, [LONG]);
}

#[test]
fn test_text_length_if_fits() {
    let report = status_report().unwrap();
    assert_status_block!(
        report,
        STR,
        Some(TEXT_LENGTH_CONDITION),
        [SHORT, INTEGER, LONG, BIG_INTEGER]
    );
    assert_status_block!(
        report,
        STRING,
        Some(TEXT_LENGTH_CONDITION),
        [SHORT, INTEGER, LONG, BIG_INTEGER]
    );
}

#[test]
fn test_deprecated() {
    // Deprecation is not part of the report.
    let report = status_report().unwrap();
    assert_status_block!(report, REQUEST, None, [RESOURCE]);
}

#[test]
fn test_invalid_adapter_factories() {
    let report = status_report().unwrap();
    assert!(!report.contains(&format!("\nCondition: {INVALID_CONFIGURATION_MESSAGE}\n")));
    assert!(!report.contains(VOID_TYPE));
}

#[test]
fn test_blocks_follow_first_seen_order() {
    let report = status_report().unwrap();
    let adaptables: Vec<_> = report
        .lines()
        .filter_map(|line| line.strip_prefix("Adaptable: "))
        .collect();

    assert_eq!(
        adaptables,
        vec![LONG, STR, STRING, SHORT, INTEGER, REQUEST]
    );
}
