//! Adapt Testing
//!
//! Reference declarations and a shared, install-once registry for the
//! end-to-end suites under `tests/`.

pub mod shared;

pub use shared::{base_properties, installed_registry, properties_of, status_report};

#[doc(hidden)]
pub use serde_json as __serde_json;

/// Assert the complete published property map of a component.
///
/// The registry-level defaults (`service.ranking`, `service.scope`) are
/// expected implicitly; list only what the declaration contributes.
#[macro_export]
macro_rules! assert_properties {
    ($component:expr, { $($key:expr => $value:expr),* $(,)? }) => {{
        let actual = $crate::properties_of($component).unwrap();
        #[allow(unused_mut)]
        let mut expected = $crate::base_properties();
        $(
            expected.insert($key.to_string(), $crate::__serde_json::json!($value));
        )*
        assert_eq!(actual, expected, "properties of component {}", $component);
    }};
}

/// Assert that the status report contains an exact block.
#[macro_export]
macro_rules! assert_status_block {
    ($report:expr, $adaptable:expr, $condition:expr, [$($adapter:expr),* $(,)?]) => {{
        let mut block = format!("Adaptable: {}\n", $adaptable);
        let condition: Option<&str> = $condition;
        if let Some(condition) = condition {
            block.push_str(&format!("Condition: {condition}\n"));
        }
        block.push_str(&format!(
            "Providing Bundle: {}\nAvailable Adapters:\n",
            $crate::fixtures::TEST_BUNDLE
        ));
        $(
            block.push_str(&format!(" * {}\n", $adapter));
        )*
        block.push('\n');
        assert!(
            $report.starts_with(&block) || $report.contains(&format!("\n{block}")),
            "missing block:\n{block}\nin report:\n{}",
            $report
        );
    }};
}
