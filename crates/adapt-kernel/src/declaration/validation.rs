//! Declaration validation.
//!
//! A declaration is valid iff it names at least one adaptable *and* at least
//! one adapter.  Every invalid declaration gets the same
//! [`INVALID_CONFIGURATION_MESSAGE`], whichever list (or both) was empty.

use super::AdapterDeclaration;
use tracing::debug;

/// Condition published for every invalid declaration.
///
/// Consumers compare against this exact string to suppress invalid
/// registrations, so it must never change between releases.
pub const INVALID_CONFIGURATION_MESSAGE: &str =
    "Invalid adapter configuration: at least one adaptable and one adapter type must be declared";

/// Placeholder type published in the otherwise-empty class slot of an
/// invalid declaration.
///
/// Angle brackets cannot start a type path, so no declared type names it.
pub const VOID_TYPE: &str = "<void>";

/// Outcome of [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidationResult {
    valid: bool,
    reason: Option<&'static str>,
}

impl ValidationResult {
    /// A valid outcome, without a reason.
    pub const fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// An invalid outcome carrying [`INVALID_CONFIGURATION_MESSAGE`].
    pub const fn invalid() -> Self {
        Self {
            valid: false,
            reason: Some(INVALID_CONFIGURATION_MESSAGE),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The invalid-configuration message, or `None` when valid.
    pub fn reason(&self) -> Option<&'static str> {
        self.reason
    }
}

/// Classify a declaration.  Pure and total: never fails, never panics.
pub fn validate(declaration: &AdapterDeclaration) -> ValidationResult {
    let result = if declaration.adaptables.is_empty() || declaration.adapters.is_empty() {
        ValidationResult::invalid()
    } else {
        ValidationResult::valid()
    };

    debug!(
        component = %declaration.name,
        adaptables = declaration.adaptables.len(),
        adapters = declaration.adapters.len(),
        valid = result.is_valid(),
        "validated adapter declaration"
    );

    result
}
