//! Adapter declarations.
//!
//! An [`AdapterDeclaration`] is the author-supplied capability statement of an
//! adaptation handler: which source types (*adaptables*) it accepts and which
//! target types (*adapters*) it can produce.  Declarations are plain typed
//! values, built with the builder methods below or loaded from a bundle
//! manifest (see `crate::config`).  They are never mutated after creation.
//!
//! ```rust
//! use adapt_kernel::declaration::AdapterDeclaration;
//!
//! let declaration = AdapterDeclaration::new("long-to-integer")
//!     .with_adaptable("i64")
//!     .with_adapter("i32")
//!     .with_condition("If the value fits");
//!
//! assert!(declaration.validate().is_valid());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod validation;

pub use validation::{INVALID_CONFIGURATION_MESSAGE, VOID_TYPE, ValidationResult, validate};

// ─────────────────────────────────────────────────────────────────────────────
// Service scope
// ─────────────────────────────────────────────────────────────────────────────

/// Registration scope of the service that publishes a declaration.
///
/// Passed through unchanged to the `service.scope` property; this crate never
/// computes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ServiceScope {
    /// One service object per declaring deployment unit.
    #[default]
    Bundle,
    /// A single shared service object.
    Singleton,
    /// A new service object per consumer.
    Prototype,
}

impl ServiceScope {
    /// The property value written under `service.scope`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bundle => "bundle",
            Self::Singleton => "singleton",
            Self::Prototype => "prototype",
        }
    }

    /// Parse a `service.scope` property value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bundle" => Some(Self::Bundle),
            "singleton" => Some(Self::Singleton),
            "prototype" => Some(Self::Prototype),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AdapterDeclaration
// ─────────────────────────────────────────────────────────────────────────────

/// Capability statement of a single adaptation handler.
///
/// Both type lists keep their declared order and duplicates.  Empty lists are
/// legal values here; they make the declaration invalid (see
/// [`validate`]) but never cause an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterDeclaration {
    /// Component name of the declaring handler, unique within a registry.
    pub name: String,
    /// Source types from which adaptation may be requested.
    #[serde(default)]
    pub adaptables: Vec<String>,
    /// Target types that adaptation may produce.
    #[serde(default)]
    pub adapters: Vec<String>,
    /// When adaptation may legitimately produce no result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Marks the handler as deprecated.
    #[serde(default)]
    pub deprecated: bool,
    /// Ordering among handlers matching the same pair; lower wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking: Option<i32>,
    /// Registration scope, passed through to the registry.
    #[serde(default)]
    pub scope: ServiceScope,
}

impl AdapterDeclaration {
    /// Create a declaration with no types and default metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adaptables: Vec::new(),
            adapters: Vec::new(),
            condition: None,
            deprecated: false,
            ranking: None,
            scope: ServiceScope::default(),
        }
    }

    /// Builder: append one adaptable type.
    pub fn with_adaptable(mut self, adaptable: impl Into<String>) -> Self {
        self.adaptables.push(adaptable.into());
        self
    }

    /// Builder: replace the adaptable types.
    pub fn with_adaptables<I, S>(mut self, adaptables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adaptables = adaptables.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: append one adapter type.
    pub fn with_adapter(mut self, adapter: impl Into<String>) -> Self {
        self.adapters.push(adapter.into());
        self
    }

    /// Builder: replace the adapter types.
    pub fn with_adapters<I, S>(mut self, adapters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adapters = adapters.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the adaptation condition.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Builder: mark the handler as deprecated.
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Builder: set an explicit ranking.
    pub fn with_ranking(mut self, ranking: i32) -> Self {
        self.ranking = Some(ranking);
        self
    }

    /// Builder: set the registration scope.
    pub fn with_scope(mut self, scope: ServiceScope) -> Self {
        self.scope = scope;
        self
    }

    /// Classify this declaration.  Shorthand for [`validate`].
    pub fn validate(&self) -> ValidationResult {
        validate(self)
    }

    /// Validate and map this declaration in one step.
    pub fn to_record(&self) -> crate::metadata::MetadataRecord {
        crate::metadata::to_record(self, &self.validate())
    }
}
