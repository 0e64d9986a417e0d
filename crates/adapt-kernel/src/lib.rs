//! `adapt-kernel`: adapter declaration contracts.
//!
//! Turns author-supplied adapter declarations into the canonical metadata
//! records a service registry publishes, and renders published records as a
//! status report.  No registry implementation lives here; see
//! `adapt-registry`.
//!
//! ```text
//! AdapterDeclaration ──validate()──▶ ValidationResult
//!         │                                │
//!         └──────────to_record()───────────┘
//!                         │
//!                         ▼
//!                  MetadataRecord ──register()──▶ AdapterRegistry
//!                                                       │
//!                                     status_report() ◀─┘
//! ```

// declaration module
pub mod declaration;
pub use declaration::{
    AdapterDeclaration, INVALID_CONFIGURATION_MESSAGE, ServiceScope, VOID_TYPE, ValidationResult,
    validate,
};

// metadata module
pub mod metadata;
pub use metadata::{MetadataRecord, RecordError, to_record};

// registry module
pub mod registry;
pub use registry::{AdapterRegistry, RegisteredAdapter, RegistryError, ServiceId};

// status module
pub mod status;

// error module
pub mod error;

// manifest loading
#[cfg(feature = "config")]
pub mod config;
