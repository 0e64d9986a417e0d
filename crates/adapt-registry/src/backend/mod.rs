//! Registry backends.

mod registry;

pub use registry::{InMemoryAdapterRegistry, SharedAdapterRegistry};
