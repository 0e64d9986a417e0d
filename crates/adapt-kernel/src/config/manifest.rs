use super::{ConfigError, load_config};
use crate::declaration::AdapterDeclaration;
use crate::error::{KernelError, KernelResult};
use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Adapter declarations of one deployment unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleManifest {
    /// Symbolic name of the declaring deployment unit.
    pub bundle: String,
    #[serde(default)]
    pub adapters: Vec<AdapterDeclaration>,
}

/// Load one manifest file.
pub fn load_manifest(path: &str) -> KernelResult<BundleManifest> {
    let manifest: BundleManifest = load_config(path)
        .map_err(KernelError::from)
        .map_err(Report::new)
        .attach(format!("loading adapter manifest {path}"))?;

    if manifest.bundle.trim().is_empty() {
        return Err(Report::new(KernelError::from(ConfigError::Parse(
            "bundle name cannot be empty".to_string(),
        ))))
        .attach(format!("validating adapter manifest {path}"));
    }

    info!(
        path = path,
        bundle = %manifest.bundle,
        adapters = manifest.adapters.len(),
        "loaded adapter manifest"
    );
    Ok(manifest)
}

/// Load several manifest files, stopping at the first failure.
pub fn load_manifests<P: AsRef<str>>(paths: &[P]) -> KernelResult<Vec<BundleManifest>> {
    paths.iter().map(|path| load_manifest(path.as_ref())).collect()
}
