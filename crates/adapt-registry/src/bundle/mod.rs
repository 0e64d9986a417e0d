//! Deployment units and their installation into a registry.
//!
//! A [`Bundle`] carries the adapter declarations of one deployment unit.
//! Installing it validates and maps every declaration and publishes one
//! record per declaring component, invalid declarations included: the
//! record of an invalid declaration carries the fixed error message so
//! tooling can see it.

mod install;

pub use install::InstallOnce;

use adapt_kernel::config::BundleManifest;
use adapt_kernel::error::{KernelError, KernelResult};
use adapt_kernel::{AdapterDeclaration, AdapterRegistry, ServiceId};
use error_stack::{Report, ResultExt};
use tracing::{debug, info, warn};

/// Adapter declarations of one deployment unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    symbolic_name: String,
    declarations: Vec<AdapterDeclaration>,
}

impl Bundle {
    pub fn new(symbolic_name: impl Into<String>) -> Self {
        Self {
            symbolic_name: symbolic_name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn with_declaration(mut self, declaration: AdapterDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn with_declarations<I>(mut self, declarations: I) -> Self
    where
        I: IntoIterator<Item = AdapterDeclaration>,
    {
        self.declarations.extend(declarations);
        self
    }

    pub fn from_manifest(manifest: BundleManifest) -> Self {
        Self {
            symbolic_name: manifest.bundle,
            declarations: manifest.adapters,
        }
    }

    pub fn symbolic_name(&self) -> &str {
        &self.symbolic_name
    }

    pub fn declarations(&self) -> &[AdapterDeclaration] {
        &self.declarations
    }

    /// Publish one record per declaration, in declaration order.
    ///
    /// Installation is all-or-nothing: if the registry rejects any record,
    /// the records already published by this call are withdrawn again.
    pub fn install_into<R>(&self, registry: &mut R) -> KernelResult<Vec<ServiceId>>
    where
        R: AdapterRegistry + ?Sized,
    {
        let mut published = Vec::with_capacity(self.declarations.len());

        for declaration in &self.declarations {
            let validation = declaration.validate();
            if !validation.is_valid() {
                warn!(
                    bundle = %self.symbolic_name,
                    component = %declaration.name,
                    "publishing invalid adapter declaration"
                );
            }
            let record = adapt_kernel::to_record(declaration, &validation);

            match registry.register(&declaration.name, &self.symbolic_name, record) {
                Ok(id) => published.push(id),
                Err(err) => {
                    for id in published.drain(..).rev() {
                        if let Err(rollback) = registry.deregister(id) {
                            warn!(service_id = %id, error = %rollback, "rollback failed");
                        }
                    }
                    return Err(Report::new(KernelError::from(err)))
                        .attach(format!("registering adapter component {}", declaration.name))
                        .attach(format!("installing bundle {}", self.symbolic_name));
                }
            }
        }

        info!(
            bundle = %self.symbolic_name,
            adapters = published.len(),
            "installed bundle"
        );
        Ok(published)
    }

    /// Withdraw the records of this bundle's components.
    ///
    /// Components that are not registered, or that another bundle
    /// registered, are left alone.  Returns the number of records withdrawn.
    pub fn uninstall_from<R>(&self, registry: &mut R) -> usize
    where
        R: AdapterRegistry + ?Sized,
    {
        let mut withdrawn = 0;
        for declaration in &self.declarations {
            let id = match registry.lookup_component(&declaration.name) {
                Some(entry) if entry.bundle == self.symbolic_name => entry.id,
                _ => {
                    debug!(component = %declaration.name, "component not installed by this bundle");
                    continue;
                }
            };
            match registry.deregister(id) {
                Ok(_) => withdrawn += 1,
                Err(err) => {
                    warn!(component = %declaration.name, error = %err, "failed to withdraw adapter");
                }
            }
        }
        info!(bundle = %self.symbolic_name, withdrawn, "uninstalled bundle");
        withdrawn
    }
}

impl From<BundleManifest> for Bundle {
    fn from(manifest: BundleManifest) -> Self {
        Self::from_manifest(manifest)
    }
}
