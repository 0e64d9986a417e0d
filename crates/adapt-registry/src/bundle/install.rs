use parking_lot::{Mutex, const_mutex};
use tracing::debug;

/// Runs an installation at most once per process.
///
/// The lock is held while the installation runs, so concurrent callers wait
/// for the first one and then observe its outcome.  A failed installation
/// leaves the guard unset and the next caller retries.
#[derive(Debug)]
pub struct InstallOnce {
    installed: Mutex<bool>,
}

impl InstallOnce {
    pub const fn new() -> Self {
        Self {
            installed: const_mutex(false),
        }
    }

    /// Run `install` unless a previous call already succeeded.
    ///
    /// Returns `Ok(true)` when this call performed the installation and
    /// `Ok(false)` when it was already done.
    pub fn install_with<F, E>(&self, install: F) -> Result<bool, E>
    where
        F: FnOnce() -> Result<(), E>,
    {
        let mut installed = self.installed.lock();
        if *installed {
            debug!("installation already performed, skipping");
            return Ok(false);
        }
        install()?;
        *installed = true;
        Ok(true)
    }

    pub fn is_installed(&self) -> bool {
        *self.installed.lock()
    }
}

impl Default for InstallOnce {
    fn default() -> Self {
        Self::new()
    }
}
