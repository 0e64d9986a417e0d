//! Bundle manifest loading.
//!
//! Declarations are usually authored in a manifest file shipped with the
//! deployment unit that provides the handlers.  Any format supported by the
//! `config` crate works: YAML, TOML, JSON, INI, RON, JSON5.
//!
//! ## Features
//!
//! - Auto-detection of format from file extension
//! - Environment variable substitution (`${VAR}` and `$VAR` syntax)
//! - Merging of several sources, later sources win
//!
//! ```toml
//! bundle = "org.example.numbers"
//!
//! [[adapters]]
//! name = "long-to-integer"
//! adaptables = ["i64"]
//! adapters = ["i32"]
//! condition = "If the value fits"
//! ```

use config::{Config as Cfg, File};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::path::Path;

pub use config::FileFormat;

mod manifest;

pub use manifest::{BundleManifest, load_manifest, load_manifests};

/// Manifest loading error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    Parse(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Detect the manifest format from a file extension.
///
/// | Extension | Format |
/// |-----------|--------|
/// | `.yaml`, `.yml` | YAML |
/// | `.toml` | TOML |
/// | `.json` | JSON |
/// | `.ini` | INI |
/// | `.ron` | RON |
/// | `.json5` | JSON5 |
pub fn detect_format(path: &str) -> ConfigResult<FileFormat> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| ConfigError::UnsupportedFormat("No file extension found".to_string()))?;

    match ext.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(FileFormat::Yaml),
        "toml" => Ok(FileFormat::Toml),
        "json" => Ok(FileFormat::Json),
        "ini" => Ok(FileFormat::Ini),
        "ron" => Ok(FileFormat::Ron),
        "json5" => Ok(FileFormat::Json5),
        _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
    }
}

/// Substitute environment variables in a string.
///
/// `${VAR_NAME}` is replaced first, then bare `$VAR_NAME`.  References to
/// unset variables are left untouched.
pub fn substitute_env_vars(content: &str) -> ConfigResult<String> {
    let re_braced = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    let result = re_braced
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .to_string();

    let re_simple = Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)\b")
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok(re_simple
        .replace_all(&result, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .to_string())
}

/// Load and deserialize a file, detecting its format from the extension.
pub fn load_config<T>(path: &str) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    load_merged(&[path])
}

/// Merge several sources; later sources override earlier ones.
pub fn merge_configs<T>(sources: &[(&str, FileFormat)]) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let mut builder = Cfg::builder();

    for (content, format) in sources {
        let substituted = substitute_env_vars(content)?;
        builder = builder.add_source(File::from_str(&substituted, *format));
    }

    let config = builder
        .build()
        .map_err(|e| ConfigError::Parse(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| ConfigError::Serialization(e.to_string()))
}

/// Load several files, later files overriding earlier ones.
pub fn load_merged<T>(paths: &[&str]) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let format = detect_format(path)?;
        sources.push((std::fs::read_to_string(path)?, format));
    }

    let borrowed: Vec<(&str, FileFormat)> = sources
        .iter()
        .map(|(content, format)| (content.as_str(), *format))
        .collect();
    merge_configs(&borrowed)
}
