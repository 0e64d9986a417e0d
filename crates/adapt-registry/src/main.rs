//! `adapt-status`: print the adapter status of a set of bundle manifests.
//!
//! Each manifest is installed into a fresh in-memory registry in the order
//! given; the report covers every record published along the way.
//!
//! # Environment variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RUST_LOG` | `adapt_registry=info,adapt_kernel=info` | Log filter; logs go to stderr. |

use adapt_kernel::config::load_manifests;
use adapt_kernel::status::{render_status, render_status_json, status_descriptors};
use adapt_kernel::AdapterRegistry;
use adapt_registry::backend::InMemoryAdapterRegistry;
use adapt_registry::bundle::Bundle;
use anyhow::{Context, anyhow};
use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
enum OutputFormat {
    /// The plain-text status report
    #[default]
    Text,
    /// JSON for automation
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "adapt-status")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bundle manifests to install (YAML, TOML, JSON, INI, RON or JSON5)
    #[arg(required = true, value_name = "MANIFEST")]
    manifests: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print each component's published properties instead of the status report
    #[arg(short, long)]
    properties: bool,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("adapt_registry=info,adapt_kernel=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut registry = InMemoryAdapterRegistry::new();

    let manifests = load_manifests(&args.manifests).map_err(|report| anyhow!("{report:?}"))?;
    for manifest in manifests {
        Bundle::from_manifest(manifest)
            .install_into(&mut registry)
            .map_err(|report| anyhow!("{report:?}"))?;
    }
    info!(records = registry.len(), format = %args.format, "registry populated");

    let output = match (args.properties, args.format) {
        (true, _) => {
            let entries: Vec<_> = registry
                .list_all()
                .into_iter()
                .map(|entry| {
                    json!({
                        "serviceId": entry.id,
                        "component": entry.component,
                        "bundle": entry.bundle,
                        "properties": entry.record,
                    })
                })
                .collect();
            serde_json::to_string_pretty(&entries).context("serializing properties")?
        }
        (false, OutputFormat::Json) => {
            let descriptors = status_descriptors(registry.list_all());
            let status = render_status_json(&descriptors).context("serializing status")?;
            serde_json::to_string_pretty(&status).context("serializing status")?
        }
        (false, OutputFormat::Text) => render_status(&status_descriptors(registry.list_all())),
    };

    print!("{output}");
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
