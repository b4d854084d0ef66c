//! # CRD Generator
//!
//! Generates Kubernetes CustomResourceDefinition (CRD) YAML from the Rust
//! type definitions.
//!
//! ## Usage
//!
//! ```bash
//! # Generate all CRDs
//! cargo run --bin crdgen > config/crd/azuresql.yaml
//!
//! # Generate one and apply directly
//! cargo run --bin crdgen -- --kind database | kubectl apply -f -
//! ```

use anyhow::{Context, Result};
use azuresql_properties::config::OperatorConfig;
use azuresql_properties::crd::{AzureSqlDatabase, AzureSqlFailoverGroup, AzureSqlServer};
use azuresql_properties::observability::init_observability;
use clap::{Parser, ValueEnum};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::core::CustomResourceExt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CrdKind {
    Server,
    Database,
    FailoverGroup,
    All,
}

/// Print Azure SQL CRD YAML to stdout
#[derive(Debug, Parser)]
#[command(name = "crdgen", version, about)]
struct Cli {
    /// Which CRD to render
    #[arg(long, value_enum, default_value_t = CrdKind::All)]
    kind: CrdKind,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_observability(&OperatorConfig::from_env())?;

    let crds: Vec<CustomResourceDefinition> = match cli.kind {
        CrdKind::Server => vec![AzureSqlServer::crd()],
        CrdKind::Database => vec![AzureSqlDatabase::crd()],
        CrdKind::FailoverGroup => vec![AzureSqlFailoverGroup::crd()],
        CrdKind::All => vec![
            AzureSqlServer::crd(),
            AzureSqlDatabase::crd(),
            AzureSqlFailoverGroup::crd(),
        ],
    };

    let documents = crds
        .iter()
        .map(|crd| {
            serde_yaml::to_string(crd).with_context(|| {
                format!(
                    "Failed to serialize CRD {} to YAML",
                    crd.metadata.name.as_deref().unwrap_or("<unnamed>")
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(count = documents.len(), "Generated CRDs");
    print!("{}", documents.join("---\n"));
    Ok(())
}
