//! One-shot reconciliation pipeline
//!
//! Fetch the remote listing, scan the local tree, merge both into the
//! catalog and render the report. Only a failed fetch or an unreadable tree
//! aborts the run; everything else degrades to "N/A" in the output.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::{DEFAULT_BASE_URL, ReconcileConfig};
use crate::local::{LocalPackage, TreeScanner};
use crate::remote::source::{ReleaseSource, RemotePackage};
use crate::remote::xorg::XorgReleases;
use crate::report;

/// Merges remote and local packages into the catalog.
///
/// Remote entries go in first so duplicates resolve last-seen-wins in
/// document order before local entries extend them.
pub fn build_catalog(remote: Vec<RemotePackage>, local: Vec<LocalPackage>) -> Catalog {
    let mut catalog = Catalog::new();
    for package in remote {
        catalog.insert_remote(package.name, package.version);
    }
    for package in local {
        catalog.insert_local(package.name, package.version, package.dir_name);
    }
    catalog
}

/// Runs the pipeline against an injected source and returns the rendered
/// report.
pub async fn reconcile<S: ReleaseSource>(
    source: &S,
    scanner: &TreeScanner,
    tree: &Path,
    config: &ReconcileConfig,
) -> anyhow::Result<String> {
    let remote = source
        .fetch_packages()
        .await
        .context("Failed to fetch the release listing")?;
    info!("Fetched {} remote packages", remote.len());

    let local = scanner
        .scan(tree, config)
        .with_context(|| format!("Failed to scan package tree {}", tree.display()))?;
    info!("Scanned {} local packages", local.len());

    Ok(report::render(&build_catalog(remote, local)))
}

/// Runs the full pipeline against the real upstream host and prints the
/// report to stdout.
pub async fn run(config: ReconcileConfig, tree: &Path) -> anyhow::Result<()> {
    let source = XorgReleases::new(DEFAULT_BASE_URL, config.clone());
    let report = reconcile(&source, &TreeScanner::new(), tree, &config).await?;
    print!("{report}");
    Ok(())
}
