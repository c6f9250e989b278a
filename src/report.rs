//! Action classification and report rendering
//!
//! Pure functions over the merged catalog: classification is exhaustive over
//! the record enum, rendering produces the fixed-width table and summary
//! block on every run from the catalog alone.

use std::cmp::Ordering;
use std::fmt::Write;

use crate::catalog::{Catalog, PackageRecord};
use crate::version::compare_loose;

/// What reconciliation asks for on one package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Listed upstream only
    Add,
    /// Present locally only
    Remove,
    /// Upstream version is newer (or the local version is unreadable)
    Upgrade,
    /// Local version is ahead of the upstream release
    LocalAhead,
    /// Versions match
    UpToDate,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Add => "Add to tree",
            Action::Remove => "Remove from tree",
            Action::Upgrade => "Upgrade",
            Action::LocalAhead => "Local ahead of upstream",
            Action::UpToDate => "",
        }
    }
}

/// Classifies a single catalog record.
pub fn classify(record: &PackageRecord) -> Action {
    match record {
        PackageRecord::RemoteOnly { .. } => Action::Add,
        PackageRecord::LocalOnly { .. } => Action::Remove,
        PackageRecord::Both {
            remote_version,
            local_version,
            ..
        } => match local_version {
            // Upstream has a concrete version, ours is unreadable: flag it.
            None => Action::Upgrade,
            Some(local) => match compare_loose(remote_version, local) {
                Ordering::Greater => Action::Upgrade,
                Ordering::Less => Action::LocalAhead,
                Ordering::Equal => Action::UpToDate,
            },
        },
    }
}

/// Aggregate counts over one catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub upgrades: usize,
    pub additions: usize,
    pub removals: usize,
    pub nothing_to_do: usize,
}

impl Summary {
    fn count(&mut self, action: Action) {
        self.total += 1;
        match action {
            Action::Add => self.additions += 1,
            Action::Remove => self.removals += 1,
            Action::Upgrade => self.upgrades += 1,
            Action::LocalAhead | Action::UpToDate => self.nothing_to_do += 1,
        }
    }
}

/// Computes aggregate counts without rendering.
pub fn summarize(catalog: &Catalog) -> Summary {
    let mut summary = Summary::default();
    for (_, record) in catalog.iter() {
        summary.count(classify(record));
    }
    summary
}

/// Renders the full report: one fixed-width row per package in ascending
/// name order, then the summary block.
pub fn render(catalog: &Catalog) -> String {
    let mut out = String::new();
    let mut summary = Summary::default();

    let _ = writeln!(
        out,
        "{:<32} {:<12} {:<12} {}",
        "Package", "Local", "Remote", "Action"
    );
    let _ = writeln!(out, "{}", "-".repeat(72));

    for (name, record) in catalog.iter() {
        let action = classify(record);
        summary.count(action);

        let (local, remote) = match record {
            PackageRecord::RemoteOnly { remote_version } => (None, Some(remote_version)),
            PackageRecord::LocalOnly { local_version, .. } => (local_version.as_ref(), None),
            PackageRecord::Both {
                remote_version,
                local_version,
                ..
            } => (local_version.as_ref(), Some(remote_version)),
        };

        let _ = writeln!(
            out,
            "{:<32} {:<12} {:<12} {}",
            name,
            local.map_or("N/A", |v| v.as_str()),
            remote.map_or("N/A", |v| v.as_str()),
            action.label()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total packages: {}", summary.total);
    let _ = writeln!(out, "  Upgrades:      {}", summary.upgrades);
    let _ = writeln!(out, "  Additions:     {}", summary.additions);
    let _ = writeln!(out, "  Removals:      {}", summary.removals);
    let _ = writeln!(out, "  Nothing to do: {}", summary.nothing_to_do);

    out
}
