//! Merged package catalog keyed by normalized name
//!
//! Remote entries are inserted first, local entries merged in afterwards.
//! The tagged record makes the reporter's classification exhaustive.

use std::collections::BTreeMap;

/// A package known to at least one of the two sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageRecord {
    /// Listed upstream, no local counterpart
    RemoteOnly { remote_version: String },
    /// Present locally, no longer listed upstream
    LocalOnly {
        local_version: Option<String>,
        dir_name: String,
    },
    /// Present on both sides
    Both {
        remote_version: String,
        local_version: Option<String>,
        dir_name: String,
    },
}

/// Catalog of all packages seen in this run, sorted by normalized name
#[derive(Debug, Default)]
pub struct Catalog {
    records: BTreeMap<String, PackageRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a remote version for `name`.
    ///
    /// If the listing names the same package twice, the last occurrence in
    /// document order wins. The upstream pages have never done this in
    /// practice; the behavior is kept as-is rather than fixed silently.
    pub fn insert_remote(&mut self, name: String, remote_version: String) {
        self.records
            .insert(name, PackageRecord::RemoteOnly { remote_version });
    }

    /// Records a local package for `name`, extending a remote-only record
    /// into a `Both` record when one exists.
    pub fn insert_local(&mut self, name: String, local_version: Option<String>, dir_name: String) {
        let record = match self.records.remove(&name) {
            Some(PackageRecord::RemoteOnly { remote_version })
            | Some(PackageRecord::Both { remote_version, .. }) => PackageRecord::Both {
                remote_version,
                local_version,
                dir_name,
            },
            Some(PackageRecord::LocalOnly { .. }) | None => PackageRecord::LocalOnly {
                local_version,
                dir_name,
            },
        };
        self.records.insert(name, record);
    }

    /// Iterates records in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PackageRecord)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.records.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_local_extends_remote_record_into_both() {
        let mut catalog = Catalog::new();
        catalog.insert_remote("xeyes".to_string(), "1.1.1".to_string());
        catalog.insert_local(
            "xeyes".to_string(),
            Some("1.1.0".to_string()),
            "xapp_xeyes".to_string(),
        );

        assert_eq!(
            catalog.get("xeyes"),
            Some(&PackageRecord::Both {
                remote_version: "1.1.1".to_string(),
                local_version: Some("1.1.0".to_string()),
                dir_name: "xapp_xeyes".to_string(),
            })
        );
    }

    #[test]
    fn insert_local_without_remote_creates_local_only_record() {
        let mut catalog = Catalog::new();
        catalog.insert_local("xcalc".to_string(), None, "xapp_xcalc".to_string());

        assert_eq!(
            catalog.get("xcalc"),
            Some(&PackageRecord::LocalOnly {
                local_version: None,
                dir_name: "xapp_xcalc".to_string(),
            })
        );
    }

    #[test]
    fn duplicate_remote_name_keeps_last_occurrence() {
        let mut catalog = Catalog::new();
        catalog.insert_remote("libX11".to_string(), "1.4.0".to_string());
        catalog.insert_remote("libX11".to_string(), "1.4.99.1".to_string());

        assert_eq!(
            catalog.get("libX11"),
            Some(&PackageRecord::RemoteOnly {
                remote_version: "1.4.99.1".to_string(),
            })
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn iter_yields_records_sorted_by_name() {
        let mut catalog = Catalog::new();
        catalog.insert_remote("xtrans".to_string(), "1.2".to_string());
        catalog.insert_remote("bdftopcf".to_string(), "1.0".to_string());
        catalog.insert_remote("libX11".to_string(), "1.4".to_string());

        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["bdftopcf", "libX11", "xtrans"]);
    }
}
