//! Local package tree scanner
//!
//! Walks the immediate children of a Buildroot-style package directory and
//! reads each package's declared version out of its `<dir>/<dir>.mk` file.
//! A package without a readable version line is still reported, with its
//! version unknown; only failing to list the tree itself aborts the scan.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::ReconcileConfig;
use crate::error::ScanError;

/// A package directory found in the local tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPackage {
    /// Normalized name, the join key against the remote listing
    pub name: String,
    /// On-disk directory name before prefix stripping
    pub dir_name: String,
    /// Version declared in the package `.mk` file, when readable
    pub version: Option<String>,
}

/// Scanner for local package trees
pub struct TreeScanner {
    /// Regex for version assignments: `XAPP_XEYES_VERSION = 1.1.1`
    version_re: Regex,
}

impl TreeScanner {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new(r"^\s*[A-Z][A-Z0-9_]*_VERSION\s*=\s*(\S+)\s*$").unwrap(),
        }
    }

    /// Scans the immediate children of `tree`.
    pub fn scan(
        &self,
        tree: &Path,
        config: &ReconcileConfig,
    ) -> Result<Vec<LocalPackage>, ScanError> {
        let entries = fs::read_dir(tree).map_err(|source| ScanError::Tree {
            path: tree.to_path_buf(),
            source,
        })?;

        let mut packages = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ScanError::Tree {
                path: tree.to_path_buf(),
                source,
            })?;

            let dir_name = entry.file_name().to_string_lossy().into_owned();
            if config.local_excludes.contains(&dir_name) {
                debug!("Skipping excluded tree entry: {dir_name}");
                continue;
            }
            if !entry.path().is_dir() {
                continue;
            }

            let version = self.read_version(&entry.path().join(format!("{dir_name}.mk")));
            packages.push(LocalPackage {
                name: normalized_name(&dir_name, &config.prefixes),
                dir_name,
                version,
            });
        }

        Ok(packages)
    }

    fn read_version(&self, mk_path: &Path) -> Option<String> {
        let content = match fs::read_to_string(mk_path) {
            Ok(content) => content,
            Err(err) => {
                warn!("No readable metadata at {}: {}", mk_path.display(), err);
                return None;
            }
        };

        let version = content
            .lines()
            .find_map(|line| self.version_re.captures(line).map(|caps| caps[1].to_string()));
        if version.is_none() {
            warn!("No version line in {}", mk_path.display());
        }
        version
    }
}

impl Default for TreeScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips the first matching `<prefix>_` from a directory name.
///
/// The prefix list is ordered and the first match wins; a name matching no
/// prefix is used verbatim.
pub fn normalized_name(dir_name: &str, prefixes: &[String]) -> String {
    for prefix in prefixes {
        if let Some(rest) = dir_name
            .strip_prefix(prefix.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return rest.to_string();
        }
    }
    dir_name.to_string()
}
