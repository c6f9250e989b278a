//! Anchor extraction and archive-name capture for release directory pages
//!
//! The upstream listing is an HTML directory index. Anchors are extracted
//! structurally, then filtered down to `name-version<suffix>` archive files.

use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::config::ReconcileConfig;
use crate::remote::source::RemotePackage;

/// Parser for release directory listing pages
pub struct ListingParser {
    /// Regex for archive stems: `name-version` with a dotted numeric version
    archive_re: Regex,
}

impl ListingParser {
    pub fn new() -> Self {
        Self {
            // Match: xdpyinfo-1.3.0, libX11-1.4.99.1, xf86-video-ati-6.14.4
            archive_re: Regex::new(r"^(.+)-([0-9][0-9.]*)$").unwrap(),
        }
    }

    /// Extracts all anchor href values from the document, in document order.
    pub fn extract_hrefs(&self, document: &str) -> Vec<String> {
        let html = Html::parse_document(document);
        let anchors = Selector::parse("a[href]").expect("valid static selector");
        html.select(&anchors)
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_string)
            .collect()
    }

    /// Parses a listing page into remote packages, in document order.
    ///
    /// Hrefs that do not end in the configured archive suffix, do not match
    /// the `name-version` shape, or name an excluded package are skipped
    /// silently. Directory indexes carry plenty of such anchors (sort links,
    /// parent directory, checksum files).
    pub fn parse(&self, document: &str, config: &ReconcileConfig) -> Vec<RemotePackage> {
        let mut packages = Vec::new();

        for href in self.extract_hrefs(document) {
            let file_name = href.rsplit('/').next().unwrap_or("");
            let Some(stem) = file_name.strip_suffix(config.archive_suffix.as_str()) else {
                continue;
            };
            let Some(caps) = self.archive_re.captures(stem) else {
                debug!("Skipping listing entry without a dotted version: {href}");
                continue;
            };

            let name = caps[1].to_string();
            if config.remote_excludes.contains(&name) {
                debug!("Skipping excluded upstream package: {name}");
                continue;
            }

            packages.push(RemotePackage {
                name,
                version: caps[2].to_string(),
            });
        }

        packages
    }
}

impl Default for ListingParser {
    fn default() -> Self {
        Self::new()
    }
}
