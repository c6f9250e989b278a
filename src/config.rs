use serde::Deserialize;

// =============================================================================
// Network constants
// =============================================================================

/// Default upstream host serving X.org release listings
pub const DEFAULT_BASE_URL: &str = "http://www.x.org";

/// Timeout for the listing fetch in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Reconciliation configuration
///
/// The defaults describe the real X11R7 tree; tests inject smaller fixtures.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReconcileConfig {
    /// Release identifier, e.g. "X11R7.7"
    pub release: String,
    /// Suffix an archive filename must carry to be considered
    pub archive_suffix: String,
    /// Upstream packages deliberately not carried downstream
    pub remote_excludes: Vec<String>,
    /// Tree entries that are not package directories
    pub local_excludes: Vec<String>,
    /// Ordered prefixes stripped (with their `_` separator) from local
    /// directory names; first match wins
    pub prefixes: Vec<String>,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            release: "X11R7.7".to_string(),
            archive_suffix: ".tar.bz2".to_string(),
            // Legacy hardware drivers with no downstream counterpart
            remote_excludes: vec![
                "xf86-input-acecad".to_string(),
                "xf86-input-aiptek".to_string(),
                "xf86-video-ark".to_string(),
                "xf86-video-glint".to_string(),
                "xf86-video-newport".to_string(),
            ],
            local_excludes: vec![
                "Config.in".to_string(),
                "x11r7.mk".to_string(),
                // Maintained out of tree, never part of the release listing
                "xdriver_xf86-input-tslib".to_string(),
            ],
            prefixes: vec![
                "xapp".to_string(),
                "xdata".to_string(),
                "xdriver".to_string(),
                "xfont".to_string(),
                "xlib".to_string(),
                "xproto".to_string(),
                "xserver".to_string(),
                "xutil".to_string(),
            ],
        }
    }
}
