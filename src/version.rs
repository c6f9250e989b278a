//! Loose dotted-version comparison
//!
//! X.org tarball versions are plain dotted numbers with no fixed segment
//! count, so semver does not apply. Segments are compared numerically left
//! to right, missing trailing segments count as zero, and a segment that is
//! not a number falls back to a lexicographic comparison.

use std::cmp::Ordering;

/// Compares two dotted version strings.
///
/// Examples:
/// - "1.2.3" > "1.2"
/// - "1.10" > "1.9"
/// - "2.0" == "2.0.0"
pub fn compare_loose(a: &str, b: &str) -> Ordering {
    let a_segments: Vec<&str> = a.split('.').collect();
    let b_segments: Vec<&str> = b.split('.').collect();

    for i in 0..a_segments.len().max(b_segments.len()) {
        let sa = a_segments.get(i).copied().unwrap_or("0");
        let sb = b_segments.get(i).copied().unwrap_or("0");

        let ordering = match (sa.parse::<u64>(), sb.parse::<u64>()) {
            (Ok(na), Ok(nb)) => na.cmp(&nb),
            _ => sa.cmp(sb),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}
