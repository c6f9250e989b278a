//! Upstream release listing layer
//! - source.rs: ReleaseSource trait definition
//! - listing.rs: anchor extraction and archive-name capture
//! - xorg.rs: HTTP fetcher for X.org release directory pages

pub mod listing;
pub mod source;
pub mod xorg;

pub use listing::ListingParser;
pub use source::{ReleaseSource, RemotePackage};
pub use xorg::XorgReleases;
