//! Reconciles an upstream X.org release file listing against a local
//! Buildroot-style package tree and reports what needs to change.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Remote    │────▶│   Catalog   │◀────│    Local    │
//! │  (listing)  │     │   (merge)   │     │  (scanner)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │   Report    │
//!                     │ (classify)  │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: One-shot pipeline driving fetch, scan, merge and render
//! - [`catalog`]: Merged package catalog keyed by normalized name
//! - [`config`]: Reconciliation configuration and constants
//! - [`error`]: Error types for fetch and scan operations
//! - [`local`]: Local package tree scanner
//! - [`remote`]: Upstream release listing fetcher and parser
//! - [`report`]: Action classification and report rendering
//! - [`version`]: Loose dotted-version comparison

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod local;
pub mod remote;
pub mod report;
pub mod version;
