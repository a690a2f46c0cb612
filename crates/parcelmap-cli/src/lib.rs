//! parcelmap-cli
//! =============
//!
//! Command-line interface for the `parcelmap-core` converter.
//!
//! This crate primarily provides a binary (`parcelmap`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! parcelmap                              # input.json -> output.kml
//! parcelmap -i dump.json.gz -o map.kml
//! parcelmap --cutoff 2024-01-01 --price-basis per-square-meter
//! ```
//!
//! For programmatic access, use the [`parcelmap-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
