// crates/parcelmap-core/src/lib.rs

//! # parcelmap-core
//!
//! Turns a contract listing (`data.contractsByOpstinaIDAndDatumU.items[]`)
//! into a KML document with one `Placemark` per sub-parcel sold after a
//! cutoff date.
//!
//! The pipeline is linear:
//!
//! 1. [`loader`] parses the outer document into [`ContractRecord`]s.
//! 2. [`loader::parse_sub_parcels`] decodes the JSON string embedded in each
//!    contract into [`SubParcelRecord`]s.
//! 3. [`DateFilter`] keeps sales strictly after the cutoff.
//! 4. [`AnnotationBuilder`] maps survivors to [`AnnotationEntry`]s.
//! 5. [`kml::to_kml`] renders the document and [`writer::write_atomic`]
//!    persists it.
//!
//! [`Converter`] chains all of the above.

pub mod annotation;
pub mod common;
pub mod convert;
pub mod error;
pub mod filter;
pub mod kml;
pub mod loader; // The public loader
pub mod model;
pub mod raw; // Wire envelope + embedded-JSON helper
pub mod writer;

// Re-exports
pub use crate::annotation::{AnnotationBuilder, PriceBasis};
pub use crate::common::ConversionStats;
pub use crate::convert::{ConvertOptions, Converter, MalformedPolicy};
pub use crate::error::{ConvertError, Result};
pub use crate::filter::{DateFilter, DEFAULT_CUTOFF};
pub use crate::model::{AnnotationEntry, ContractRecord, Coordinates, SubParcelRecord};
pub use crate::raw::EmbeddedJson;
