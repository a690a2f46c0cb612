// crates/parcelmap-core/src/loader/mod.rs

//! # Data Loader
//!
//! Two-stage parse. The physical layer (I/O, decompression) lives in
//! `common_io`; this module turns bytes into [`ContractRecord`]s and decodes
//! the sub-parcel list each contract carries as a JSON string.

use crate::error::{ConvertError, Result};
use crate::model::{ContractRecord, SubParcelRecord};
use crate::raw::InputDocument;
use std::path::Path;

mod common_io;

pub use common_io::read_all;

/// Parses the outer document.
///
/// A top-level `null` and any missing level of
/// `data.contractsByOpstinaIDAndDatumU.items` produce an empty list rather
/// than an error.
pub fn load_contracts(bytes: &[u8]) -> Result<Vec<ContractRecord>> {
    let doc: Option<InputDocument> =
        serde_json::from_slice(bytes).map_err(ConvertError::MalformedInput)?;
    Ok(doc.unwrap_or_default().into_contracts())
}

pub fn load_contracts_from_path(path: impl AsRef<Path>) -> Result<Vec<ContractRecord>> {
    let path = path.as_ref();
    // 1. Transport (plain or gzip)
    let bytes = read_all(path)?;
    // 2. Payload
    let contracts = load_contracts(&bytes)?;
    tracing::debug!(path = %path.display(), contracts = contracts.len(), "loaded input");
    Ok(contracts)
}

/// Second parse pass: decodes the embedded sub-parcel array of one contract.
///
/// `index` is the contract's position in the listing and only feeds the
/// error report.
pub fn parse_sub_parcels(contract: &ContractRecord, index: usize) -> Result<Vec<SubParcelRecord>> {
    contract
        .sub_parcels_raw
        .decode()
        .map_err(|source| ConvertError::MalformedSubParcels {
            id: contract.id.clone(),
            index,
            source,
        })
}
