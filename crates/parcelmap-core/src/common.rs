// crates/parcelmap-core/src/common.rs
/// Counters collected during one conversion run.
///
/// Returned by [`crate::Converter`]; `placemarks + skipped_by_date` always
/// equals `sub_parcels`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub contracts: usize,
    pub sub_parcels: usize,
    pub placemarks: usize,
    pub skipped_by_date: usize,
    /// Contracts dropped because their embedded payload was malformed.
    /// Only non-zero under [`crate::MalformedPolicy::Skip`].
    pub skipped_contracts: usize,
}
