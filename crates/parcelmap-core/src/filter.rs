// crates/parcelmap-core/src/filter.rs

/// Sales on or before this date are left out of the map.
pub const DEFAULT_CUTOFF: &str = "2023-06-01";

/// Keeps contracts whose sale date sorts strictly after a cutoff.
///
/// The comparison is on the raw strings, byte by byte. It matches calendar
/// order only for zero-padded `YYYY-MM-DD` dates: `"2023-2-01"` sorts
/// *after* `"2023-06-01"` because `'2' > '0'`. No date parsing happens here.
///
/// ```rust
/// use parcelmap_core::DateFilter;
///
/// let filter = DateFilter::new("2023-06-01");
/// assert!(filter.includes("2023-06-02"));
/// assert!(!filter.includes("2023-06-01"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFilter {
    cutoff: String,
}

impl DateFilter {
    pub fn new(cutoff: impl Into<String>) -> Self {
        DateFilter {
            cutoff: cutoff.into(),
        }
    }

    pub fn cutoff(&self) -> &str {
        &self.cutoff
    }

    pub fn includes(&self, sale_date: &str) -> bool {
        sale_date > self.cutoff.as_str()
    }
}

impl Default for DateFilter {
    fn default() -> Self {
        DateFilter::new(DEFAULT_CUTOFF)
    }
}
