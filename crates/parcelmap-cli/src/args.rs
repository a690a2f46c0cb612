use clap::Parser;
use parcelmap_core::{PriceBasis, DEFAULT_CUTOFF};
use std::path::PathBuf;

/// CLI arguments for parcelmap
#[derive(Debug, Parser)]
#[command(
    name = "parcelmap",
    version,
    about = "Convert a contract listing with embedded sub-parcels into a KML placemark file"
)]
pub struct CliArgs {
    /// Path to the input JSON (a `.gz` suffix is decompressed on the fly)
    #[arg(short = 'i', long = "input", default_value = "input.json")]
    pub input: PathBuf,

    /// Path of the KML file to (over)write
    #[arg(short = 'o', long = "output", default_value = "output.kml")]
    pub output: PathBuf,

    /// Only sales with a date strictly after this one are mapped (string comparison, YYYY-MM-DD)
    #[arg(short = 'c', long = "cutoff", default_value = DEFAULT_CUTOFF)]
    pub cutoff: String,

    /// Figure reported as "cena/m2": contract-total (matches maps generated so far)
    /// or per-square-meter (contract price divided by the sub-parcel area)
    #[arg(long = "price-basis", default_value = "contract-total")]
    pub price_basis: PriceBasis,

    /// Leave out contracts whose sub-parcel list is not valid JSON instead of aborting
    #[arg(long = "skip-malformed")]
    pub skip_malformed: bool,
}
