//! parcelmap — Command-line interface for parcelmap-core
//!
//! Reads a contract listing (default `input.json`), keeps sub-parcels sold
//! strictly after the cutoff (default `2023-06-01`) and writes one KML
//! placemark per survivor (default `output.kml`).
//!
//! Usage examples
//! --------------
//!
//! - Legacy behaviour, fixed paths
//!   $ parcelmap
//!
//! - Custom files and cutoff
//!   $ parcelmap -i listing.json.gz -o sales.kml --cutoff 2024-01-01
//!
//! - Report a true per-m² price instead of the contract total
//!   $ parcelmap --price-basis per-square-meter
//!
//! Logging goes to stderr; set `RUST_LOG=debug` for more detail. Any failure
//! exits non-zero and leaves the output file as it was.
mod args;

use crate::args::CliArgs;
use anyhow::Context;
use clap::Parser;
use parcelmap_core::{ConvertOptions, Converter, DateFilter, MalformedPolicy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing();

    let options = ConvertOptions {
        filter: DateFilter::new(args.cutoff),
        price_basis: args.price_basis,
        malformed: if args.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Abort
        },
    };

    let stats = Converter::new(options)
        .convert_file(&args.input, &args.output)
        .with_context(|| {
            format!(
                "converting {} to {} failed",
                args.input.display(),
                args.output.display()
            )
        })?;

    tracing::info!(
        contracts = stats.contracts,
        sub_parcels = stats.sub_parcels,
        placemarks = stats.placemarks,
        skipped_by_date = stats.skipped_by_date,
        skipped_contracts = stats.skipped_contracts,
        "done"
    );
    println!("KML data written to {} successfully!", args.output.display());

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
