// crates/parcelmap-core/src/convert.rs
use crate::annotation::{AnnotationBuilder, PriceBasis};
use crate::common::ConversionStats;
use crate::error::Result;
use crate::filter::DateFilter;
use crate::kml;
use crate::loader;
use crate::model::{AnnotationEntry, ContractRecord};
use crate::writer;
use std::path::Path;

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// What to do when a contract's embedded sub-parcel list fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Stop the whole run on the first bad payload. Nothing is written.
    #[default]
    Abort,
    /// Log the contract, leave it out, and keep going.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub filter: DateFilter,
    pub price_basis: PriceBasis,
    pub malformed: MalformedPolicy,
}

/// Result of the transform stage.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub entries: Vec<AnnotationEntry>,
    pub stats: ConversionStats,
}

const SKIPPED_BY_DATE: &str = "sale not after cutoff, skipped";

// -----------------------------------------------------------------------------
// PIPELINE
// -----------------------------------------------------------------------------

/// Load -> transform -> emit, in one pass. Any error aborts the run before
/// the output is touched.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    filter: DateFilter,
    builder: AnnotationBuilder,
    malformed: MalformedPolicy,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Converter {
            filter: options.filter,
            builder: AnnotationBuilder::new(options.price_basis),
            malformed: options.malformed,
        }
    }

    /// Expands every contract into its sub-parcels and keeps the ones sold
    /// after the cutoff, in listing order then payload order.
    pub fn transform(&self, contracts: &[ContractRecord]) -> Result<Conversion> {
        let mut out = Conversion::default();
        out.stats.contracts = contracts.len();

        for (index, contract) in contracts.iter().enumerate() {
            // The payload is decoded before the date check, so a bad payload
            // fails the run even for a contract the filter would drop.
            let parcels = match loader::parse_sub_parcels(contract, index) {
                Ok(parcels) => parcels,
                Err(e) if self.malformed == MalformedPolicy::Skip => {
                    tracing::warn!(error = %e, "skipping contract with malformed sub-parcels");
                    out.stats.skipped_contracts += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            for parcel in &parcels {
                out.stats.sub_parcels += 1;
                if self.filter.includes(&contract.sale_date) {
                    out.entries.push(self.builder.build(contract, parcel));
                } else {
                    tracing::info!(
                        id = %contract.id,
                        sale_date = %contract.sale_date,
                        cutoff = %self.filter.cutoff(),
                        "{SKIPPED_BY_DATE}"
                    );
                    out.stats.skipped_by_date += 1;
                }
            }
        }

        out.stats.placemarks = out.entries.len();
        Ok(out)
    }

    /// Runs the whole pipeline in memory and returns the KML bytes.
    pub fn convert_bytes(&self, input: &[u8]) -> Result<(Vec<u8>, ConversionStats)> {
        let contracts = loader::load_contracts(input)?;
        let conversion = self.transform(&contracts)?;
        let kml = kml::to_kml(&conversion.entries)?;
        Ok((kml, conversion.stats))
    }

    /// Reads `input`, converts it, and replaces `output` with the result.
    pub fn convert_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConversionStats> {
        let input = input.as_ref();
        let output = output.as_ref();

        // 1. Load
        let contracts = loader::load_contracts_from_path(input)?;
        // 2. Transform
        let conversion = self.transform(&contracts)?;
        // 3. Emit
        let kml = kml::to_kml(&conversion.entries)?;
        writer::write_atomic(output, &kml)?;

        tracing::info!(
            output = %output.display(),
            placemarks = conversion.stats.placemarks,
            "kml written"
        );
        Ok(conversion.stats)
    }
}
