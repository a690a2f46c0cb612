// crates/parcelmap-core/src/annotation.rs
use crate::model::{AnnotationEntry, ContractRecord, Coordinates, SubParcelRecord};
use std::str::FromStr;

/// Which figure the description reports as "cena/m2".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceBasis {
    /// `priceCents / 100`: the whole contract price in currency units,
    /// labelled as a per-m² price. This is what existing maps were generated
    /// with; it is NOT a per-area rate.
    #[default]
    ContractTotal,
    /// `priceCents / 100 / areaSquareMeters`. Renders `n/a` for zero area.
    PerSquareMeter,
}

impl PriceBasis {
    /// Price value for one sub-parcel, or `None` when it cannot be computed.
    pub fn price(&self, price_cents: i64, area_square_meters: i64) -> Option<f64> {
        let total = price_cents as f64 / 100.0;
        match self {
            PriceBasis::ContractTotal => Some(total),
            PriceBasis::PerSquareMeter if area_square_meters == 0 => None,
            PriceBasis::PerSquareMeter => Some(total / area_square_meters as f64),
        }
    }
}

/// Parses the names the CLI accepts: `contract-total`, `per-square-meter`.
impl FromStr for PriceBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contract-total" => Ok(PriceBasis::ContractTotal),
            "per-square-meter" => Ok(PriceBasis::PerSquareMeter),
            other => Err(format!("unknown price basis: {other}")),
        }
    }
}

/// Formats a point as KML expects it: `lon,lat,0`, six decimals each.
pub fn format_coordinates(c: &Coordinates) -> String {
    format!("{:.6},{:.6},0", c.longitude, c.latitude)
}

/// Builds placemarks from (contract, sub-parcel) pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationBuilder {
    price_basis: PriceBasis,
}

impl AnnotationBuilder {
    pub fn new(price_basis: PriceBasis) -> Self {
        AnnotationBuilder { price_basis }
    }

    pub fn build(&self, contract: &ContractRecord, parcel: &SubParcelRecord) -> AnnotationEntry {
        AnnotationEntry {
            title: parcel.parcel_name.clone(),
            description: self.describe(contract, parcel),
            coordinates: format_coordinates(&parcel.coordinates),
        }
    }

    fn describe(&self, contract: &ContractRecord, parcel: &SubParcelRecord) -> String {
        let price = match self
            .price_basis
            .price(contract.price_cents, parcel.area_square_meters)
        {
            Some(p) => format!("{p:.2}€"),
            None => "n/a".to_string(),
        };
        format!(
            "Datum prodaje: {}, kvadrata: {}, cena/m2: {}",
            contract.sale_date, parcel.area_square_meters, price
        )
    }
}
