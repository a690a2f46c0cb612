// crates/parcelmap-core/src/model.rs
use crate::raw::{null_as_default, EmbeddedJson};
use serde::Deserialize;

/// One sale contract from the listing.
///
/// Decoding is lenient: any missing or `null` field takes its zero value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContractRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// `YYYY-MM-DD`, kept as text. Compared lexicographically.
    #[serde(rename = "datumU", deserialize_with = "null_as_default")]
    pub sale_date: String,

    #[serde(rename = "ppNaziv", deserialize_with = "null_as_default")]
    pub seller_name: String,

    /// Total contract price in hundredths of a currency unit.
    #[serde(rename = "cenaEUR", deserialize_with = "null_as_default")]
    pub price_cents: i64,

    /// JSON array of sub-parcels, encoded as a string.
    #[serde(rename = "n", deserialize_with = "null_as_default")]
    pub sub_parcels_raw: EmbeddedJson<Vec<SubParcelRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubParcelRecord {
    #[serde(
        rename = "latlon",
        alias = "latLon",
        alias = "LatLon",
        alias = "Latlon",
        deserialize_with = "null_as_default"
    )]
    pub coordinates: Coordinates,

    #[serde(rename = "pvNepNaziv", deserialize_with = "null_as_default")]
    pub parcel_name: String,

    #[serde(rename = "pov", deserialize_with = "null_as_default")]
    pub area_square_meters: i64,
}

/// WGS84 degrees as delivered by the source; never validated or projected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    #[serde(rename = "Lon", alias = "lon", alias = "LON", deserialize_with = "null_as_default")]
    pub longitude: f64,
    #[serde(rename = "Lat", alias = "lat", alias = "LAT", deserialize_with = "null_as_default")]
    pub latitude: f64,
}

/// A single KML placemark, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationEntry {
    pub title: String,
    pub description: String,
    /// `lon,lat,0` with six decimals each.
    pub coordinates: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_fields_map_from_source_names() {
        let text = r#"{
            "id": "c-1",
            "datumU": "2023-07-01",
            "ppNaziv": "Seller",
            "cenaEUR": 150000,
            "n": "[]"
        }"#;
        let c: ContractRecord = serde_json::from_str(text).unwrap();
        assert_eq!(c.id, "c-1");
        assert_eq!(c.sale_date, "2023-07-01");
        assert_eq!(c.seller_name, "Seller");
        assert_eq!(c.price_cents, 150000);
        assert_eq!(c.sub_parcels_raw.as_str(), "[]");
    }

    #[test]
    fn missing_and_null_fields_default_to_zero() {
        let c: ContractRecord = serde_json::from_str(r#"{"id": null, "cenaEUR": null}"#).unwrap();
        assert_eq!(c, ContractRecord::default());

        let sp: SubParcelRecord = serde_json::from_str(r#"{"latlon": {"Lon": 20.5}}"#).unwrap();
        assert_eq!(sp.coordinates.longitude, 20.5);
        assert_eq!(sp.coordinates.latitude, 0.0);
        assert_eq!(sp.parcel_name, "");
        assert_eq!(sp.area_square_meters, 0);
    }

    #[test]
    fn coordinate_keys_accept_common_casings() {
        for text in [
            r#"{"latlon": {"Lon": 19.5, "Lat": 44.0}}"#,
            r#"{"latLon": {"lon": 19.5, "lat": 44.0}}"#,
            r#"{"LatLon": {"LON": 19.5, "LAT": 44.0}}"#,
            r#"{"Latlon": {"lon": 19.5, "Lat": 44.0}}"#,
        ] {
            let sp: SubParcelRecord = serde_json::from_str(text).unwrap();
            assert_eq!(sp.coordinates.longitude, 19.5, "{text}");
            assert_eq!(sp.coordinates.latitude, 44.0, "{text}");
        }
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(serde_json::from_str::<ContractRecord>(r#"{"cenaEUR": "lots"}"#).is_err());
        assert!(serde_json::from_str::<SubParcelRecord>(r#"{"pov": 12.5}"#).is_err());
    }
}
