// crates/parcelmap-core/src/raw.rs
use crate::model::ContractRecord;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;

/// Deserializes `null` the same way as an absent field: into `T::default()`.
///
/// Pair with `#[serde(default)]` so both cases collapse to the zero value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Top-level input document:
/// `{ "data": { "contractsByOpstinaIDAndDatumU": { "items": [...] } } }`
///
/// Every level is optional; a missing level yields an empty contract list.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InputDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub data: DataRaw,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DataRaw {
    #[serde(
        rename = "contractsByOpstinaIDAndDatumU",
        deserialize_with = "null_as_default"
    )]
    pub contracts: ContractPageRaw,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContractPageRaw {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<ContractRecord>,
}

impl InputDocument {
    pub fn into_contracts(self) -> Vec<ContractRecord> {
        self.data.contracts.items
    }
}

/// A string field whose content is itself a JSON document of type `T`.
///
/// The outer parse keeps the text verbatim; [`EmbeddedJson::decode`] runs the
/// second pass on demand.
#[derive(Deserialize)]
#[serde(transparent)]
pub struct EmbeddedJson<T> {
    data: String,
    #[serde(skip)]
    expected: PhantomData<T>,
}

impl<T> EmbeddedJson<T> {
    pub fn new(data: impl Into<String>) -> Self {
        EmbeddedJson {
            data: data.into(),
            expected: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }
}

impl<T> EmbeddedJson<T>
where
    T: DeserializeOwned + Default,
{
    /// Decodes the embedded text. A literal `null` decodes to `T::default()`;
    /// an empty string is not JSON and fails.
    pub fn decode(&self) -> serde_json::Result<T> {
        serde_json::from_str::<Option<T>>(&self.data).map(Option::unwrap_or_default)
    }
}

// Manual impls: derives would demand `T: Default`/`T: Clone`/`T: Debug`.
impl<T> Default for EmbeddedJson<T> {
    fn default() -> Self {
        EmbeddedJson::new(String::new())
    }
}

impl<T> Clone for EmbeddedJson<T> {
    fn clone(&self) -> Self {
        EmbeddedJson::new(self.data.clone())
    }
}

impl<T> PartialEq for EmbeddedJson<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T> fmt::Debug for EmbeddedJson<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EmbeddedJson").field(&self.data).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_levels_yield_no_contracts() {
        for text in [
            r#"{}"#,
            r#"{"data":{}}"#,
            r#"{"data":null}"#,
            r#"{"data":{"contractsByOpstinaIDAndDatumU":null}}"#,
            r#"{"data":{"contractsByOpstinaIDAndDatumU":{"items":null}}}"#,
        ] {
            let doc: InputDocument = serde_json::from_str(text).unwrap();
            assert!(doc.into_contracts().is_empty(), "{text}");
        }
    }

    #[test]
    fn embedded_null_decodes_to_default() {
        let payload: EmbeddedJson<Vec<u32>> = EmbeddedJson::new("null");
        assert_eq!(payload.decode().unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn embedded_empty_string_is_an_error() {
        let payload: EmbeddedJson<Vec<u32>> = EmbeddedJson::default();
        assert!(payload.decode().is_err());
    }

    #[test]
    fn embedded_keeps_text_verbatim() {
        let payload: EmbeddedJson<Vec<u32>> = serde_json::from_str(r#""[1, 2]""#).unwrap();
        assert_eq!(payload.as_str(), "[1, 2]");
        assert_eq!(payload.decode().unwrap(), vec![1, 2]);
    }
}
