//! Raw occurrence records as delivered by the occurrence search API.
//!
//! Only the coordinate fields are interpreted. Either may be a JSON number, a
//! numeric string, `null`, or missing entirely; anything that does not yield a
//! finite number marks the record as unusable. Numbers beyond the `f64` range
//! parse, then fail the finiteness check like any other malformed value.

use roostmap_types::coord::Coordinate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One occurrence of a species at a location.
///
/// # Example
///
/// ```rust
/// use roostmap::OccurrenceRecord;
///
/// let json = r#"{ "key": 1, "decimalLatitude": -3.0, "decimalLongitude": "-59.8" }"#;
/// let record: OccurrenceRecord = serde_json::from_str(json).unwrap();
/// let coord = record.coordinate().unwrap();
/// assert_eq!((coord.lat, coord.lon), (-3.0, -59.8));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_latitude: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_longitude: Option<Value>,
}

impl OccurrenceRecord {
    /// Build a record from optional numeric fields.
    pub fn new(lat: Option<f64>, lon: Option<f64>) -> Self {
        Self {
            key: None,
            decimal_latitude: lat.map(Value::from),
            decimal_longitude: lon.map(Value::from),
        }
    }

    pub fn at(lat: f64, lon: f64) -> Self {
        Self::new(Some(lat), Some(lon))
    }

    /// The record's coordinate, or `None` if either field is absent, null,
    /// non-numeric or non-finite.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let lat = self.decimal_latitude.as_ref().and_then(numeric)?;
        let lon = self.decimal_longitude.as_ref().and_then(numeric)?;
        Coordinate::try_new(lat, lon)
    }
}

impl From<Coordinate> for OccurrenceRecord {
    fn from(coord: Coordinate) -> Self {
        Self::at(coord.lat, coord.lon)
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// One page of an occurrence search response.
///
/// Paging fields are kept for the fetch layer; selection only reads `results`.
/// Entries of `results` that are not record objects are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrencePage {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub end_of_records: bool,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub results: Vec<OccurrenceRecord>,
}

impl OccurrencePage {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<OccurrenceRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(records_from_values(entries.unwrap_or_default()))
}

/// Convert raw response entries into records, in input order.
///
/// An entry that is not a record object (`null`, a number, an array) is
/// dropped, the same as a record without usable coordinates.
pub fn records_from_values(entries: Vec<Value>) -> Vec<OccurrenceRecord> {
    let mut records = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<OccurrenceRecord>(entry) {
            Ok(record) => records.push(record),
            Err(e) => log::trace!("Dropping occurrence entry {}: {}", idx, e),
        }
    }
    records
}

/// Keep the usable coordinates of `records`, in input order.
pub fn usable_coordinates(records: &[OccurrenceRecord]) -> Vec<Coordinate> {
    let mut coords = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        match record.coordinate() {
            Some(coord) => coords.push(coord),
            None => {
                log::trace!("Dropping occurrence record {} without usable coordinates", idx)
            }
        }
    }
    coords
}
