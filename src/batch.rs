//! Selection across every configured species.

use crate::compute::cascade::SelectionResult;
use crate::config::Config;
use crate::error::{Result, RoostError};
use crate::record::{OccurrencePage, OccurrenceRecord, records_from_values};
use crate::selector::CoordinateSelector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Supplies the raw occurrence records of one species.
pub trait OccurrenceSource {
    fn records(&self, species: &str) -> Result<Vec<OccurrenceRecord>>;
}

/// Selection outcome for one species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesSelection {
    pub species: String,
    pub result: SelectionResult,
}

/// Run the selector for each configured species, in configured order.
///
/// The configuration is validated before any species is touched. A failing
/// source aborts the run.
pub fn select_species<S: OccurrenceSource + ?Sized>(
    config: &Config,
    source: &S,
) -> Result<Vec<SpeciesSelection>> {
    let selector = CoordinateSelector::from_config(config)?;
    let mut selections = Vec::with_capacity(config.species.len());

    for species in &config.species {
        let records = source.records(species)?;
        let result = selector.select(&records);

        if result.is_empty() {
            log::warn!("No usable coordinates for {}", species);
        } else {
            log::debug!(
                "{}: {} of {} records selected ({})",
                species,
                result.len(),
                records.len(),
                result.contributor_label()
            );
        }

        selections.push(SpeciesSelection {
            species: species.clone(),
            result,
        });
    }

    Ok(selections)
}

/// Occurrence records held in memory, keyed by species name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: FxHashMap<String, Vec<OccurrenceRecord>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(
        mut self,
        species: impl Into<String>,
        records: Vec<OccurrenceRecord>,
    ) -> Self {
        self.insert(species, records);
        self
    }

    pub fn insert(&mut self, species: impl Into<String>, records: Vec<OccurrenceRecord>) {
        self.records.insert(species.into(), records);
    }
}

impl OccurrenceSource for MemorySource {
    fn records(&self, species: &str) -> Result<Vec<OccurrenceRecord>> {
        Ok(self.records.get(species).cloned().unwrap_or_default())
    }
}

/// Saved occurrence search responses, one JSON file per species.
///
/// `Carollia perspicillata` is read from `<dir>/Carollia_perspicillata.json`.
/// A file may hold a response page (`{"results": [...]}`) or a bare array of
/// records. A missing file means no records. Entries that are not records are
/// dropped one by one; only a file that is not JSON at all is an error.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, species: &str) -> PathBuf {
        let stem: String = species
            .trim()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        self.dir.join(format!("{}.json", stem))
    }
}

impl OccurrenceSource for DirectorySource {
    fn records(&self, species: &str) -> Result<Vec<OccurrenceRecord>> {
        let path = self.path_for(species);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("No occurrence file for {} at {}", species, path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(RoostError::io(path, e)),
        };

        let malformed = |message: String| RoostError::OccurrenceFile {
            path: path.clone(),
            message,
        };

        let contents: Value =
            serde_json::from_str(&contents).map_err(|e| malformed(e.to_string()))?;
        match contents {
            Value::Array(entries) => Ok(records_from_values(entries)),
            page @ Value::Object(_) => serde_json::from_value::<OccurrencePage>(page)
                .map(|page| page.results)
                .map_err(|e| malformed(e.to_string())),
            _ => Err(malformed(
                "expected a response page or an array of records".to_string(),
            )),
        }
    }
}
