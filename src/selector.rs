//! Coordinate selection for a single species.
//!
//! Raw records are filtered to usable coordinates, bucketed by region (plus the
//! catch-all), deduplicated per bucket, and finally assembled into a bounded
//! list by walking the buckets in priority order.

use crate::compute::bucket::{Buckets, bucket_coordinates};
use crate::compute::cascade::{SelectionResult, assemble};
use crate::compute::validation::validate_regions;
use crate::config::Config;
use crate::error::Result;
use crate::record::{OccurrenceRecord, usable_coordinates};
use roostmap_types::region::Region;

/// Label of the catch-all bucket used by [`select`].
pub const CATCH_ALL_LABEL: &str = "catch-all";

/// Selects a bounded list of coordinates per species.
///
/// Construction validates the regions once; selection itself cannot fail. The
/// selector only borrows its configuration and holds no mutable state, so one
/// instance can serve any number of threads.
///
/// # Example
///
/// ```rust
/// use roostmap::{CoordinateSelector, OccurrenceRecord, Region};
///
/// let regions = vec![Region::new("Manaus", -3.4, -2.8, -60.2, -59.4)];
/// let selector = CoordinateSelector::new(&regions, 8, "catch-all")?;
///
/// let records = vec![
///     OccurrenceRecord::at(-3.0, -59.8),
///     OccurrenceRecord::at(-3.0, -59.8),
///     OccurrenceRecord::at(-10.0, -55.0),
/// ];
/// let result = selector.select(&records);
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.contributors, vec!["Manaus", "catch-all"]);
/// # Ok::<(), roostmap::RoostError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CoordinateSelector<'a> {
    regions: &'a [Region],
    cap: usize,
    catch_all_label: &'a str,
}

impl<'a> CoordinateSelector<'a> {
    /// Validate `regions` and build a selector.
    pub fn new(regions: &'a [Region], cap: usize, catch_all_label: &'a str) -> Result<Self> {
        validate_regions(regions, catch_all_label)?;
        Ok(Self {
            regions,
            cap,
            catch_all_label,
        })
    }

    /// Build a selector from a full configuration.
    pub fn from_config(config: &'a Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            regions: &config.regions,
            cap: config.cap,
            catch_all_label: &config.catch_all_label,
        })
    }

    pub fn regions(&self) -> &'a [Region] {
        self.regions
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn catch_all_label(&self) -> &'a str {
        self.catch_all_label
    }

    /// Deduplicated buckets for one species' records, catch-all last.
    pub fn buckets(&self, records: &[OccurrenceRecord]) -> Buckets<'a> {
        let coords = usable_coordinates(records);
        bucket_coordinates(&coords, self.regions, self.catch_all_label).deduplicated()
    }

    /// Select at most `cap` coordinates from `records`.
    ///
    /// Records without usable coordinates are skipped. An empty input or a cap
    /// of zero yields an empty result with no contributors.
    pub fn select(&self, records: &[OccurrenceRecord]) -> SelectionResult {
        if self.cap == 0 {
            return SelectionResult::default();
        }
        let buckets = self.buckets(records);
        assemble(&buckets, self.cap)
    }
}

/// One-shot selection with the default catch-all label.
///
/// Fails only when the region list is malformed.
pub fn select(
    records: &[OccurrenceRecord],
    regions: &[Region],
    cap: usize,
) -> Result<SelectionResult> {
    let selector = CoordinateSelector::new(regions, cap, CATCH_ALL_LABEL)?;
    Ok(selector.select(records))
}
