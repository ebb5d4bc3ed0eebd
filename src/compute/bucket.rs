//! Region bucketing and per-bucket deduplication.
//!
//! Every valid coordinate lands in the bucket of each named region containing
//! it (regions may overlap) and, unconditionally, in the catch-all bucket.
//! Deduplication runs inside each bucket on its own, so the same value can
//! survive in several buckets.

use crate::compute::classify::RegionClassifier;
use roostmap_types::coord::Coordinate;
use roostmap_types::region::Region;
use rustc_hash::FxHashSet;

/// Where a bucket's coordinates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketSource {
    /// Index into the configured region list.
    Region(usize),
    /// Every valid coordinate, regardless of region.
    CatchAll,
}

/// Coordinates belonging to one region, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<'r> {
    pub label: &'r str,
    pub source: BucketSource,
    pub coordinates: Vec<Coordinate>,
}

impl<'r> Bucket<'r> {
    fn empty(label: &'r str, source: BucketSource) -> Self {
        Self {
            label,
            source,
            coordinates: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn is_catch_all(&self) -> bool {
        self.source == BucketSource::CatchAll
    }

    /// Drop duplicates of earlier coordinates in this bucket.
    pub fn dedupe(&mut self) {
        self.coordinates = dedupe(&self.coordinates);
    }
}

/// All buckets for one species, in priority order with the catch-all last.
#[derive(Debug, Clone, PartialEq)]
pub struct Buckets<'r> {
    buckets: Vec<Bucket<'r>>,
}

impl<'r> Buckets<'r> {
    /// Dedupe each bucket independently.
    pub fn deduplicated(mut self) -> Self {
        for bucket in &mut self.buckets {
            bucket.dedupe();
        }
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bucket<'r>> {
        self.buckets.iter()
    }

    /// Look up a bucket by its label.
    pub fn get(&self, label: &str) -> Option<&Bucket<'r>> {
        self.buckets.iter().find(|bucket| bucket.label == label)
    }

    pub fn catch_all(&self) -> &Bucket<'r> {
        // `bucket_coordinates` always pushes the catch-all bucket last.
        &self.buckets[self.buckets.len() - 1]
    }

    /// Number of buckets, including the catch-all.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }
}

impl<'a, 'r> IntoIterator for &'a Buckets<'r> {
    type Item = &'a Bucket<'r>;
    type IntoIter = std::slice::Iter<'a, Bucket<'r>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Remove coordinates whose rounded key was already seen, keeping first-seen order.
///
/// Idempotent: deduping an already-deduped list returns it unchanged.
///
/// # Examples
///
/// ```
/// use roostmap::compute::bucket::dedupe;
/// use roostmap::Coordinate;
///
/// let coords = vec![
///     Coordinate::new(-3.0, -59.8),
///     Coordinate::new(-3.000001, -59.8),
///     Coordinate::new(-10.0, -55.0),
/// ];
/// let unique = dedupe(&coords);
/// assert_eq!(unique, vec![Coordinate::new(-3.0, -59.8), Coordinate::new(-10.0, -55.0)]);
/// ```
pub fn dedupe(coords: &[Coordinate]) -> Vec<Coordinate> {
    let mut seen = FxHashSet::default();
    coords
        .iter()
        .filter(|coord| seen.insert(coord.dedup_key()))
        .copied()
        .collect()
}

/// Sort coordinates into region buckets without deduplicating.
///
/// Coordinates must already be finite. The returned buckets follow the order of
/// `regions`, followed by a catch-all bucket labelled `catch_all_label`.
pub fn bucket_coordinates<'r>(
    coords: &[Coordinate],
    regions: &'r [Region],
    catch_all_label: &'r str,
) -> Buckets<'r> {
    let mut buckets: Vec<Bucket<'r>> = regions
        .iter()
        .enumerate()
        .map(|(idx, region)| Bucket::empty(region.name(), BucketSource::Region(idx)))
        .collect();
    let mut catch_all = Bucket::empty(catch_all_label, BucketSource::CatchAll);

    let classifier = RegionClassifier::new(regions);
    for coord in coords {
        for idx in classifier.matching(coord) {
            buckets[idx].coordinates.push(*coord);
        }
        catch_all.coordinates.push(*coord);
    }

    buckets.push(catch_all);
    Buckets { buckets }
}
