//! Priority cascade over deduplicated buckets.

use crate::compute::bucket::{Bucket, Buckets};
use roostmap_types::coord::{Coordinate, DedupKey};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Per-species selection cap used when none is configured.
pub const DEFAULT_CAP: usize = 8;

/// A chosen coordinate and the label of the bucket that supplied it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedCoordinate {
    pub coordinate: Coordinate,
    pub source: String,
}

/// The bounded, ordered selection for one species.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionResult {
    pub picks: Vec<SelectedCoordinate>,
    /// Labels of buckets that supplied at least one pick, in cascade order.
    pub contributors: Vec<String>,
}

impl SelectionResult {
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.picks.iter().map(|pick| pick.coordinate).collect()
    }

    /// Contributors joined for display, e.g. `"Manaus, catch-all"`.
    pub fn contributor_label(&self) -> String {
        self.contributors.join(", ")
    }
}

/// Assemble at most `cap` coordinates from `buckets`, highest priority first.
///
/// Coordinates are compared by their rounded [`DedupKey`], the same key used for
/// per-bucket dedup, so a value already taken from a higher-priority bucket is
/// skipped when it shows up again further down. Once the result is full the
/// cascade stops; buckets it never reaches are not contributors.
pub fn assemble(buckets: &Buckets<'_>, cap: usize) -> SelectionResult {
    let mut result = SelectionResult::default();
    if cap == 0 {
        return result;
    }

    let mut chosen: FxHashSet<DedupKey> = FxHashSet::default();
    for bucket in buckets {
        if result.picks.len() >= cap {
            break;
        }

        let taken = take_from(bucket, &mut chosen, cap - result.picks.len());
        if taken.is_empty() {
            continue;
        }

        result.contributors.push(bucket.label.to_string());
        result
            .picks
            .extend(taken.into_iter().map(|coordinate| SelectedCoordinate {
                coordinate,
                source: bucket.label.to_string(),
            }));
    }

    result
}

// Take up to `remaining` not-yet-chosen coordinates from one bucket, in order.
fn take_from(
    bucket: &Bucket<'_>,
    chosen: &mut FxHashSet<DedupKey>,
    remaining: usize,
) -> Vec<Coordinate> {
    let mut taken = Vec::new();
    for coord in &bucket.coordinates {
        if taken.len() == remaining {
            break;
        }
        if chosen.insert(coord.dedup_key()) {
            taken.push(*coord);
        }
    }
    taken
}
