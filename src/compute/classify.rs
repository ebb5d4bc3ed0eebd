//! Region membership tests.

use roostmap_types::coord::Coordinate;
use roostmap_types::region::Region;

/// Test whether a coordinate lies in a region, boundary-inclusive on all edges.
///
/// Callers are expected to have dropped non-finite coordinates already; a NaN
/// component simply never matches.
///
/// # Examples
///
/// ```
/// use roostmap::compute::classify::classify;
/// use roostmap::{Coordinate, Region};
///
/// let manaus = Region::new("Manaus", -3.4, -2.8, -60.2, -59.4);
/// assert!(classify(&Coordinate::new(-3.0, -59.8), &manaus));
/// assert!(classify(&Coordinate::new(-2.8, -59.4), &manaus));
/// assert!(!classify(&Coordinate::new(-10.0, -55.0), &manaus));
/// ```
#[inline]
pub fn classify(coord: &Coordinate, region: &Region) -> bool {
    region.contains(coord)
}

/// Classifies coordinates against an ordered, read-only region list.
///
/// Holds only a borrow of the regions, so one classifier can be shared by any
/// number of threads.
#[derive(Debug, Clone, Copy)]
pub struct RegionClassifier<'a> {
    regions: &'a [Region],
}

impl<'a> RegionClassifier<'a> {
    pub fn new(regions: &'a [Region]) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &'a [Region] {
        self.regions
    }

    /// Indices of every region containing `coord`, in priority order.
    pub fn matching(&self, coord: &Coordinate) -> impl Iterator<Item = usize> {
        self.regions
            .iter()
            .enumerate()
            .filter(move |(_, region)| classify(coord, region))
            .map(|(idx, _)| idx)
    }
}
