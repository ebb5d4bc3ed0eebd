use geo::Point;
use serde::{Deserialize, Serialize};

/// Number of fractional digits kept when comparing coordinates for duplicates.
pub const DEDUP_PRECISION: i32 = 5;

const DEDUP_SCALE: f64 = 100_000.0;

/// A geographic coordinate in decimal degrees.
///
/// Stored latitude first, matching the order occurrence sources report it.
/// Conversions to and from `geo::Point` follow the `geo` convention of
/// `x = longitude`, `y = latitude`.
///
/// # Examples
///
/// ```
/// use roostmap_types::coord::Coordinate;
///
/// let c = Coordinate::new(-3.1019, -60.0250);
/// assert_eq!(c.lat, -3.1019);
/// assert_eq!(c.lon, -60.0250);
///
/// let point: geo::Point = c.into();
/// assert_eq!(point.x(), -60.0250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a coordinate only if both components are finite.
    ///
    /// ```
    /// use roostmap_types::coord::Coordinate;
    ///
    /// assert!(Coordinate::try_new(-3.0, -59.8).is_some());
    /// assert!(Coordinate::try_new(f64::NAN, -59.8).is_none());
    /// assert!(Coordinate::try_new(-3.0, f64::INFINITY).is_none());
    /// ```
    pub fn try_new(lat: f64, lon: f64) -> Option<Self> {
        if lat.is_finite() && lon.is_finite() {
            Some(Self { lat, lon })
        } else {
            None
        }
    }

    /// The rounded identity of this coordinate.
    ///
    /// Two coordinates are duplicates when their keys are equal, i.e. both
    /// components agree after rounding to [`DEDUP_PRECISION`] fractional digits.
    ///
    /// ```
    /// use roostmap_types::coord::Coordinate;
    ///
    /// let a = Coordinate::new(-3.000001, -59.800004);
    /// let b = Coordinate::new(-3.000004, -59.799999);
    /// assert_eq!(a.dedup_key(), b.dedup_key());
    ///
    /// let c = Coordinate::new(-3.00002, -59.8);
    /// assert_ne!(a.dedup_key(), c.dedup_key());
    /// ```
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey {
            lat: round_scaled(self.lat),
            lon: round_scaled(self.lon),
        }
    }

    /// Convert to a `geo::Point` (`x = lon`, `y = lat`).
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coord: Coordinate) -> Self {
        coord.to_point()
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Interprets the tuple as `(lat, lon)`.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

/// Integer identity of a coordinate rounded to [`DEDUP_PRECISION`] digits.
///
/// Holding scaled integers rather than rounded floats keeps the key `Eq + Hash`
/// and folds `-0.0` and `0.0` together.
///
/// The scaled value saturates at the `i64` range, so components beyond about
/// ±9.2e13 degrees all share one key. Geographic coordinates are nowhere near
/// that limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DedupKey {
    lat: i64,
    lon: i64,
}

// Half-way cases round away from zero. `as` saturates out-of-range values.
fn round_scaled(value: f64) -> i64 {
    (value * DEDUP_SCALE).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_conversion_swaps_axes() {
        let coord = Coordinate::new(-3.0, -59.8);
        let point: Point<f64> = coord.into();
        assert_eq!(point.x(), -59.8);
        assert_eq!(point.y(), -3.0);
        assert_eq!(Coordinate::from(point), coord);
    }

    #[test]
    fn test_dedup_key_rounds_to_five_digits() {
        let a = Coordinate::new(-3.123454, -59.0);
        let b = Coordinate::new(-3.123451, -59.0);
        assert_eq!(a.dedup_key(), b.dedup_key());
        assert_eq!(a.dedup_key(), Coordinate::new(-3.12345, -59.0).dedup_key());
        assert_ne!(a.dedup_key(), Coordinate::new(-3.12346, -59.0).dedup_key());
    }

    #[test]
    fn test_dedup_key_saturates_far_out_of_range() {
        let a = Coordinate::new(1e300, 0.0);
        let b = Coordinate::new(2e300, 0.0);
        assert_eq!(a.dedup_key(), b.dedup_key());
        assert_ne!(a.dedup_key(), Coordinate::new(-1e300, 0.0).dedup_key());
    }

    #[test]
    fn test_dedup_key_distinguishes_fifth_digit() {
        let a = Coordinate::new(1.00001, 2.0);
        let b = Coordinate::new(1.00002, 2.0);
        assert_ne!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn test_signed_zero_shares_key() {
        let a = Coordinate::new(0.0, -0.0);
        let b = Coordinate::new(-0.0, 0.0);
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(Coordinate::try_new(f64::NAN, 0.0).is_none());
        assert!(Coordinate::try_new(0.0, f64::NEG_INFINITY).is_none());
        assert_eq!(
            Coordinate::try_new(10.0, 20.0),
            Some(Coordinate::new(10.0, 20.0))
        );
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&Coordinate::new(-3.0, -59.8)).unwrap();
        assert_eq!(json, r#"{"lat":-3.0,"lon":-59.8}"#);
    }
}
