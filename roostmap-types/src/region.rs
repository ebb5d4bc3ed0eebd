use crate::coord::Coordinate;
use serde::{Deserialize, Serialize};

/// A named, axis-aligned geographic rectangle.
///
/// Bounds are inclusive on all four edges. Regions do not wrap the
/// antimeridian; a box crossing ±180° longitude must be split by the caller.
///
/// Bounds are kept exactly as configured, so an inverted box is reported by
/// [`Region::check_bounds`] instead of silently swapped.
///
/// # Examples
///
/// ```
/// use roostmap_types::coord::Coordinate;
/// use roostmap_types::region::Region;
///
/// let amazonas = Region::new("Amazonas", -6.5, 0.5, -66.5, -56.0);
/// assert!(amazonas.contains(&Coordinate::new(-3.0, -59.8)));
/// assert!(amazonas.contains(&Coordinate::new(0.5, -56.0)));
/// assert!(!amazonas.contains(&Coordinate::new(-10.0, -55.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Region {
    /// Create a region from its name and bounds.
    ///
    /// # Arguments
    ///
    /// * `name` - Label reported when the region contributes to a selection
    /// * `min_lat`, `max_lat` - Latitude bounds in degrees
    /// * `min_lon`, `max_lon` - Longitude bounds in degrees
    pub fn new(
        name: impl Into<String>,
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Self {
        Self {
            name: name.into(),
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check that every bound is finite and `min <= max` on both axes.
    pub fn check_bounds(&self) -> Result<(), String> {
        let bounds = [
            ("min_lat", self.min_lat),
            ("max_lat", self.max_lat),
            ("min_lon", self.min_lon),
            ("max_lon", self.max_lon),
        ];
        for (label, value) in bounds {
            if !value.is_finite() {
                return Err(format!(
                    "region '{}': {} must be finite, got {}",
                    self.name, label, value
                ));
            }
        }

        if self.min_lat > self.max_lat {
            return Err(format!(
                "region '{}': min_lat {} is greater than max_lat {}",
                self.name, self.min_lat, self.max_lat
            ));
        }

        if self.min_lon > self.max_lon {
            return Err(format!(
                "region '{}': min_lon {} is greater than max_lon {}",
                self.name, self.min_lon, self.max_lon
            ));
        }

        Ok(())
    }

    /// Inclusive containment test on both axes.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.lat >= self.min_lat
            && coord.lat <= self.max_lat
            && coord.lon >= self.min_lon
            && coord.lon <= self.max_lon
    }

}
