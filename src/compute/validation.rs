//! Validation for region configuration.

use crate::error::{Result, RoostError};
use roostmap_types::region::Region;
use rustc_hash::FxHashSet;

/// Validates a single region: non-empty name, finite bounds, `min <= max`.
///
/// Inverted bounds are reported, never swapped.
///
/// # Examples
///
/// ```
/// use roostmap::compute::validation::validate_region;
/// use roostmap::Region;
///
/// let manaus = Region::new("Manaus", -3.4, -2.8, -60.2, -59.4);
/// assert!(validate_region(&manaus).is_ok());
///
/// let inverted = Region::new("Manaus", -2.8, -3.4, -60.2, -59.4);
/// assert!(validate_region(&inverted).is_err());
/// ```
pub fn validate_region(region: &Region) -> Result<()> {
    if region.name.trim().is_empty() {
        return Err(RoostError::InvalidRegion(
            "region name must not be empty".to_string(),
        ));
    }

    region.check_bounds().map_err(RoostError::InvalidRegion)
}

/// Validates an ordered region list.
///
/// Names must be unique and must not collide with the catch-all label, since
/// contributors are reported by name.
pub fn validate_regions(regions: &[Region], catch_all_label: &str) -> Result<()> {
    let mut names = FxHashSet::default();
    for (idx, region) in regions.iter().enumerate() {
        validate_region(region).map_err(|e| match e {
            RoostError::InvalidRegion(msg) => {
                RoostError::InvalidRegion(format!("index {}: {}", idx, msg))
            }
            other => other,
        })?;

        if region.name == catch_all_label {
            return Err(RoostError::InvalidRegion(format!(
                "region '{}' uses the catch-all label",
                region.name
            )));
        }

        if !names.insert(region.name.as_str()) {
            return Err(RoostError::InvalidRegion(format!(
                "duplicate region name '{}'",
                region.name
            )));
        }
    }
    Ok(())
}
