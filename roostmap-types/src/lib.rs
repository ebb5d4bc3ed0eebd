//! # roostmap-types
//!
//! Value types shared by the roostmap occurrence selector.
//!
//! - **Coordinates**: `Coordinate`, a latitude/longitude pair, and `DedupKey`,
//!   its rounded identity used to detect near-identical occurrences
//! - **Regions**: `Region`, a named axis-aligned bounding box
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use roostmap_types::coord::Coordinate;
//! use roostmap_types::region::Region;
//!
//! let manaus = Region::new("Manaus", -3.4, -2.8, -60.2, -59.4);
//! let sighting = Coordinate::new(-3.0, -59.8);
//! assert!(manaus.contains(&sighting));
//! ```

pub mod coord;
pub mod region;
