//! Region-prioritized selection of species occurrence coordinates.
//!
//! Raw occurrence records for a species are filtered to usable coordinates,
//! sorted into buckets for each configured region plus an unconditional
//! catch-all, deduplicated per bucket at 5-digit precision, and assembled into
//! a bounded list by taking from the highest-priority buckets first.
//!
//! ```rust
//! use roostmap::{OccurrenceRecord, Region, select};
//!
//! let regions = vec![Region::new("Manaus", -3.4, -2.8, -60.2, -59.4)];
//! let records = vec![
//!     OccurrenceRecord::at(-3.0, -59.8),
//!     OccurrenceRecord::at(-3.0, -59.8),
//!     OccurrenceRecord::at(-10.0, -55.0),
//! ];
//!
//! let result = select(&records, &regions, 8)?;
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.contributors, vec!["Manaus", "catch-all"]);
//! # Ok::<(), roostmap::RoostError>(())
//! ```

pub mod batch;
pub mod compute;
pub mod config;
pub mod error;
pub mod record;
pub mod render;
pub mod selector;

pub use batch::{
    DirectorySource, MemorySource, OccurrenceSource, SpeciesSelection, select_species,
};
pub use config::Config;
pub use error::{Result, RoostError};
pub use record::{OccurrencePage, OccurrenceRecord};
pub use selector::{CATCH_ALL_LABEL, CoordinateSelector, select};

pub use compute::{DEFAULT_CAP, SelectedCoordinate, SelectionResult};

pub use roostmap_types::coord::{Coordinate, DedupKey};
pub use roostmap_types::region::Region;
