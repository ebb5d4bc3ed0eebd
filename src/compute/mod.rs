//! Core selection algorithms: classification, bucketing, and the cascade.

pub mod bucket;
pub mod cascade;
pub mod classify;
pub mod validation;

pub use bucket::{Bucket, BucketSource, Buckets, bucket_coordinates, dedupe};
pub use cascade::{DEFAULT_CAP, SelectedCoordinate, SelectionResult, assemble};
pub use classify::{RegionClassifier, classify};
