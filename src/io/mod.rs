//! Tabular I/O: CSV and Parquet, on local disk or in an S3 bucket.
//!
//! - [`Adapter`]: the only entry point the rest of the crate uses
//! - [`Location`]: routes a path to [`Disk`] or, with the `s3` feature, a `Bucket`
//! - [`ReadOptions`]: column subset, declared kinds, row limit, profile override
//! - [`Receipt`]: what a successful write reports
mod adapter;
#[cfg(feature = "s3")]
mod bucket;
mod columnar;
mod delimited;
mod format;
mod location;
mod options;
mod storage;

pub use adapter::*;
#[cfg(feature = "s3")]
pub use bucket::*;
pub use format::*;
pub use location::*;
pub use options::*;
pub use storage::*;
