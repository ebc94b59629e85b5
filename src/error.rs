use crate::io::Format;
use crate::table::Kind;

/// Every way a lookup run can fail.
/// Nothing is retried; the first error aborts the run before anything is written.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source path does not exist or cannot be reached.
    #[error("{path} not found: {reason}")]
    NotFound { path: String, reason: String },
    /// The source exists but cannot be parsed as the requested format.
    #[error("{path} is not valid {format}: {reason}")]
    Format {
        path: String,
        format: Format,
        reason: String,
    },
    /// A value cannot be cast to the kind declared for its column.
    #[error("column `{column}` cannot be read as {kind}: {value:?}")]
    TypeCoercion {
        column: String,
        kind: Kind,
        value: String,
    },
    /// A join key matches more than one attribute row.
    #[error("join on `{key}` is not many-to-one: {count} attribute rows share {value:?}")]
    Cardinality {
        key: String,
        value: String,
        count: usize,
    },
    /// The destination cannot be written.
    #[error("{path} could not be written: {reason}")]
    Write { path: String, reason: String },
    /// A table was asked for a column layout it does not have.
    #[error("schema: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, Error>;
