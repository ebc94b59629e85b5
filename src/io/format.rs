/// On-disk encodings the adapter understands.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Format {
    Csv,
    Parquet,
}

impl Format {
    /// Guess from a file extension. Anything unrecognised is CSV.
    pub fn infer(path: &str) -> Self {
        match path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
            Some(ext) if ext == "parquet" || ext == "pq" => Self::Parquet,
            _ => Self::Csv,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Parquet => write!(f, "parquet"),
        }
    }
}
