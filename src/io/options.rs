use crate::table::Kind;
use std::collections::BTreeMap;

/// How to read a table.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Keep only these columns. They come back in file order.
    pub columns: Option<Vec<String>>,
    /// Declared kinds, overriding inference.
    pub kinds: BTreeMap<String, Kind>,
    /// Stop after this many data rows.
    pub limit: Option<usize>,
    /// Credentials profile for remote locations.
    pub profile: Option<String>,
}

impl ReadOptions {
    pub fn columns<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.columns = Some(names.into_iter().map(Into::into).collect());
        self
    }
    pub fn kind(mut self, column: impl Into<String>, kind: Kind) -> Self {
        self.kinds.insert(column.into(), kind);
        self
    }
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
    pub fn profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }
}

/// How to write a table.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Credentials profile for remote locations.
    pub profile: Option<String>,
}

impl WriteOptions {
    pub fn profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }
}
