use super::*;
use crate::Config;
use crate::Result;
use crate::table::Table;
#[cfg(feature = "s3")]
use std::collections::HashMap;
use std::sync::Arc;
#[cfg(feature = "s3")]
use std::sync::Mutex;

/// Confirmation that a table reached its destination.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Receipt {
    pub destination: String,
    pub rows: usize,
    pub columns: usize,
}

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} (of shape ({}, {})) written.",
            self.destination, self.rows, self.columns
        )
    }
}

/// Reads and writes tables wherever they live.
///
/// Paths starting with `s3://` go to S3 using a named credentials profile,
/// everything else to the local filesystem. The profile defaults to the
/// one this adapter was built with and can be overridden per call.
/// Clones share one connection per bucket and profile.
#[derive(Debug, Clone)]
pub struct Adapter {
    profile: String,
    #[cfg(feature = "s3")]
    buckets: Arc<Mutex<HashMap<(String, String), Arc<Bucket>>>>,
}

impl From<&Config> for Adapter {
    fn from(config: &Config) -> Self {
        Self::new(config.profile())
    }
}

impl Adapter {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            #[cfg(feature = "s3")]
            buckets: Arc::default(),
        }
    }

    pub fn read(&self, path: &str, format: Format, options: &ReadOptions) -> Result<Table> {
        let ref location = Location::from(path);
        let profile = self.profile(options.profile.as_deref());
        let bytes = self.storage(location, profile)?.fetch(&location.key())?;
        let table = match format {
            Format::Csv => delimited::decode(path, &bytes, options)?,
            Format::Parquet => columnar::decode(path, bytes, options)?,
        };
        log::debug!("{} read as {} {:?}", path, format, table.shape());
        Ok(table)
    }

    /// Write `table`, replacing whatever was there.
    /// The table is fully encoded before the destination is touched.
    pub fn write(
        &self,
        table: &Table,
        path: &str,
        format: Format,
        options: &WriteOptions,
    ) -> Result<Receipt> {
        let ref location = Location::from(path);
        let profile = self.profile(options.profile.as_deref());
        let bytes = match format {
            Format::Csv => delimited::encode(path, table)?,
            Format::Parquet => columnar::encode(path, table)?,
        };
        self.storage(location, profile)?
            .store(&location.key(), bytes)?;
        let receipt = Receipt {
            destination: path.to_string(),
            rows: table.rows(),
            columns: table.width(),
        };
        log::info!("{}", receipt);
        log::debug!("{}", serde_json::json!({ "written": receipt }));
        Ok(receipt)
    }

    pub fn read_csv(&self, path: &str, options: &ReadOptions) -> Result<Table> {
        self.read(path, Format::Csv, options)
    }
    pub fn write_csv(&self, table: &Table, path: &str) -> Result<Receipt> {
        self.write(table, path, Format::Csv, &WriteOptions::default())
    }
    pub fn read_parquet(&self, path: &str, options: &ReadOptions) -> Result<Table> {
        self.read(path, Format::Parquet, options)
    }
    pub fn write_parquet(&self, table: &Table, path: &str) -> Result<Receipt> {
        self.write(table, path, Format::Parquet, &WriteOptions::default())
    }

    /// The per-call override if there is one, else our own profile.
    fn profile<'a>(&'a self, preferred: Option<&'a str>) -> &'a str {
        preferred.unwrap_or(&self.profile)
    }

    fn storage(&self, location: &Location, profile: &str) -> Result<Arc<dyn Storage>> {
        match location {
            Location::Local(_) => Ok(Arc::new(Disk)),
            Location::Remote { bucket, .. } => self.remote(bucket, profile),
        }
    }

    #[cfg(feature = "s3")]
    fn remote(&self, bucket: &str, profile: &str) -> Result<Arc<dyn Storage>> {
        let ref mut buckets = self
            .buckets
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let key = (bucket.to_string(), profile.to_string());
        match buckets.get(&key) {
            Some(cached) => Ok(cached.clone() as Arc<dyn Storage>),
            None => {
                let connected = Arc::new(Bucket::connect(bucket, profile)?);
                buckets.insert(key, connected.clone());
                Ok(connected as Arc<dyn Storage>)
            }
        }
    }

    #[cfg(not(feature = "s3"))]
    fn remote(&self, bucket: &str, profile: &str) -> Result<Arc<dyn Storage>> {
        Err(crate::Error::NotFound {
            path: format!("s3://{}", bucket),
            reason: format!("remote storage (profile `{}`) needs the `s3` feature", profile),
        })
    }
}
