use crate::io::join;

/// Bucket holding `raw/` inputs and `clean/` outputs. Local directories work too.
const BUCKET: &str = "s3://3di-data-ons/ons";
/// Credentials profile for S3 access.
const PROFILE: &str = "default";
/// Root under which the cleaned NSPL lookups are published.
const NSPL_ROOT: &str = "s3://3di-data-ons";

/// Where inputs live and how to reach them.
///
/// Read from `ONS_BUCKET`, `AWS_PROFILE` and `NSPL_ROOT`, falling back to
/// built-in defaults. Every field can be overridden afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bucket: String,
    profile: String,
    nspl_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket: String::from(BUCKET),
            profile: String::from(PROFILE),
            nspl_root: String::from(NSPL_ROOT),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let var = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| String::from(default));
        Self {
            bucket: var("ONS_BUCKET", BUCKET),
            profile: var("AWS_PROFILE", PROFILE),
            nspl_root: var("NSPL_ROOT", NSPL_ROOT),
        }
    }

    pub fn with_bucket(self, bucket: Option<String>) -> Self {
        Self {
            bucket: bucket.unwrap_or(self.bucket),
            ..self
        }
    }
    pub fn with_profile(self, profile: Option<String>) -> Self {
        Self {
            profile: profile.unwrap_or(self.profile),
            ..self
        }
    }
    pub fn with_nspl_root(self, nspl_root: Option<String>) -> Self {
        Self {
            nspl_root: nspl_root.unwrap_or(self.nspl_root),
            ..self
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
    pub fn profile(&self) -> &str {
        &self.profile
    }
    pub fn nspl_root(&self) -> &str {
        &self.nspl_root
    }
    /// `relative` resolved against the bucket.
    pub fn path(&self, relative: &str) -> String {
        join(&self.bucket, relative)
    }
}
