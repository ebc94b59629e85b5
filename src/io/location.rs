use std::path::PathBuf;

const S3: &str = "s3://";

/// Where a table lives. Anything that is not an `s3://` URI is a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Local(PathBuf),
    Remote { bucket: String, key: String },
}

impl Location {
    /// Path on disk, or object key within the bucket.
    pub fn key(&self) -> String {
        match self {
            Self::Local(path) => path.to_string_lossy().into_owned(),
            Self::Remote { key, .. } => key.clone(),
        }
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        match path.strip_prefix(S3) {
            Some(rest) => match rest.split_once('/') {
                Some((bucket, key)) => Self::Remote {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                },
                None => Self::Remote {
                    bucket: rest.to_string(),
                    key: String::new(),
                },
            },
            None => Self::Local(PathBuf::from(path)),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote { bucket, key } => write!(f, "{}{}/{}", S3, bucket, key),
        }
    }
}

/// Join a relative path onto a local directory or a bucket URI.
pub fn join(base: &str, relative: &str) -> String {
    match base.is_empty() {
        true => relative.to_string(),
        false => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            relative.trim_start_matches('/')
        ),
    }
}
