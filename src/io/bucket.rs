use super::Storage;
use crate::Error;
use crate::Result;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

/// An S3 bucket reached with a named credentials profile.
///
/// The SDK is async; each request is driven to completion on a private
/// current-thread runtime so callers stay synchronous.
#[derive(Debug)]
pub struct Bucket {
    name: String,
    client: aws_sdk_s3::Client,
    runtime: tokio::runtime::Runtime,
}

impl Bucket {
    pub fn connect(name: &str, profile: &str) -> Result<Self> {
        log::debug!("connecting to s3://{} as profile {}", name, profile);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::NotFound {
                path: format!("s3://{}", name),
                reason: e.to_string(),
            })?;
        let config = runtime.block_on(
            aws_config::defaults(aws_config::BehaviorVersion::latest())
                .profile_name(profile)
                .load(),
        );
        Ok(Self {
            name: name.to_string(),
            client: aws_sdk_s3::Client::new(&config),
            runtime,
        })
    }
    fn uri(&self, key: &str) -> String {
        format!("s3://{}/{}", self.name, key)
    }
}

impl Storage for Bucket {
    fn fetch(&self, key: &str) -> Result<Bytes> {
        let missing = |reason: String| Error::NotFound {
            path: self.uri(key),
            reason,
        };
        self.runtime.block_on(async {
            self.client
                .get_object()
                .bucket(&self.name)
                .key(key)
                .send()
                .await
                .map_err(|e| missing(DisplayErrorContext(&e).to_string()))?
                .body
                .collect()
                .await
                .map(|body| body.into_bytes())
                .map_err(|e| missing(e.to_string()))
        })
    }
    fn store(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        self.runtime
            .block_on(
                self.client
                    .put_object()
                    .bucket(&self.name)
                    .key(key)
                    .body(ByteStream::from(bytes))
                    .send(),
            )
            .map(|_| ())
            .map_err(|e| Error::Write {
                path: self.uri(key),
                reason: DisplayErrorContext(&e).to_string(),
            })
    }
}
