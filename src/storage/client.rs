use crate::errors::{Result, StorageCliError};
use crate::interfaces::ObjectStore;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Region};
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;

/// Bucket and key prefix are compiled in; the tool manages nothing outside them.
pub const BUCKET_NAME: &str = "developer-task";
pub const KEY_PREFIX: &str = "a-wing/";

/// Synchronous facade over the S3 SDK. Owns its tokio runtime and issues one
/// blocking call at a time, so callers never deal with async.
pub struct S3StorageClient {
    bucket_name: String,
    client: Client,
    runtime: tokio::runtime::Runtime,
}

impl S3StorageClient {
    /// Create a client from the standard AWS environment variables
    /// (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, `AWS_DEFAULT_REGION`).
    ///
    /// Missing variables are not a startup error: the service rejects the
    /// first request instead, and that surfaces as an operation-level error.
    pub fn from_env() -> Result<Self> {
        let access_key = std::env::var("AWS_ACCESS_KEY_ID").unwrap_or_default();
        let secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").unwrap_or_default();
        let region = std::env::var("AWS_DEFAULT_REGION").unwrap_or_default();

        // Runtime is reused for every call this process makes
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| StorageCliError::Storage(format!("Failed to create runtime: {e}")))?;

        let credentials = Credentials::new(
            access_key,
            secret_key,
            None, // No session token
            None, // No expiry
            "EnvStaticCredentials",
        );

        let config = aws_sdk_s3::Config::builder()
            .region(Region::new(region))
            .credentials_provider(credentials)
            .behavior_version(BehaviorVersion::latest())
            .build();

        Ok(Self {
            bucket_name: BUCKET_NAME.to_string(),
            client: Client::from_conf(config),
            runtime,
        })
    }
}

impl ObjectStore for S3StorageClient {
    fn list_objects(&self) -> Result<Vec<String>> {
        self.runtime.block_on(async {
            let response = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket_name)
                .prefix(KEY_PREFIX)
                .send()
                .await
                .map_err(|e| StorageCliError::Storage(format!("Failed to list objects: {e}")))?;

            // Extract the object keys from the response
            let mut keys = Vec::new();
            if let Some(contents) = response.contents {
                for object in contents {
                    if let Some(key) = object.key {
                        keys.push(key);
                    }
                }
            }

            Ok(keys)
        })
    }

    fn put_object(&self, local_path: &Path, key: &str) -> Result<()> {
        // Check the file locally before touching the network
        if !local_path.exists() {
            return Err(StorageCliError::MissingFile(
                local_path.display().to_string(),
            ));
        }

        self.runtime.block_on(async {
            // Stream directly from the file path, no loading into memory
            let body = ByteStream::from_path(local_path).await.map_err(|e| {
                StorageCliError::Storage(format!("Failed to read local file: {e}"))
            })?;

            self.client
                .put_object()
                .bucket(&self.bucket_name)
                .key(key)
                .body(body)
                .send()
                .await
                .map_err(|e| StorageCliError::Storage(format!("Failed to upload object: {e}")))?;

            Ok(())
        })
    }

    fn delete_object(&self, key: &str) -> Result<()> {
        self.runtime.block_on(async {
            self.client
                .delete_object()
                .bucket(&self.bucket_name)
                .key(key)
                .send()
                .await
                .map_err(|e| StorageCliError::Storage(format!("Failed to delete object: {e}")))?;

            Ok(())
        })
    }
}
