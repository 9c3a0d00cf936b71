use crate::errors::Result;
use mockall::automock;
use std::path::Path;

/// Interface for object-storage access to facilitate testing
///
/// The real implementation is `storage::client::S3StorageClient`; tests
/// inject `MockObjectStore` so operations can be exercised without a
/// network or credentials.
#[automock]
pub trait ObjectStore {
    /// List the keys under the configured bucket/prefix, in the order the
    /// service returns them. A single page; no pagination loop.
    fn list_objects(&self) -> Result<Vec<String>>;

    /// Upload the local file at `local_path` to `key`, overwriting any
    /// existing object at that key.
    fn put_object(&self, local_path: &Path, key: &str) -> Result<()>;

    /// Delete the object stored at `key`.
    fn delete_object(&self, key: &str) -> Result<()>;
}
