pub mod client;
pub mod ops;

// Re-export types for convenient access from other modules
pub use client::{BUCKET_NAME, KEY_PREFIX, S3StorageClient};
pub use ops::{DeleteOutcome, FilteredKeys};
