//! The four bucket operations, expressed as typed results over the
//! `ObjectStore` seam. Rendering to message text happens in the CLI layer.

use crate::errors::{Result, StorageCliError};
use crate::interfaces::ObjectStore;
use crate::storage::client::KEY_PREFIX;
use regex::Regex;
use std::path::Path;

/// Result of a filtered listing. `folder_empty` reflects the *unfiltered*
/// enumeration: the "no files" message is tied to the folder being empty,
/// not to the pattern matching nothing.
pub struct FilteredKeys {
    pub matched: Vec<String>,
    pub folder_empty: bool,
}

/// Result of a filtered deletion. Deletes run strictly one at a time; a
/// failure aborts the rest of the loop, so `deleted` holds the keys removed
/// before `failure` occurred. There is no rollback.
pub struct DeleteOutcome {
    pub deleted: Vec<String>,
    pub folder_empty: bool,
    pub failure: Option<StorageCliError>,
}

/// Anchored-at-start semantics: the pattern must match beginning at the
/// first byte of the key, not merely somewhere inside it. The regex crate
/// returns the leftmost match, so a match starting past 0 means no match
/// exists at 0.
fn matches_at_start(pattern: &Regex, key: &str) -> bool {
    pattern.find(key).is_some_and(|m| m.start() == 0)
}

/// Enumerate the keys under the configured bucket/prefix, in service order.
pub fn list_keys(store: &dyn ObjectStore) -> Result<Vec<String>> {
    store.list_objects()
}

/// Upload a local file to `KEY_PREFIX + s3_key`, returning the full
/// destination key. An existing object at that key is overwritten.
pub fn upload_file(store: &dyn ObjectStore, file_path: &Path, s3_key: &str) -> Result<String> {
    let destination = format!("{KEY_PREFIX}{s3_key}");
    store.put_object(file_path, &destination)?;
    Ok(destination)
}

/// Enumerate and keep only the keys the pattern matches at position 0.
pub fn list_keys_matching(store: &dyn ObjectStore, pattern: &str) -> Result<FilteredKeys> {
    let pattern = Regex::new(pattern)?;
    let keys = store.list_objects()?;
    let folder_empty = keys.is_empty();
    let matched = keys
        .into_iter()
        .filter(|key| matches_at_start(&pattern, key))
        .collect();

    Ok(FilteredKeys {
        matched,
        folder_empty,
    })
}

/// Delete every key the pattern matches at position 0, one request at a
/// time. The first failed delete aborts the remaining loop (fail-fast);
/// enumeration or regex failures delete nothing and return `Err`.
pub fn delete_keys_matching(store: &dyn ObjectStore, pattern: &str) -> Result<DeleteOutcome> {
    let pattern = Regex::new(pattern)?;
    let keys = store.list_objects()?;
    let folder_empty = keys.is_empty();

    let mut deleted = Vec::new();
    let mut failure = None;
    for key in keys {
        if !matches_at_start(&pattern, &key) {
            continue;
        }
        match store.delete_object(&key) {
            Ok(()) => deleted.push(key),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    Ok(DeleteOutcome {
        deleted,
        folder_empty,
        failure,
    })
}
