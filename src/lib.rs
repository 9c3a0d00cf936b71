pub mod args;
pub mod errors;
pub mod interfaces;
pub mod storage;
pub mod utils {
    pub mod log_utils;
}

pub use args::Args;

use args::Invocation;
use errors::StorageCliError;
use interfaces::ObjectStore;
use std::path::Path;
use storage::S3StorageClient;
use storage::ops;
use utils::log_utils::Logger;

/// Fixed message for an empty listing
pub const NO_FILES_FOUND: &str = "No files found in the folder.";
/// Fixed message when a deletion finds an empty folder
pub const NO_FILES_TO_DELETE: &str = "No files to delete.";

/// Entry point for the CLI. Classifies the invocation, builds the S3 client
/// only when an operation will actually run, and prints the rendered lines.
/// Failures become message text; the process exit code stays 0 throughout.
pub fn run_app(args: &Args) {
    let logger = Logger::new(args.verbose);
    let invocation = args.invocation();

    // Malformed invocations never construct a client or touch the network
    if let Invocation::Usage(message) = &invocation {
        logger.normal(message);
        return;
    }

    let lines = match S3StorageClient::from_env() {
        Ok(store) => run_invocation(&invocation, &store, &logger),
        Err(e) => vec![render_failure(&invocation, &e)],
    };
    for line in &lines {
        logger.normal(line);
    }
}

/// Run one classified invocation against the given store and return the
/// lines to print, in order. Split out from `run_app` so tests can drive it
/// with a mock store and inspect the output.
pub fn run_invocation(
    invocation: &Invocation,
    store: &dyn ObjectStore,
    logger: &Logger,
) -> Vec<String> {
    match invocation {
        Invocation::Usage(message) => vec![(*message).to_string()],

        Invocation::List => match ops::list_keys(store) {
            Ok(keys) if keys.is_empty() => vec![NO_FILES_FOUND.to_string()],
            Ok(keys) => {
                logger.info(&format!(
                    "{} object(s) under {}",
                    keys.len(),
                    storage::KEY_PREFIX
                ));
                keys
            }
            Err(e) => vec![render_failure(invocation, &e)],
        },

        Invocation::Upload { file_path, s3_key } => {
            match ops::upload_file(store, Path::new(file_path), s3_key) {
                Ok(destination) => {
                    vec![format!("File {file_path} has been uploaded to {destination}")]
                }
                Err(e) => vec![render_failure(invocation, &e)],
            }
        }

        Invocation::ListRegex { pattern } => match ops::list_keys_matching(store, pattern) {
            Ok(outcome) if outcome.folder_empty => vec![NO_FILES_FOUND.to_string()],
            Ok(outcome) => {
                logger.debug(&format!("pattern '{pattern}' matched {} key(s)", outcome.matched.len()));
                outcome.matched
            }
            Err(e) => vec![render_failure(invocation, &e)],
        },

        Invocation::DeleteRegex { pattern } => match ops::delete_keys_matching(store, pattern) {
            Ok(outcome) if outcome.folder_empty => vec![NO_FILES_TO_DELETE.to_string()],
            Ok(outcome) => {
                let mut lines: Vec<String> = outcome
                    .deleted
                    .iter()
                    .map(|key| format!("File {key} has been deleted."))
                    .collect();
                // A delete that failed mid-loop: confirmations for the keys
                // already gone, then the diagnostic
                if let Some(e) = &outcome.failure {
                    lines.push(render_failure(invocation, e));
                }
                lines
            }
            Err(e) => vec![render_failure(invocation, &e)],
        },
    }
}

/// Map a failure onto the invoked operation's diagnostic prefix.
fn render_failure(invocation: &Invocation, error: &StorageCliError) -> String {
    let prefix = match invocation {
        Invocation::List => "Error while listing files",
        Invocation::Upload { .. } => "Error while uploading file",
        Invocation::ListRegex { .. } => "Error while listing files with regex",
        Invocation::DeleteRegex { .. } => "Error while deleting files",
        Invocation::Usage(_) => "Error",
    };
    format!("{prefix}: {error}")
}
