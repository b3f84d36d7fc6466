//! Menu-invoked commands
//!
//! Each command is a free async function over `&dyn GitHubApi`, so the
//! interactive layer stays thin and the flows stay testable with doubles.

pub mod fork;
pub mod upload;

pub use fork::{ForkError, ForkOutcome, fork_repository, parse_repo_identifier};
pub use upload::{FileAction, FileOutcome, UploadError, upload_folder};
