//! Folder upload command
//!
//! Walks a local directory and reconciles every regular file against the
//! target repository's default branch: files that exist remotely are
//! updated with the fetched blob SHA as proof of current state, files that
//! don't are created. Failures are isolated per file; nothing is rolled
//! back.

use std::path::{Path, PathBuf};

use colored::*;
use walkdir::WalkDir;

use crate::constants::github::COMMIT_MESSAGE;
use crate::github::{ApiError, GitHubApi, GitHubRepo};

/// Failures that abort the whole upload before any file is touched
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("local folder '{}' not found or not a directory", .0.display())]
    InvalidLocalPath(PathBuf),

    #[error("repository '{0}' not found under your account")]
    RepoNotFound(String),

    #[error("bad credentials, the token may be invalid or lack the 'repo' scope")]
    BadCredentials,

    #[error("unexpected GitHub failure: {0}")]
    Unexpected(String),
}

/// Failure of a single file; never aborts the batch
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("failed to read local file: {0}")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Remote(#[from] ApiError),
}

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Created,
    Updated,
}

/// Per-file record returned to the caller
#[derive(Debug)]
pub struct FileOutcome {
    /// Remote path, forward slashes on every platform
    pub path: String,
    pub result: Result<FileAction, FileError>,
}

/// Upload every regular file under `local_dir` into `repo_name`.
///
/// The caller is expected to have passed the confirmation gate already;
/// the first remote call happens only after the local path check passes.
/// Files pushed before a later failure stay pushed. Enumeration follows
/// the filesystem's order, deterministic only per snapshot.
pub async fn upload_folder(
    api: &dyn GitHubApi,
    local_dir: &Path,
    repo_name: &str,
) -> Result<Vec<FileOutcome>, UploadError> {
    if !local_dir.is_dir() {
        return Err(UploadError::InvalidLocalPath(local_dir.to_path_buf()));
    }

    let repo = api
        .get_user_repository(repo_name)
        .await
        .map_err(|err| match err {
            ApiError::NotFound => UploadError::RepoNotFound(repo_name.to_string()),
            ApiError::BadCredentials => UploadError::BadCredentials,
            ApiError::Unexpected(msg) => UploadError::Unexpected(msg),
        })?;

    let mut outcomes = Vec::new();
    for entry in WalkDir::new(local_dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let remote_path = relative_remote_path(local_dir, entry.path());
        let result = sync_file(api, &repo, entry.path(), &remote_path).await;
        report_file(&remote_path, &result);
        outcomes.push(FileOutcome {
            path: remote_path,
            result,
        });
    }

    Ok(outcomes)
}

/// Path below `local_dir`, joined with `/` regardless of platform
fn relative_remote_path(local_dir: &Path, file: &Path) -> String {
    file.strip_prefix(local_dir)
        .unwrap_or(file)
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Create or update one file; remote existence decides which
async fn sync_file(
    api: &dyn GitHubApi,
    repo: &GitHubRepo,
    local_path: &Path,
    remote_path: &str,
) -> Result<FileAction, FileError> {
    let content = std::fs::read(local_path)?;

    match api
        .get_file(&repo.full_name, remote_path, &repo.default_branch)
        .await
    {
        Ok(existing) => {
            // A SHA gone stale between fetch and update is rejected
            // remotely and surfaces as this file's failure; no refetch.
            api.update_file(
                &repo.full_name,
                remote_path,
                COMMIT_MESSAGE,
                &content,
                &existing.sha,
                &repo.default_branch,
            )
            .await?;
            Ok(FileAction::Updated)
        }
        Err(ApiError::NotFound) => {
            api.create_file(
                &repo.full_name,
                remote_path,
                COMMIT_MESSAGE,
                &content,
                &repo.default_branch,
            )
            .await?;
            Ok(FileAction::Created)
        }
        Err(err) => Err(err.into()),
    }
}

fn report_file(path: &str, result: &Result<FileAction, FileError>) {
    match result {
        Ok(FileAction::Created) => println!("{} {}", "Created:".green(), path),
        Ok(FileAction::Updated) => println!("{} {}", "Updated:".green(), path),
        Err(err) => println!("{}", format!("Failed '{}': {}", path, err).red()),
    }
}
