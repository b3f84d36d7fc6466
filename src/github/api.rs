//! Remote service boundary
//!
//! The [`GitHubApi`] trait is the capability interface over every GitHub
//! operation hubkit consumes. [`GitHubClient`](super::client::GitHubClient)
//! is the real adapter; tests install recording doubles implementing the
//! same contract.

use async_trait::async_trait;

use super::types::{GitHubRepo, GitHubUser, RemoteFile};

/// Closed set of error kinds a remote operation can fail with
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource does not exist
    #[error("not found")]
    NotFound,

    /// The credential was rejected by GitHub
    #[error("bad credentials")]
    BadCredentials,

    /// Network, service or decoding failure
    #[error("{0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Unexpected(err.to_string())
    }
}

/// GitHub operations consumed by the menu actions.
///
/// Every method is a single request-response exchange; none retries. All
/// repository arguments are `owner/name` full names.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Authenticated "who am I" probe (`GET /user`)
    async fn authenticate(&self) -> Result<GitHubUser, ApiError>;

    /// Resolve a repository by full name
    async fn get_repository(&self, full_name: &str) -> Result<GitHubRepo, ApiError>;

    /// Fork `full_name` under the authenticated user's account
    async fn create_fork(&self, full_name: &str) -> Result<GitHubRepo, ApiError>;

    /// Resolve a repository owned by the authenticated user
    async fn get_user_repository(&self, name: &str) -> Result<GitHubRepo, ApiError>;

    /// Fetch content metadata for `path` on `branch`
    async fn get_file(
        &self,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<RemoteFile, ApiError>;

    /// Create a new file at `path` on `branch`
    async fn create_file(
        &self,
        repo: &str,
        path: &str,
        message: &str,
        content: &[u8],
        branch: &str,
    ) -> Result<(), ApiError>;

    /// Update the file at `path`, proving the current state with `sha`
    async fn update_file(
        &self,
        repo: &str,
        path: &str,
        message: &str,
        content: &[u8],
        sha: &str,
        branch: &str,
    ) -> Result<(), ApiError>;
}
