//! GitHub API client implementation
//!
//! `GitHubClient` is the real [`GitHubApi`] adapter over GitHub's REST v3
//! API. It owns the HTTP client and the credential, and maps response
//! statuses onto the closed [`ApiError`] kinds: 404 becomes `NotFound`,
//! 401 becomes `BadCredentials`, everything else non-2xx (and any
//! transport or decoding failure) becomes `Unexpected`.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::debug;

use super::api::{ApiError, GitHubApi};
use super::types::{GitHubRepo, GitHubUser, PutContentsPayload, RemoteFile};
use crate::constants::github::{API_BASE, DEFAULT_USER_AGENT};

/// GitHub REST v3 client holding the authenticated session state
pub struct GitHubClient {
    client: Client,
    token: String,
}

impl GitHubClient {
    /// Create a new client around `token`
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
        }
    }

    fn with_headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("token {}", self.token))
            .header("User-Agent", DEFAULT_USER_AGENT)
            .header("Accept", "application/vnd.github.v3+json")
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self.with_headers(self.client.get(url)).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json().await?)
    }

    async fn put_contents(
        &self,
        repo: &str,
        path: &str,
        message: &str,
        content: &[u8],
        sha: Option<&str>,
        branch: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/repos/{}/contents/{}", API_BASE, repo, path);
        let payload = PutContentsPayload {
            message,
            content: BASE64.encode(content),
            branch,
            sha,
        };

        debug!("PUT {}", url);
        let response = self
            .with_headers(self.client.put(&url))
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }
}

/// Map a non-2xx response onto an `ApiError` kind
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::UNAUTHORIZED => ApiError::BadCredentials,
        _ => {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            ApiError::Unexpected(format!("GitHub API error ({}): {}", status, body))
        }
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn authenticate(&self) -> Result<GitHubUser, ApiError> {
        self.get_json(&format!("{}/user", API_BASE)).await
    }

    async fn get_repository(&self, full_name: &str) -> Result<GitHubRepo, ApiError> {
        self.get_json(&format!("{}/repos/{}", API_BASE, full_name))
            .await
    }

    async fn create_fork(&self, full_name: &str) -> Result<GitHubRepo, ApiError> {
        let url = format!("{}/repos/{}/forks", API_BASE, full_name);

        // GitHub answers 202 Accepted; the fork body is available immediately
        debug!("POST {}", url);
        let response = self.with_headers(self.client.post(&url)).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json().await?)
    }

    async fn get_user_repository(&self, name: &str) -> Result<GitHubRepo, ApiError> {
        let user = self.authenticate().await?;
        self.get_repository(&format!("{}/{}", user.login, name))
            .await
    }

    async fn get_file(
        &self,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<RemoteFile, ApiError> {
        self.get_json(&format!(
            "{}/repos/{}/contents/{}?ref={}",
            API_BASE, repo, path, branch
        ))
        .await
    }

    async fn create_file(
        &self,
        repo: &str,
        path: &str,
        message: &str,
        content: &[u8],
        branch: &str,
    ) -> Result<(), ApiError> {
        self.put_contents(repo, path, message, content, None, branch)
            .await
    }

    async fn update_file(
        &self,
        repo: &str,
        path: &str,
        message: &str,
        content: &[u8],
        sha: &str,
        branch: &str,
    ) -> Result<(), ApiError> {
        self.put_contents(repo, path, message, content, Some(sha), branch)
            .await
    }
}
