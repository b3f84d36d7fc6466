//! Common test support utilities and fixtures
//!
//! The centerpiece is `MockApi`, a call-recording `GitHubApi` double whose
//! behavior is data-driven: known repositories and files live in maps,
//! authentication follows a flag, and selected update paths can be forced
//! to fail.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use hubkit::github::{ApiError, GitHubApi, GitHubRepo, GitHubUser, RemoteFile};

/// Build a repository value for doubles
pub fn repo(full_name: &str, default_branch: &str) -> GitHubRepo {
    GitHubRepo {
        full_name: full_name.to_string(),
        default_branch: default_branch.to_string(),
        html_url: format!("https://github.com/{}", full_name),
    }
}

/// Call-recording `GitHubApi` double
#[derive(Default)]
pub struct MockApi {
    calls: Mutex<Vec<String>>,
    accept_token: bool,
    fail_probe: bool,
    repositories: HashMap<String, GitHubRepo>,
    user_repositories: HashMap<String, GitHubRepo>,
    remote_files: HashMap<String, RemoteFile>,
    failing_updates: Vec<String>,
}

impl MockApi {
    /// Double that accepts the credential
    pub fn new() -> Self {
        Self {
            accept_token: true,
            ..Self::default()
        }
    }

    /// Double that rejects every authenticated call
    pub fn rejecting() -> Self {
        Self::default()
    }

    /// Double whose probe fails for a reason other than authentication
    pub fn unreachable_service() -> Self {
        Self {
            accept_token: true,
            fail_probe: true,
            ..Self::default()
        }
    }

    pub fn with_repository(mut self, full_name: &str, default_branch: &str) -> Self {
        self.repositories
            .insert(full_name.to_string(), repo(full_name, default_branch));
        self
    }

    pub fn with_user_repository(
        mut self,
        name: &str,
        full_name: &str,
        default_branch: &str,
    ) -> Self {
        self.user_repositories
            .insert(name.to_string(), repo(full_name, default_branch));
        self
    }

    pub fn with_remote_file(mut self, full_name: &str, path: &str, sha: &str) -> Self {
        self.remote_files.insert(
            format!("{}:{}", full_name, path),
            RemoteFile {
                path: path.to_string(),
                sha: sha.to_string(),
            },
        );
        self
    }

    pub fn with_failing_update(mut self, path: &str) -> Self {
        self.failing_updates.push(path.to_string());
        self
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn recorded(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GitHubApi for MockApi {
    async fn authenticate(&self) -> Result<GitHubUser, ApiError> {
        self.record("authenticate".to_string());
        if self.fail_probe {
            return Err(ApiError::Unexpected("service unavailable".to_string()));
        }
        if !self.accept_token {
            return Err(ApiError::BadCredentials);
        }
        Ok(GitHubUser {
            login: "octocat".to_string(),
        })
    }

    async fn get_repository(&self, full_name: &str) -> Result<GitHubRepo, ApiError> {
        self.record(format!("get_repository {}", full_name));
        if !self.accept_token {
            return Err(ApiError::BadCredentials);
        }
        self.repositories
            .get(full_name)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create_fork(&self, full_name: &str) -> Result<GitHubRepo, ApiError> {
        self.record(format!("create_fork {}", full_name));
        let source = self.repositories.get(full_name).ok_or(ApiError::NotFound)?;
        let name = source.full_name.split('/').nth(1).unwrap_or_default();
        Ok(repo(&format!("octocat/{}", name), &source.default_branch))
    }

    async fn get_user_repository(&self, name: &str) -> Result<GitHubRepo, ApiError> {
        self.record(format!("get_user_repository {}", name));
        if !self.accept_token {
            return Err(ApiError::BadCredentials);
        }
        self.user_repositories
            .get(name)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn get_file(
        &self,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<RemoteFile, ApiError> {
        self.record(format!("get_file {}:{}@{}", repo, path, branch));
        self.remote_files
            .get(&format!("{}:{}", repo, path))
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create_file(
        &self,
        repo: &str,
        path: &str,
        message: &str,
        _content: &[u8],
        branch: &str,
    ) -> Result<(), ApiError> {
        self.record(format!(
            "create_file {}:{}@{} msg={}",
            repo, path, branch, message
        ));
        Ok(())
    }

    async fn update_file(
        &self,
        repo: &str,
        path: &str,
        message: &str,
        _content: &[u8],
        sha: &str,
        branch: &str,
    ) -> Result<(), ApiError> {
        self.record(format!(
            "update_file {}:{}@{} sha={} msg={}",
            repo, path, branch, sha, message
        ));
        if self.failing_updates.iter().any(|p| p == path) {
            return Err(ApiError::Unexpected("update rejected".to_string()));
        }
        Ok(())
    }
}
