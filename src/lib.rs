//! hubkit - GitHub utilities behind an interactive numbered menu

pub mod commands;
pub mod constants;
pub mod github;
pub mod menu;
pub mod store;
pub mod validator;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use github::{ApiError, GitHubApi, GitHubClient};
pub use store::{FileTokenStore, TokenStore};
pub use validator::CredentialState;
