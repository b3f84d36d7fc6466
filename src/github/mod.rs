//! GitHub API integration module
//!
//! Everything hubkit knows about GitHub lives here, behind a small
//! capability interface so the rest of the application never touches HTTP
//! directly.
//!
//! ## Architecture
//!
//! - [`api`]: the [`GitHubApi`] trait and the closed [`ApiError`] kinds
//! - [`client`]: the real `reqwest` adapter
//! - [`types`]: wire types shared by the adapter and its callers
//!
//! Menu actions depend on `&dyn GitHubApi`, which keeps them testable with
//! call-recording doubles and keeps the HTTP details in one file.

pub mod api;
pub mod client;
pub mod types;

// Re-export commonly used items for convenience
pub use api::{ApiError, GitHubApi};
pub use client::GitHubClient;
pub use types::{GitHubRepo, GitHubUser, RemoteFile};
