//! GitHub wire types
//!
//! Serde representations of the API payloads hubkit consumes. Only the
//! fields the application actually reads are deserialized.

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by `GET /user`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

/// Repository metadata
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub full_name: String,
    pub default_branch: String,
    pub html_url: String,
}

/// Content metadata for an existing file, fetched from the contents API.
/// The `sha` is the proof-of-current-state an update must carry.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFile {
    pub path: String,
    pub sha: String,
}

/// Payload for `PUT /repos/{owner}/{repo}/contents/{path}`
///
/// `sha` is present for updates and absent for creates.
#[derive(Serialize)]
pub(crate) struct PutContentsPayload<'a> {
    pub message: &'a str,
    pub content: String,
    pub branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<&'a str>,
}
