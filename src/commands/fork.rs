//! Repository fork command
//!
//! Normalizes the user-supplied identifier, resolves it against GitHub and
//! requests a fork under the authenticated account. Forking is a remote
//! side effect this command cannot undo.

use tracing::info;

use crate::github::{ApiError, GitHubApi};

/// Closed set of ways the fork flow can fail
#[derive(Debug, thiserror::Error)]
pub enum ForkError {
    #[error("invalid repository format, expected 'owner/repo'")]
    InvalidFormat,

    #[error("repository '{0}' not found, check the spelling")]
    NotFound(String),

    #[error("bad credentials, the token may be invalid or expired")]
    BadCredentials,

    #[error("unexpected GitHub failure: {0}")]
    Unexpected(String),
}

/// Result of a successful fork
#[derive(Debug)]
pub struct ForkOutcome {
    /// Full name of the repository that was forked
    pub source: String,
    /// Full name of the new fork
    pub fork: String,
    /// Browser URL of the new fork
    pub html_url: String,
}

/// URL prefixes accepted (and stripped) in front of `owner/repo`
const RECOGNIZED_PREFIXES: [&str; 3] = [
    "https://github.com/",
    "http://github.com/",
    "github.com/",
];

/// Normalize user input to a bare `owner/repo` identifier.
///
/// After prefix stripping, exactly one `/` must separate two non-empty
/// segments; anything else is `InvalidFormat` and never reaches the
/// network.
pub fn parse_repo_identifier(input: &str) -> Result<String, ForkError> {
    let mut identifier = input.trim();
    for prefix in RECOGNIZED_PREFIXES {
        if let Some(stripped) = identifier.strip_prefix(prefix) {
            identifier = stripped;
            break;
        }
    }

    let mut parts = identifier.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
            Ok(format!("{}/{}", owner, name))
        }
        _ => Err(ForkError::InvalidFormat),
    }
}

fn map_api_error(err: ApiError, full_name: &str) -> ForkError {
    match err {
        ApiError::NotFound => ForkError::NotFound(full_name.to_string()),
        ApiError::BadCredentials => ForkError::BadCredentials,
        ApiError::Unexpected(msg) => ForkError::Unexpected(msg),
    }
}

/// Fork `input` (URL or `owner/repo`) under the authenticated account
pub async fn fork_repository(
    api: &dyn GitHubApi,
    input: &str,
) -> Result<ForkOutcome, ForkError> {
    let full_name = parse_repo_identifier(input)?;

    let source = api
        .get_repository(&full_name)
        .await
        .map_err(|err| map_api_error(err, &full_name))?;

    info!("forking {}", source.full_name);
    let fork = api
        .create_fork(&source.full_name)
        .await
        .map_err(|err| map_api_error(err, &source.full_name))?;

    Ok(ForkOutcome {
        source: source.full_name,
        fork: fork.full_name,
        html_url: fork.html_url,
    })
}
