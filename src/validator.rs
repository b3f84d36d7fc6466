//! Credential validity classification

use colored::*;

use crate::github::{ApiError, GitHubApi};

/// Validity of the stored credential, derived fresh on every check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialState {
    /// No credential configured
    Absent,
    /// Credential accepted by GitHub
    Valid,
    /// Credential present but rejected
    Invalid,
}

/// Classify `token` with a single authenticated probe.
///
/// Missing or empty tokens short-circuit to `Absent` without touching the
/// service. One failed probe is conclusive for this invocation; callers
/// re-validate on their next visit, so an externally-revoked token is
/// noticed then. Scope or network problems are reported as diagnostic
/// text but collapse into `Invalid` rather than forming a distinct state.
pub async fn validate(token: Option<&str>, api: &dyn GitHubApi) -> CredentialState {
    match token {
        None => CredentialState::Absent,
        Some(t) if t.is_empty() => CredentialState::Absent,
        Some(_) => match api.authenticate().await {
            Ok(_) => CredentialState::Valid,
            Err(ApiError::BadCredentials) => CredentialState::Invalid,
            Err(err) => {
                eprintln!("{}", format!("Token check failed: {}", err).dimmed());
                CredentialState::Invalid
            }
        },
    }
}
