//! Menu dispatch gating through the public API

use hubkit::menu::{ContactChoice, GitHubChoice, MainChoice};
use hubkit::validator::CredentialState;

#[test]
fn fork_option_is_inert_without_a_functional_credential() {
    // Selecting the rendered fork label must not produce a command while
    // the credential is absent; the screen reports "invalid option".
    assert_eq!(GitHubChoice::resolve("02", CredentialState::Absent), None);
}

#[test]
fn upload_option_is_inert_with_a_rejected_credential() {
    assert_eq!(GitHubChoice::resolve("03", CredentialState::Invalid), None);
}

#[test]
fn labels_match_literally_not_numerically() {
    assert_eq!(MainChoice::resolve("1"), None);
    assert_eq!(MainChoice::resolve("01"), Some(MainChoice::GitHubUtils));
    assert_eq!(GitHubChoice::resolve("2", CredentialState::Valid), None);
    assert_eq!(ContactChoice::resolve("98"), Some(ContactChoice::Close));
}

#[test]
fn quit_is_reachable_from_every_state() {
    assert_eq!(MainChoice::resolve("99"), Some(MainChoice::Quit));
    assert_eq!(
        GitHubChoice::resolve("99", CredentialState::Absent),
        Some(GitHubChoice::Quit)
    );
    assert_eq!(ContactChoice::resolve("99"), Some(ContactChoice::Quit));
}
