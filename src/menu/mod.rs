//! Interactive menu controller
//!
//! A small hierarchical state machine: every screen renders a numbered
//! option list, reads one line and exact-matches it against the literal
//! zero-padded labels ("01", not "1"). Navigation is a stack-free tree —
//! "close" returns to the parent explicitly, "quit" terminates the whole
//! process from any depth. Option visibility on the GitHub screen is
//! recomputed by a fresh credential check on every render, so an
//! externally-revoked token is noticed on the next visit.
//!
//! Dispatch is decoupled from rendering: each state has a tagged command
//! enum and a pure `resolve` function over the input line, which is what
//! the tests exercise.

use std::io::stdout;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use colored::*;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::{Confirm, Input, Password};

use crate::commands::{fork_repository, upload_folder};
use crate::constants::links;
use crate::github::{GitHubApi, GitHubClient};
use crate::store::TokenStore;
use crate::validator::{CredentialState, validate};

const BANNER: &str = r"
 _           _     _    _ _
| |__  _   _| |__ | | _(_) |_
| '_ \| | | | '_ \| |/ / | __|
| | | | |_| | |_) |   <| | |_
|_| |_|\__,_|_.__/|_|\_\_|\__|
";

const SUBTITLE: &str = "GitHub utilities behind a numbered menu";

/// Commands reachable from the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    GitHubUtils,
    Contacts,
    Quit,
}

impl MainChoice {
    /// Exact-match `input` against the rendered labels
    pub fn resolve(input: &str) -> Option<Self> {
        match input {
            "01" => Some(Self::GitHubUtils),
            "98" => Some(Self::Contacts),
            "99" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Commands reachable from the GitHub utilities screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitHubChoice {
    AddToken,
    Fork,
    Upload,
    Close,
    Quit,
}

impl GitHubChoice {
    /// Fork and upload resolve only while the credential is functional;
    /// their labels stay rendered (greyed out) but inert otherwise.
    pub fn resolve(input: &str, state: CredentialState) -> Option<Self> {
        let advanced = state == CredentialState::Valid;
        match input {
            "01" => Some(Self::AddToken),
            "02" if advanced => Some(Self::Fork),
            "03" if advanced => Some(Self::Upload),
            "98" => Some(Self::Close),
            "99" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Commands reachable from the contacts screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChoice {
    Repository,
    Issues,
    Discussions,
    Close,
    Quit,
}

impl ContactChoice {
    pub fn resolve(input: &str) -> Option<Self> {
        match input {
            "01" => Some(Self::Repository),
            "02" => Some(Self::Issues),
            "03" => Some(Self::Discussions),
            "98" => Some(Self::Close),
            "99" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the menu loop until the user quits
pub async fn run(store: &dyn TokenStore) -> Result<()> {
    loop {
        draw_screen("Main Menu");
        println!("{}{}", "01. ".cyan().bold(), "GitHub Utils".white());
        println!("{}{}", "98. ".cyan().bold(), "Contacts".white());
        println!("{}{}", "99. ".cyan().bold(), "Quit".white());

        match MainChoice::resolve(&prompt_choice()?) {
            Some(MainChoice::GitHubUtils) => github_menu(store).await?,
            Some(MainChoice::Contacts) => contacts_menu()?,
            Some(MainChoice::Quit) => quit(),
            None => invalid_option(),
        }
    }
}

async fn github_menu(store: &dyn TokenStore) -> Result<()> {
    loop {
        // Fresh read and fresh probe on every render; no caching.
        let token = store.load();
        let client = GitHubClient::new(token.clone().unwrap_or_default());
        let state = validate(token.as_deref(), &client).await;

        draw_screen("GitHub Utilities");
        println!(
            "{}{} {}",
            "01. ".cyan().bold(),
            "Add GitHub Token".white(),
            status_label(state)
        );
        if state == CredentialState::Valid {
            println!("{}{}", "02. ".cyan().bold(), "Fork a Repository".white());
            println!(
                "{}{}",
                "03. ".cyan().bold(),
                "Upload Files to a Repository".white()
            );
        } else {
            println!(
                "{}{}",
                "02. ".bright_black(),
                "Fork a Repository (token required)".bright_black()
            );
            println!(
                "{}{}",
                "03. ".bright_black(),
                "Upload Files to a Repository (token required)".bright_black()
            );
        }
        println!("{}{}", "98. ".cyan().bold(), "Close Menu".white());
        println!("{}{}", "99. ".cyan().bold(), "Quit".white());

        match GitHubChoice::resolve(&prompt_choice()?, state) {
            Some(GitHubChoice::AddToken) => add_token(store).await?,
            Some(GitHubChoice::Fork) => fork_screen(&client).await?,
            Some(GitHubChoice::Upload) => upload_screen(&client).await?,
            Some(GitHubChoice::Close) => return Ok(()),
            Some(GitHubChoice::Quit) => quit(),
            None => invalid_option(),
        }
    }
}

fn contacts_menu() -> Result<()> {
    loop {
        draw_screen("Contacts");
        println!("{}{}", "01. ".cyan().bold(), "Project Repository".white());
        println!("{}{}", "02. ".cyan().bold(), "Issue Tracker".white());
        println!("{}{}", "03. ".cyan().bold(), "Discussions".white());
        println!("{}{}", "98. ".cyan().bold(), "Close Menu".white());
        println!("{}{}", "99. ".cyan().bold(), "Quit".white());

        match ContactChoice::resolve(&prompt_choice()?) {
            Some(ContactChoice::Repository) => open_link(links::REPOSITORY),
            Some(ContactChoice::Issues) => open_link(links::ISSUES),
            Some(ContactChoice::Discussions) => open_link(links::DISCUSSIONS),
            Some(ContactChoice::Close) => return Ok(()),
            Some(ContactChoice::Quit) => quit(),
            None => invalid_option(),
        }
    }
}

async fn add_token(store: &dyn TokenStore) -> Result<()> {
    draw_screen("Add GitHub Token");
    println!("Create a personal access token at https://github.com/settings/tokens");
    println!("The 'repo' scope is required for fork and upload operations.\n");

    let token: String = Password::new().with_prompt("Token").interact()?;
    store.save(&token)?;

    let client = GitHubClient::new(token.clone());
    match validate(Some(&token), &client).await {
        CredentialState::Valid => {
            println!("{}", "Token saved and functional.".green());
        }
        _ => {
            println!(
                "{}",
                "Token saved, but it does not appear to be functional. Check its validity and scopes.".red()
            );
        }
    }
    pause();
    Ok(())
}

async fn fork_screen(api: &dyn GitHubApi) -> Result<()> {
    draw_screen("Fork a Repository");
    let input: String = Input::new()
        .with_prompt("Repository URL or 'owner/repo'")
        .interact_text()?;

    match fork_repository(api, &input).await {
        Ok(outcome) => {
            println!(
                "{}",
                format!("Forked '{}' to '{}'.", outcome.source, outcome.fork).green()
            );
            println!("View it at: {}", outcome.html_url);
        }
        Err(err) => println!("{}", format!("Error: {}", err).red()),
    }
    pause();
    Ok(())
}

async fn upload_screen(api: &dyn GitHubApi) -> Result<()> {
    draw_screen("Upload Files to a Repository");
    let folder: String = Input::new()
        .with_prompt("Local folder to upload")
        .interact_text()?;
    let repo: String = Input::new()
        .with_prompt("Name of YOUR target repository")
        .interact_text()?;

    // Required gate: nothing is sent until the user confirms.
    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Upload files from '{}' to your repo '{}'?",
            folder, repo
        ))
        .default(true)
        .interact()?;
    if !confirmed {
        println!("Upload cancelled.");
        pause();
        return Ok(());
    }

    match upload_folder(api, &PathBuf::from(&folder), &repo).await {
        Ok(outcomes) => {
            let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
            if failed == 0 {
                println!("{}", "File upload process completed.".green());
            } else {
                println!(
                    "{}",
                    format!("Upload completed with {} failed file(s).", failed).yellow()
                );
            }
        }
        Err(err) => println!("{}", format!("Error: {}", err).red()),
    }
    pause();
    Ok(())
}

fn status_label(state: CredentialState) -> ColoredString {
    match state {
        CredentialState::Valid => "(functional)".green(),
        CredentialState::Invalid => "(present but not functional)".red(),
        CredentialState::Absent => "(not set up)".yellow(),
    }
}

/// Clear the screen and print the centered banner plus the section title
fn draw_screen(title: &str) {
    let _ = execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0));

    let width = crossterm::terminal::size()
        .map(|(w, _)| w as usize)
        .unwrap_or(80);
    for line in BANNER.lines().filter(|l| !l.is_empty()) {
        let pad = width.saturating_sub(line.len()) / 2;
        println!("{}{}", " ".repeat(pad), line.cyan());
    }
    let pad = width.saturating_sub(SUBTITLE.len()) / 2;
    println!("{}{}\n", " ".repeat(pad), SUBTITLE.white().bold());

    println!("{}", format!("--- {} ---", title).yellow().bold());
    println!("{}", "Select an option:\n".white());
}

fn prompt_choice() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Enter option number")
        .interact_text()?;
    Ok(input)
}

/// Fire-and-forget launch in the platform default handler
fn open_link(url: &str) {
    println!("Opening {}...", url);
    let _ = open::that(url);
    thread::sleep(Duration::from_secs(1));
}

fn invalid_option() {
    println!("{}", "Invalid option. Please try again.".red());
    thread::sleep(Duration::from_secs(1));
}

fn pause() {
    thread::sleep(Duration::from_secs(2));
}

/// Quit terminates the process from any menu depth; parents never resume
fn quit() -> ! {
    println!("{}", "\nThanks for using hubkit. Goodbye.".yellow());
    thread::sleep(Duration::from_secs(1));
    std::process::exit(0);
}
