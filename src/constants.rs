//! Central constants for the hubkit application

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("hubkit/", env!("CARGO_PKG_VERSION"));

    /// Commit message attached to every file the uploader creates or updates
    pub const COMMIT_MESSAGE: &str = "Committed from hubkit, github.com/hubkit-cli/hubkit";
}

/// Default values for credential storage
pub mod store {
    /// Directory under the platform config dir holding the token blob
    pub const TOKEN_DIR: &str = "hubkit";

    /// File name of the single-slot token blob
    pub const TOKEN_FILE: &str = "token.json";
}

/// Fixed URLs behind the contacts menu
pub mod links {
    /// Project repository
    pub const REPOSITORY: &str = "https://github.com/hubkit-cli/hubkit";

    /// Issue tracker
    pub const ISSUES: &str = "https://github.com/hubkit-cli/hubkit/issues";

    /// Discussions board
    pub const DISCUSSIONS: &str = "https://github.com/hubkit-cli/hubkit/discussions";
}
