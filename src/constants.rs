//! App-wide constants.
//!
//! Centralises the tool name, API endpoint details, config paths and
//! environment variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "usersort";

/// Crate version, embedded at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` sent with every request. GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("usersort/", env!("CARGO_PKG_VERSION"));

/// Local config filename (e.g. `.usersort.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".usersort.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "usersort";

// ── GitHub API ──────────────────────────────────────────────────────

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Resource path of the user listing.
pub const USERS_PATH: &str = "/users";

/// Content negotiation header value.
pub const ACCEPT: &str = "application/vnd.github+json";

/// Header pinning the response schema version.
pub const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";

/// Pinned REST API version.
pub const API_VERSION: &str = "2022-11-28";

/// Number of records requested per run.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Number of records shown per sorted view.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "USERSORT_BASE_URL";
pub const ENV_PER_PAGE: &str = "USERSORT_PER_PAGE";
pub const ENV_LIMIT: &str = "USERSORT_LIMIT";
pub const ENV_TIMEOUT_SECS: &str = "USERSORT_TIMEOUT_SECS";
pub const ENV_LOG: &str = "USERSORT_LOG";
