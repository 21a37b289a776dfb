//! Project-wide constants.

use std::path::PathBuf;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Artificial pause before suggestions are generated.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 1200;

/// Shown when a search is attempted with nothing in the pantry.
pub const EMPTY_PANTRY_MESSAGE: &str = "Please add at least one ingredient";

/// `~/.pantrypal`, or the current directory if there is no home.
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pantrypal")
}

/// Default database path: `~/.pantrypal/pantrypal.db`.
/// Single DB for saved recipes and settings.
pub fn default_db_path() -> PathBuf {
    data_dir().join("pantrypal.db")
}

/// Directory for log files: `~/.pantrypal/logs`.
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// `1 recipe`, `2 recipes`.
pub fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
