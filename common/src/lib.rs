//! Process environment setup shared by the workspace binaries.

use env_logger::{Builder, Env};

/// Loads environment variables from a `.env` file if present and
/// initializes the logger with a default filter level of "info".
pub fn setup_env() {
    dotenvy::dotenv().ok();
    Builder::from_env(Env::default().default_filter_or("info")).init();
}
