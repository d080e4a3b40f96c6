//! Command-line and environment configuration

use std::path::PathBuf;

use clap::Parser;

use crate::constants::{BACKEND_URL_ENV, DEFAULT_BACKEND_URL, EXPENSES_PATH};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "expense-tui",
    version,
    about = "A terminal front-end for a personal expense tracker",
    long_about = None
)]
pub struct Args {
    /// Base URL of the expenses backend.
    #[arg(long, value_name = "URL", env = BACKEND_URL_ENV, default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Directory for the log file.
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Explicit `--log-dir`, else `<cache dir>/expense-tui`, else the working directory
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .map(|dir| dir.join("expense-tui"))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }
}

/// Backend location shared by the network layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        BackendConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/expenses`
    pub fn expenses_url(&self) -> String {
        format!("{}{}", self.base_url, EXPENSES_PATH)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig::new(DEFAULT_BACKEND_URL)
    }
}

impl From<&Args> for BackendConfig {
    fn from(args: &Args) -> Self {
        BackendConfig::new(args.backend_url.as_str())
    }
}
