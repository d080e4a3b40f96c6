//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Backend used when neither `--backend-url` nor the environment sets one
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable holding the backend base URL
pub const BACKEND_URL_ENV: &str = "EXPENSES_BACKEND_URL";

/// Path of the expenses resource, relative to the backend base URL
pub const EXPENSES_PATH: &str = "/api/expenses";

/// Number of recent expenses requested per load
pub const LIST_LIMIT: usize = 20;

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "expense-tui.log";

/// Application name
pub const APP_NAME: &str = "Smart Expense Tracker";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// UI copy

pub const TAGLINE: &str = "Minimal, modern spending made effortless";
pub const FOOTER: &str = "Built for clarity and control";
pub const TITLE_PLACEHOLDER: &str = "What did you buy?";
pub const AMOUNT_PLACEHOLDER: &str = "Amount";
pub const SUBMIT_LABEL: &str = "Add expense";
pub const SUBMIT_BUSY_LABEL: &str = "Adding...";
pub const SUBMIT_FAILED_ALERT: &str = "Could not add expense";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No expenses yet. Add your first one above.";
