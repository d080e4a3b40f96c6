//! # Expense TUI
//!
//! A terminal front-end for a personal expense tracker backend.
//!
//! ## Features
//! - Quick-add form (title, amount, category)
//! - Recent expenses list (`GET /api/expenses?limit=20`)
//! - Automatic list reload after every successful add
//! - Manual refresh
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine: form, listing, refresh token)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::{Args, BackendConfig};
pub use error::{FetchError, SubmissionError};
pub use models::{Category, DraftExpense, Expense, NewExpense};
pub use messages::{ListView, NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use app::{AppActor, AppState, RefreshToken};
pub use network::{ExpensesApi, NetworkActor};
