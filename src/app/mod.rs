//! App layer - central state management and command processing
//!
//! The App actor receives UI events and network responses,
//! updates state, and emits network commands and render state.

pub mod state;
pub mod actor;
pub mod commands;
pub mod form;
pub mod listing;

pub use state::{AppState, RefreshToken};
pub use actor::AppActor;
pub use form::ExpenseForm;
pub use listing::ExpenseList;
