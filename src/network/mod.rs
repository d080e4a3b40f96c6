//! Network layer - HTTP calls against the expenses backend
//!
//! The Network actor receives commands and sends back tagged responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::ExpensesApi;
