//! Recent expenses list - one instance per refresh token

use chrono::{DateTime, Local};

use crate::app::state::RefreshToken;
use crate::constants::LIST_LIMIT;
use crate::error::FetchError;
use crate::messages::{ListView, NetworkCommand};
use crate::models::Expense;

/// Listing side of the exchange.
///
/// Every instance is bound to the refresh token it was built for. The
/// coordinator replaces the whole instance on a bump, so nothing held here
/// survives a token change.
#[derive(Debug)]
pub struct ExpenseList {
    key: RefreshToken,
    items: Vec<Expense>,
    loading: bool,
    pending_request_id: Option<u64>,
    fetches_issued: usize,
    last_loaded: Option<DateTime<Local>>,
    pub scroll: u16,
}

impl ExpenseList {
    /// Fresh instance; it shows the loading state until its first load resolves
    pub fn new(key: RefreshToken) -> Self {
        ExpenseList {
            key,
            items: Vec::new(),
            loading: true,
            pending_request_id: None,
            fetches_issued: 0,
            last_loaded: None,
            scroll: 0,
        }
    }

    pub fn key(&self) -> RefreshToken {
        self.key
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn items(&self) -> &[Expense] {
        &self.items
    }

    pub fn owns(&self, request_id: u64) -> bool {
        self.pending_request_id == Some(request_id)
    }

    /// Number of `GET`s this instance has issued
    pub fn fetches_issued(&self) -> usize {
        self.fetches_issued
    }

    pub fn last_loaded(&self) -> Option<DateTime<Local>> {
        self.last_loaded
    }

    /// Issue a load under `request_id`; ignored while one is already in flight
    pub fn load(&mut self, request_id: u64) -> Option<NetworkCommand> {
        if self.pending_request_id.is_some() {
            tracing::debug!(key = self.key.value(), "Load already in flight");
            return None;
        }
        self.loading = true;
        self.pending_request_id = Some(request_id);
        self.fetches_issued += 1;
        Some(NetworkCommand::FetchExpenses {
            id: request_id,
            limit: LIST_LIMIT,
        })
    }

    /// Apply a load result. Returns `false` if it belongs to another request.
    pub fn handle_response(&mut self, request_id: u64, result: Result<Vec<Expense>, FetchError>) -> bool {
        if !self.owns(request_id) {
            return false;
        }
        self.pending_request_id = None;
        self.loading = false;

        match result {
            Ok(items) => {
                self.items = items;
                self.last_loaded = Some(Local::now());
                self.scroll = 0;
            }
            // Not surfaced; the previous items simply show again
            Err(e) => tracing::warn!(key = self.key.value(), error = %e, "Keeping last known expenses"),
        }
        true
    }

    pub fn view(&self) -> ListView {
        if self.loading {
            ListView::Loading
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Items(self.items.clone())
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = self.items.len().saturating_sub(1) as u16;
        if self.scroll < max {
            self.scroll += 1;
        }
    }
}
