//! Command handlers - business logic for processing UI events and responses

use crate::app::listing::ExpenseList;
use crate::app::AppState;
use crate::messages::ui_events::{Focus, InputMode};
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_field(&mut self) {
        self.stop_editing();
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.stop_editing();
        self.focus = self.focus.prev();
    }

    pub fn scroll_up(&mut self) {
        self.listing.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.listing.scroll_down();
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.focus.is_text() {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.current_input().len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        // Amount only takes what can appear in a decimal literal
        if self.focus == Focus::Amount && !matches!(c, '0'..='9' | '.' | '-' | '+' | 'e' | 'E') {
            return;
        }
        let pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            let pos = pos.min(input.len());
            input.insert(pos, c);
            self.cursor_position = pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            let pos = pos.min(input.len());
            let prev = input[..pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.replace_range(prev..pos, "");
            self.cursor_position = prev;
        }
    }

    pub fn next_category(&mut self) {
        self.form.draft.category = self.form.draft.category.next();
    }

    pub fn prev_category(&mut self) {
        self.form.draft.category = self.form.draft.category.prev();
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    pub fn dismiss_alert(&mut self) {
        self.form.dismiss_alert();
    }

    // ========================
    // Expense exchange
    // ========================

    /// Initial load of the current listing instance
    pub fn mount(&mut self) -> Option<NetworkCommand> {
        let id = self.next_id();
        self.listing.load(id)
    }

    pub fn submit(&mut self) -> Option<NetworkCommand> {
        let id = self.next_id();
        let cmd = self.form.submit(id);
        if cmd.is_none() {
            tracing::debug!("Nothing submitted");
        }
        cmd
    }

    /// User-triggered reload of the current listing
    pub fn refresh(&mut self) -> Option<NetworkCommand> {
        let id = self.next_id();
        self.listing.load(id)
    }

    /// Advance the refresh token and swap in a new listing for it.
    ///
    /// The old instance is dropped with whatever it held; its in-flight load,
    /// if any, will be discarded on arrival.
    pub fn bump(&mut self) -> Option<NetworkCommand> {
        self.refresh.bump();
        tracing::info!(token = self.refresh.value(), "Recreating expense list");
        self.listing = ExpenseList::new(self.refresh);
        self.mount()
    }

    /// Route a network response to its owner. May return a follow-up command.
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        let id = response.id();
        match response {
            NetworkResponse::Created { result, .. } if self.form.owns(id) => {
                if self.form.handle_response(result) {
                    self.cursor_position = self.cursor_position.min(self.current_input().len());
                    return self.bump();
                }
                None
            }
            NetworkResponse::Loaded { result, .. } if self.listing.owns(id) => {
                self.listing.handle_response(id, result);
                None
            }
            other => {
                tracing::debug!(id, ok = other.is_ok(), "Discarding stale response");
                None
            }
        }
    }
}
