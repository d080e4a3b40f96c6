//! Application state - the coordinator owning form, listing and refresh token

use crate::app::form::ExpenseForm;
use crate::app::listing::ExpenseList;
use crate::messages::ui_events::{Focus, InputMode};
use crate::messages::RenderState;

/// Identity of the current listing instance.
///
/// Starts at 0 and only ever moves forward by one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshToken(u64);

impl RefreshToken {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn bump(&mut self) {
        self.0 += 1;
    }
}

/// Main application state
pub struct AppState {
    pub form: ExpenseForm,
    pub listing: ExpenseList,
    pub(crate) refresh: RefreshToken,

    // UI state
    pub focus: Focus,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub show_help: bool,

    next_request_id: u64,
    backend_url: String,
}

impl AppState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let refresh = RefreshToken::default();
        AppState {
            form: ExpenseForm::new(),
            listing: ExpenseList::new(refresh),
            refresh,
            focus: Focus::Title,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            show_help: false,
            next_request_id: 1,
            backend_url: backend_url.into(),
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn refresh_token(&self) -> RefreshToken {
        self.refresh
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.focus {
            Focus::Title => &self.form.draft.title,
            Focus::Amount => &self.form.draft.amount,
            _ => "",
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Title => Some(&mut self.form.draft.title),
            Focus::Amount => Some(&mut self.form.draft.amount),
            _ => None,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            title: self.form.draft.title.clone(),
            amount: self.form.draft.amount.clone(),
            category: self.form.draft.category,
            submitting: self.form.is_busy(),
            focus: self.focus,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            list: self.listing.view(),
            list_scroll: self.listing.scroll,
            refresh_key: self.refresh.value(),
            last_loaded: self.listing.last_loaded(),
            alert: self.form.alert().map(str::to_string),
            show_help: self.show_help,
            backend_url: self.backend_url.clone(),
        }
    }
}
