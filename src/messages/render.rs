//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Local};

use crate::messages::ui_events::{Focus, InputMode};
use crate::models::{Category, Expense};

/// What the expense list panel shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListView {
    #[default]
    Loading,
    Empty,
    Items(Vec<Expense>),
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Form
    pub title: String,
    pub amount: String,
    pub category: Category,
    pub submitting: bool,

    // UI state
    pub focus: Focus,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // List
    pub list: ListView,
    pub list_scroll: u16,
    pub refresh_key: u64,
    pub last_loaded: Option<DateTime<Local>>,

    // Popups
    pub alert: Option<String>,
    pub show_help: bool,

    pub backend_url: String,
}

impl RenderState {
    /// The submit control accepts presses only when idle
    pub fn submit_enabled(&self) -> bool {
        !self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        use crate::constants::{SUBMIT_BUSY_LABEL, SUBMIT_LABEL};
        if self.submitting {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Rows as displayed in the list panel; empty unless items are shown
    pub fn rows(&self) -> Vec<String> {
        match &self.list {
            ListView::Items(items) => items.iter().map(Expense::row_text).collect(),
            _ => Vec::new(),
        }
    }
}
