//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Focus navigation
    NextField,
    PrevField,
    ScrollUp,
    ScrollDown,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Category selector
    NextCategory,
    PrevCategory,

    // Exchange actions
    Submit,
    Refresh,

    // Popups
    DismissAlert,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focused element on screen (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Focus {
    #[default]
    Title,
    Amount,
    Category,
    Submit,
    List,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Title => Focus::Amount,
            Focus::Amount => Focus::Category,
            Focus::Category => Focus::Submit,
            Focus::Submit => Focus::List,
            Focus::List => Focus::Title,
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::Title => Focus::List,
            Focus::Amount => Focus::Title,
            Focus::Category => Focus::Amount,
            Focus::Submit => Focus::Category,
            Focus::List => Focus::Submit,
        }
    }

    /// Whether this element holds editable text
    pub fn is_text(&self) -> bool {
        matches!(self, Focus::Title | Focus::Amount)
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    focus: Focus,
    input_mode: InputMode,
    show_help: bool,
    alert_open: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // The alert is blocking: nothing else gets through until it is dismissed
    if alert_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(UiEvent::DismissAlert),
            _ => None,
        };
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => handle_normal_keys(key, focus),
        InputMode::Editing => handle_editing_keys(key),
    }
}

fn handle_normal_keys(key: KeyEvent, focus: Focus) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::BackTab => Some(UiEvent::PrevField),
        KeyCode::Char('s') => Some(UiEvent::Submit),
        KeyCode::Char('r') => Some(UiEvent::Refresh),
        KeyCode::Char('e') | KeyCode::Enter => match focus {
            Focus::Title | Focus::Amount => Some(UiEvent::StartEditing),
            Focus::Category => Some(UiEvent::NextCategory),
            Focus::Submit => Some(UiEvent::Submit),
            Focus::List => Some(UiEvent::Refresh),
        },
        KeyCode::Left if focus == Focus::Category => Some(UiEvent::PrevCategory),
        KeyCode::Right if focus == Focus::Category => Some(UiEvent::NextCategory),
        KeyCode::Up if focus == Focus::List => Some(UiEvent::ScrollUp),
        KeyCode::Down if focus == Focus::List => Some(UiEvent::ScrollDown),
        _ => None,
    }
}

fn handle_editing_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Enter => Some(UiEvent::Submit),
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::BackTab => Some(UiEvent::PrevField),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}
