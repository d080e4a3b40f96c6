//! Expense TUI - Actor-based expense tracker front-end
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use expense_tui::constants::{
    AMOUNT_PLACEHOLDER, APP_NAME, APP_VERSION, EMPTY_MESSAGE, FOOTER, LOADING_MESSAGE, LOG_FILE_NAME,
    TAGLINE, TITLE_PLACEHOLDER,
};
use expense_tui::messages::ui_events::{key_to_ui_event, Focus, InputMode};
use expense_tui::ui::{border_style, category_label_color, render_category_tabs, render_input};
use expense_tui::{
    AppActor, AppState, Args, BackendConfig, ExpensesApi, ListView, NetworkActor, NetworkCommand,
    NetworkResponse, RenderState, UiEvent,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env next to the binary may carry the backend URL
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    // Initialize logging to file; the terminal belongs to the UI
    let log_dir = args.resolved_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let backend = BackendConfig::from(&args);
    tracing::info!(backend = backend.base_url(), "Starting {} {}", APP_NAME, APP_VERSION);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(ExpensesApi::new(backend.clone()), net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(AppState::new(backend.base_url()), net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Shutting down");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.focus,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.alert.is_some(),
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Banner
            Constraint::Length(11), // Quick add form
            Constraint::Min(5),     // Recent expenses
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_banner(f, state, chunks[0]);
    draw_form(f, state, chunks[1]);
    draw_list(f, state, chunks[2]);
    draw_status_bar(f, state, chunks[3]);

    // Popups
    if state.show_help {
        draw_help_popup(f, area);
    }

    if let Some(message) = &state.alert {
        draw_alert_popup(f, message, area);
    }
}

fn draw_banner(f: &mut Frame, state: &RenderState, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(" ● ", Style::default().fg(Color::Green)),
            Span::styled(APP_NAME, Style::default().fg(Color::White).bold()),
            Span::styled(format!("  {}", state.backend_url), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(format!("   {}", TAGLINE), Style::default().fg(Color::Gray))),
    ];

    let banner = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(banner, area);
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Quick Add ")
        .title_style(Style::default().bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + Amount
            Constraint::Length(3), // Category
            Constraint::Length(3), // Submit
        ])
        .split(inner);

    let inputs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);

    let editing = state.input_mode == InputMode::Editing;

    let title_focused = state.focus == Focus::Title;
    f.render_widget(
        render_input(&state.title, TITLE_PLACEHOLDER, " Title ", title_focused, editing && title_focused),
        inputs[0],
    );

    let amount_focused = state.focus == Focus::Amount;
    f.render_widget(
        render_input(&state.amount, AMOUNT_PLACEHOLDER, " Amount ", amount_focused, editing && amount_focused),
        inputs[1],
    );

    f.render_widget(render_category_tabs(state.category, state.focus == Focus::Category), rows[1]);

    draw_submit_button(f, state, rows[2]);

    // Cursor
    if editing && (title_focused || amount_focused) {
        let (text, field) = if title_focused {
            (&state.title, inputs[0])
        } else {
            (&state.amount, inputs[1])
        };
        let column = text
            .get(..state.cursor_position)
            .map(|s| s.chars().count())
            .unwrap_or(0) as u16;
        let max_x = field.x + field.width.saturating_sub(2);
        let cursor_x = (field.x + column + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, field.y + 1));
    }
}

fn draw_submit_button(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Focus::Submit;
    let style = if !state.submit_enabled() {
        Style::default().fg(Color::DarkGray)
    } else if is_focused {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Cyan).bold()
    };

    let button = Paragraph::new(Line::from(Span::styled(format!(" {} ", state.submit_label()), style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(is_focused, false)),
        );
    f.render_widget(button, area);
}

fn draw_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Focus::List;
    let loaded = state
        .last_loaded
        .map(|t| format!(" updated {} ", t.format("%H:%M:%S")))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused, false))
        .title(" Recent Expenses (r=refresh) ")
        .title_bottom(Line::from(loaded).right_aligned());

    let placeholder = |text: &'static str| {
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))))
            .alignment(Alignment::Center)
    };

    let content = match &state.list {
        ListView::Loading => placeholder(LOADING_MESSAGE),
        ListView::Empty => placeholder(EMPTY_MESSAGE),
        ListView::Items(items) => {
            let lines: Vec<Line> = items
                .iter()
                .map(|item| {
                    let category = item.category_text();
                    Line::from(vec![
                        Span::styled(item.title_text(), Style::default().bold()),
                        Span::raw(" / "),
                        Span::styled(category.clone(), Style::default().fg(category_label_color(&category))),
                        Span::raw(" / "),
                        Span::styled(item.amount_text(), Style::default().fg(Color::Yellow).bold()),
                    ])
                })
                .collect();
            Paragraph::new(lines).scroll((state.list_scroll, 0))
        }
    };

    f.render_widget(content.block(block), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let mode = match state.input_mode {
        InputMode::Normal => Span::styled(" NORMAL ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        InputMode::Editing => Span::styled(" EDIT ", Style::default().fg(Color::Black).bg(Color::Yellow)),
    };
    let hints = match state.input_mode {
        InputMode::Normal => " Tab: next field | e: edit | s: add | r: refresh | ?: help | q: quit",
        InputMode::Editing => " Esc: stop editing | Enter: add expense | Tab: next field",
    };

    let line = Line::from(vec![
        mode,
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::styled(format!("  {}", FOOTER), Style::default().fg(Color::DarkGray).italic()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 EXPENSE TUI - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Next / previous field
   ↑ / ↓              Scroll the list (list focused)

 FORM
   e / Enter          Edit title or amount
   Esc                Stop editing
   ← / →              Change category
   s                  Add expense
   Enter (editing)    Add expense

 LIST
   r                  Refresh recent expenses

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_alert_popup(f: &mut Frame, message: &str, area: Rect) {
    let popup_area = centered_rect(40, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Error ")
        .style(Style::default().bg(Color::Black));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White).bold())),
        Line::from(""),
        Line::from(Span::styled("Press Enter to continue", Style::default().fg(Color::DarkGray))),
    ];

    let alert = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(alert, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
