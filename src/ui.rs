use ratatui::{prelude::*, widgets::*};

use crate::models::Category;

/// Border style for a form element
pub fn border_style(is_focused: bool, is_editing: bool) -> Style {
    if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Renders a text input field, showing the placeholder dimmed when empty
pub fn render_input<'a>(
    content: &'a str,
    placeholder: &'a str,
    title: &'a str,
    is_focused: bool,
    is_editing: bool,
) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused, is_editing))
        .title(title);

    let text = if content.is_empty() && !is_editing {
        Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(content)
    };

    Paragraph::new(text).block(block)
}

/// Renders the category selector
pub fn render_category_tabs<'a>(selected: Category, is_focused: bool) -> Tabs<'a> {
    let titles: Vec<Line> = Category::ALL
        .iter()
        .map(|c| Line::from(c.as_str()))
        .collect();

    Tabs::new(titles)
        .select(selected.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(category_color(selected)).bold())
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(is_focused, false))
                .title(" Category (←/→) "),
        )
}

/// Category color
pub fn category_color(category: Category) -> Color {
    match category {
        Category::General => Color::White,
        Category::Food => Color::Green,
        Category::Transport => Color::Blue,
        Category::Shopping => Color::Magenta,
        Category::Bills => Color::Red,
    }
}

/// Color for a category label coming back from the backend
pub fn category_label_color(label: &str) -> Color {
    Category::ALL
        .iter()
        .find(|c| c.as_str() == label)
        .map(|c| category_color(*c))
        .unwrap_or(Color::Gray)
}
