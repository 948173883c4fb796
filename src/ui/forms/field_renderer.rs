//! Field rendering utilities for forms

use crate::card::FormInput;
use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    input: &FormInput,
    is_active: bool,
) {
    let color = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let display_value = field.display_value(input);
    let value_span = if display_value.is_empty() {
        // Placeholder stays dim even when focused
        Span::styled(field.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(display_value, Style::default().fg(color))
    };

    let cursor = if is_active && field.kind != FieldKind::Choice {
        "▌"
    } else {
        ""
    };

    let content = Paragraph::new(Line::from(vec![
        value_span,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(content.block(block), area);
}
