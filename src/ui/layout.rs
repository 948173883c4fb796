//! Layout components (form/output split, status bar)

use crate::app::App;
use crate::state::{FieldKind, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form (left) and the outputs (right)
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(42), // Form
            Constraint::Min(30),    // Outputs
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    let hints = get_focus_hints(&app.state.form.focus);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for whatever has focus
fn get_focus_hints(focus: &Focus) -> &'static str {
    match focus {
        Focus::Field(field) => match field.kind {
            FieldKind::Choice => "←/→ 1-5:type  Tab:next  Enter:generate",
            FieldKind::Text | FieldKind::Number => {
                "Tab:next  ⇧Tab:prev  ^U:clear  Enter:generate"
            }
        },
        Focus::Output(_) => "↑/↓:select  Enter/c:copy",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::OutputFormat;
    use crate::state::FormField;

    #[test]
    fn test_layout_splits_form_and_outputs() {
        let (form, outputs) = create_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(form.width, 42);
        assert_eq!(outputs.width, 78);
        assert_eq!(form.height, 39);
    }

    #[test]
    fn test_hints_follow_focus() {
        assert!(get_focus_hints(&Focus::Field(FormField::CARD_TYPE)).contains("type"));
        assert!(get_focus_hints(&Focus::Field(FormField::USER)).contains("clear"));
        assert!(get_focus_hints(&Focus::Output(OutputFormat::Html)).contains("copy"));
    }
}
