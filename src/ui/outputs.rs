//! Preview status and copy rows

use crate::app::App;
use crate::card::OutputFormat;
use crate::state::{Focus, PreviewStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the preview line and, once available, the five copy rows
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let outputs_focused = matches!(app.state.form.focus, Focus::Output(_));
    let border_color = if outputs_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Embed ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Preview
            Constraint::Min(0),    // Copy rows
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_preview(frame, chunks[0], app);

    let Some(output) = app.state.visible_output() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // URL
            Constraint::Length(3), // Markdown
            Constraint::Length(5), // reStructuredText
            Constraint::Length(3), // AsciiDoc
            Constraint::Min(3),    // HTML
        ])
        .split(chunks[1]);

    for (idx, format) in OutputFormat::ALL.iter().enumerate() {
        let is_selected = app.state.form.selected_output() == Some(*format);
        draw_output_row(frame, rows[idx], format.label(), output.get(*format), is_selected);
    }
}

fn draw_preview(frame: &mut Frame, area: Rect, app: &App) {
    let (marker, color, label) = match app.state.preview_status() {
        None => ("○", Color::DarkGray, "Fill in username and repository"),
        Some(PreviewStatus::Loading) => ("◌", Color::Yellow, "Loading preview…"),
        Some(PreviewStatus::Loaded) => ("●", Color::Green, "Preview loaded"),
        Some(PreviewStatus::Failed) => ("✗", Color::Red, "Preview failed"),
        Some(PreviewStatus::Unverified) => ("●", Color::Blue, "Preview not verified"),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{marker} "), Style::default().fg(color)),
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])];
    if let Some(output) = app.state.preview_output() {
        lines.push(Line::from(vec![
            Span::styled("→ ", Style::default().fg(Color::DarkGray)),
            Span::styled(&output.target_url, Style::default().fg(Color::Blue)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_output_row(frame: &mut Frame, area: Rect, label: &str, value: &str, is_selected: bool) {
    let color = if is_selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let title = if is_selected {
        format!(" {label} [Enter: copy] ")
    } else {
        format!(" {label} ")
    };

    let lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(paragraph, area);
}
