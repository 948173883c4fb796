//! Inline error banner

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render an error message inside the form, below the fields
pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    if area.height == 0 {
        return;
    }

    let content = Paragraph::new(Line::from(vec![
        Span::styled(
            "✗ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(Color::Red)),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    let height = banner_height(message, area.width).min(area.height);
    frame.render_widget(content, Rect { height, ..area });
}

/// Rows needed to show `message` wrapped inside a bordered box
fn banner_height(message: &str, width: u16) -> u16 {
    // 2 for borders, 2 for the marker
    let text_width = width.saturating_sub(2).max(1) as usize;
    let chars = message.chars().count() + 2;
    let lines = chars.div_ceil(text_width).max(1) as u16;
    lines + 2
}
