//! Card configuration form

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{visible_fields, Focus};
use crate::ui::components::render_error_banner;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of one bordered input
const FIELD_HEIGHT: u16 = 3;

/// Draw the form fields and the error banner below them
pub fn draw_card_form(frame: &mut Frame, area: Rect, app: &App) {
    let form_focused = matches!(app.state.form.focus, Focus::Field(_));
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" GitHub Card ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = visible_fields(&app.state.input);
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1)); // Spacer
    constraints.push(Constraint::Min(0)); // Error banner

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (idx, field) in fields.iter().enumerate() {
        let is_active = app.state.form.active_field() == Some(*field);
        draw_field(frame, chunks[idx], field, &app.state.input, is_active);
    }

    if let Some(message) = app.state.error_message() {
        render_error_banner(frame, chunks[fields.len() + 1], &message);
    }
}
