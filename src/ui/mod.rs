//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod outputs;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, output_area) = layout::create_layout(frame.area());

    forms::draw_card_form(frame, form_area, app);
    outputs::draw(frame, output_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
