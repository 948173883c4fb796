//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `card_form`: The card configuration form

mod card_form;
mod field_renderer;

pub use card_form::draw_card_form;
