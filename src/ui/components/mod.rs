//! Reusable UI components

mod banner;

pub use banner::render_error_banner;
