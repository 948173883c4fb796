//! Card domain layer
//!
//! Pure functions turning form input into card URLs and embed snippets.
//! Nothing in here touches the terminal, the network, or the clipboard.

mod render;
mod types;
mod validate;

pub use render::{CardRenderer, GeneratedOutput, OutputFormat, DEFAULT_IMAGE_HOST};
pub use types::{CardType, FormInput, Requirement};
pub use validate::{validate, ValidationError};
