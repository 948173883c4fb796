//! Form domain layer
//!
//! Field descriptors, reducer edits over `FormInput`, and focus handling.

mod edit;
mod field;
mod form_state;

pub use edit::{reduce, FormEdit};
pub use field::{FieldId, FieldKind, FormField};
pub use form_state::{visible_fields, CardForm, Focus};
