//! Form field value objects

use crate::card::FormInput;

/// Identifies one input of the card form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    CardType,
    User,
    Repo,
    Number,
    Tag,
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Cycled with Left/Right, no free text
    Choice,
    Text,
    /// Digits only
    Number,
}

/// Represents a single form field with its configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

impl FormField {
    pub const CARD_TYPE: FormField = FormField {
        id: FieldId::CardType,
        label: "Card Type",
        kind: FieldKind::Choice,
        placeholder: "",
    };

    pub const USER: FormField = FormField {
        id: FieldId::User,
        label: "Username",
        kind: FieldKind::Text,
        placeholder: "octocat",
    };

    pub const REPO: FormField = FormField {
        id: FieldId::Repo,
        label: "Repository",
        kind: FieldKind::Text,
        placeholder: "Hello-World",
    };

    pub const NUMBER: FormField = FormField {
        id: FieldId::Number,
        label: "Number",
        kind: FieldKind::Number,
        placeholder: "1",
    };

    pub const TAG: FormField = FormField {
        id: FieldId::Tag,
        label: "Tag",
        kind: FieldKind::Text,
        placeholder: "v1.0.0",
    };

    /// Whether typing `c` into this field changes it
    pub fn accepts(&self, c: char) -> bool {
        match self.kind {
            FieldKind::Choice => false,
            FieldKind::Text => !c.is_control(),
            FieldKind::Number => c.is_ascii_digit(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, input: &FormInput) -> String {
        match self.id {
            FieldId::CardType => format!("◀ {} ▶", input.card_type.label()),
            FieldId::User => input.user.clone(),
            FieldId::Repo => input.repo.clone(),
            FieldId::Number => input.num.map(|n| n.to_string()).unwrap_or_default(),
            FieldId::Tag => input.tag.clone().unwrap_or_default(),
        }
    }
}
