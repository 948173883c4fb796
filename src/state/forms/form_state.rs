//! Focus handling for the card form

use super::field::FormField;
use crate::card::{FormInput, OutputFormat, Requirement};

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    Output(OutputFormat),
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FormField::CARD_TYPE)
    }
}

/// Fields shown for the current card type, top to bottom
pub fn visible_fields(input: &FormInput) -> Vec<FormField> {
    let mut fields = vec![FormField::CARD_TYPE, FormField::USER, FormField::REPO];
    match input.card_type.requirement() {
        Requirement::None => {}
        Requirement::Number => fields.push(FormField::NUMBER),
        Requirement::Tag => fields.push(FormField::TAG),
    }
    fields
}

/// Focus state of the card form
#[derive(Debug, Clone, Default)]
pub struct CardForm {
    pub focus: Focus,
}

impl CardForm {
    /// Every focus stop in order: visible fields, then the copy rows when shown
    pub fn focus_ring(input: &FormInput, outputs_visible: bool) -> Vec<Focus> {
        let mut ring: Vec<Focus> = visible_fields(input).into_iter().map(Focus::Field).collect();
        if outputs_visible {
            ring.extend(OutputFormat::ALL.into_iter().map(Focus::Output));
        }
        ring
    }

    pub fn next_field(&mut self, input: &FormInput, outputs_visible: bool) {
        let ring = Self::focus_ring(input, outputs_visible);
        self.focus = match ring.iter().position(|f| *f == self.focus) {
            Some(i) => ring[(i + 1) % ring.len()],
            None => ring[0],
        };
    }

    pub fn prev_field(&mut self, input: &FormInput, outputs_visible: bool) {
        let ring = Self::focus_ring(input, outputs_visible);
        self.focus = match ring.iter().position(|f| *f == self.focus) {
            Some(0) => ring[ring.len() - 1],
            Some(i) => ring[i - 1],
            None => ring[0],
        };
    }

    /// Move focus back to a valid stop after the ring shrank
    pub fn settle(&mut self, input: &FormInput, outputs_visible: bool) {
        let ring = Self::focus_ring(input, outputs_visible);
        if !ring.contains(&self.focus) {
            self.focus = match self.focus {
                Focus::Output(_) => ring[ring.len() - 1],
                Focus::Field(_) => ring[0],
            };
        }
    }

    pub fn active_field(&self) -> Option<FormField> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::Output(_) => None,
        }
    }

    pub fn selected_output(&self) -> Option<OutputFormat> {
        match self.focus {
            Focus::Output(format) => Some(format),
            Focus::Field(_) => None,
        }
    }
}
