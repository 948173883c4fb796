//! Application state definitions

use super::forms::{reduce, CardForm, FormEdit};
use crate::card::{validate, CardRenderer, FormInput, GeneratedOutput, ValidationError};

/// Shown when the image service could not produce a card for a valid form
pub const IMAGE_LOAD_ERROR: &str =
    "Failed to load image. Check that the user, repository, and number or tag exist.";

/// Verification state of the generated preview image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewStatus {
    /// Verification is turned off; outputs are shown as soon as they exist
    Unverified,
    Loading,
    Loaded,
    Failed,
}

/// Result of the latest regeneration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// User or repository still empty
    #[default]
    Idle,
    Invalid(ValidationError),
    Generated {
        output: GeneratedOutput,
        preview: PreviewStatus,
    },
}

/// Ask the app to verify an image URL for a given generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub generation: u64,
    pub url: String,
}

/// The single state record of the configurator
#[derive(Debug, Clone)]
pub struct AppState {
    pub input: FormInput,
    pub form: CardForm,
    pub outcome: Outcome,
    /// Bumped on every regeneration so late preview results can be told apart
    pub generation: u64,
    pub verify_images: bool,
    renderer: CardRenderer,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FormInput::default(), CardRenderer::default(), true)
    }
}

impl AppState {
    pub fn new(input: FormInput, renderer: CardRenderer, verify_images: bool) -> Self {
        Self {
            input,
            form: CardForm::default(),
            outcome: Outcome::Idle,
            generation: 0,
            verify_images,
            renderer,
        }
    }

    /// Apply one form edit. Regenerates when the input changed and both user
    /// and repository are filled in; otherwise the outcome goes back to idle.
    pub fn apply_edit(&mut self, edit: FormEdit) -> Option<ProbeRequest> {
        let next = reduce(self.input.clone(), edit);
        if next == self.input {
            return None;
        }
        self.input = next;

        let request = if self.input.has_identity() {
            self.regenerate()
        } else {
            self.generation += 1;
            self.outcome = Outcome::Idle;
            None
        };
        self.settle_focus();
        request
    }

    /// Validate and rebuild every output from the current input
    pub fn regenerate(&mut self) -> Option<ProbeRequest> {
        self.generation += 1;

        let request = match validate(&self.input) {
            Err(err) => {
                self.outcome = Outcome::Invalid(err);
                None
            }
            Ok(validated) => {
                let output = self.renderer.build_urls(&validated);
                let (preview, request) = if self.verify_images {
                    let request = ProbeRequest {
                        generation: self.generation,
                        url: output.image_url.clone(),
                    };
                    (PreviewStatus::Loading, Some(request))
                } else {
                    (PreviewStatus::Unverified, None)
                };
                self.outcome = Outcome::Generated { output, preview };
                request
            }
        };
        self.settle_focus();
        request
    }

    /// Record the result of an image probe. Results for an older generation
    /// are dropped; returns whether the result was applied.
    pub fn apply_preview(&mut self, generation: u64, loaded: bool) -> bool {
        if generation != self.generation {
            return false;
        }
        let applied = match &mut self.outcome {
            Outcome::Generated { preview, .. } if *preview == PreviewStatus::Loading => {
                *preview = if loaded {
                    PreviewStatus::Loaded
                } else {
                    PreviewStatus::Failed
                };
                true
            }
            _ => false,
        };
        self.settle_focus();
        applied
    }

    /// Error banner text, if any
    pub fn error_message(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Invalid(err) => Some(err.to_string()),
            Outcome::Generated {
                preview: PreviewStatus::Failed,
                ..
            } => Some(IMAGE_LOAD_ERROR.to_string()),
            _ => None,
        }
    }

    /// Outputs ready to show and copy. Never `Some` while an error is set.
    pub fn visible_output(&self) -> Option<&GeneratedOutput> {
        match &self.outcome {
            Outcome::Generated {
                output,
                preview: PreviewStatus::Loaded | PreviewStatus::Unverified,
            } => Some(output),
            _ => None,
        }
    }

    pub fn preview_status(&self) -> Option<PreviewStatus> {
        match &self.outcome {
            Outcome::Generated { preview, .. } => Some(*preview),
            _ => None,
        }
    }

    /// Latest generated card, whether or not its image has loaded
    pub fn preview_output(&self) -> Option<&GeneratedOutput> {
        match &self.outcome {
            Outcome::Generated { output, .. } => Some(output),
            _ => None,
        }
    }

    pub fn next_field(&mut self) {
        let visible = self.visible_output().is_some();
        self.form.next_field(&self.input, visible);
    }

    pub fn prev_field(&mut self) {
        let visible = self.visible_output().is_some();
        self.form.prev_field(&self.input, visible);
    }

    fn settle_focus(&mut self) {
        let visible = self.visible_output().is_some();
        self.form.settle(&self.input, visible);
    }
}
