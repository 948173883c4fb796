//! Application state and core logic

use crate::card::{CardType, FormInput, OutputFormat};
use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::config::CardConfig;
use crate::preview::{spawn_probe, HttpImageProbe, ImageProbe, PreviewEvent};
use crate::state::{AppState, FieldKind, Focus, FormEdit, FormField, ProbeRequest};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub config: CardConfig,
    clipboard: Box<dyn ClipboardWriter>,
    probe: Arc<dyn ImageProbe>,
    preview_tx: UnboundedSender<PreviewEvent>,
    preview_rx: UnboundedReceiver<PreviewEvent>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance backed by the system clipboard and HTTP probe
    pub fn new(config: CardConfig) -> Result<Self> {
        let probe = HttpImageProbe::new(config.probe_timeout())?;
        Ok(Self::with_parts(
            config,
            Box::new(SystemClipboard),
            Arc::new(probe),
        ))
    }

    pub fn with_parts(
        config: CardConfig,
        clipboard: Box<dyn ClipboardWriter>,
        probe: Arc<dyn ImageProbe>,
    ) -> Self {
        let state = AppState::new(
            FormInput::with_card_type(config.card_type()),
            config.renderer(),
            config.verify_images(),
        );
        let (preview_tx, preview_rx) = unbounded_channel();

        Self {
            state,
            config,
            clipboard,
            probe,
            preview_tx,
            preview_rx,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.copy_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.next_field();
                return Ok(());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.prev_field();
                return Ok(());
            }
            _ => {}
        }

        match self.state.form.focus {
            Focus::Field(field) => self.handle_field_key(field, key),
            Focus::Output(format) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('c')) {
                    self.copy_output(format);
                }
            }
        }
        Ok(())
    }

    fn handle_field_key(&mut self, field: FormField, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if field.kind == FieldKind::Choice {
            match key.code {
                KeyCode::Left => self.dispatch(FormEdit::PrevCardType),
                KeyCode::Right | KeyCode::Char(' ') => self.dispatch(FormEdit::NextCardType),
                KeyCode::Char(c) => {
                    // 1-5 jump straight to a card type
                    let picked = c
                        .to_digit(10)
                        .and_then(|d| (d as usize).checked_sub(1))
                        .and_then(|i| CardType::ALL.get(i));
                    if let Some(card_type) = picked {
                        self.dispatch(FormEdit::SetCardType(*card_type));
                    }
                }
                KeyCode::Enter => self.regenerate(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('u') if ctrl => self.dispatch(FormEdit::Clear(field.id)),
            KeyCode::Char(c) if !ctrl && field.accepts(c) => {
                self.dispatch(FormEdit::PushChar(field.id, c))
            }
            KeyCode::Backspace => self.dispatch(FormEdit::PopChar(field.id)),
            KeyCode::Enter => self.regenerate(),
            _ => {}
        }
    }

    /// Apply one form edit and start verification if it produced a new card
    pub fn dispatch(&mut self, edit: FormEdit) {
        let request = self.state.apply_edit(edit);
        self.after_regeneration(request);
    }

    /// Force regeneration from the current input
    pub fn regenerate(&mut self) {
        let request = self.state.regenerate();
        self.after_regeneration(request);
    }

    fn after_regeneration(&mut self, request: Option<ProbeRequest>) {
        debug!(generation = self.state.generation, outcome = ?self.state.outcome, "regenerated");
        if let Some(request) = request {
            spawn_probe(self.probe.clone(), request, self.preview_tx.clone());
        }
    }

    /// Apply every finished probe result
    pub fn drain_preview_events(&mut self) {
        while let Ok(event) = self.preview_rx.try_recv() {
            self.apply_preview_event(event);
        }
    }

    fn apply_preview_event(&mut self, event: PreviewEvent) {
        let loaded = match &event.result {
            Ok(()) => true,
            Err(err) => {
                warn!(generation = event.generation, error = %err, "preview image failed to load");
                false
            }
        };
        if !self.state.apply_preview(event.generation, loaded) {
            debug!(generation = event.generation, "dropping stale preview result");
        }
    }

    /// Copy one output to the clipboard. Failures are only logged.
    pub fn copy_output(&mut self, format: OutputFormat) {
        let Some(output) = self.state.visible_output() else {
            return;
        };
        let text = output.get(format).to_string();
        match self.clipboard.set_text(&text) {
            Ok(()) => self.copy_message = Some(format!("Copied {}", format.label())),
            Err(err) => warn!(format = format.label(), error = %err, "clipboard write failed"),
        }
    }

    /// Persist the selected card type for the next start
    pub fn save_preferences(&mut self) {
        self.config.default_card_type = Some(self.state.input.card_type);
        if let Err(err) = self.config.save() {
            warn!(error = %err, "failed to save config");
        }
    }
}
