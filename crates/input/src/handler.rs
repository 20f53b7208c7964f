//! Turns key intents into game commands.
//!
//! The only state kept here is the ticket batch size, which the player adjusts
//! before generating.

use crossterm::event::KeyEvent;

use crate::map::{handle_key_event, KeyIntent};
use crate::types::{GameCommand, TICKET_BATCH_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHandler {
    batch: u8,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_batch(1)
    }

    /// Start with `batch` tickets per generate, clamped to `1..=TICKET_BATCH_MAX`.
    pub fn with_batch(batch: u8) -> Self {
        Self {
            batch: batch.clamp(1, TICKET_BATCH_MAX),
        }
    }

    pub fn batch(&self) -> u8 {
        self.batch
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameCommand> {
        handle_key_event(key).and_then(|intent| self.handle_intent(intent))
    }

    /// Batch adjustments are absorbed here and produce no command.
    pub fn handle_intent(&mut self, intent: KeyIntent) -> Option<GameCommand> {
        match intent {
            KeyIntent::Generate => Some(GameCommand::GenerateTickets { count: self.batch }),
            KeyIntent::BatchUp => {
                self.batch = (self.batch + 1).min(TICKET_BATCH_MAX);
                None
            }
            KeyIntent::BatchDown => {
                self.batch = self.batch.saturating_sub(1).max(1);
                None
            }
            KeyIntent::Start => Some(GameCommand::StartGame),
            KeyIntent::Pick => Some(GameCommand::PickNumber),
            KeyIntent::Reset => Some(GameCommand::ResetGame),
            KeyIntent::ToggleVoice => Some(GameCommand::ToggleVoice),
        }
    }
}
