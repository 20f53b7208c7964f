//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`KeyIntent`]s and turns those into
//! [`crate::types::GameCommand`]s, tracking the ticket batch size the player
//! has dialled in along the way.

pub mod handler;
pub mod map;

pub use tambola_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit, KeyIntent};
