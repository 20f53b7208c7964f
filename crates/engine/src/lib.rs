//! Game engine - the command layer between front ends and the core rules.
//!
//! [`GameController`] owns the ticket generator, the game state and the voice
//! announcer. Front ends (terminal UI, headless simulation) feed it
//! [`GameCommand`](crate::types::GameCommand)s and render the resulting
//! snapshots; they never mutate the game directly.
//!
//! ```
//! use tambola_engine::{GameController, Notice};
//! use tambola_types::GameCommand;
//!
//! let mut ctl = GameController::new(42);
//! assert_eq!(ctl.apply(GameCommand::StartGame), Notice::NoTickets);
//!
//! ctl.apply(GameCommand::GenerateTickets { count: 2 });
//! assert_eq!(ctl.apply(GameCommand::StartGame), Notice::GameStarted);
//! assert!(matches!(ctl.apply(GameCommand::PickNumber), Notice::NumberDrawn { .. }));
//! ```

pub mod controller;

pub use tambola_core as core;
pub use tambola_types as types;
pub use tambola_voice as voice;

pub use controller::{GameController, Notice};
