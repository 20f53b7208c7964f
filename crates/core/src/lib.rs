//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the ticket rules, the draw pool, and win detection.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical tickets and draws
//! - **Testable**: Randomness and time are injected ([`RandomSource`], [`Clock`])
//! - **Portable**: Can run in any environment (terminal, headless simulation)
//!
//! # Module Structure
//!
//! - [`ticket`]: 3x9 ticket layout and the ticket generator
//! - [`game_state`]: Pool, call history, status machine, and winners
//! - [`rng`]: Seeded LCG and scripted random sources
//! - [`clock`]: System and manual clocks for winner timestamps
//! - [`snapshot`]: Owned copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Tickets**: 5 numbers per row, column `c` holds `10c+1 ..= 10c+10`,
//!   columns ascend top to bottom
//! - **Draws**: Uniform, without replacement, from 1..=90
//! - **Status**: waiting → playing → completed (pool empty); reset from anywhere
//! - **Line**: any row fully called
//! - **Full house**: every number on the ticket called
//! - **Awards**: each (ticket, kind) pair at most once, never revoked
//!
//! # Example
//!
//! ```
//! use tambola_core::{GameState, TicketGenerator};
//! use tambola_types::{GameStatus, WinKind};
//!
//! let mut tickets = TicketGenerator::with_seed(7);
//! let mut game = GameState::new(12345);
//! game.add_tickets(tickets.generate_many(2));
//! game.start();
//!
//! while game.draw_number().is_some() {}
//!
//! assert_eq!(game.status(), GameStatus::Completed);
//! for ticket in game.tickets() {
//!     assert!(game.has_won(ticket.id(), WinKind::FullHouse));
//! }
//! ```

pub mod clock;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod ticket;

pub use tambola_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use game_state::{GameState, Winner};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use snapshot::GameSnapshot;
pub use ticket::{Grid, Ticket, TicketGenerator};
