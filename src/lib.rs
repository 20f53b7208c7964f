//! Terminal Tambola (workspace facade crate).
//!
//! Re-exports the member crates as `tambola::{core,engine,input,term,types,voice}`
//! and holds the binary-level pieces that integration tests also use:
//! configuration, logging setup and the headless simulation.

pub use tambola_core as core;
pub use tambola_engine as engine;
pub use tambola_input as input;
pub use tambola_term as term;
pub use tambola_types as types;
pub use tambola_voice as voice;

pub mod config;
pub mod logging;
pub mod simulate;
