//! Terminal "game renderer" module.
//!
//! A small rendering layer for the Tambola terminal front end. It avoids
//! widget/layout libraries and renders into a plain framebuffer that is then
//! diffed and flushed to the terminal.
//!
//! - [`fb`]: framebuffer and styles
//! - [`game_view`]: pure snapshot → framebuffer mapping
//! - [`effects`]: cosmetic timers (picker spin, delayed callout, toasts)
//! - [`renderer`]: crossterm output with diffing

pub mod effects;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tambola_core as core;
pub use tambola_types as types;

pub use effects::{Effects, Toast, SPINNER};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
