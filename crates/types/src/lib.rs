//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless simulation).
//!
//! # Ticket Layout
//!
//! A Tambola ticket is a 3x9 grid:
//!
//! - **Rows**: 3, each holding exactly 5 numbers and 4 blanks
//! - **Columns**: 9, column `c` holds numbers from `10c+1 ..= 10c+10`
//! - **Numbers per ticket**: 15
//!
//! | Column | Range |
//! |--------|-------|
//! | 0 | 1-10 |
//! | 1 | 11-20 |
//! | ... | ... |
//! | 8 | 81-90 |
//!
//! # Presentation Timing
//!
//! Cosmetic timers used by the front end (milliseconds). None of these affect
//! game state:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Main loop tick (~60 FPS) |
//! | `PICK_ANIMATION_MS` | 2000 | Picker spin after a draw |
//! | `CALLOUT_DELAY_MS` | 500 | Delay before the callout is spoken |
//! | `NOTICE_MS` | 3000 | How long a toast stays on screen |
//!
//! # Examples
//!
//! ```
//! use tambola_types::{column_for, column_range, GameStatus, NumberSet, WinKind};
//!
//! assert_eq!(column_range(0), 1..=10);
//! assert_eq!(column_range(8), 81..=90);
//! assert_eq!(column_for(10), Some(0));
//! assert_eq!(column_for(11), Some(1));
//!
//! let mut called = NumberSet::new();
//! called.insert(7);
//! assert!(called.contains(7));
//!
//! assert_eq!(GameStatus::Waiting.as_str(), "waiting");
//! assert_eq!(WinKind::FullHouse.as_str(), "full-house");
//! ```

use std::ops::RangeInclusive;

/// Rows per ticket
pub const TICKET_ROWS: usize = 3;

/// Columns per ticket (one per decade)
pub const TICKET_COLS: usize = 9;

/// Numbers placed in each row
pub const NUMBERS_PER_ROW: usize = 5;

/// Numbers drawn into each column's supply queue
pub const NUMBERS_PER_COLUMN: usize = 3;

/// Numbers placed on a complete ticket (3 rows x 5)
pub const NUMBERS_PER_TICKET: usize = TICKET_ROWS * NUMBERS_PER_ROW;

/// Lowest callable number
pub const MIN_NUMBER: u8 = 1;

/// Highest callable number
pub const MAX_NUMBER: u8 = 90;

/// Size of the draw pool
pub const POOL_SIZE: usize = MAX_NUMBER as usize;

/// Largest ticket batch a single generate command may request
pub const TICKET_BATCH_MAX: u8 = 6;

/// Length of a generated ticket id
pub const TICKET_ID_LEN: usize = 9;

/// Main loop tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Picker spin duration after a draw
pub const PICK_ANIMATION_MS: u32 = 2000;

/// Delay between a draw and its spoken callout
pub const CALLOUT_DELAY_MS: u32 = 500;

/// Toast lifetime
pub const NOTICE_MS: u32 = 3000;

/// Number range covered by a ticket column.
///
/// Column `c` covers `10c+1 ..= 10c+10`, so 10 sits in column 0 and 90 in column 8.
pub fn column_range(col: usize) -> RangeInclusive<u8> {
    let base = (col as u8) * 10;
    (base + 1)..=(base + 10)
}

/// Column a number belongs to, or `None` outside `1..=90`.
pub fn column_for(number: u8) -> Option<usize> {
    if !(MIN_NUMBER..=MAX_NUMBER).contains(&number) {
        return None;
    }
    Some(((number - 1) / 10) as usize)
}

/// A ticket cell
///
/// - `None`: blank
/// - `Some(n)`: holds number `n`
pub type Cell = Option<u8>;

/// Bitmask set over the numbers `1..=90`.
///
/// Bit `n` is set when number `n` is a member. Values outside the range are
/// ignored by `insert` and never reported by `contains`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberSet(u128);

impl NumberSet {
    /// Empty set
    pub const fn new() -> Self {
        Self(0)
    }

    /// Set holding every number from 1 to 90
    pub fn full() -> Self {
        let mut set = Self::new();
        for n in MIN_NUMBER..=MAX_NUMBER {
            set.insert(n);
        }
        set
    }

    /// Insert a number; returns true if it was not already present.
    pub fn insert(&mut self, number: u8) -> bool {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&number) {
            return false;
        }
        let bit = 1u128 << number;
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Remove a number; returns true if it was present.
    pub fn remove(&mut self, number: u8) -> bool {
        if !self.contains(number) {
            return false;
        }
        self.0 &= !(1u128 << number);
        true
    }

    pub fn contains(&self, number: u8) -> bool {
        (MIN_NUMBER..=MAX_NUMBER).contains(&number) && self.0 & (1u128 << number) != 0
    }

    /// True when every number yielded by `numbers` is in the set.
    pub fn contains_all<I: IntoIterator<Item = u8>>(&self, numbers: I) -> bool {
        numbers.into_iter().all(|n| self.contains(n))
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (MIN_NUMBER..=MAX_NUMBER).filter(move |&n| self.contains(n))
    }
}

impl FromIterator<u8> for NumberSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::new();
        for n in iter {
            set.insert(n);
        }
        set
    }
}

/// Lifecycle of a game
///
/// The cycle goes: Waiting → Playing → Completed, with reset returning to
/// Waiting from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Tickets may be added; no numbers drawn yet
    #[default]
    Waiting,
    /// Numbers are being drawn
    Playing,
    /// The pool is exhausted
    Completed,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Waiting => "waiting",
            GameStatus::Playing => "playing",
            GameStatus::Completed => "completed",
        }
    }
}

/// Kind of prize a ticket can claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinKind {
    /// Every number in one row has been called
    Line,
    /// Every number on the ticket has been called
    FullHouse,
}

impl WinKind {
    /// Parse win kind (case-insensitive, accepts `full-house`/`fullhouse`)
    ///
    /// # Examples
    ///
    /// ```
    /// use tambola_types::WinKind;
    ///
    /// assert_eq!(WinKind::from_str("line"), Some(WinKind::Line));
    /// assert_eq!(WinKind::from_str("Full-House"), Some(WinKind::FullHouse));
    /// assert_eq!(WinKind::from_str("corners"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "line" => Some(WinKind::Line),
            "full-house" | "fullhouse" => Some(WinKind::FullHouse),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WinKind::Line => "line",
            WinKind::FullHouse => "full-house",
        }
    }

    /// Label shown on screen
    pub fn label(&self) -> &'static str {
        match self {
            WinKind::Line => "LINE",
            WinKind::FullHouse => "FULL HOUSE",
        }
    }
}

/// Commands accepted by the game controller
///
/// These are emitted by the presentation layer (keyboard, simulation driver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Generate `count` tickets and add them to the game
    GenerateTickets { count: u8 },
    /// Move from waiting to playing
    StartGame,
    /// Draw the next number
    PickNumber,
    /// Discard everything and return to waiting
    ResetGame,
    /// Flip voice announcements on/off
    ToggleVoice,
}

impl GameCommand {
    /// camelCase name, used in logs and simulation output
    ///
    /// # Examples
    ///
    /// ```
    /// use tambola_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::PickNumber.as_str(), "pickNumber");
    /// assert_eq!(GameCommand::GenerateTickets { count: 2 }.as_str(), "generateTickets");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::GenerateTickets { .. } => "generateTickets",
            GameCommand::StartGame => "startGame",
            GameCommand::PickNumber => "pickNumber",
            GameCommand::ResetGame => "resetGame",
            GameCommand::ToggleVoice => "toggleVoice",
        }
    }
}
