//! Game state module - the draw pool, call history and win tracking
//!
//! `GameState` is the only place game data changes. Every operation is total:
//! calls that make no sense for the current status (drawing while waiting,
//! starting twice, adding tickets to a finished game) leave the state untouched
//! instead of failing.

use crate::clock::{Clock, SystemClock};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::ticket::Ticket;
use crate::types::{GameStatus, NumberSet, WinKind, MAX_NUMBER, MIN_NUMBER, POOL_SIZE};

/// A prize awarded to a ticket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Winner {
    pub ticket_id: String,
    pub kind: WinKind,
    /// Completed row for a line win (lowest index when several finish together)
    pub row: Option<u8>,
    /// Numbers called when the prize was awarded
    pub draw_count: u8,
    /// Capture time from the game's clock
    pub awarded_at_ms: u64,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng, C = SystemClock> {
    tickets: Vec<Ticket>,
    /// Undrawn numbers, ascending
    pool: Vec<u8>,
    /// Draw history in call order
    called: Vec<u8>,
    called_set: NumberSet,
    current: Option<u8>,
    status: GameStatus,
    winners: Vec<Winner>,
    rng: R,
    clock: C,
}

impl GameState<SimpleRng, SystemClock> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_parts(SimpleRng::new(seed), SystemClock)
    }
}

impl<R: RandomSource, C: Clock> GameState<R, C> {
    pub fn with_parts(rng: R, clock: C) -> Self {
        Self {
            tickets: Vec::new(),
            pool: full_pool(),
            called: Vec::with_capacity(POOL_SIZE),
            called_set: NumberSet::new(),
            current: None,
            status: GameStatus::Waiting,
            winners: Vec::new(),
            rng,
            clock,
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn pool(&self) -> &[u8] {
        &self.pool
    }

    pub fn called_numbers(&self) -> &[u8] {
        &self.called
    }

    pub fn called_set(&self) -> &NumberSet {
        &self.called_set
    }

    pub fn current_number(&self) -> Option<u8> {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Drawing is possible right now.
    pub fn is_picking_enabled(&self) -> bool {
        self.status == GameStatus::Playing && !self.pool.is_empty()
    }

    pub fn has_won(&self, ticket_id: &str, kind: WinKind) -> bool {
        already_won(&self.winners, ticket_id, kind)
    }

    /// Append tickets to the game.
    ///
    /// Ignored once the game is completed. Tickets joining after numbers have
    /// been called are checked against those numbers straight away.
    /// Returns how many tickets were added.
    pub fn add_tickets<I: IntoIterator<Item = Ticket>>(&mut self, tickets: I) -> usize {
        if self.status == GameStatus::Completed {
            return 0;
        }
        let before = self.tickets.len();
        self.tickets.extend(tickets);
        let added = self.tickets.len() - before;

        if added > 0 && !self.called.is_empty() {
            self.check_winners();
        }
        added
    }

    /// Start drawing. Only moves waiting → playing.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::Waiting {
            return false;
        }
        self.status = GameStatus::Playing;
        true
    }

    /// Draw one number uniformly from the pool.
    ///
    /// Returns `None` (and changes nothing) unless the game is playing with
    /// numbers left. Winners are re-derived after every successful draw.
    pub fn draw_number(&mut self) -> Option<u8> {
        if !self.is_picking_enabled() {
            return None;
        }

        let idx = self.rng.next_range(self.pool.len() as u32) as usize;
        let number = self.pool.remove(idx);
        self.called.push(number);
        self.called_set.insert(number);
        self.current = Some(number);

        if self.pool.is_empty() {
            self.status = GameStatus::Completed;
        }

        self.check_winners();
        Some(number)
    }

    /// Award every newly satisfied prize; returns how many were added.
    ///
    /// Per ticket, full house is checked before line. A (ticket, kind) pair is
    /// awarded at most once and never revoked.
    pub fn check_winners(&mut self) -> usize {
        let draw_count = self.called.len() as u8;
        let mut fresh: Vec<Winner> = Vec::new();

        for ticket in &self.tickets {
            let id = ticket.id();

            if ticket.is_full_house(&self.called_set)
                && !already_won(&self.winners, id, WinKind::FullHouse)
                && !already_won(&fresh, id, WinKind::FullHouse)
            {
                fresh.push(Winner {
                    ticket_id: id.to_string(),
                    kind: WinKind::FullHouse,
                    row: None,
                    draw_count,
                    awarded_at_ms: 0,
                });
            }

            if already_won(&self.winners, id, WinKind::Line)
                || already_won(&fresh, id, WinKind::Line)
            {
                continue;
            }
            if let Some(row) = ticket.first_complete_row(&self.called_set) {
                fresh.push(Winner {
                    ticket_id: id.to_string(),
                    kind: WinKind::Line,
                    row: Some(row as u8),
                    draw_count,
                    awarded_at_ms: 0,
                });
            }
        }

        if fresh.is_empty() {
            return 0;
        }
        let now = self.clock.now_ms();
        let added = fresh.len();
        self.winners
            .extend(fresh.into_iter().map(|w| Winner { awarded_at_ms: now, ..w }));
        added
    }

    /// Back to a fresh waiting game. The random source keeps its position.
    pub fn reset(&mut self) {
        self.tickets.clear();
        self.pool = full_pool();
        self.called.clear();
        self.called_set.clear();
        self.current = None;
        self.status = GameStatus::Waiting;
        self.winners.clear();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            tickets: self.tickets.clone(),
            called_numbers: self.called.clone(),
            called: self.called_set,
            current_number: self.current,
            status: self.status,
            winners: self.winners.clone(),
            remaining: self.pool.len(),
            picking_enabled: self.is_picking_enabled(),
        }
    }
}

fn full_pool() -> Vec<u8> {
    (MIN_NUMBER..=MAX_NUMBER).collect()
}

fn already_won(winners: &[Winner], ticket_id: &str, kind: WinKind) -> bool {
    winners
        .iter()
        .any(|w| w.kind == kind && w.ticket_id == ticket_id)
}
