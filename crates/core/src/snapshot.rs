use crate::game_state::Winner;
use crate::ticket::Ticket;
use crate::types::{GameStatus, NumberSet, WinKind, POOL_SIZE};

/// Read-only copy of everything the presentation layer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub tickets: Vec<Ticket>,
    pub called_numbers: Vec<u8>,
    pub called: NumberSet,
    pub current_number: Option<u8>,
    pub status: GameStatus,
    pub winners: Vec<Winner>,
    pub remaining: usize,
    pub picking_enabled: bool,
}

impl GameSnapshot {
    pub fn called_count(&self) -> usize {
        self.called_numbers.len()
    }

    /// Numbers still in the pool
    pub fn pool(&self) -> NumberSet {
        NumberSet::full()
            .iter()
            .filter(|&n| !self.called.contains(n))
            .collect()
    }

    pub fn has_winner(&self, ticket_id: &str) -> bool {
        self.winners.iter().any(|w| w.ticket_id == ticket_id)
    }

    pub fn win_kinds_for<'a>(&'a self, ticket_id: &'a str) -> impl Iterator<Item = WinKind> + 'a {
        self.winners
            .iter()
            .filter(move |w| w.ticket_id == ticket_id)
            .map(|w| w.kind)
    }

    pub fn clear(&mut self) {
        self.tickets.clear();
        self.called_numbers.clear();
        self.called.clear();
        self.current_number = None;
        self.status = GameStatus::Waiting;
        self.winners.clear();
        self.remaining = POOL_SIZE;
        self.picking_enabled = false;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tickets: Vec::new(),
            called_numbers: Vec::new(),
            called: NumberSet::new(),
            current_number: None,
            status: GameStatus::Waiting,
            winners: Vec::new(),
            remaining: POOL_SIZE,
            picking_enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameState;

    #[test]
    fn default_matches_fresh_game() {
        assert_eq!(GameSnapshot::default(), GameState::new(9).snapshot());
    }

    #[test]
    fn pool_is_complement_of_called() {
        let mut snap = GameSnapshot::default();
        assert_eq!(snap.pool(), NumberSet::full());

        snap.called.insert(5);
        snap.called_numbers.push(5);
        assert!(!snap.pool().contains(5));
        assert_eq!(snap.pool().len(), POOL_SIZE - 1);

        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }
}
