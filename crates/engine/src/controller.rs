//! Game controller - the single owner of game state.
//!
//! Front ends never touch [`GameState`] directly: they send [`GameCommand`]s
//! and render snapshots. Every command returns a [`Notice`] describing what
//! happened, which the front end may show as a toast.

use tracing::{debug, info};

use crate::core::{GameSnapshot, GameState, SimpleRng, Ticket, TicketGenerator, Winner};
use crate::types::{GameCommand, GameStatus, TICKET_BATCH_MAX};
use crate::voice::{Announcer, NullSpeech, SpeechBackend};

/// Outcome of a command, worded for the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    TicketsGenerated { count: usize },
    /// Tickets can only be generated before the game starts.
    GenerationLocked { status: GameStatus },
    /// Start was requested with no tickets in play.
    NoTickets,
    GameStarted,
    NumberDrawn { number: u8, new_winners: Vec<Winner> },
    GameReset,
    Voice { enabled: bool },
    /// The command had no effect in the current state.
    Ignored(GameCommand),
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::TicketsGenerated { .. } => "Tickets Generated!",
            Notice::GenerationLocked { .. } => "Tickets Locked",
            Notice::NoTickets => "No Tickets!",
            Notice::GameStarted => "Game Started!",
            Notice::NumberDrawn { new_winners, .. } if !new_winners.is_empty() => "Winner!",
            Notice::NumberDrawn { .. } => "Number Drawn",
            Notice::GameReset => "Game Reset",
            Notice::Voice { .. } => "Voice",
            Notice::Ignored(_) => "Not Now",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::TicketsGenerated { count } => format!(
                "{} new ticket{} added to the game.",
                count,
                if *count == 1 { "" } else { "s" }
            ),
            Notice::GenerationLocked { status } => format!(
                "Tickets can't be added while the game is {}. Reset to start over.",
                status.as_str()
            ),
            Notice::NoTickets => {
                "Please generate at least one ticket before starting the game.".to_string()
            }
            Notice::GameStarted => "Good luck! Start picking numbers.".to_string(),
            Notice::NumberDrawn {
                number,
                new_winners,
            } => {
                if new_winners.is_empty() {
                    format!("{} is called.", number)
                } else {
                    let awards: Vec<String> = new_winners
                        .iter()
                        .map(|w| format!("#{} {}", w.ticket_id, w.kind.label()))
                        .collect();
                    format!("{} is called. {}", number, awards.join(", "))
                }
            }
            Notice::GameReset => "Starting fresh! Generate new tickets to begin.".to_string(),
            Notice::Voice { enabled } => {
                if *enabled {
                    "Voice announcements enabled".to_string()
                } else {
                    "Voice announcements off".to_string()
                }
            }
            Notice::Ignored(cmd) => format!("{} has no effect right now.", cmd.as_str()),
        }
    }

    /// Advisory that should be styled as a warning.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::NoTickets | Notice::GenerationLocked { .. } | Notice::Ignored(_)
        )
    }
}

/// Owns the ticket generator, the game state and the announcer.
pub struct GameController<B = NullSpeech> {
    generator: TicketGenerator,
    game: GameState,
    announcer: Announcer<B>,
    seed: u32,
}

impl GameController<NullSpeech> {
    /// Silent controller, mostly for tests and headless runs.
    pub fn new(seed: u32) -> Self {
        Self::with_announcer(seed, Announcer::new(NullSpeech))
    }
}

impl<B: SpeechBackend> GameController<B> {
    /// Tickets and draws use independent streams derived from `seed`.
    pub fn with_announcer(seed: u32, announcer: Announcer<B>) -> Self {
        Self {
            generator: TicketGenerator::new(SimpleRng::new(seed)),
            game: GameState::new(seed.rotate_left(16) ^ 0x9E37_79B9),
            announcer,
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn announcer(&self) -> &Announcer<B> {
        &self.announcer
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn tickets(&self) -> &[Ticket] {
        self.game.tickets()
    }

    pub fn is_picking_enabled(&self) -> bool {
        self.game.is_picking_enabled()
    }

    pub fn voice_enabled(&self) -> bool {
        self.announcer.is_enabled()
    }

    pub fn last_callout(&self) -> Option<&str> {
        self.announcer.last_callout()
    }

    /// Apply one command.
    pub fn apply(&mut self, command: GameCommand) -> Notice {
        let notice = match command {
            GameCommand::GenerateTickets { count } => self.generate_tickets(count),
            GameCommand::StartGame => self.start_game(),
            GameCommand::PickNumber => self.pick_number(),
            GameCommand::ResetGame => self.reset_game(),
            GameCommand::ToggleVoice => self.toggle_voice(),
        };
        debug!(command = command.as_str(), notice = notice.title(), "command applied");
        notice
    }

    /// Read out a drawn number (called once the front end's callout delay has
    /// elapsed). Returns the callout text.
    pub fn announce(&mut self, number: u8) -> &str {
        self.announcer.announce(number)
    }

    fn generate_tickets(&mut self, count: u8) -> Notice {
        let status = self.game.status();
        if status != GameStatus::Waiting {
            return Notice::GenerationLocked { status };
        }
        let count = count.clamp(1, TICKET_BATCH_MAX) as usize;
        let added = self.game.add_tickets(self.generator.generate_many(count));
        info!(added, total = self.game.tickets().len(), "tickets generated");
        Notice::TicketsGenerated { count: added }
    }

    fn start_game(&mut self) -> Notice {
        if self.game.status() != GameStatus::Waiting {
            return Notice::Ignored(GameCommand::StartGame);
        }
        if self.game.tickets().is_empty() {
            return Notice::NoTickets;
        }
        self.game.start();
        info!(tickets = self.game.tickets().len(), "game started");
        Notice::GameStarted
    }

    fn pick_number(&mut self) -> Notice {
        let before = self.game.winners().len();
        let Some(number) = self.game.draw_number() else {
            return Notice::Ignored(GameCommand::PickNumber);
        };
        let new_winners = self.game.winners()[before..].to_vec();
        debug!(
            number,
            called = self.game.called_numbers().len(),
            remaining = self.game.remaining(),
            "number drawn"
        );
        for w in &new_winners {
            info!(
                ticket = %w.ticket_id,
                kind = w.kind.as_str(),
                draw = w.draw_count,
                "prize awarded"
            );
        }
        if self.game.status() == GameStatus::Completed {
            info!(winners = self.game.winners().len(), "all numbers called");
        }
        Notice::NumberDrawn {
            number,
            new_winners,
        }
    }

    /// Switching voice back on reads out the current number again.
    fn toggle_voice(&mut self) -> Notice {
        let enabled = self.announcer.toggle();
        if enabled {
            if let Some(number) = self.game.current_number() {
                self.announcer.announce(number);
            }
        }
        info!(enabled, "voice toggled");
        Notice::Voice { enabled }
    }

    fn reset_game(&mut self) -> Notice {
        self.game.reset();
        self.announcer.clear();
        info!("game reset");
        Notice::GameReset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WinKind;
    use crate::voice::MemorySpeech;

    #[test]
    fn start_without_tickets_is_advisory() {
        let mut ctl = GameController::new(1);
        let notice = ctl.apply(GameCommand::StartGame);
        assert_eq!(notice, Notice::NoTickets);
        assert!(notice.is_error());
        assert_eq!(
            notice.message(),
            "Please generate at least one ticket before starting the game."
        );
        assert_eq!(ctl.game().status(), GameStatus::Waiting);
    }

    #[test]
    fn generate_clamps_batch_size() {
        let mut ctl = GameController::new(1);
        assert_eq!(
            ctl.apply(GameCommand::GenerateTickets { count: 0 }),
            Notice::TicketsGenerated { count: 1 }
        );
        assert_eq!(
            ctl.apply(GameCommand::GenerateTickets { count: 40 }),
            Notice::TicketsGenerated { count: 6 }
        );
        assert_eq!(ctl.tickets().len(), 7);
    }

    #[test]
    fn generate_locked_while_playing() {
        let mut ctl = GameController::new(1);
        ctl.apply(GameCommand::GenerateTickets { count: 1 });
        ctl.apply(GameCommand::StartGame);
        let notice = ctl.apply(GameCommand::GenerateTickets { count: 2 });
        assert_eq!(
            notice,
            Notice::GenerationLocked {
                status: GameStatus::Playing
            }
        );
        assert_eq!(ctl.tickets().len(), 1);
    }

    #[test]
    fn pick_before_start_is_ignored() {
        let mut ctl = GameController::new(1);
        assert_eq!(
            ctl.apply(GameCommand::PickNumber),
            Notice::Ignored(GameCommand::PickNumber)
        );
        assert!(ctl.game().called_numbers().is_empty());
    }

    #[test]
    fn full_game_reports_winners_in_notices() {
        let mut ctl = GameController::new(77);
        ctl.apply(GameCommand::GenerateTickets { count: 2 });
        assert_eq!(ctl.apply(GameCommand::StartGame), Notice::GameStarted);

        let mut awarded = Vec::new();
        while ctl.is_picking_enabled() {
            match ctl.apply(GameCommand::PickNumber) {
                Notice::NumberDrawn { new_winners, .. } => awarded.extend(new_winners),
                other => panic!("unexpected notice {other:?}"),
            }
        }

        assert_eq!(ctl.game().status(), GameStatus::Completed);
        assert_eq!(awarded, ctl.game().winners().to_vec());
        for ticket in ctl.tickets() {
            assert!(ctl.game().has_won(ticket.id(), WinKind::FullHouse));
            assert!(ctl.game().has_won(ticket.id(), WinKind::Line));
        }
        assert_eq!(
            ctl.apply(GameCommand::StartGame),
            Notice::Ignored(GameCommand::StartGame)
        );
    }

    #[test]
    fn reset_clears_game_and_callout() {
        let mut ctl = GameController::with_announcer(5, Announcer::new(MemorySpeech::default()));
        ctl.apply(GameCommand::GenerateTickets { count: 3 });
        ctl.apply(GameCommand::StartGame);
        if let Notice::NumberDrawn { number, .. } = ctl.apply(GameCommand::PickNumber) {
            ctl.announce(number);
        }
        assert!(ctl.last_callout().is_some());

        assert_eq!(ctl.apply(GameCommand::ResetGame), Notice::GameReset);
        assert_eq!(ctl.snapshot(), GameSnapshot::default());
        assert_eq!(ctl.last_callout(), None);
    }

    #[test]
    fn toggle_voice_flips_announcer() {
        let mut ctl = GameController::with_announcer(5, Announcer::new(MemorySpeech::default()));
        assert!(ctl.voice_enabled());
        assert_eq!(
            ctl.apply(GameCommand::ToggleVoice),
            Notice::Voice { enabled: false }
        );

        ctl.announce(7);
        assert!(ctl.announcer().backend().spoken.is_empty());
        assert_eq!(ctl.last_callout(), Some("Lucky seven"));
    }

    #[test]
    fn voice_on_repeats_current_number() {
        let mut ctl = GameController::with_announcer(8, Announcer::new(MemorySpeech::default()));
        ctl.apply(GameCommand::ToggleVoice);
        ctl.apply(GameCommand::GenerateTickets { count: 1 });
        ctl.apply(GameCommand::StartGame);
        let Notice::NumberDrawn { number, .. } = ctl.apply(GameCommand::PickNumber) else {
            panic!("expected a draw");
        };
        ctl.announce(number);
        assert!(ctl.announcer().backend().spoken.is_empty());

        assert_eq!(
            ctl.apply(GameCommand::ToggleVoice),
            Notice::Voice { enabled: true }
        );
        let spoken = &ctl.announcer().backend().spoken;
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text, crate::voice::callout(number));
    }

    #[test]
    fn voice_on_before_any_draw_stays_quiet() {
        let mut ctl = GameController::with_announcer(8, Announcer::new(MemorySpeech::default()));
        ctl.apply(GameCommand::ToggleVoice);
        ctl.apply(GameCommand::ToggleVoice);
        assert!(ctl.announcer().backend().spoken.is_empty());
        assert_eq!(ctl.last_callout(), None);
    }

    #[test]
    fn notice_messages() {
        assert_eq!(
            Notice::TicketsGenerated { count: 1 }.message(),
            "1 new ticket added to the game."
        );
        assert_eq!(
            Notice::TicketsGenerated { count: 3 }.message(),
            "3 new tickets added to the game."
        );
        assert_eq!(Notice::GameStarted.title(), "Game Started!");
        assert!(!Notice::GameReset.is_error());
    }

    #[test]
    fn same_seed_same_game() {
        let run = |seed| {
            let mut ctl = GameController::new(seed);
            assert_eq!(ctl.seed(), seed);
            ctl.apply(GameCommand::GenerateTickets { count: 2 });
            ctl.apply(GameCommand::StartGame);
            for _ in 0..30 {
                ctl.apply(GameCommand::PickNumber);
            }
            let mut snap = ctl.snapshot();
            for w in &mut snap.winners {
                w.awarded_at_ms = 0;
            }
            snap
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42).called_numbers, run(43).called_numbers);
    }
}
