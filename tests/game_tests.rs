//! Game state scenarios: draws, status machine, winners, reset

use std::collections::HashSet;

use tambola::core::{
    GameSnapshot, GameState, ManualClock, RandomSource, ScriptedRng, SimpleRng, Ticket,
    TicketGenerator,
};
use tambola::types::{GameStatus, WinKind, MAX_NUMBER, MIN_NUMBER, POOL_SIZE};

/// Random source that makes the game draw exactly `order` first.
fn scripted_draws(order: &[u8]) -> ScriptedRng {
    let mut pool: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER).collect();
    let raws = order
        .iter()
        .map(|n| {
            let index = pool.iter().position(|p| p == n).expect("number still in pool");
            let raw = ScriptedRng::raw_for_index(index as u32, pool.len() as u32);
            pool.remove(index);
            raw
        })
        .collect();
    ScriptedRng::new(raws)
}

fn scenario_ticket() -> Ticket {
    Ticket::new(
        "scenario",
        [
            [Some(2), Some(14), None, Some(33), None, Some(55), None, Some(71), Some(88)],
            [Some(5), None, Some(24), None, Some(47), None, Some(63), None, Some(81)],
            [Some(8), Some(19), None, Some(39), None, None, Some(68), Some(77), None],
        ],
    )
}

const SCENARIO_ROW: [u8; 6] = [2, 14, 33, 55, 71, 88];

fn playing_game(seed: u32, tickets: usize) -> GameState {
    let mut game = GameState::new(seed);
    game.add_tickets(TicketGenerator::with_seed(seed ^ 0xABCD).generate_many(tickets));
    assert!(game.start());
    game
}

// ============== Draws ==============

#[test]
fn test_full_game_draws_every_number_once() {
    let mut game = playing_game(12345, 1);
    let mut seen = HashSet::new();
    while let Some(n) = game.draw_number() {
        assert!((MIN_NUMBER..=MAX_NUMBER).contains(&n));
        assert!(seen.insert(n), "{n} drawn twice");
    }

    assert_eq!(seen.len(), POOL_SIZE);
    assert_eq!(game.called_numbers().len(), POOL_SIZE);
    assert_eq!(game.remaining(), 0);
    assert_eq!(game.status(), GameStatus::Completed);
    assert!(!game.is_picking_enabled());

    let full_houses = game.winners().iter().filter(|w| w.kind == WinKind::FullHouse).count();
    assert_eq!(full_houses, 1);
}

#[test]
fn test_draw_outside_playing_is_a_no_op() {
    let mut game = GameState::new(1);
    let before = game.snapshot();
    assert_eq!(game.draw_number(), None);
    assert_eq!(game.snapshot(), before);

    let mut game = playing_game(3, 1);
    while game.draw_number().is_some() {}
    let finished = game.snapshot();
    assert_eq!(game.draw_number(), None);
    assert_eq!(game.snapshot(), finished);
}

#[test]
fn test_current_number_is_last_called() {
    let mut game = playing_game(8, 2);
    for _ in 0..20 {
        let n = game.draw_number();
        assert_eq!(game.current_number(), n);
        assert_eq!(game.called_numbers().last().copied(), n);
        assert_eq!(game.remaining() + game.called_numbers().len(), POOL_SIZE);
    }
}

// ============== Winners ==============

#[test]
fn test_scenario_row_wins_line_in_any_order() {
    let mut rng = SimpleRng::new(77);
    for _ in 0..25 {
        let mut order = SCENARIO_ROW;
        rng.shuffle(&mut order);

        let mut game = GameState::with_parts(scripted_draws(&order), ManualClock::new(5_000));
        game.add_tickets([scenario_ticket()]);
        game.start();

        for (i, expected) in order.iter().enumerate() {
            assert_eq!(game.draw_number(), Some(*expected));
            let lines: Vec<_> = game.winners().iter().filter(|w| w.kind == WinKind::Line).collect();
            if i + 1 < order.len() {
                assert!(lines.is_empty(), "line awarded early for order {order:?}");
            } else {
                assert_eq!(lines.len(), 1);
                assert_eq!(lines[0].ticket_id, "scenario");
                assert_eq!(lines[0].row, Some(0));
                assert_eq!(lines[0].draw_count, 6);
                assert_eq!(lines[0].awarded_at_ms, 5_000);
            }
        }
    }
}

#[test]
fn test_winners_only_grow_and_never_repeat() {
    let mut game = playing_game(4242, 6);
    let mut previous: Vec<_> = Vec::new();
    while game.draw_number().is_some() {
        let winners = game.winners();
        assert!(winners.starts_with(&previous), "winners were rewritten");
        let keys: HashSet<(&str, WinKind)> = winners
            .iter()
            .map(|w| (w.ticket_id.as_str(), w.kind))
            .collect();
        assert_eq!(keys.len(), winners.len(), "duplicate award");
        previous = winners.to_vec();
    }

    // Every ticket ends with exactly one line and one full house.
    assert_eq!(game.winners().len(), 12);
}

#[test]
fn test_check_winners_is_idempotent() {
    let mut game = playing_game(31, 3);
    for _ in 0..60 {
        game.draw_number();
    }
    let before = game.winners().to_vec();
    assert_eq!(game.check_winners(), 0);
    assert_eq!(game.check_winners(), 0);
    assert_eq!(game.winners(), &before[..]);
}

#[test]
fn test_full_house_listed_before_line_on_same_check() {
    let ticket = scenario_ticket();
    let all: Vec<u8> = ticket.numbers().collect();
    let mut game = GameState::with_parts(scripted_draws(&all), ManualClock::new(0));
    game.start();
    for _ in 0..all.len() {
        game.draw_number();
    }

    // Joining late, both prizes are due in the same check.
    game.add_tickets([ticket]);
    let kinds: Vec<(WinKind, Option<u8>)> =
        game.winners().iter().map(|w| (w.kind, w.row)).collect();
    assert_eq!(kinds, vec![(WinKind::FullHouse, None), (WinKind::Line, Some(0))]);
}

// ============== Status & reset ==============

#[test]
fn test_start_only_from_waiting() {
    let mut game = GameState::new(1);
    assert!(game.start());
    assert!(!game.start());
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_reset_matches_fresh_snapshot() {
    let mut game = playing_game(10, 4);
    for _ in 0..45 {
        game.draw_number();
    }
    game.reset();
    assert_eq!(game.snapshot(), GameSnapshot::default());
    assert_eq!(GameState::new(99).snapshot(), GameSnapshot::default());
}

#[test]
fn test_tickets_added_mid_game_are_checked() {
    let mut game = GameState::with_parts(scripted_draws(&SCENARIO_ROW), ManualClock::new(0));
    game.start();
    for _ in 0..SCENARIO_ROW.len() {
        game.draw_number();
    }
    assert!(game.winners().is_empty());

    assert_eq!(game.add_tickets([scenario_ticket()]), 1);
    assert!(game.has_won("scenario", WinKind::Line));
    assert!(!game.has_won("scenario", WinKind::FullHouse));
}
