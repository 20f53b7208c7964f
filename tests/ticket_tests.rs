//! Ticket generator properties across many seeds

use std::collections::HashSet;

use tambola::core::{SimpleRng, Ticket, TicketGenerator};
use tambola::types::{
    column_range, NUMBERS_PER_ROW, NUMBERS_PER_TICKET, TICKET_COLS, TICKET_ID_LEN, TICKET_ROWS,
};

fn generated(seed: u32, count: usize) -> Vec<Ticket> {
    TicketGenerator::new(SimpleRng::new(seed)).generate_many(count)
}

// ============== Layout ==============

#[test]
fn test_fifteen_numbers_five_per_row() {
    for seed in 1..200 {
        for ticket in generated(seed, 6) {
            assert_eq!(ticket.number_count(), NUMBERS_PER_TICKET, "seed {seed}");
            for row in 0..TICKET_ROWS {
                assert_eq!(
                    ticket.row_numbers(row).count(),
                    NUMBERS_PER_ROW,
                    "seed {seed} row {row}"
                );
            }
        }
    }
}

#[test]
fn test_column_ranges_respected() {
    for seed in 1..200 {
        for ticket in generated(seed, 3) {
            for row in 0..TICKET_ROWS {
                for col in 0..TICKET_COLS {
                    if let Some(n) = ticket.cell(row, col) {
                        assert!(column_range(col).contains(&n), "{n} in column {col}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_columns_ascend_top_to_bottom() {
    for seed in 1..200 {
        for ticket in generated(seed, 3) {
            for col in 0..TICKET_COLS {
                let column: Vec<u8> =
                    (0..TICKET_ROWS).filter_map(|row| ticket.cell(row, col)).collect();
                assert!(column.windows(2).all(|w| w[0] < w[1]), "column {col}: {column:?}");
            }
        }
    }
}

#[test]
fn test_no_duplicate_numbers() {
    for seed in 1..200 {
        let ticket = &generated(seed, 1)[0];
        let unique: HashSet<u8> = ticket.numbers().collect();
        assert_eq!(unique.len(), NUMBERS_PER_TICKET);
    }
}

#[test]
fn test_generated_tickets_are_well_formed() {
    for seed in [1, 7, 42, 12345, u32::MAX] {
        assert!(generated(seed, 6).iter().all(Ticket::is_well_formed));
    }
}

// ============== Ids ==============

#[test]
fn test_ids_are_base36_and_unique() {
    let tickets = generated(99, 300);
    let ids: HashSet<&str> = tickets.iter().map(Ticket::id).collect();
    assert_eq!(ids.len(), tickets.len());
    for id in ids {
        assert_eq!(id.len(), TICKET_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()), "{id}");
    }
}

// ============== Determinism ==============

#[test]
fn test_same_seed_same_tickets() {
    assert_eq!(generated(2024, 4), generated(2024, 4));
    assert_ne!(generated(2024, 4), generated(2025, 4));
}

#[test]
fn test_zero_count_is_empty() {
    assert!(generated(5, 0).is_empty());
}
