//! Ticket module - ticket layout and generation
//!
//! A ticket is a 3x9 grid. Each column draws from its own decade
//! (`10c+1 ..= 10c+10`), each row carries 5 numbers, and numbers within a
//! column ascend from top to bottom.
//!
//! Generation works column-first, then row-first:
//!
//! 1. Every column shuffles its decade and keeps the first 3 entries, sorted
//!    ascending, as its supply queue.
//! 2. Every row independently picks 5 of the 9 columns and pops the next number
//!    from each picked column's queue.
//!
//! A column is popped at most once per row and holds 3 numbers, so with 3 rows a
//! queue never runs dry; the empty-queue case still leaves the cell blank rather
//! than panicking.

use arrayvec::ArrayVec;

use crate::rng::{RandomSource, SimpleRng};
use crate::types::{
    column_range, Cell, NumberSet, NUMBERS_PER_COLUMN, NUMBERS_PER_ROW, TICKET_COLS,
    TICKET_ID_LEN, TICKET_ROWS,
};

/// Ticket grid, indexed `[row][col]`
pub type Grid = [[Cell; TICKET_COLS]; TICKET_ROWS];

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// An immutable Tambola ticket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticket {
    id: String,
    grid: Grid,
}

impl Ticket {
    /// Build a ticket from an explicit grid.
    ///
    /// No layout validation happens here; see [`Ticket::is_well_formed`].
    pub fn new(id: impl Into<String>, grid: Grid) -> Self {
        Self {
            id: id.into(),
            grid,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn row(&self, row: usize) -> Option<&[Cell; TICKET_COLS]> {
        self.grid.get(row)
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.grid.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// All numbers, row-major
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.grid.iter().flat_map(|row| row.iter().flatten().copied())
    }

    /// Numbers in one row, left to right (empty for an out-of-range row)
    pub fn row_numbers(&self, row: usize) -> impl Iterator<Item = u8> + '_ {
        self.grid
            .get(row)
            .into_iter()
            .flat_map(|r| r.iter().flatten().copied())
    }

    pub fn number_count(&self) -> usize {
        self.numbers().count()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers().any(|n| n == number)
    }

    /// How many of this ticket's numbers have been called
    pub fn marked_count(&self, called: &NumberSet) -> usize {
        self.numbers().filter(|&n| called.contains(n)).count()
    }

    /// Every number in `row` has been called.
    pub fn is_row_complete(&self, row: usize, called: &NumberSet) -> bool {
        row < TICKET_ROWS && called.contains_all(self.row_numbers(row))
    }

    /// Lowest-index row whose numbers have all been called
    pub fn first_complete_row(&self, called: &NumberSet) -> Option<usize> {
        (0..TICKET_ROWS).find(|&row| self.is_row_complete(row, called))
    }

    /// Every number on the ticket has been called.
    pub fn is_full_house(&self, called: &NumberSet) -> bool {
        called.contains_all(self.numbers())
    }

    /// Check the layout rules: 5 numbers per row, column ranges, strictly
    /// ascending columns, no duplicates.
    pub fn is_well_formed(&self) -> bool {
        let rows_ok = self
            .grid
            .iter()
            .all(|row| row.iter().flatten().count() == NUMBERS_PER_ROW);
        if !rows_ok {
            return false;
        }

        let mut seen = NumberSet::new();
        for col in 0..TICKET_COLS {
            let range = column_range(col);
            let mut last: Option<u8> = None;
            for row in 0..TICKET_ROWS {
                let Some(n) = self.grid[row][col] else {
                    continue;
                };
                if !range.contains(&n) || !seen.insert(n) {
                    return false;
                }
                if last.is_some_and(|prev| prev >= n) {
                    return false;
                }
                last = Some(n);
            }
        }
        true
    }
}

/// Produces randomly laid-out tickets
#[derive(Debug, Clone)]
pub struct TicketGenerator<R = SimpleRng> {
    rng: R,
}

impl TicketGenerator<SimpleRng> {
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> TicketGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Generate a single ticket
    pub fn generate_ticket(&mut self) -> Ticket {
        let mut supply: [ArrayVec<u8, NUMBERS_PER_COLUMN>; TICKET_COLS] =
            std::array::from_fn(|col| self.column_supply(col));

        let mut grid: Grid = [[None; TICKET_COLS]; TICKET_ROWS];
        for row in grid.iter_mut() {
            for col in self.pick_row_columns() {
                // Popping from the front keeps each column ascending top-to-bottom.
                row[col] = supply[col].pop_at(0);
            }
        }

        let ticket = Ticket::new(self.next_id(), grid);
        debug_assert!(ticket.is_well_formed());
        ticket
    }

    /// Generate `count` tickets (empty for 0)
    pub fn generate_many(&mut self, count: usize) -> Vec<Ticket> {
        (0..count).map(|_| self.generate_ticket()).collect()
    }

    /// Shuffled decade, first 3 kept, sorted ascending.
    fn column_supply(&mut self, col: usize) -> ArrayVec<u8, NUMBERS_PER_COLUMN> {
        let mut candidates: ArrayVec<u8, 10> = column_range(col).collect();
        self.rng.shuffle(&mut candidates);
        let mut picked: ArrayVec<u8, NUMBERS_PER_COLUMN> =
            candidates.iter().take(NUMBERS_PER_COLUMN).copied().collect();
        picked.sort_unstable();
        picked
    }

    /// 5 distinct column indices, ascending.
    fn pick_row_columns(&mut self) -> ArrayVec<usize, NUMBERS_PER_ROW> {
        let mut cols: [usize; TICKET_COLS] = std::array::from_fn(|i| i);
        self.rng.shuffle(&mut cols);
        let mut picked: ArrayVec<usize, NUMBERS_PER_ROW> =
            cols.iter().take(NUMBERS_PER_ROW).copied().collect();
        picked.sort_unstable();
        picked
    }

    fn next_id(&mut self) -> String {
        (0..TICKET_ID_LEN)
            .map(|_| ID_ALPHABET[self.rng.next_range(ID_ALPHABET.len() as u32) as usize] as char)
            .collect()
    }
}
