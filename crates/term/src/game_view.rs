//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! ```text
//!  TAMBOLA   ● PLAYING                               VOICE ON
//! ┌─NUMBERS──────────────────────┐  ┌─PICKER─────────────────┐  TICKETS 2
//! │  1  2  3  4  5  6  7  8  9 10│  │                        │  BATCH   1
//! │ ...                          │  │       ◐  42  ◐         │  WINNERS 1
//! └──────────────────────────────┘  └────────────────────────┘
//!  Called 12/90  Remaining 78
//!  TICKETS
//! ┌─#K3F9A0Q2B──────────────────┐┌─#...
//! │  2 14  · 33  · 55  · 71  ·  ││
//! └─LINE────────────────────────┘└─...
//!  <toast>
//!  <key help>
//! ```

use crate::core::{GameSnapshot, Ticket};
use crate::effects::Toast;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, WinKind, MAX_NUMBER, POOL_SIZE, TICKET_COLS, TICKET_ROWS};

const BLACK: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(110, 110, 120);
const GOLD: Rgb = Rgb::new(255, 215, 0);
const ORANGE: Rgb = Rgb::new(255, 107, 53);
const GREEN: Rgb = Rgb::new(100, 220, 120);
const RED: Rgb = Rgb::new(230, 90, 90);
const HEADER_BG: Rgb = Rgb::new(40, 30, 10);

const BOARD_COLS: u16 = 10;
const BOARD_ROWS: u16 = (MAX_NUMBER as u16) / BOARD_COLS;
const PICKER_W: u16 = 26;
const GAP: u16 = 2;

const HELP: &str = "g generate  +/- batch  s start  space pick  r reset  v voice  q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state drawn alongside the game: nothing here lives in the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudView<'a> {
    pub voice_enabled: bool,
    pub batch: u8,
    pub last_callout: Option<&'a str>,
    pub toast: Option<&'a Toast>,
    pub spin_frame: Option<char>,
}

/// A lightweight terminal renderer for the Tambola board and tickets.
pub struct GameView {
    /// Width of one number cell in terminal columns (at least 3).
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 3 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
        }
    }

    /// Outer width of one ticket box.
    pub fn ticket_width(&self) -> u16 {
        TICKET_COLS as u16 * self.cell_w + 2
    }

    /// Outer width of the 1..=90 board box.
    pub fn board_width(&self) -> u16 {
        BOARD_COLS * self.cell_w + 2
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        self.draw_header(fb, snap, hud, viewport);

        let top = 2;
        let board_w = self.board_width();
        self.draw_board(fb, snap, 0, top);

        let picker_x = board_w + GAP;
        self.draw_picker(fb, snap, hud, picker_x, top);

        let stats_x = picker_x + PICKER_W + GAP;
        self.draw_stats(fb, snap, hud, stats_x, top);

        let counters_y = top + BOARD_ROWS + 2;
        let text = CellStyle::new(TEXT, BLACK);
        let mut x = fb.put_str(1, counters_y, "Called ", text);
        x = fb.put_u32(x, counters_y, snap.called_count() as u32, text.bold());
        x = fb.put_str(x, counters_y, "/", text);
        x = fb.put_u32(x, counters_y, POOL_SIZE as u32, text);
        x = fb.put_str(x, counters_y, "  Remaining ", text);
        fb.put_u32(x, counters_y, snap.remaining as u32, text.bold());

        self.draw_tickets(fb, snap, viewport, counters_y + 1);
        self.draw_footer(fb, hud, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
    ) {
        let bar = CellStyle::new(TEXT, HEADER_BG);
        fb.fill_rect(0, 0, viewport.width, 1, ' ', bar);

        let x = fb.put_str(1, 0, "TAMBOLA", CellStyle::new(GOLD, HEADER_BG).bold());
        let status_fg = match snap.status {
            GameStatus::Waiting => MUTED,
            GameStatus::Playing => GREEN,
            GameStatus::Completed => GOLD,
        };
        let status = CellStyle::new(status_fg, HEADER_BG).bold();
        let x = fb.put_str(x + 3, 0, "● ", status);
        fb.put_str(x, 0, status_label(snap.status), status);

        let voice = if hud.voice_enabled { "VOICE ON" } else { "VOICE OFF" };
        let voice_fg = if hud.voice_enabled { GREEN } else { MUTED };
        let vx = viewport.width.saturating_sub(voice.len() as u16 + 1);
        fb.put_str(vx, 0, voice, CellStyle::new(voice_fg, HEADER_BG));
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let border = CellStyle::new(TEXT, BLACK);
        fb.draw_box(x, y, self.board_width(), BOARD_ROWS + 2, Some("NUMBERS"), border);

        for n in 1..=MAX_NUMBER {
            let i = (n - 1) as u16;
            let cx = x + 1 + (i % BOARD_COLS) * self.cell_w;
            let cy = y + 1 + i / BOARD_COLS;
            let style = self.number_style(snap, n);
            self.draw_number_cell(fb, cx, cy, n, style);
        }
    }

    fn draw_picker(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        x: u16,
        y: u16,
    ) {
        let border = CellStyle::new(TEXT, BLACK);
        let h = BOARD_ROWS + 2;
        fb.draw_box(x, y, PICKER_W, h, Some("PICKER"), border);

        let inner_w = PICKER_W - 2;
        let mid = x + 1 + inner_w / 2;
        let number_y = y + 2;
        match snap.current_number {
            Some(n) => {
                let style = CellStyle::new(BLACK, GOLD).bold();
                fb.fill_rect(mid - 3, number_y, 6, 1, ' ', style);
                let digits_x = if n < 10 { mid } else { mid - 1 };
                fb.put_u32(digits_x, number_y, n as u32, style);
                if let Some(frame) = hud.spin_frame {
                    let spin = CellStyle::new(ORANGE, BLACK).bold();
                    fb.put_char(mid - 5, number_y, frame, spin);
                    fb.put_char(mid + 4, number_y, frame, spin);
                }
            }
            None => {
                fb.put_str(mid - 1, number_y, "--", CellStyle::new(MUTED, BLACK));
            }
        }

        let label = CellStyle::new(MUTED, BLACK);
        let callout_style = CellStyle::new(TEXT, BLACK).bold();
        fb.put_str(x + 2, y + 4, "Last callout", label);
        if let Some(text) = hud.last_callout {
            for (i, line) in wrap_words(text, (inner_w - 2) as usize).iter().take(3).enumerate() {
                fb.put_str(x + 2, y + 5 + i as u16, line, callout_style);
            }
        } else {
            fb.put_str(x + 2, y + 5, "-", label);
        }

        let (prompt, fg) = if snap.picking_enabled {
            ("[space] Pick Number", GREEN)
        } else {
            match snap.status {
                GameStatus::Waiting => ("[s] Start Game", MUTED),
                GameStatus::Completed => ("Game Complete", GOLD),
                GameStatus::Playing => ("", MUTED),
            }
        };
        let px = x + 1 + inner_w.saturating_sub(prompt.chars().count() as u16) / 2;
        fb.put_str(px, y + h - 2, prompt, CellStyle::new(fg, BLACK).bold());
    }

    fn draw_stats(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        x: u16,
        y: u16,
    ) {
        let label = CellStyle::new(TEXT, BLACK).bold();
        let value = CellStyle::new(TEXT, BLACK);

        fb.put_str(x, y, "TICKETS", label);
        fb.put_u32(x + 8, y, snap.tickets.len() as u32, value);
        fb.put_str(x, y + 1, "BATCH", label);
        fb.put_u32(x + 8, y + 1, hud.batch as u32, value);
        fb.put_str(x, y + 2, "WINNERS", label);
        fb.put_u32(x + 8, y + 2, snap.winners.len() as u32, value);

        // Most recent awards first.
        let rows = BOARD_ROWS.saturating_sub(2);
        for (i, w) in snap.winners.iter().rev().take(rows as usize).enumerate() {
            let wy = y + 4 + i as u16;
            let style = CellStyle::new(kind_color(w.kind), BLACK);
            let wx = fb.put_str(x, wy, "#", style);
            let wx = fb.put_str(wx, wy, &w.ticket_id, style);
            let wx = fb.put_str(wx + 1, wy, w.kind.label(), style.bold());
            fb.put_str(wx + 1, wy, "@", value.dim());
            fb.put_u32(wx + 2, wy, w.draw_count as u32, value.dim());
        }
    }

    fn draw_tickets(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, y: u16) {
        let label = CellStyle::new(TEXT, BLACK).bold();
        let muted = CellStyle::new(MUTED, BLACK);
        let x = fb.put_str(1, y, "TICKETS", label);

        if snap.tickets.is_empty() {
            fb.put_str(1, y + 1, "No tickets yet. Press [g] to generate.", muted);
            return;
        }

        let ticket_w = self.ticket_width();
        let ticket_h = TICKET_ROWS as u16 + 2;
        let per_row = (viewport.width / ticket_w).max(1) as usize;
        // Toast and help lines stay free.
        let bottom = viewport.height.saturating_sub(2);

        let mut shown = 0;
        for (i, ticket) in snap.tickets.iter().enumerate() {
            let tx = (i % per_row) as u16 * ticket_w;
            let ty = y + 1 + (i / per_row) as u16 * ticket_h;
            if ty + ticket_h > bottom {
                break;
            }
            self.draw_ticket(fb, snap, ticket, tx, ty);
            shown += 1;
        }

        let hidden = snap.tickets.len() - shown;
        if hidden > 0 {
            let x = fb.put_str(x + 2, y, "+", muted);
            let x = fb.put_u32(x, y, hidden as u32, muted);
            fb.put_str(x, y, " more", muted);
        }
    }

    fn draw_ticket(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        ticket: &Ticket,
        x: u16,
        y: u16,
    ) {
        let won = snap.has_winner(ticket.id());
        let border = CellStyle::new(if won { GOLD } else { TEXT }, BLACK);
        let mut title = String::with_capacity(ticket.id().len() + 1);
        title.push('#');
        title.push_str(ticket.id());
        fb.draw_box(x, y, self.ticket_width(), TICKET_ROWS as u16 + 2, Some(&title), border);

        for row in 0..TICKET_ROWS {
            for col in 0..TICKET_COLS {
                let cx = x + 1 + col as u16 * self.cell_w;
                let cy = y + 1 + row as u16;
                match ticket.cell(row, col) {
                    Some(n) => self.draw_number_cell(fb, cx, cy, n, self.number_style(snap, n)),
                    None => {
                        let dot = CellStyle::new(MUTED, BLACK).dim();
                        fb.put_char(cx + self.cell_w - 1, cy, '·', dot);
                    }
                }
            }
        }

        // Badges sit on the bottom edge.
        let badge_y = y + TICKET_ROWS as u16 + 1;
        let mut bx = x + 2;
        for kind in snap.win_kinds_for(ticket.id()) {
            let style = CellStyle::new(BLACK, kind_color(kind)).bold();
            bx = fb.put_str(bx, badge_y, kind.label(), style) + 1;
        }
    }

    fn number_style(&self, snap: &GameSnapshot, n: u8) -> CellStyle {
        if snap.current_number == Some(n) {
            CellStyle::new(BLACK, ORANGE).bold()
        } else if snap.called.contains(n) {
            CellStyle::new(BLACK, GOLD).bold()
        } else {
            CellStyle::new(TEXT, BLACK)
        }
    }

    /// Number right-aligned in a `cell_w` wide cell, background filled.
    fn draw_number_cell(&self, fb: &mut FrameBuffer, x: u16, y: u16, n: u8, style: CellStyle) {
        fb.fill_rect(x, y, self.cell_w, 1, ' ', style);
        let digits = if n < 10 { 1 } else { 2 };
        fb.put_u32(x + self.cell_w - digits, y, n as u32, style);
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, hud: &HudView<'_>, viewport: Viewport) {
        if viewport.height < 2 {
            return;
        }
        let toast_y = viewport.height - 2;
        if let Some(toast) = hud.toast {
            let fg = if toast.is_error { RED } else { GREEN };
            let x = fb.put_str(1, toast_y, &toast.title, CellStyle::new(fg, BLACK).bold());
            fb.put_str(x + 1, toast_y, &toast.message, CellStyle::new(TEXT, BLACK));
        }
        fb.put_str(1, viewport.height - 1, HELP, CellStyle::new(MUTED, BLACK).dim());
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Waiting => "WAITING",
        GameStatus::Playing => "PLAYING",
        GameStatus::Completed => "COMPLETED",
    }
}

fn kind_color(kind: WinKind) -> Rgb {
    match kind {
        WinKind::Line => GREEN,
        WinKind::FullHouse => GOLD,
    }
}

/// Greedy word wrap; words longer than `width` are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let split = word.char_indices().nth(width).map_or(word.len(), |(i, _)| i);
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        let needed = if line.is_empty() { 0 } else { 1 } + word.chars().count();
        if line.chars().count() + needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
