//! Headless game: `tambola simulate`.
//!
//! Generates tickets, starts, draws numbers and writes one JSON record per
//! draw followed by a summary record. Output depends only on the
//! configuration (no timestamps), so a seed always reproduces the same lines.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::config::SimulateConfig;
use crate::core::{Ticket, Winner};
use crate::engine::{GameController, Notice};
use crate::types::{GameCommand, TICKET_BATCH_MAX, TICKET_COLS, TICKET_ROWS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Record {
    Draw(DrawRecord),
    Summary(SummaryRecord),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRecord {
    /// 1-based draw index
    pub draw: u8,
    pub number: u8,
    pub callout: String,
    pub remaining: usize,
    pub new_winners: Vec<WinnerRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerRecord {
    pub ticket_id: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<u8>,
    pub draw_count: u8,
}

impl From<&Winner> for WinnerRecord {
    fn from(w: &Winner) -> Self {
        Self {
            ticket_id: w.ticket_id.clone(),
            kind: w.kind.as_str(),
            row: w.row,
            draw_count: w.draw_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketRecord {
    pub id: String,
    pub rows: [[Option<u8>; TICKET_COLS]; TICKET_ROWS],
}

impl From<&Ticket> for TicketRecord {
    fn from(t: &Ticket) -> Self {
        Self {
            id: t.id().to_string(),
            rows: *t.grid(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub seed: u32,
    pub status: &'static str,
    pub tickets: Vec<TicketRecord>,
    pub called: Vec<u8>,
    pub remaining: usize,
    pub winners: Vec<WinnerRecord>,
}

/// Run a simulation and write its records to `out`. Returns the summary.
pub fn run_simulation<W: Write>(config: &SimulateConfig, out: &mut W) -> Result<SummaryRecord> {
    let mut ctl = GameController::new(config.seed);

    let mut left = config.tickets;
    while left > 0 {
        let batch = left.min(TICKET_BATCH_MAX as usize);
        ctl.apply(GameCommand::GenerateTickets { count: batch as u8 });
        left -= batch;
    }
    ctl.apply(GameCommand::StartGame);
    info!(seed = config.seed, tickets = config.tickets, draws = config.draws, "simulation started");

    for draw in 1..=config.draws {
        let Notice::NumberDrawn { number, new_winners } = ctl.apply(GameCommand::PickNumber) else {
            break;
        };
        let record = Record::Draw(DrawRecord {
            draw,
            number,
            callout: ctl.announce(number).to_string(),
            remaining: ctl.game().remaining(),
            new_winners: new_winners.iter().map(WinnerRecord::from).collect(),
        });
        write_record(out, &record, config.pretty)?;
    }

    let game = ctl.game();
    let summary = SummaryRecord {
        seed: config.seed,
        status: game.status().as_str(),
        tickets: game.tickets().iter().map(TicketRecord::from).collect(),
        called: game.called_numbers().to_vec(),
        remaining: game.remaining(),
        winners: game.winners().iter().map(WinnerRecord::from).collect(),
    };
    write_record(out, &Record::Summary(summary.clone()), config.pretty)?;
    out.flush()?;
    info!(called = summary.called.len(), winners = summary.winners.len(), "simulation finished");
    Ok(summary)
}

fn write_record<W: Write>(out: &mut W, record: &Record, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, record)?;
    } else {
        serde_json::to_writer(&mut *out, record)?;
    }
    out.write_all(b"\n")?;
    Ok(())
}
