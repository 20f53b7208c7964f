//! Terminal Tambola runner (default binary).
//!
//! `tambola [--seed N] [--tickets N] [--no-voice]` plays interactively;
//! `tambola simulate ...` runs a headless game and prints JSON lines.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tambola::config::{parse_simulate_args, AppConfig};
use tambola::engine::{GameController, Notice};
use tambola::input::{should_quit, InputHandler};
use tambola::logging::{self, LogTarget};
use tambola::simulate::run_simulation;
use tambola::term::{Effects, FrameBuffer, GameView, HudView, TerminalRenderer, Toast, Viewport};
use tambola::types::TICK_MS;
use tambola::voice::{backend_or_silent, Announcer, SpeechBackend};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = AppConfig::from_env()?;

    if let Some(sim) = parse_simulate_args(&args, &config)? {
        logging::init(&config.log_filter, LogTarget::Stderr)?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_simulation(&sim, &mut out)?;
        return Ok(());
    }

    config.apply_args(&args)?;
    logging::init(&config.log_filter, LogTarget::file_or_off(config.log_path.clone()))?;

    let backend = backend_or_silent(&config.speech_cmd);
    let announcer = Announcer::new(backend)
        .with_preferences(config.voice_prefer.clone())
        .with_enabled(config.voice);
    let mut ctl = GameController::with_announcer(config.seed, announcer);
    info!(
        seed = ctl.seed(),
        batch = config.batch,
        voice = config.voice,
        "tambola starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut ctl, InputHandler::with_batch(config.batch));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<B: SpeechBackend>(
    term: &mut TerminalRenderer,
    ctl: &mut GameController<B>,
    mut input: InputHandler,
) -> Result<()> {
    let view = GameView::default();
    let mut effects = Effects::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let snap = ctl.snapshot();
            let hud = HudView {
                voice_enabled: ctl.voice_enabled(),
                batch: input.batch(),
                last_callout: ctl.last_callout(),
                toast: effects.toast(),
                spin_frame: effects.spin_frame(),
            };
            view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = input.handle_key(key) {
                        let notice = ctl.apply(command);
                        react(&notice, &mut effects);
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let was_active = effects.is_active();
            let dt = elapsed.as_millis().min(u32::MAX as u128) as u32;
            if let Some(number) = effects.tick(dt) {
                ctl.announce(number);
            }
            dirty |= was_active;
        }
    }
}

/// Presentation side effects of a notice.
fn react(notice: &Notice, effects: &mut Effects) {
    match notice {
        Notice::NumberDrawn {
            number,
            new_winners,
        } => {
            effects.on_number_drawn(*number);
            if new_winners.is_empty() {
                return;
            }
        }
        Notice::GameReset => effects.cancel_draw(),
        _ => {}
    }
    effects.show_toast(Toast::new(notice.title(), notice.message(), notice.is_error()));
}
