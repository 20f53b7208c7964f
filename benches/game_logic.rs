use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tambola::core::{GameState, TicketGenerator};
use tambola::engine::GameController;
use tambola::term::{GameView, HudView, Viewport};
use tambola::types::{GameCommand, NumberSet};
use tambola::voice::callout;

fn bench_generate_ticket(c: &mut Criterion) {
    let mut generator = TicketGenerator::with_seed(12345);

    c.bench_function("generate_ticket", |b| {
        b.iter(|| black_box(generator.generate_ticket()))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let tickets = TicketGenerator::with_seed(7).generate_many(6);

    c.bench_function("full_game_6_tickets", |b| {
        b.iter(|| {
            let mut game = GameState::new(black_box(12345));
            game.add_tickets(tickets.iter().cloned());
            game.start();
            while game.draw_number().is_some() {}
            black_box(game.winners().len())
        })
    });
}

fn bench_check_winners(c: &mut Criterion) {
    let ticket = TicketGenerator::with_seed(3).generate_ticket();
    let called: NumberSet = (1..=60).collect();

    c.bench_function("ticket_win_checks", |b| {
        b.iter(|| {
            (
                ticket.first_complete_row(black_box(&called)),
                ticket.is_full_house(black_box(&called)),
            )
        })
    });
}

fn bench_controller_pick(c: &mut Criterion) {
    c.bench_function("controller_90_picks", |b| {
        b.iter(|| {
            let mut ctl = GameController::new(black_box(42));
            ctl.apply(GameCommand::GenerateTickets { count: 6 });
            ctl.apply(GameCommand::StartGame);
            while ctl.is_picking_enabled() {
                ctl.apply(GameCommand::PickNumber);
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut ctl = GameController::new(9);
    ctl.apply(GameCommand::GenerateTickets { count: 6 });
    ctl.apply(GameCommand::StartGame);
    for _ in 0..40 {
        ctl.apply(GameCommand::PickNumber);
    }
    let snap = ctl.snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, &HudView::default(), Viewport::new(120, 40));

    c.bench_function("render_120x40", |b| {
        b.iter(|| {
            view.render_into(
                black_box(&snap),
                &HudView::default(),
                Viewport::new(120, 40),
                &mut fb,
            )
        })
    });
}

fn bench_callout(c: &mut Criterion) {
    c.bench_function("callout_all_numbers", |b| {
        b.iter(|| (1..=90u8).map(|n| callout(black_box(n)).len()).sum::<usize>())
    });
}

criterion_group!(
    benches,
    bench_generate_ticket,
    bench_full_game,
    bench_check_winners,
    bench_controller_pick,
    bench_render,
    bench_callout
);
criterion_main!(benches);
