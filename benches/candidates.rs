//! Candidate generation and placement validation on mid-game boards.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use triad_tiles::{GameConfig, GameSession};

/// Play `turns` greedy turns so the board has some shape to it.
fn build_midgame(seed: u64, turns: usize) -> GameSession {
    let mut session = GameSession::new(GameConfig::default().with_seed(seed)).unwrap();
    for _ in 0..turns {
        loop {
            let hand_len = session.hand(session.active_player()).map_or(0, <[_]>::len);
            let next = (0..hand_len)
                .find_map(|i| session.candidates(Some(i)).first().map(|&p| (i, p)));
            match next {
                Some((i, pos)) => session.place(i, pos.x, pos.y).unwrap(),
                None => break,
            }
        }
        session.finish_turn();
    }
    session
}

fn bench_unfiltered(c: &mut Criterion) {
    let session = build_midgame(20260228, 24);
    c.bench_function("candidates.unfiltered", |b| {
        b.iter(|| black_box(session.candidates(None)));
    });
}

fn bench_filtered(c: &mut Criterion) {
    let session = build_midgame(20260228, 24);
    c.bench_function("candidates.filtered_all_hand", |b| {
        b.iter(|| {
            for i in 0..4 {
                black_box(session.candidates(Some(i)));
            }
        });
    });
}

fn bench_dead_cells(c: &mut Criterion) {
    let session = build_midgame(777, 24);
    c.bench_function("hints.dead_cells", |b| {
        b.iter(|| black_box(session.dead_cells()));
    });
}

fn bench_turn_cycle(c: &mut Criterion) {
    c.bench_function("session.place_undo_cycle", |b| {
        b.iter_batched(
            || build_midgame(99, 8),
            |mut session| {
                let pos = session.candidates(Some(0)).first().copied();
                if let Some(pos) = pos {
                    session.place(0, pos.x, pos.y).unwrap();
                    session.undo().unwrap();
                }
                black_box(session)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_unfiltered,
    bench_filtered,
    bench_dead_cells,
    bench_turn_cycle
);
criterion_main!(benches);
