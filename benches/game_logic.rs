use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_tictactoe::core::{rules, Board, GameState};
use tui_tictactoe::replay;
use tui_tictactoe::types::Player;

fn bench_winner_scan(c: &mut Criterion) {
    // Worst case: full board, no winner, all eight lines scanned.
    let x = Some(Player::X);
    let o = Some(Player::O);
    let board = Board::from_cells([x, o, x, x, o, o, o, x, x]);

    c.bench_function("winner_full_board", |b| {
        b.iter(|| rules::winner(black_box(&board)))
    });
}

fn bench_place_and_undo(c: &mut Criterion) {
    c.bench_function("place_undo_cycle", |b| {
        let mut state = GameState::new();
        b.iter(|| {
            state.place(black_box(4));
            state.undo();
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("nine_move_game", |b| {
        b.iter(|| {
            let mut state = GameState::new();
            for idx in [0usize, 1, 2, 4, 3, 5, 7, 6, 8] {
                state.place(black_box(idx));
            }
            state
        })
    });
}

fn bench_codec_round_trip(c: &mut Criterion) {
    let mut state = GameState::new();
    for idx in [4, 0, 8, 2] {
        state.place(idx);
    }
    let url = replay::share_url(replay::DEFAULT_BASE_URL, &state);

    c.bench_function("replay_encode", |b| {
        b.iter(|| replay::encode_state(black_box(&state)))
    });
    c.bench_function("replay_decode", |b| {
        b.iter(|| replay::initial_state(black_box(Some(url.as_str()))))
    });
}

criterion_group!(
    benches,
    bench_winner_scan,
    bench_place_and_undo,
    bench_full_game,
    bench_codec_round_trip
);
criterion_main!(benches);
