use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{
    Board, GameOutcome, OpeningPolicy, Player, Position, best_move, calculate_move,
};

fn bench_best_move_empty_board() {
    black_box(best_move(black_box(&Board::new()), Player::X));
}

fn bench_best_move_mid_game() {
    let mut board = Board::new();
    let moves = [
        (1, 1, Player::X),
        (0, 0, Player::O),
        (2, 1, Player::X),
    ];
    for (row, col, player) in moves {
        let _ = board.place(Position::new(row, col), player);
    }

    black_box(best_move(black_box(&board), Player::O));
}

fn bench_self_play_game() {
    let mut rng = SessionRng::new(7);
    let mut board = Board::new();
    let mut player = Player::X;

    while board.evaluate() == GameOutcome::InProgress {
        let Ok(pos) = calculate_move(&board, player, OpeningPolicy::Random, &mut rng) else {
            break;
        };
        let _ = board.place(pos, player);
        player = player.opponent();
    }

    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(10);

    group.bench_function("best_move_empty", |b| {
        b.iter(bench_best_move_empty_board)
    });

    group.bench_function("best_move_mid_game", |b| {
        b.iter(bench_best_move_mid_game)
    });

    group.bench_function("self_play_game", |b| {
        b.iter(bench_self_play_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
