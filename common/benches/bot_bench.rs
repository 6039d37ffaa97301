use criterion::{Criterion, criterion_group, criterion_main};
use common::games::SessionRng;
use common::games::n_in_a_row::{
    Board, BotInput, Difficulty, GridBoard, Mark, Position, SparseBoard, calculate_move,
    win_length_for,
};

const SIZE: usize = 19;

fn mid_game_board<B: Board>(mut board: B) -> B {
    let moves = [
        (9, 9, Mark::X), (9, 10, Mark::O), (10, 9, Mark::X), (10, 10, Mark::O),
        (8, 8, Mark::X), (11, 11, Mark::O), (7, 7, Mark::X), (12, 12, Mark::O),
        (8, 10, Mark::X), (10, 8, Mark::O), (11, 9, Mark::X), (9, 11, Mark::O),
    ];
    for (row, col, mark) in moves {
        board.set(Position::new(row, col), mark);
    }
    board
}

fn play_out_bot_game(difficulty: Difficulty) {
    let Ok(mut board) = GridBoard::new(SIZE) else {
        return;
    };
    let mut rng = SessionRng::new(7);
    let mut mark = Mark::X;

    for _ in 0..20 {
        let input = BotInput::new(&board, win_length_for(SIZE), mark);
        let Some(pos) = calculate_move(difficulty, &input, &mut rng) else {
            break;
        };
        board.set(pos, mark);
        mark = mark.opponent().unwrap_or(Mark::X);
    }
}

fn bot_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("bots");
    group.sample_size(20);

    let grid = mid_game_board(GridBoard::new(SIZE).unwrap());
    let sparse = mid_game_board(SparseBoard::new(SIZE).unwrap());

    group.bench_function("medium_single_move_grid", |b| {
        let mut rng = SessionRng::new(1);
        b.iter(|| {
            let input = BotInput::new(&grid, win_length_for(SIZE), Mark::O);
            calculate_move(Difficulty::Medium, &input, &mut rng)
        })
    });

    group.bench_function("medium_single_move_sparse", |b| {
        let mut rng = SessionRng::new(1);
        b.iter(|| {
            let input = BotInput::new(&sparse, win_length_for(SIZE), Mark::O);
            calculate_move(Difficulty::Medium, &input, &mut rng)
        })
    });

    group.bench_function("hard_20_moves", |b| {
        b.iter(|| play_out_bot_game(Difficulty::Hard))
    });

    group.finish();
}

criterion_group!(benches, bot_bench);
criterion_main!(benches);
