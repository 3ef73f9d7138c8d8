use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use four_player_chess::game_state::game::Game;
use four_player_chess::game_state::game_state::GameState;
use four_player_chess::move_generation::legal_move_generator::{
    generate_pseudo_moves, FastLegalMoveGenerator,
};
use four_player_chess::move_generation::move_generator::MoveGenerator;
use four_player_chess::utils::simulation::play_random_game;

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));

    let startpos = GameState::new_game();

    // Correctness guard before benchmarking.
    let legal = FastLegalMoveGenerator
        .generate_legal_moves(&startpos)
        .expect("startpos generation should succeed");
    assert_eq!(legal.len(), 20);

    group.bench_function("pseudo_moves_startpos", |b| {
        b.iter(|| generate_pseudo_moves(black_box(&startpos)).len())
    });

    group.bench_function("legal_moves_startpos", |b| {
        b.iter(|| {
            FastLegalMoveGenerator
                .generate_legal_moves(black_box(&startpos))
                .expect("generation should succeed")
                .len()
        })
    });

    group.finish();
}

fn bench_random_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(6));
    group.sample_size(20);

    group.bench_function("random_game_32_plies", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(9);
            let mut game = Game::new();
            let record = play_random_game(&mut game, 32, &mut rng)
                .expect("playout should stay legal");
            black_box(record.len())
        })
    });

    group.finish();
}

criterion_group!(movegen_benches, bench_move_generation, bench_random_playout);
criterion_main!(movegen_benches);
