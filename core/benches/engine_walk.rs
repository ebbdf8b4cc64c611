use criterion::{Criterion, criterion_group, criterion_main};
use pathdraw_core::*;
use std::hint::black_box;

/// Boustrophedon walk covering an open board row by row.
fn snake_targets(size: Coord2) -> Vec<Coord2> {
    let (rows, cols) = size;
    (0..rows)
        .flat_map(|row| {
            (0..cols).map(move |step| {
                let col = if row % 2 == 0 { step } else { cols - 1 - step };
                (row, col)
            })
        })
        .collect()
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake_walk");
    for size in [(10, 10), (32, 32)] {
        let config = GameConfig::open(size, (0, 0)).unwrap();
        let targets = snake_targets(size);
        group.bench_function(format!("{}x{}", size.0, size.1), |b| {
            b.iter(|| {
                let mut state = GameState::initialize(&config).start_game();
                for &target in &targets[1..] {
                    state = state.move_to(black_box(target));
                }
                assert!(state.is_game_won());
                state
            })
        });
    }
    group.finish();
}

fn bench_rejections(c: &mut Criterion) {
    let state = GameState::new().start_game();
    c.bench_function("reject_wall_and_distance", |b| {
        b.iter(|| {
            let far = state.move_to(black_box((5, 5)));
            let same = state.move_to(black_box((0, 0)));
            (far, same)
        })
    });
}

criterion_group!(benches, bench_walk, bench_rejections);
criterion_main!(benches);
