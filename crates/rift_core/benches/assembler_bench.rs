use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rift_core::{Player, Rank, Role, TeamAssembler};

/// Build a pool of `size` players cycling through lanes and ranks, with
/// enough champion variety that most teams complete.
fn build_pool(size: usize) -> Vec<Player> {
    (0..size)
        .map(|i| {
            Player::new(
                format!("Player{}", i),
                Role::ALL[i % Role::ALL.len()],
                Rank::LADDER[i % Rank::LADDER.len()],
                format!("Champion{}", i % 40),
            )
        })
        .collect()
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");

    for size in [50usize, 250, 1000] {
        let pool = build_pool(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |b, pool| {
            b.iter(|| TeamAssembler::assemble(black_box(pool)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
