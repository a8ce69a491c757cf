use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use almanac::constants::MAX_ECCENTRICITY;
use almanac::kepler::{solve_kepler, true_anomaly};

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

fn cases(rng: &mut StdRng, samples: usize, e_min: f64, e_max: f64) -> Vec<(f64, f64)> {
    (0..samples)
        .map(|_| (rand_angle(rng), rng.random_range(e_min..e_max)))
        .collect()
}

/// Planetary regime: e ∈ [0, 0.25)
fn bench_planets(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    c.bench_function("solve_kepler/planets_e<0.25", |b| {
        b.iter_batched(
            || cases(&mut rng, 10_000, 0.0, 0.25),
            |cases| {
                for (m, e) in cases {
                    black_box(solve_kepler(black_box(m), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Comet regime, up to the clamped eccentricity
fn bench_comets(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);

    c.bench_function("solve_kepler/comets_0.9..0.999", |b| {
        b.iter_batched(
            || cases(&mut rng, 10_000, 0.9, MAX_ECCENTRICITY),
            |cases| {
                for (m, e) in cases {
                    let enom = solve_kepler(black_box(m), black_box(e));
                    black_box(true_anomaly(enom, e));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Comet close to perihelion, the slowest convergence of the solver
fn bench_fixed_stress(c: &mut Criterion) {
    let m = 1.0e-3;
    let e = MAX_ECCENTRICITY;

    c.bench_function("solve_kepler/fixed_stress_case", |b| {
        b.iter(|| black_box(solve_kepler(black_box(m), black_box(e))))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planets, bench_comets, bench_fixed_stress
);
criterion_main!(benches);
