use criterion::{criterion_group, criterion_main, Criterion};
use onsev::{f_measure, match_events};
use pprof::criterion::{Output, PProfProfiler};

/// Synthetic onset track: roughly periodic events with deterministic
/// jitter, the shape onset detectors produce on steady rhythms.
fn synthetic_onsets(count: usize, period: f64, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|index| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let jitter = (state >> 40) as f64 / (1u64 << 24) as f64 * 0.02 - 0.01;
            index as f64 * period + jitter
        })
        .collect()
}

fn benchmark_dense_f_measure(c: &mut Criterion) {
    let reference = synthetic_onsets(20_000, 0.25, 17);
    let estimated = synthetic_onsets(20_000, 0.25, 4242);
    c.bench_function("dense_track_f_measure", |b| {
        b.iter(|| f_measure(&reference, &estimated, 0.05).unwrap())
    });
}

fn benchmark_dense_matching(c: &mut Criterion) {
    let reference = synthetic_onsets(20_000, 0.25, 17);
    let estimated = synthetic_onsets(20_000, 0.25, 4242);
    c.bench_function("dense_track_match_events", |b| {
        b.iter(|| match_events(&reference, &estimated, 0.05).unwrap())
    });
}

fn benchmark_wide_window_matching(c: &mut Criterion) {
    // A window spanning several periods makes every band wide and stresses
    // the augmenting-path search.
    let reference = synthetic_onsets(5_000, 0.25, 91);
    let estimated = synthetic_onsets(5_000, 0.25, 1877);
    c.bench_function("wide_window_match_events", |b| {
        b.iter(|| match_events(&reference, &estimated, 1.0).unwrap())
    });
}

criterion_group!(
    name=onset_metric_benches;
    config = Criterion::default().sample_size(100).with_profiler(PProfProfiler::new(3000, Output::Flamegraph(None)));
    targets =
    benchmark_dense_f_measure,
    benchmark_dense_matching,
    benchmark_wide_window_matching,
);
criterion_main!(onset_metric_benches);
