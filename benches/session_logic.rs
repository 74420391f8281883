use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flipmatch::core::{deck, Session, SessionConfig, SessionRng};
use flipmatch::persist::{decode_snapshot, encode_snapshot};

/// Timer long enough that no benchmark loop can run it out
fn bench_config() -> SessionConfig {
    SessionConfig {
        timer_limit: u32::MAX,
        ..SessionConfig::default()
    }
}

fn bench_deck_build(c: &mut Criterion) {
    c.bench_function("deck_build_8x8", |b| {
        let mut rng = SessionRng::new(12345);
        b.iter(|| {
            deck::build(black_box(64), black_box(64), &mut rng).unwrap();
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(bench_config(), 12345).unwrap();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16));
        })
    });
}

fn bench_select_resolve_cycle(c: &mut Criterion) {
    let mut session = Session::new(bench_config(), 12345).unwrap();

    // A mismatching pair leaves the grid untouched, so the cycle repeats
    let (first, second) = {
        let mut found = (0, 1);
        'outer: for i in 0..session.grid().len() {
            for j in (i + 1)..session.grid().len() {
                if session.card(i).unwrap().face != session.card(j).unwrap().face {
                    found = (i, j);
                    break 'outer;
                }
            }
        }
        found
    };

    c.bench_function("select_resolve_mismatch", |b| {
        b.iter(|| {
            session.select(black_box(first));
            session.select(black_box(second));
            session.tick(black_box(500));
            session.take_events();
        })
    });
}

fn bench_view(c: &mut Criterion) {
    let session = Session::new(bench_config(), 12345).unwrap();
    let mut view = session.view();

    c.bench_function("view_into_reused", |b| {
        b.iter(|| {
            session.view_into(black_box(&mut view));
        })
    });
}

fn bench_snapshot_codec(c: &mut Criterion) {
    let session = Session::new(bench_config(), 12345).unwrap();
    let snapshot = session.snapshot().unwrap();
    let json = encode_snapshot(&snapshot).unwrap();

    c.bench_function("snapshot_encode", |b| {
        b.iter(|| {
            encode_snapshot(black_box(&snapshot)).unwrap();
        })
    });

    c.bench_function("snapshot_decode", |b| {
        b.iter(|| {
            decode_snapshot(black_box(&json)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_deck_build,
    bench_tick,
    bench_select_resolve_cycle,
    bench_view,
    bench_snapshot_codec
);
criterion_main!(benches);
