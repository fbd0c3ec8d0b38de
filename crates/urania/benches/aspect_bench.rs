use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;
use urania::aspects::{detect_patterns, AspectCalculator, AspectKind, AspectSettings};
use urania::ephemeris::{Body, Position};
use urania::time::J2000;

fn position(body: Body, longitude: f64) -> Position {
    Position {
        body,
        time: J2000,
        longitude,
        latitude: 0.0,
        distance: 1.0,
    }
}

fn bench_calculate_aspect(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let a = position(Body::Sun, 100.0);
    let b = position(Body::Moon, 102.0);

    c.bench_function("calculate_aspect", |bench| {
        bench.iter(|| calculator.calculate_aspect(black_box(&a), black_box(&b)))
    });
}

fn bench_calculate_all(c: &mut Criterion) {
    let mut orb_settings = HashMap::new();
    orb_settings.insert(AspectKind::Conjunction, 8.0);
    orb_settings.insert(AspectKind::Opposition, 8.0);
    orb_settings.insert(AspectKind::Trine, 7.0);
    orb_settings.insert(AspectKind::Square, 6.0);
    orb_settings.insert(AspectKind::Sextile, 4.0);

    let calculator = AspectCalculator::with_settings(AspectSettings {
        orb_settings,
        only_major: false,
    });

    let positions: Vec<Position> = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, &body)| position(body, i as f64 * 30.0))
        .collect();

    c.bench_function("calculate_all", |bench| {
        bench.iter(|| calculator.calculate_all(black_box(&positions)))
    });

    let aspects = calculator.calculate_all(&positions);
    c.bench_function("detect_patterns", |bench| {
        bench.iter(|| detect_patterns(black_box(&aspects), black_box(&positions)))
    });
}

criterion_group!(benches, bench_calculate_aspect, bench_calculate_all);
criterion_main!(benches);
