use collision_warning::{CollisionWarningModule, Scenario};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pose_feed::{PoseSample, Trajectory};

fn approach(samples: usize) -> Trajectory {
    Trajectory::new(
        (0..samples)
            .map(|i| PoseSample {
                timestamp: i as f64 * 0.05,
                lateral_position: 1.5 - 0.001 * i as f64,
                longitudinal_position: 120.0 - 0.05 * i as f64,
                yaw: 0.02,
                ..Default::default()
            })
            .collect(),
    )
    .expect("synthetic trajectory is ordered")
}

fn bench_evaluate(c: &mut Criterion) {
    let module = CollisionWarningModule::default();
    let trajectory = approach(2000);

    c.bench_function("evaluate_straight_2000", |b| {
        b.iter(|| module.evaluate(Scenario::Straight, black_box(&trajectory)))
    });
    c.bench_function("evaluate_turn_2000", |b| {
        b.iter(|| module.evaluate(Scenario::Turn, black_box(&trajectory)))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
