use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stratus_core::ScoreVector;
use stratus_engine::{DesignEngine, DesignRequest};

fn bench_design_full_selection(c: &mut Criterion) {
    let engine = DesignEngine::default();
    let request = DesignRequest::new(
        ScoreVector::new(75, 80, 60, 85, 90, 85),
        "Real-time analytics pipeline",
        "Clickstream analytics with ML scoring and a streaming sensor feed",
    );
    c.bench_function("design_full_selection", |b| {
        b.iter(|| engine.design(black_box(&request)))
    });
}

fn bench_design_golden_scenarios(c: &mut Criterion) {
    let engine = DesignEngine::default();
    let requests: Vec<DesignRequest> = test_fixtures::scenarios()
        .into_iter()
        .map(|s| DesignRequest::new(s.score_vector(), s.focus_category(), s.use_case.clone()))
        .collect();
    c.bench_function("design_golden_scenarios", |b| {
        b.iter(|| {
            for request in &requests {
                black_box(engine.design(request));
            }
        })
    });
}

fn bench_report_to_json(c: &mut Criterion) {
    let engine = DesignEngine::default();
    let report = engine.design(&DesignRequest::new(
        ScoreVector::default(),
        "E-commerce (web & APIs)",
        "checkout API",
    ));
    c.bench_function("report_to_json", |b| b.iter(|| black_box(&report).to_json()));
}

criterion_group!(
    benches,
    bench_design_full_selection,
    bench_design_golden_scenarios,
    bench_report_to_json
);
criterion_main!(benches);
