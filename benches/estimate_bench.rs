//! Criterion benchmarks for EstimateCalculator

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use cleanquote::services::PriceGuide;
use cleanquote::{AddOn, CleanType, Condition, EstimateCalculator, EstimateRequest, PetLoad};

/// Recomputing on every keystroke is the hot path
fn bench_estimate(c: &mut Criterion) {
    let calculator = EstimateCalculator::default();

    let mut group = c.benchmark_group("estimate");
    for add_on_count in [0usize, 2, 4] {
        let request = EstimateRequest {
            sqft: 2150.0,
            clean_type: CleanType::Deep,
            condition: Condition::Messy,
            pets: PetLoad::Some,
            add_ons: AddOn::ALL.iter().take(add_on_count).copied().collect(),
        };

        group.bench_with_input(
            BenchmarkId::new("full", format!("{} add-ons", add_on_count)),
            &request,
            |b, req| {
                b.iter(|| calculator.estimate(black_box(req)));
            },
        );
    }
    group.finish();
}

fn bench_price_guide(c: &mut Criterion) {
    let calculator = EstimateCalculator::default();

    c.bench_function("price_guide_all", |b| {
        b.iter(|| PriceGuide::all(black_box(&calculator)));
    });
}

criterion_group!(benches, bench_estimate, bench_price_guide);
criterion_main!(benches);
