// Criterion benchmarks for Morada Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use morada_algo::core::calculate_buy_score;
use morada_algo::models::{
    PropertyListing, PropertyType, RelocationReason, RenovationTolerance, ScoringParams,
    StayDuration, SurveyAnswers, Urgency,
};
use morada_algo::{Analyzer, PropertyCatalog};

fn create_answers() -> SurveyAnswers {
    SurveyAnswers {
        name: "Bench Respondent".to_string(),
        monthly_budget: 3000.0,
        available_down_payment: 150_000.0,
        desired_neighborhoods: vec!["Centro".to_string(), "Muchila".to_string()],
        relocation_reason: RelocationReason::Investment,
        intended_stay_duration: StayDuration::ThreeToSevenYears,
        desired_bedrooms: 2,
        renovation_tolerance: RenovationTolerance::Partial,
        urgency: Urgency::OneToThreeMonths,
        property_type: PropertyType::Apartment,
        contact_opt_in: true,
    }
}

fn create_listing(id: usize) -> PropertyListing {
    PropertyListing {
        id: format!("P{:04}", id),
        title: format!("Listing {}", id),
        neighborhood: if id % 3 == 0 { "Centro" } else { "Tomba" }.to_string(),
        sale_price: 200_000.0 + (id % 10) as f64 * 50_000.0,
        monthly_rent: 900.0 + (id % 20) as f64 * 100.0,
        bedrooms: 1 + (id % 4) as u8,
        area_sq_m: 45.0 + (id % 15) as f64 * 10.0,
        needs_renovation: id % 7 == 0,
        image_url: None,
    }
}

fn bench_buy_score(c: &mut Criterion) {
    let answers = create_answers();
    let params = ScoringParams::default();

    c.bench_function("buy_score", |b| {
        b.iter(|| calculate_buy_score(black_box(&answers), black_box(&params)));
    });
}

fn bench_builtin_catalog_evaluation(c: &mut Criterion) {
    let analyzer = Analyzer::with_default_params();
    let answers = create_answers();
    let catalog = PropertyCatalog::builtin();

    c.bench_function("evaluate_builtin_catalog", |b| {
        b.iter(|| analyzer.evaluate(black_box(&answers), black_box(catalog.listings())));
    });
}

fn bench_evaluation_scaling(c: &mut Criterion) {
    let analyzer = Analyzer::with_default_params();
    let answers = create_answers();

    let mut group = c.benchmark_group("evaluation");

    for listing_count in [10, 50, 100, 500, 1000].iter() {
        let catalog: Vec<PropertyListing> = (0..*listing_count).map(create_listing).collect();

        group.bench_with_input(
            BenchmarkId::new("evaluate", listing_count),
            listing_count,
            |b, _| {
                b.iter(|| analyzer.evaluate(black_box(&answers), black_box(&catalog)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_buy_score,
    bench_builtin_catalog_evaluation,
    bench_evaluation_scaling
);

criterion_main!(benches);
