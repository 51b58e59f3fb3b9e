//! Benchmarks for similarity and related procedure ranking.
//!
//! Compare rayon against sequential scoring with
//! `cargo bench -p mario-search` and
//! `cargo bench -p mario-search --no-default-features`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mario_search::{find_closest_match, find_related, similarity, SearchResult, COMMON_MEDICAL_TERMS};

const CATEGORIES: &[&str] = &["radiology", "cardiology", "laboratory", "gastroenterology"];
const NAMES: &[&str] = &["MRI Brain", "CT Abdomen", "Stress Test", "Lipid Panel", "Colonoscopy Screening"];

fn create_catalog(count: usize) -> Vec<SearchResult> {
    (0..count)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            let name = NAMES[i % NAMES.len()];
            SearchResult {
                procedure_id: format!("p{}", i),
                procedure_name: format!("{} {}", name, i),
                procedure_slug: format!("procedure-{}", i),
                category_slug: category.to_string(),
                category_name: category.to_string(),
                family_slug: format!("{}-{}", category, i % 7),
                family_name: format!("Family {}", i % 7),
            }
        })
        .collect()
}

fn bench_similarity(c: &mut Criterion) {
    c.bench_function("similarity_single", |b| {
        b.iter(|| similarity(black_box("colonoscpy"), black_box("Colonoscopy")))
    });

    c.bench_function("closest_match_medical_terms", |b| {
        b.iter(|| find_closest_match(black_box("mamogram"), COMMON_MEDICAL_TERMS.iter().copied(), 0.6))
    });
}

fn bench_find_related(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_related");

    for size in [10, 100, 1000, 10000].iter() {
        let all = create_catalog(*size);
        let current: Vec<SearchResult> = all.iter().take(3).cloned().collect();

        group.bench_with_input(BenchmarkId::new("catalog", size), size, |b, _| {
            b.iter(|| find_related(black_box("mri brain"), black_box(&current), black_box(&all), 5))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_similarity, bench_find_related);
criterion_main!(benches);
