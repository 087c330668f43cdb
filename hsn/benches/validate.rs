use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hsn::{ReferenceIndex, Validator};

/// Build a hierarchical synthetic dataset: all two-digit chapters plus
/// random deeper headings extending them
fn synthetic_records(rng: &mut StdRng, target: usize) -> Vec<(String, String)> {
    let mut records = Vec::with_capacity(target);
    for chapter in 1..=99u32 {
        records.push((format!("{chapter:02}"), format!("Chapter {chapter}")));
    }
    while records.len() < target {
        let chapter = rng.gen_range(1..=99u32);
        let mut code = format!("{chapter:02}");
        for _ in 0..rng.gen_range(1..=3) {
            code.push_str(&format!("{:02}", rng.gen_range(0..100u32)));
        }
        records.push((code.clone(), format!("Heading {code}")));
    }
    records
}

fn random_queries(rng: &mut StdRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| match rng.gen_range(0..3) {
            // Registered chapter
            0 => format!("{:02}", rng.gen_range(1..=99u32)),
            // Plausible but probably unregistered heading
            1 => format!("{:06}", rng.gen_range(0..1_000_000u32)),
            // Format failure
            _ => "not-a-code".to_string(),
        })
        .collect()
}

fn bench_validation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let index = ReferenceIndex::build(synthetic_records(&mut rng, 10_000)).unwrap();
    let validator = Validator::new(&index);
    let queries = random_queries(&mut rng, 100);

    c.bench_function("full_validation_hit", |b| {
        b.iter(|| black_box(validator.full_validation(black_box("42"))))
    });

    c.bench_function("full_validation_miss", |b| {
        b.iter(|| black_box(validator.full_validation(black_box("99999999"))))
    });

    c.bench_function("validate_multiple_100", |b| {
        b.iter(|| black_box(validator.validate_multiple(queries.iter())))
    });
}

criterion_group!(benches, bench_validation);
criterion_main!(benches);
