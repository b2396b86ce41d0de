use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phonefmt::{CountryRecord, PhoneFormatter};

type TestEntity = (&'static str, &'static str);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("375 29 123 45 67", "BY"),
        ("+375 (29) 765-43-21", "BY"),
        ("1 415 555 2671", "US"),
        ("1-800-555-0199", "US"),
        ("44 20 7946 0958", "GB"),
        ("48 512 345 678", "PL"),
    ]
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    let registry = vec![CountryRecord::new(
        ["BY", "375"],
        vec![3, 2, 3, 2, 2],
        "$1 ($2) $3-$4-$5",
    )];

    let mut group = c.benchmark_group("Formatting");

    group.bench_function("phonefmt: country lookup (default registry)", |b| {
        b.iter(|| {
            for (raw, code) in &numbers {
                let mut formatter = PhoneFormatter::new(black_box(*raw));
                formatter.country(black_box(*code), Some("+"), None);
            }
        })
    });

    group.bench_function("phonefmt: country lookup (custom registry)", |b| {
        b.iter(|| {
            let mut formatter = PhoneFormatter::new(black_box("375 29 123 45 67"));
            formatter.country(black_box("BY"), Some("+"), Some(&registry));
        })
    });

    group.bench_function("phonefmt: format with cached grouping", |b| {
        b.iter(|| {
            let mut formatter = PhoneFormatter::new(black_box("375291234567"));
            formatter.format(
                black_box(&[3, 2, 3, 2, 2]),
                black_box("$1 ($2) $3-$4-$5"),
                Some("+"),
            );
        })
    });

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
