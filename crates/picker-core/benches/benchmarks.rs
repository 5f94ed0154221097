use criterion::{criterion_group, criterion_main, Criterion};
use picker_core::{filter, CaseMode, Catalog, SectionIndex};
use std::hint::black_box;

fn bench_index(c: &mut Criterion) {
    let catalog = Catalog::bundled().expect("bundled catalog");
    let preferred = catalog.resolve_codes(&["NG", "GH", "KE"]).expect("preferred");

    c.bench_function("build_index", |b| {
        b.iter(|| SectionIndex::build(black_box(catalog.countries()), &[], None, false))
    });

    c.bench_function("build_index_preferred", |b| {
        b.iter(|| {
            SectionIndex::build(
                black_box(catalog.countries()),
                black_box(&preferred),
                Some("Preferred"),
                false,
            )
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let catalog = Catalog::bundled().expect("bundled catalog");
    let index = SectionIndex::build(catalog.countries(), &[], None, false);
    let keystrokes = ["S", "Sa", "Sai", "Sain", "Saint", "Saint "];

    c.bench_function("search_keystrokes_exact", |b| {
        b.iter(|| {
            for q in keystrokes {
                black_box(filter(black_box(q), &index, false, CaseMode::Exact));
            }
        })
    });

    c.bench_function("search_keystrokes_folded", |b| {
        b.iter(|| {
            for q in keystrokes {
                black_box(filter(black_box(q), &index, false, CaseMode::Folded));
            }
        })
    });
}

criterion_group!(benches, bench_index, bench_search);
criterion_main!(benches);
