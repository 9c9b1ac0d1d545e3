//! Projection benchmarks

use bookz_core::load::LoadState;
use bookz_core::{Book, CatalogProjection, PageState, PriorityList};
use criterion::{criterion_group, criterion_main, Criterion};

fn books(n: usize) -> Vec<Book> {
    (0..n)
        .map(|i| {
            Book::new(
                i.to_string(),
                format!("Study Guide Volume {}", i),
                format!("Author {}", i % 97),
                if i % 2 == 0 { "REASONING" } else { "GENERAL ENGLISH" },
            )
        })
        .collect()
}

fn projection_benchmark(c: &mut Criterion) {
    let books = books(5_000);
    let projection = CatalogProjection::new(6, PriorityList::default());

    c.bench_function("default_first_page", |b| {
        b.iter(|| {
            std::hint::black_box(projection.project(&books, &PageState::new(), &LoadState::Loaded))
        })
    });

    let state = PageState::from_parts("author 4", Some("REASONING".to_string()), 3);
    c.bench_function("filtered_page", |b| {
        b.iter(|| std::hint::black_box(projection.project(&books, &state, &LoadState::Loaded)))
    });
}

criterion_group!(benches, projection_benchmark);
criterion_main!(benches);
