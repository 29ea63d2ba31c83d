//! Benchmarks for linearization and section splitting.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic analysis results with one table per page.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sectionize::model::{AnalyzeResult, AnalyzedPage, Line, Table, TableCell};
use sectionize::{linearize, split_sections, PageMap, Sectionizer, SplitOptions};

/// Creates a synthetic analysis result with the given number of pages.
fn create_test_analysis(page_count: usize) -> AnalyzeResult {
    let sentence = "Benchmark text for section splitting, with clauses; and words. ";
    let cell_text = "Cell 1 Cell 2 Cell 3 Cell 4";

    let mut content = String::new();
    let mut pages = Vec::new();
    let mut tables = Vec::new();

    for i in 0..page_count {
        let page_start = content.chars().count();
        let prose = sentence.repeat(25);
        content.push_str(&prose);

        let table_start = content.chars().count();
        content.push_str(cell_text);
        content.push_str(&prose);
        let page_len = content.chars().count() - page_start;

        let mut page = AnalyzedPage::new(i as u32 + 1).with_span(page_start, page_len);
        page.add_line(Line::from_words(prose.split_whitespace()));
        pages.push(page);

        let mut table = Table::new(2, 2)
            .on_page(i as u32 + 1)
            .with_span(table_start, cell_text.len());
        for (n, word) in ["Cell 1", "Cell 2", "Cell 3", "Cell 4"].iter().enumerate() {
            table.add_cell(TableCell::new(n / 2, n % 2, *word));
        }
        tables.push(table);
    }

    let mut result = AnalyzeResult::with_content(content);
    for page in pages {
        result.add_page(page);
    }
    for table in tables {
        result.add_table(table);
    }
    result
}

/// Benchmark linearization at various sizes.
fn bench_linearize(c: &mut Criterion) {
    let mut group = c.benchmark_group("linearize");

    for page_count in [1, 10, 50].iter() {
        let analysis = create_test_analysis(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| linearize(black_box(&analysis)));
        });
    }

    group.finish();
}

/// Benchmark section splitting at various sizes.
fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    let options = SplitOptions::default();

    for page_count in [1, 10, 50].iter() {
        let map: PageMap = linearize(&create_test_analysis(*page_count));

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| split_sections(black_box(&map), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the whole pipeline down to records.
fn bench_records(c: &mut Criterion) {
    let analysis = create_test_analysis(10);

    c.bench_function("records_10_pages", |b| {
        b.iter(|| {
            Sectionizer::new()
                .with_source_file("bench.pdf")
                .load_analysis(black_box(&analysis))
                .and_then(|result| result.records())
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_linearize, bench_split, bench_records);
criterion_main!(benches);
