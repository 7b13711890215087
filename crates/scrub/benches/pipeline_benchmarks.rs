//! Pipeline performance benchmarks.
//!
//! Measures parsing and the full cleaning pass across different table sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use scrub::transform::{Deduplicator, Transform, parse_datetime};
use scrub::{NullSink, Parser, Pipeline, Writer};

/// Generate a messy CSV with duplicates, gaps, text noise and outliers.
fn generate_messy_csv(rows: usize) -> String {
    let mut data = String::from("id,name,city,signup_date,score\n");

    for row in 0..rows {
        // Every 20th row repeats its predecessor.
        let id = if row % 20 == 19 { row - 1 } else { row };
        let name = match id % 4 {
            0 => format!("  user {} ", id % 50),
            1 => format!("USER {}", id % 50),
            2 => String::new(),
            _ => format!("uSeR {}", id % 50),
        };
        let city = if id % 7 == 0 { "" } else { ["nyc", "la", "SF"][id % 3] };
        let date = match id % 5 {
            0 => format!("2024-{:02}-{:02}", (id % 12) + 1, (id % 28) + 1),
            1 => format!("{:02}/{:02}/2024", (id % 12) + 1, (id % 28) + 1),
            2 => "not a date".to_string(),
            3 => format!("Jan {} 2024", (id % 28) + 1),
            _ => String::new(),
        };
        let score = match id % 11 {
            0 => String::new(),
            10 => "10000".to_string(),
            _ => format!("{:.1}", 50.0 + (id % 40) as f64),
        };

        data.push_str(&format!("{},{},{},{},{}\n", id, name, city, date, score));
    }

    data
}

/// Benchmark CSV parsing with type inference.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_messy_csv(*rows);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let parser = Parser::new();
            b.iter(|| black_box(parser.parse_bytes(data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark the full cleaning pass on an in-memory table.
fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");

    for rows in [100, 1_000, 10_000].iter() {
        let table = Parser::new()
            .parse_bytes(generate_messy_csv(*rows).as_bytes())
            .unwrap();

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            let pipeline = Pipeline::new();
            b.iter_with_setup(
                || table.clone(),
                |table| black_box(pipeline.clean(table, &mut NullSink).unwrap()),
            )
        });
    }

    group.finish();
}

/// Benchmark deduplication alone, the only stage hashing whole rows.
fn bench_deduplicate(c: &mut Criterion) {
    let table = Parser::new()
        .parse_bytes(generate_messy_csv(10_000).as_bytes())
        .unwrap();

    c.bench_function("deduplicate_10000", |b| {
        b.iter_with_setup(
            || table.clone(),
            |table| black_box(Deduplicator.apply(table, &mut NullSink).unwrap()),
        )
    });
}

/// Benchmark date parsing over mixed formats.
fn bench_parse_datetime(c: &mut Criterion) {
    let inputs = [
        "2024-01-15",
        "01/15/2024",
        "Jan 15 2024",
        "March 3rd, 2023",
        "2024-01-15T10:30:00Z",
        "20240115",
        "Not A Date",
    ];

    c.bench_function("parse_datetime_mixed", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(parse_datetime(black_box(input)));
            }
        })
    });
}

/// Benchmark serializing a cleaned table.
fn bench_write(c: &mut Criterion) {
    let table = Parser::new()
        .parse_bytes(generate_messy_csv(10_000).as_bytes())
        .unwrap();
    let cleaned = Pipeline::new().clean(table, &mut NullSink).unwrap().table;
    let writer = Writer::new();

    c.bench_function("write_10000", |b| {
        b.iter(|| black_box(writer.to_bytes(&cleaned).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_clean,
    bench_deduplicate,
    bench_parse_datetime,
    bench_write,
);
criterion_main!(benches);
