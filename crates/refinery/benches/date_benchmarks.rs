//! Date transformer benchmarks.
//!
//! Parsing cost depends on how far down the format list a value matches, so
//! the inputs mix early (ISO) and late (month name) layouts.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use refinery::{Column, fix_date_values, fix_state_values};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

fn generate_date_column(rows: usize) -> Column {
    let values = (0..rows).map(|row| {
        let month = row % 12 + 1;
        let day = row % 28 + 1;
        match row % 4 {
            0 => format!("2023-{:02}-{:02}", month, day),
            1 => format!("{:02}/{:02}/2023", month, day),
            2 => format!("{} {}, 2023", MONTHS[month - 1], day),
            _ => "not a date".to_string(),
        }
    });
    Column::from_strings("when", values)
}

/// Benchmark parse plus render across column sizes.
fn bench_parse_and_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("date_parse_format");

    for rows in [100, 1_000, 10_000].iter() {
        let column = generate_date_column(*rows);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &column, |b, column| {
            b.iter(|| black_box(fix_date_values(column, "mm/dd/yyyy")))
        });
    }

    group.finish();
}

/// Benchmark state lookups, including the full directory scan for misses.
fn bench_states(c: &mut Criterion) {
    let values = ["ny", "California", "district of columbia", "zz", "TX"];
    let column = Column::from_strings("state", (0..1_000).map(|i| values[i % values.len()]));

    c.bench_function("state_code_1000", |b| {
        b.iter(|| black_box(fix_state_values(&column, "state_code")))
    });
}

criterion_group!(benches, bench_parse_and_format, bench_states);
criterion_main!(benches);
