use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use report_engine::{build_projection, extract, PlainText, TableOptions};
use report_model::{
    CellValue, ChartDescriptor, ChartType, ColumnDescriptor, ReportMetadata, ReportResponse, Row,
};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A monthly report: one label column plus a "value" field spread over 12 columns.
/// Every third cell is a comma-grouped string so normalization is on the hot path.
fn monthly_report(rows: usize) -> ReportResponse {
    let mut columns = vec![ColumnDescriptor::new("client", "Client")];
    for month in MONTHS {
        columns.push(
            ColumnDescriptor::new(format!("value_{}", month), format!("Value {}", month))
                .computed_from("value")
                .summable(),
        );
    }

    let data = (0..rows)
        .map(|i| {
            let mut row = Row::default();
            row.insert("client".to_string(), CellValue::text(format!("<a href=\"/c/{i}\">Client {i}</a>")));
            for (m, month) in MONTHS.iter().enumerate() {
                let amount = ((i * 31 + m * 7) % 5_000) as f64 + 1_000.25;
                let cell = if (i + m) % 3 == 0 {
                    CellValue::text(report_model::format_decimal(amount, 2, true))
                } else {
                    CellValue::Number(amount)
                };
                row.insert(format!("value_{}", month), cell);
            }
            row
        })
        .collect();

    ReportResponse {
        report_slug: "bench-monthly".to_string(),
        rows: data,
        columns,
        metadata: ReportMetadata {
            time_series_pattern: "monthly".to_string(),
            time_series_column_verbose_names: MONTHS.iter().map(|m| m.to_string()).collect(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_time_series");
    let per_row = ChartDescriptor::new("per-row", ChartType::Line, "Monthly")
        .with_data_source(["value"])
        .with_title_source("client");
    let totals = per_row.clone().plotting_total();

    for rows in [100usize, 1_000, 10_000] {
        let response = monthly_report(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("per_row", rows), &response, |b, r| {
            b.iter(|| extract(black_box(r), black_box(&per_row), &PlainText))
        });
        group.bench_with_input(BenchmarkId::new("plot_total", rows), &response, |b, r| {
            b.iter(|| extract(black_box(r), black_box(&totals), &PlainText))
        });
    }
    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let response = monthly_report(10_000);
    let options = TableOptions::default();
    c.bench_function("build_projection_10k", |b| {
        b.iter(|| build_projection(black_box(&response), &options))
    });
}

criterion_group!(benches, bench_extract, bench_projection);
criterion_main!(benches);
