// Rust guideline compliant 2026-10-16

use chrono::{Duration, FixedOffset, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cycletime_core::{build_report, build_timelines, Config, IssueDocument};
use serde_json::json;

const STATUSES: [&str; 9] = [
    "Neu",
    "Specification",
    "Ready for development",
    "In Progress",
    "Re-Work",
    "In Code Review",
    "Approval",
    "Done",
    "Closed",
];

fn build_document(count: usize) -> IssueDocument {
    let base = FixedOffset::east_opt(3600)
        .expect("valid offset")
        .with_ymd_and_hms(2024, 1, 1, 8, 0, 0)
        .single()
        .expect("unambiguous time");

    let issues: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            // Histories are emitted newest first, as the tracker does.
            let histories: Vec<serde_json::Value> = STATUSES
                .iter()
                .enumerate()
                .rev()
                .map(|(step, status)| {
                    let created = base + Duration::hours((i * 3 + step * 7) as i64);
                    json!({
                        "created": created.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string(),
                        "items": [
                            {"field": "assignee", "toString": "bench"},
                            {"field": "status", "toString": status}
                        ]
                    })
                })
                .collect();
            json!({
                "key": format!("PROJ-{}", i),
                "fields": {"issuetype": {"name": "Story"}},
                "changelog": {"histories": histories}
            })
        })
        .collect();

    serde_json::from_value(json!({ "issues": issues })).expect("valid document")
}

fn bench_build_timelines(c: &mut Criterion) {
    let document = build_document(1000);
    c.bench_function("build_timelines_1000", |b| {
        b.iter(|| black_box(build_timelines(&document.issues)))
    });
}

fn bench_build_report(c: &mut Criterion) {
    let document = build_document(1000);
    let config = Config::default();
    c.bench_function("build_report_1000", |b| {
        b.iter(|| black_box(build_report(&document, &config)))
    });
}

fn bench_render_csv(c: &mut Criterion) {
    let document = build_document(1000);
    let report = build_report(&document, &Config::default()).expect("report builds");
    c.bench_function("render_csv_1000", |b| b.iter(|| black_box(report.to_csv())));
}

criterion_group!(
    benches,
    bench_build_timelines,
    bench_build_report,
    bench_render_csv
);
criterion_main!(benches);
