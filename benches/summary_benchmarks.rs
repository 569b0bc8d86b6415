//! Performance benchmarks for decoding and summarizing proposal documents
//! over synthetic departments of increasing size

use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use proposal_recap::proposal::{decode_document, DecodeOptions, Proposal, Stage};
use proposal_recap::summary::summarize;
use serde_json::{json, Value};
use std::hint::black_box;

fn planning(department: usize) -> Value {
    let activities: Vec<Value> = (0..8)
        .map(|a| {
            json!({
                "code": format!("A{a}"),
                "title": "Kegiatan",
                "subActivityList": (0..5).map(|s| json!({
                    "startedAt": format!("2024-{:02}-01", (a + s) % 12 + 1),
                    "finishedAt": format!("2024-{:02}-28", (a + s) % 12 + 1),
                })).collect::<Vec<_>>(),
                "funding": (0..6).map(|r| json!(["Biaya", "1", "paket", (r * 125_000).to_string()]))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    json!({
        "id": format!("plan-{department}"),
        "department": {"id": format!("d{}", department % 40), "name": "Departemen"},
        "stage": "activity-planning",
        "data": {"activityList": activities},
    })
}

fn disbursement(department: usize) -> Value {
    json!({
        "id": format!("fund-{department}"),
        "department": {"id": format!("d{department}"), "name": "Departemen"},
        "stage": "fund-disbursement",
        "data": {
            "tableTools": (0..20).map(|r| json!(["Alat", "spec", "1", "unit", (r * 10_000).to_string(), (r % 2).to_string()]))
                .collect::<Vec<_>>(),
            "tableIncentive": (0..10).map(|r| json!(["Honor", "Anggota", (r * 5_000).to_string(), "1"]))
                .collect::<Vec<_>>(),
        },
    })
}

fn document(size: usize) -> Value {
    Value::Array(
        (0..size)
            .flat_map(|d| [planning(d), disbursement(d)])
            .collect(),
    )
}

fn decoded(size: usize) -> Vec<Proposal> {
    decode_document(&document(size), &DecodeOptions::default()).unwrap()
}

/// Benchmark boundary decoding
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_document");

    for size in [10, 100, 1000] {
        let doc = document(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| black_box(decode_document(doc, &DecodeOptions::default()).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the per-stage summary builders
fn bench_summarize(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
    let mut group = c.benchmark_group("summarize");

    for size in [10, 100, 1000] {
        let proposals = decoded(size);
        for stage in [Stage::ActivityPlanning, Stage::FundDisbursement] {
            group.bench_with_input(
                BenchmarkId::new(stage.as_str(), size),
                &proposals,
                |b, proposals| {
                    b.iter(|| black_box(summarize(proposals, &stage, now)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_summarize);
criterion_main!(benches);
