use criterion::{criterion_group, criterion_main, Criterion};
use hailstats::{aggregate, to_csv, to_summary};
use serde_json::{json, Value};
use std::hint::black_box;

const PANELS: [&str; 4] = ["HOOD", "ROOF", "TRUNK", "DOOR"];
const SIZES: [&str; 6] = ["dime", "nickel", "quarter", "half_dollar", "oversized", "golf_ball"];

fn create_export(task_count: usize) -> Vec<Value> {
    (0..task_count)
        .map(|i| {
            let hail = match i % 3 {
                0 => "YES",
                1 => "NO",
                _ => "MAYBE",
            };
            let dents: Vec<&str> = (0..i % 7).map(|j| SIZES[(i + j) % SIZES.len()]).collect();
            json!({
                "id": i,
                "data": { "image": format!("/data/upload/{i}.jpg") },
                "annotations": [
                    {
                        "created_at": "2024-05-01T10:00:00Z",
                        "result": [{ "from_name": "hail_present", "value": { "choices": ["NO"] } }]
                    },
                    {
                        "created_at": "2024-05-02T10:00:00Z",
                        "completed_by": { "email": "annotator@example.com", "first_name": "A", "last_name": "B" },
                        "result": [
                            { "from_name": "hail_present", "value": { "choices": [hail] } },
                            { "from_name": "primary_panel", "value": { "choices": [PANELS[i % PANELS.len()]] } },
                            { "from_name": "method", "value": { "choices": ["PDR"] } },
                            { "from_name": "dent_boxes", "value": { "rectanglelabels": dents } }
                        ]
                    }
                ]
            })
        })
        .collect()
}

fn benchmark_aggregate(c: &mut Criterion) {
    let export = create_export(10_000);

    c.bench_function("aggregate_10k_tasks", |b| {
        b.iter(|| aggregate(black_box(&export)))
    });
}

fn benchmark_serializers(c: &mut Criterion) {
    let stats = aggregate(&create_export(10_000));

    c.bench_function("to_csv_10k_tasks", |b| {
        b.iter(|| to_csv(black_box(&stats.processed_tasks)))
    });
    c.bench_function("to_summary_10k_tasks", |b| {
        b.iter(|| to_summary(black_box(&stats)))
    });
}

criterion_group!(benches, benchmark_aggregate, benchmark_serializers);
criterion_main!(benches);
