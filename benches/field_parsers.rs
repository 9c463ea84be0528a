//! Benchmarks for the free-text field parsers and the enrichment pipeline

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use incident_processor::RawIncident;
use incident_processor::app::services::incident_parser::{
    derive_temporal, parse_incident_timestamp, parse_location, parse_units,
};
use incident_processor::enrich;

const UNITS_SAMPLES: &[&str] = &[
    "Radio: 9C Units: E1, T1, M1",
    "Units: E1",
    "Radio: 4A Units: E1, E2, L1, BC1, M3",
    "UNKNOWN",
];

const LOCATION_SAMPLES: &[&str] = &[
    "MAIN ST / 2ND ST",
    "100 BLOCK OF MAIN ST, Apt/Unit:4B, Oakview Apts",
    "2400 OAK AVE",
    "9 BAY ST, Harbor Tower, East Wing",
];

fn bench_parsers(c: &mut Criterion) {
    c.bench_function("parse_units", |b| {
        b.iter(|| {
            for raw in UNITS_SAMPLES {
                black_box(parse_units(black_box(raw)));
            }
        })
    });

    c.bench_function("parse_location", |b| {
        b.iter(|| {
            for raw in LOCATION_SAMPLES {
                black_box(parse_location(black_box(raw)));
            }
        })
    });

    c.bench_function("parse_and_derive_temporal", |b| {
        b.iter(|| {
            if let Ok(timestamp) = parse_incident_timestamp(black_box("2024-05-01 14:03:22")) {
                black_box(derive_temporal(&timestamp));
            }
        })
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let raw: Vec<RawIncident> = (0..10_000)
        .map(|i| {
            RawIncident::new(
                format!("2024-{:02}-{:02} {:02}:{:02}:00", i % 12 + 1, i % 28 + 1, i % 24, i % 60),
                if i % 3 == 0 { "FIRE ALARM" } else { "MEDICAL EMERGENCY" },
                LOCATION_SAMPLES[i % LOCATION_SAMPLES.len()],
                UNITS_SAMPLES[i % UNITS_SAMPLES.len()],
            )
        })
        .collect();

    c.bench_function("enrich_10k", |b| {
        b.iter(|| black_box(enrich(raw.clone())))
    });
}

criterion_group!(benches, bench_parsers, bench_pipeline);
criterion_main!(benches);
