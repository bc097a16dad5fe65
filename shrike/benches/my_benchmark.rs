/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

extern crate criterion;
extern crate shrike;

use criterion::*;
use shared::filter::{FilterId, TriggerSet};
use shared::tables::{AnnotationTable, TimingTable};
use shrike::exact::ExactOptimizer;
use shrike::heuristics::{greedy, lookahead, refine, AnnealingSchedule};

const FILTERS: u32 = 12;

// Synthetic corpus sample: document d is caught by the filters whose
// index divides one of its residues, which yields overlapping trigger
// sets of mixed size plus a clean slice.
fn setup_tables() -> (AnnotationTable, TimingTable) {
    let mut annotations = AnnotationTable::new();
    for doc in 0..4000u32 {
        let mut ids = Vec::new();
        for filter in 0..FILTERS {
            if doc % (filter + 2) == filter {
                ids.push(FilterId(filter));
            }
        }
        annotations.record(TriggerSet::from_ids(ids), 1);
    }

    let timing = TimingTable::from_pairs(
        (0..FILTERS).map(|f| (FilterId(f), 0.05 + 0.37 * f as f64 % 1.9)),
    );
    (annotations, timing)
}

fn bench_heuristics(c: &mut Criterion) {
    let (annotations, timing) = setup_tables();

    c.bench_function("greedy_12_filters", |b| {
        b.iter(|| greedy(black_box(&annotations), black_box(&timing)).unwrap())
    });

    c.bench_function("lookahead_12_filters", |b| {
        b.iter(|| lookahead(black_box(&annotations), black_box(&timing)).unwrap())
    });

    let schedule = AnnealingSchedule {
        max_iterations: 500,
        ..AnnealingSchedule::default()
    };
    c.bench_function("refine_12_filters_500_iters", |b| {
        b.iter(|| {
            refine(
                black_box(&annotations),
                black_box(&timing),
                &schedule,
                7,
            )
            .unwrap()
        })
    });
}

fn bench_exact(c: &mut Criterion) {
    let (annotations, timing) = setup_tables();
    let optimizer = ExactOptimizer::new();

    c.bench_function("exact_12_filters_4096_states", |b| {
        b.iter(|| {
            optimizer
                .solve(black_box(&annotations), black_box(&timing))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_heuristics, bench_exact);
criterion_main!(benches);
