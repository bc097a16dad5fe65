/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::OptimizeError;
use shared::filter::{FilterId, TriggerSet};
use shared::tables::{AnnotationTable, TimingTable};

/// Checks the input tables before any optimization starts.
///
/// Every filter id referenced by a trigger set must resolve in the
/// timing table, and every timing value must be a finite, non-negative
/// number. The timing table's key set is the filter universe; a filter
/// with timing that never triggers a document is legal input.
pub fn validate(
    annotations: &AnnotationTable,
    timing: &TimingTable,
) -> Result<(), OptimizeError> {
    for (filter, seconds) in timing.sorted_pairs() {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(OptimizeError::InvalidTiming { filter, seconds });
        }
    }
    for id in annotations.referenced_filters() {
        if timing.get(id).is_none() {
            return Err(OptimizeError::UnknownFilter(id));
        }
    }
    Ok(())
}

/// Cost oracle: simulates sequential application of a filter order and
/// reports the normalized total processing time.
///
/// Only documents with a non-empty trigger set are carried as the
/// cost-bearing population; clean documents never accumulate per-step
/// cost but stay in the normalization denominator. The live groups are
/// snapshotted in trigger-set order at construction, so the floating
/// point accumulation sequence is identical across runs.
pub struct Evaluator<'a> {
    live: Vec<(&'a TriggerSet, u64)>,
    timing: &'a TimingTable,
    total_docs: u64,
}

impl<'a> Evaluator<'a> {
    /// Validates the tables and snapshots the live population
    pub fn new(
        annotations: &'a AnnotationTable,
        timing: &'a TimingTable,
    ) -> Result<Self, OptimizeError> {
        validate(annotations, timing)?;
        Ok(Evaluator {
            live: annotations.live_sorted(),
            timing,
            total_docs: annotations.total_documents(),
        })
    }

    /// Total simulated processing time of `order`, divided by the total
    /// sampled document count. A table with no documents costs zero for
    /// any order.
    pub fn cost(&self, order: &[FilterId]) -> f64 {
        if self.total_docs == 0 {
            return 0.0;
        }

        let mut survivors = self.live.clone();
        let mut total_time = 0.0;
        for &filter in order {
            let docs_to_process: u64 = survivors.iter().map(|&(_, docs)| docs).sum();
            let seconds = self.timing.get(filter).unwrap_or(0.0);
            total_time += docs_to_process as f64 * seconds;
            survivors.retain(|&(set, _)| !set.contains(filter));
        }

        total_time / self.total_docs as f64
    }
}

/// One-shot convenience wrapper around [`Evaluator`]
pub fn evaluate(
    order: &[FilterId],
    annotations: &AnnotationTable,
    timing: &TimingTable,
) -> Result<f64, OptimizeError> {
    Ok(Evaluator::new(annotations, timing)?.cost(order))
}
