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
use crate::evaluator::validate;
use rustc_hash::FxHashMap;
use shared::filter::FilterId;
use shared::tables::{AnnotationTable, TimingTable};

/// Guards the score against a zero-cost filter
const SCORE_EPSILON: f64 = 1e-6;

/// Single-pass ordering by removal credit per second of filter cost.
///
/// Each round scores every unplaced filter as the number of surviving
/// documents it would remove divided by its per-document cost, places
/// the best scorer and drops its catches from the surviving population.
/// Equal scores go to the lowest filter id.
pub fn greedy(
    annotations: &AnnotationTable,
    timing: &TimingTable,
) -> Result<Vec<FilterId>, OptimizeError> {
    validate(annotations, timing)?;

    let mut remaining = timing.sorted_pairs();
    let mut survivors = annotations.live_sorted();
    let mut order = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let mut credits: FxHashMap<FilterId, u64> = FxHashMap::default();
        for &(set, docs) in &survivors {
            for id in set.iter() {
                *credits.entry(id).or_insert(0) += docs;
            }
        }

        // Ascending-id scan with strict improvement: ties keep the
        // lowest filter id.
        let mut best: Option<(f64, usize)> = None;
        for (idx, &(id, seconds)) in remaining.iter().enumerate() {
            let credit = credits.get(&id).copied().unwrap_or(0) as f64;
            let score = credit / (seconds + SCORE_EPSILON);
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, idx));
            }
        }

        let (_, idx) = best.unwrap();
        let (chosen, _) = remaining.remove(idx);
        order.push(chosen);
        survivors.retain(|&(set, _)| !set.contains(chosen));
    }

    Ok(order)
}
