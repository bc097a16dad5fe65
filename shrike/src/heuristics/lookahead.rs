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
use shared::filter::FilterId;
use shared::tables::{AnnotationTable, TimingTable};

/// Single-pass ordering by net time benefit.
///
/// Each round weighs every unplaced candidate: running it now costs
/// `live_docs × own_timing`, and saves `docs_removed × Σ timings of the
/// other remaining filters`, since removed documents never reach those.
/// The candidate with the largest saving minus cost wins; equal
/// benefits go to the lowest filter id. Once no removable documents
/// survive, the leftover filters are appended in ascending id order;
/// their relative position no longer changes the cost.
pub fn lookahead(
    annotations: &AnnotationTable,
    timing: &TimingTable,
) -> Result<Vec<FilterId>, OptimizeError> {
    validate(annotations, timing)?;

    let mut remaining = timing.sorted_pairs();
    let mut survivors = annotations.live_sorted();
    let mut order = Vec::with_capacity(remaining.len());

    while !survivors.is_empty() && !remaining.is_empty() {
        let live_docs: u64 = survivors.iter().map(|&(_, docs)| docs).sum();
        let remaining_seconds: f64 = remaining.iter().map(|&(_, secs)| secs).sum();

        let mut best: Option<(f64, usize)> = None;
        for (idx, &(id, seconds)) in remaining.iter().enumerate() {
            let docs_removed: u64 = survivors
                .iter()
                .filter(|&&(set, _)| set.contains(id))
                .map(|&(_, docs)| docs)
                .sum();

            let time_cost = live_docs as f64 * seconds;
            let time_saved = docs_removed as f64 * (remaining_seconds - seconds);
            let net_benefit = time_saved - time_cost;

            if best.map_or(true, |(best_benefit, _)| net_benefit > best_benefit) {
                best = Some((net_benefit, idx));
            }
        }

        let (_, idx) = best.unwrap();
        let (chosen, _) = remaining.remove(idx);
        order.push(chosen);
        survivors.retain(|&(set, _)| !set.contains(chosen));
    }

    // Whatever is left removes nothing that still survives
    order.extend(remaining.into_iter().map(|(id, _)| id));
    Ok(order)
}
