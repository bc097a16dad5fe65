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
use crate::evaluator::Evaluator;
use crate::exact::ExactOptimizer;
use crate::heuristics::{greedy, refine, AnnealingSchedule};
use log::info;
use shared::filter::FilterId;
use shared::tables::{AnnotationTable, TimingTable};

/// Costs and optimality gaps of the heuristics against the exact
/// optimum on one pair of tables
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub greedy_order: Vec<FilterId>,
    pub greedy_cost: f64,
    pub refined_order: Vec<FilterId>,
    pub refined_cost: f64,
    pub optimal_order: Vec<FilterId>,
    pub optimal_cost: f64,
    pub greedy_gap_pct: f64,
    pub refined_gap_pct: f64,
}

/// Relative distance of a heuristic cost from the optimum, in percent.
/// A zero optimum only occurs on tables where every order costs zero,
/// so the gap is zero as well.
pub fn optimality_gap_pct(cost: f64, optimal: f64) -> f64 {
    if optimal == 0.0 {
        0.0
    } else {
        (cost - optimal) / optimal * 100.0
    }
}

/// Runs greedy, lookahead + annealing, and the exact optimizer over the
/// same tables and reports all three costs side by side
pub fn compare(
    annotations: &AnnotationTable,
    timing: &TimingTable,
    exact: &ExactOptimizer,
    schedule: &AnnealingSchedule,
    rng_seed: u64,
) -> Result<Comparison, OptimizeError> {
    let evaluator = Evaluator::new(annotations, timing)?;

    let greedy_order = greedy(annotations, timing)?;
    let greedy_cost = evaluator.cost(&greedy_order);
    info!("greedy cost {:.6}", greedy_cost);

    let (refined_order, refined_cost) = refine(annotations, timing, schedule, rng_seed)?;
    info!("lookahead+annealing cost {:.6}", refined_cost);

    let solution = exact.solve(annotations, timing)?;
    info!("exact optimum {:.6}", solution.cost);

    Ok(Comparison {
        greedy_gap_pct: optimality_gap_pct(greedy_cost, solution.cost),
        refined_gap_pct: optimality_gap_pct(refined_cost, solution.cost),
        greedy_order,
        greedy_cost,
        refined_order,
        refined_cost,
        optimal_order: solution.order,
        optimal_cost: solution.cost,
    })
}
