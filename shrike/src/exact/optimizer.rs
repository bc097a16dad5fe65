/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::instance::{states_at_weight, CompiledInstance};
use crate::error::OptimizeError;
use crate::evaluator::Evaluator;
use log::debug;
use rayon::prelude::*;
use shared::filter::FilterId;
use shared::tables::{AnnotationTable, TimingTable};

/// Default cap on the exact search; 2^24 states of 8 bytes each
pub const DEFAULT_MAX_FILTERS: usize = 24;

/// Subset states are u64 bitmasks, so the cap can never exceed this
const MASK_LIMIT: usize = 63;

/// A provably minimal-cost order and its normalized cost
#[derive(Debug, Clone, PartialEq)]
pub struct ExactSolution {
    pub order: Vec<FilterId>,
    pub cost: f64,
}

/// Exact optimizer over all 2^n filter subsets.
///
/// Memory and time are O(2^n); `max_filters` bounds the state space and
/// a run over a larger universe fails fast instead of exhausting
/// memory.
#[derive(Debug, Clone)]
pub struct ExactOptimizer {
    max_filters: usize,
}

impl Default for ExactOptimizer {
    fn default() -> Self {
        ExactOptimizer {
            max_filters: DEFAULT_MAX_FILTERS,
        }
    }
}

impl ExactOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(max_filters: usize) -> Self {
        ExactOptimizer {
            max_filters: max_filters.min(MASK_LIMIT),
        }
    }

    /// Finds the minimal-cost order for the given tables.
    ///
    /// The dynamic program fills a pre-sized table over all subsets,
    /// level by level in decreasing number of applied filters. States
    /// within one level share nothing and are evaluated in parallel;
    /// the sequential write-back after each level is the barrier that
    /// keeps workers off partially-written levels. Any failing state
    /// aborts the whole run. The reported cost is the evaluator's
    /// replay of the reconstructed order, so the two always agree
    /// exactly.
    pub fn solve(
        &self,
        annotations: &AnnotationTable,
        timing: &TimingTable,
    ) -> Result<ExactSolution, OptimizeError> {
        let evaluator = Evaluator::new(annotations, timing)?;
        let instance = CompiledInstance::compile(annotations, timing)?;

        let n = instance.len();
        if n > self.max_filters {
            return Err(OptimizeError::CapacityExceeded {
                filters: n,
                capacity: self.max_filters,
            });
        }
        if n == 0 {
            return Ok(ExactSolution {
                order: Vec::new(),
                cost: evaluator.cost(&[]),
            });
        }

        debug!(
            "exact search: {} filters, {} subset states, {} live groups",
            n,
            1u64 << n,
            instance.groups.len()
        );

        // dp[state] = cheapest completion cost once `state` has run.
        // The full state is the base case and stays at zero.
        let mut dp = vec![0.0f64; 1usize << n];
        for weight in (0..n).rev() {
            let states = states_at_weight(n, weight);
            let values = states
                .par_iter()
                .map(|&state| compute_state(state, &instance, &dp))
                .collect::<Result<Vec<f64>, OptimizeError>>()?;
            for (&state, value) in states.iter().zip(values) {
                dp[state as usize] = value;
            }
        }
        debug!("exact search done, unnormalized optimum {}", dp[0]);

        let order = reconstruct(&instance, &dp)?;
        let cost = evaluator.cost(&order);
        Ok(ExactSolution { order, cost })
    }
}

/// Best completion cost of one subset state, minimizing over every
/// filter not yet applied. Reads only deeper (already written) levels.
fn compute_state(
    state: u64,
    instance: &CompiledInstance,
    dp: &[f64],
) -> Result<f64, OptimizeError> {
    let survivors = instance.alive(state) as f64;

    let mut best: Option<f64> = None;
    for bit in 0..instance.len() {
        let next = state | (1u64 << bit);
        if next == state {
            continue;
        }
        let candidate = survivors * instance.seconds[bit] + dp[next as usize];
        best = Some(match best {
            Some(current) if current <= candidate => current,
            _ => candidate,
        });
    }
    best.ok_or(OptimizeError::NoCandidate { state })
}

/// Walks argmin successors from the empty state. Ties take the lowest
/// filter id; any tying choice extends to an optimal order.
fn reconstruct(
    instance: &CompiledInstance,
    dp: &[f64],
) -> Result<Vec<FilterId>, OptimizeError> {
    let n = instance.len();
    let mut order = Vec::with_capacity(n);
    let mut state = 0u64;

    for _ in 0..n {
        let survivors = instance.alive(state) as f64;

        let mut best: Option<(f64, usize)> = None;
        for bit in 0..n {
            let next = state | (1u64 << bit);
            if next == state {
                continue;
            }
            let total = survivors * instance.seconds[bit] + dp[next as usize];
            if best.map_or(true, |(best_total, _)| total < best_total) {
                best = Some((total, bit));
            }
        }

        let (_, bit) = best.ok_or(OptimizeError::NoCandidate { state })?;
        order.push(instance.filters[bit]);
        state |= 1u64 << bit;
    }

    Ok(order)
}
