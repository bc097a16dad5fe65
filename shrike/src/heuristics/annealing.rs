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
use super::lookahead::lookahead;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::filter::FilterId;
use shared::tables::{AnnotationTable, TimingTable};

/// Cooling parameters for the annealing refiner
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingSchedule {
    pub initial_temp: f64,
    pub cooling_rate: f64,
    pub max_iterations: usize,
}

impl Default for AnnealingSchedule {
    fn default() -> Self {
        AnnealingSchedule {
            initial_temp: 100.0,
            cooling_rate: 0.995,
            max_iterations: 5000,
        }
    }
}

/// Refines a seed order by random position swaps under geometric
/// cooling.
///
/// Each iteration swaps two distinct random positions, keeps the
/// candidate when it is cheaper, and otherwise keeps it with
/// probability `exp(-delta / temperature)`. The best order seen is
/// tracked separately, so the result never costs more than the seed.
/// The iteration count is fixed; there is no convergence test. Runs are
/// reproducible for a given `rng_seed`. Orders shorter than two
/// filters are returned unchanged; there is nothing to swap.
pub fn anneal(
    seed_order: &[FilterId],
    annotations: &AnnotationTable,
    timing: &TimingTable,
    schedule: &AnnealingSchedule,
    rng_seed: u64,
) -> Result<(Vec<FilterId>, f64), OptimizeError> {
    let evaluator = Evaluator::new(annotations, timing)?;

    let mut current_order = seed_order.to_vec();
    let mut current_cost = evaluator.cost(&current_order);
    if current_order.len() < 2 {
        return Ok((current_order, current_cost));
    }

    let mut best_order = current_order.clone();
    let mut best_cost = current_cost;
    let mut temp = schedule.initial_temp;
    let mut rng = StdRng::seed_from_u64(rng_seed);

    for _ in 0..schedule.max_iterations {
        // Uniform distinct pair of positions
        let i = rng.gen_range(0..current_order.len());
        let mut j = rng.gen_range(0..current_order.len() - 1);
        if j >= i {
            j += 1;
        }

        let mut candidate = current_order.clone();
        candidate.swap(i, j);
        let candidate_cost = evaluator.cost(&candidate);

        let delta = candidate_cost - current_cost;
        if delta < 0.0 || rng.gen::<f64>() < (-delta / temp).exp() {
            current_order = candidate;
            current_cost = candidate_cost;

            if current_cost < best_cost {
                best_order = current_order.clone();
                best_cost = current_cost;
            }
        }

        temp *= schedule.cooling_rate;
    }

    Ok((best_order, best_cost))
}

/// Lookahead seed plus annealing, the usual refinement pipeline
pub fn refine(
    annotations: &AnnotationTable,
    timing: &TimingTable,
    schedule: &AnnealingSchedule,
    rng_seed: u64,
) -> Result<(Vec<FilterId>, f64), OptimizeError> {
    let seed_order = lookahead(annotations, timing)?;
    anneal(&seed_order, annotations, timing, schedule, rng_seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use shared::filter::TriggerSet;

    fn set(ids: &[u32]) -> TriggerSet {
        TriggerSet::from_ids(ids.iter().map(|&i| FilterId(i)))
    }

    fn create_test_tables() -> (AnnotationTable, TimingTable) {
        let annotations = AnnotationTable::from_pairs([
            (TriggerSet::empty(), 10),
            (set(&[0]), 5),
            (set(&[1]), 5),
            (set(&[0, 1]), 5),
            (set(&[2]), 5),
        ]);
        let timing = TimingTable::from_pairs([
            (FilterId(0), 1.0),
            (FilterId(1), 2.0),
            (FilterId(2), 1.0),
        ]);
        (annotations, timing)
    }

    #[test]
    fn test_never_worse_than_the_seed() {
        let (annotations, timing) = create_test_tables();
        // Deliberately bad seed
        let seed = [FilterId(1), FilterId(2), FilterId(0)];
        let seed_cost = evaluate(&seed, &annotations, &timing).unwrap();
        let schedule = AnnealingSchedule::default();
        for rng_seed in [0, 1, 7, 42] {
            let (order, cost) =
                anneal(&seed, &annotations, &timing, &schedule, rng_seed).unwrap();
            assert!(cost <= seed_cost);
            assert_eq!(cost, evaluate(&order, &annotations, &timing).unwrap());
        }
    }

    #[test]
    fn test_returns_a_full_permutation() {
        let (annotations, timing) = create_test_tables();
        let (order, _) =
            refine(&annotations, &timing, &AnnealingSchedule::default(), 3).unwrap();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, timing.filters());
    }

    #[test]
    fn test_fixed_rng_seed_is_reproducible() {
        let (annotations, timing) = create_test_tables();
        let seed = [FilterId(2), FilterId(1), FilterId(0)];
        let schedule = AnnealingSchedule::default();
        let a = anneal(&seed, &annotations, &timing, &schedule, 11).unwrap();
        let b = anneal(&seed, &annotations, &timing, &schedule, 11).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_filter_is_a_no_op() {
        let annotations = AnnotationTable::from_pairs([(set(&[0]), 7)]);
        let timing = TimingTable::from_pairs([(FilterId(0), 2.0)]);
        let seed = [FilterId(0)];
        let (order, cost) = anneal(
            &seed,
            &annotations,
            &timing,
            &AnnealingSchedule::default(),
            0,
        )
        .unwrap();
        assert_eq!(order, vec![FilterId(0)]);
        assert_eq!(cost, 2.0);
    }

    #[test]
    fn test_empty_universe_is_a_no_op() {
        let annotations = AnnotationTable::new();
        let timing = TimingTable::new();
        let (order, cost) = anneal(
            &[],
            &annotations,
            &timing,
            &AnnealingSchedule::default(),
            0,
        )
        .unwrap();
        assert!(order.is_empty());
        assert_eq!(cost, 0.0);
    }
}
