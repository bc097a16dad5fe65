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
use shared::filter::FilterId;
use shared::tables::{AnnotationTable, TimingTable};

/// One aggregated group of documents sharing a trigger set, with the
/// set compiled down to a bitmask over the instance's filter indexes
#[derive(Debug, Clone, Copy)]
pub(crate) struct TriggerGroup {
    pub mask: u64,
    pub docs: u64,
}

/// The input tables compiled into the dense form the subset search
/// works on: filters sorted ascending (bit `i` stands for the `i`-th
/// filter), per-bit costs, and the live groups as masks.
#[derive(Debug, Clone)]
pub(crate) struct CompiledInstance {
    pub filters: Vec<FilterId>,
    pub seconds: Vec<f64>,
    pub groups: Vec<TriggerGroup>,
    pub total_docs: u64,
}

impl CompiledInstance {
    pub fn compile(
        annotations: &AnnotationTable,
        timing: &TimingTable,
    ) -> Result<Self, OptimizeError> {
        let pairs = timing.sorted_pairs();
        let filters: Vec<FilterId> = pairs.iter().map(|&(id, _)| id).collect();
        let seconds: Vec<f64> = pairs.iter().map(|&(_, secs)| secs).collect();

        let bit_of = |id: FilterId| -> Result<u64, OptimizeError> {
            filters
                .binary_search(&id)
                .map(|bit| 1u64 << bit)
                .map_err(|_| OptimizeError::UnknownFilter(id))
        };

        let mut groups = Vec::new();
        for (set, docs) in annotations.live_sorted() {
            let mut mask = 0u64;
            for id in set.iter() {
                mask |= bit_of(id)?;
            }
            groups.push(TriggerGroup { mask, docs });
        }

        Ok(CompiledInstance {
            filters,
            seconds,
            groups,
            total_docs: annotations.total_documents(),
        })
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Documents still alive once the filters in `state` have run, in
    /// any order: every group whose trigger set misses `state` entirely
    pub fn alive(&self, state: u64) -> u64 {
        self.groups
            .iter()
            .filter(|group| group.mask & state == 0)
            .map(|group| group.docs)
            .sum()
    }
}

/// All subset states of `n` bits with exactly `weight` bits set, in
/// ascending numeric order (Gosper's hack)
pub(crate) fn states_at_weight(n: usize, weight: usize) -> Vec<u64> {
    if weight == 0 {
        return vec![0];
    }
    let limit = 1u64 << n;
    let mut states = Vec::new();
    let mut state = (1u64 << weight) - 1;
    while state < limit {
        states.push(state);
        let carry = state & state.wrapping_neg();
        let ripple = state + carry;
        state = (((ripple ^ state) >> 2) / carry) | ripple;
    }
    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::filter::TriggerSet;

    fn set(ids: &[u32]) -> TriggerSet {
        TriggerSet::from_ids(ids.iter().map(|&i| FilterId(i)))
    }

    fn create_test_instance() -> CompiledInstance {
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
        CompiledInstance::compile(&annotations, &timing).unwrap()
    }

    #[test]
    fn test_alive_ignores_application_order() {
        let instance = create_test_instance();
        // No filters run: all 20 live documents survive
        assert_eq!(instance.alive(0b000), 20);
        // Filter 0 run: groups {0} and {0,1} are gone
        assert_eq!(instance.alive(0b001), 10);
        // Filters {0,1} in either order leave only group {2}
        assert_eq!(instance.alive(0b011), 5);
        assert_eq!(instance.alive(0b111), 0);
    }

    #[test]
    fn test_sparse_filter_ids_compile_densely() {
        let annotations = AnnotationTable::from_pairs([(set(&[40]), 3)]);
        let timing =
            TimingTable::from_pairs([(FilterId(7), 1.0), (FilterId(40), 2.0)]);
        let instance = CompiledInstance::compile(&annotations, &timing).unwrap();
        assert_eq!(instance.filters, vec![FilterId(7), FilterId(40)]);
        // FilterId(40) is bit 1 of a two-filter instance
        assert_eq!(instance.alive(0b10), 0);
        assert_eq!(instance.alive(0b01), 3);
    }

    #[test]
    fn test_unknown_trigger_id_fails_compilation() {
        let annotations = AnnotationTable::from_pairs([(set(&[9]), 1)]);
        let timing = TimingTable::from_pairs([(FilterId(0), 1.0)]);
        assert_eq!(
            CompiledInstance::compile(&annotations, &timing).unwrap_err(),
            OptimizeError::UnknownFilter(FilterId(9))
        );
    }

    #[test]
    fn test_states_at_weight_enumerates_combinations() {
        assert_eq!(states_at_weight(3, 0), vec![0b000]);
        assert_eq!(states_at_weight(3, 1), vec![0b001, 0b010, 0b100]);
        assert_eq!(states_at_weight(3, 2), vec![0b011, 0b101, 0b110]);
        assert_eq!(states_at_weight(3, 3), vec![0b111]);
        // C(6, 3) = 20
        assert_eq!(states_at_weight(6, 3).len(), 20);
        assert!(states_at_weight(6, 3)
            .iter()
            .all(|s| s.count_ones() == 3));
    }
}
