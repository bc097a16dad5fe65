/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::filter::{FilterId, TriggerSet};
use std::collections::{BTreeSet, HashMap};

/// Aggregated document counts per trigger set, gathered once from a
/// corpus sample and read-only for the lifetime of an optimization run.
///
/// The empty trigger set carries the documents no filter would remove;
/// its count participates in `total_documents` but never in the live
/// population.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnnotationTable {
    counts: HashMap<TriggerSet, u64>,
    total_docs: u64,
}

impl AnnotationTable {
    pub fn new() -> Self {
        AnnotationTable {
            counts: HashMap::new(),
            total_docs: 0,
        }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (TriggerSet, u64)>) -> Self {
        let mut table = AnnotationTable::new();
        for (set, docs) in pairs {
            table.record(set, docs);
        }
        table
    }

    /// Adds `docs` documents sharing the given trigger set
    pub fn record(&mut self, set: TriggerSet, docs: u64) {
        self.total_docs += docs;
        *self.counts.entry(set).or_insert(0) += docs;
    }

    /// Total sampled documents, clean ones included
    pub fn total_documents(&self) -> u64 {
        self.total_docs
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TriggerSet, u64)> {
        self.counts.iter().map(|(set, &docs)| (set, docs))
    }

    /// The removable population: groups with a non-empty trigger set,
    /// in trigger-set order. Sorting here keeps every downstream cost
    /// accumulation deterministic across runs.
    pub fn live_sorted(&self) -> Vec<(&TriggerSet, u64)> {
        let mut live: Vec<(&TriggerSet, u64)> = self
            .counts
            .iter()
            .filter(|(set, _)| !set.is_empty())
            .map(|(set, &docs)| (set, docs))
            .collect();
        live.sort_unstable_by(|a, b| a.0.cmp(b.0));
        live
    }

    /// Every filter id referenced by some trigger set, ascending
    pub fn referenced_filters(&self) -> BTreeSet<FilterId> {
        self.counts
            .keys()
            .flat_map(|set| set.iter())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Measured mean per-document cost of each filter, in seconds. The key
/// set of this table is the filter universe an optimization run orders.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TimingTable {
    seconds: HashMap<FilterId, f64>,
}

impl TimingTable {
    pub fn new() -> Self {
        TimingTable {
            seconds: HashMap::new(),
        }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (FilterId, f64)>) -> Self {
        TimingTable {
            seconds: pairs.into_iter().collect(),
        }
    }

    pub fn set(&mut self, id: FilterId, secs: f64) {
        self.seconds.insert(id, secs);
    }

    pub fn get(&self, id: FilterId) -> Option<f64> {
        self.seconds.get(&id).copied()
    }

    /// The filter universe, ascending
    pub fn filters(&self) -> Vec<FilterId> {
        let mut ids: Vec<FilterId> = self.seconds.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Universe filters with their costs, ascending by id
    pub fn sorted_pairs(&self) -> Vec<(FilterId, f64)> {
        let mut pairs: Vec<(FilterId, f64)> = self
            .seconds
            .iter()
            .map(|(&id, &secs)| (id, secs))
            .collect();
        pairs.sort_unstable_by_key(|&(id, _)| id);
        pairs
    }

    pub fn len(&self) -> usize {
        self.seconds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
    }
}
