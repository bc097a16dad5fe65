/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one filtering step in the pipeline
#[derive(
    PartialEq, Debug, Clone, Copy, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct FilterId(pub u32);

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of filters that would remove a given document.
///
/// Stored as a sorted, deduplicated sequence so that two sets built from
/// the same ids in any order compare and hash identically, which makes
/// the type usable as a map key.
#[derive(
    PartialEq, Debug, Clone, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct TriggerSet(Vec<FilterId>);

impl TriggerSet {
    /// Creates an empty trigger set (a document no filter would remove)
    pub fn empty() -> Self {
        TriggerSet(Vec::new())
    }

    /// Builds a trigger set from ids in any order, with duplicates
    pub fn from_ids(ids: impl IntoIterator<Item = FilterId>) -> Self {
        let mut ids: Vec<FilterId> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        TriggerSet(ids)
    }

    pub fn contains(&self, id: FilterId) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = FilterId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<FilterId> for TriggerSet {
    fn from_iter<I: IntoIterator<Item = FilterId>>(iter: I) -> Self {
        TriggerSet::from_ids(iter)
    }
}
