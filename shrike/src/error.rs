/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use shared::filter::FilterId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// A trigger set references a filter the timing table does not know
    #[error("filter {0} is referenced by annotations but has no timing entry")]
    UnknownFilter(FilterId),

    #[error("filter {filter} has invalid timing {seconds} (must be finite and non-negative)")]
    InvalidTiming { filter: FilterId, seconds: f64 },

    /// The exact search would need 2^filters states, past the configured bound
    #[error("{filters} filters exceed the exact search capacity of {capacity}")]
    CapacityExceeded { filters: usize, capacity: usize },

    /// A subset state had no unapplied filter to extend with; the run aborts
    #[error("no successor candidate for subset state {state:#x}")]
    NoCandidate { state: u64 },

    #[error("malformed annotation record: {0}")]
    MalformedRecord(String),
}
