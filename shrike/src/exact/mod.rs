/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Exact filter-order search via a dynamic program over filter subsets
//!
//! The surviving document count after a set of filters has run depends
//! only on the set, never on the order its members were applied in.
//! That makes "best completion cost from here" a function of the subset
//! alone, so the optimum over all n! orders is reachable through 2^n
//! subset states:
//!
//! ```text
//! dp[full] = 0
//! dp[s]    = min over f ∉ s of  alive(s) · timing[f] + dp[s ∪ {f}]
//! ```
//!
//! States are processed level by level in decreasing number of applied
//! filters; every state of one level is independent of its siblings and
//! is evaluated in parallel, with a full barrier before the next level
//! starts. `dp[∅]` is the global minimum, and walking argmin successors
//! from the empty state recovers a witnessing order.

pub mod instance;
pub mod optimizer;

pub use optimizer::{ExactOptimizer, ExactSolution, DEFAULT_MAX_FILTERS};
