/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Fast orderings for when the exact search is off the table
//!
//! - `greedy`: one pass, ranks filters by removal credit per second
//! - `lookahead`: one pass, ranks filters by net time benefit
//! - `annealing`: stochastic refinement of a seed order
//!
//! All three tie-break on the lowest filter id so repeated runs agree.

pub mod annealing;
pub mod greedy;
pub mod lookahead;

pub use annealing::{anneal, refine, AnnealingSchedule};
pub use greedy::greedy;
pub use lookahead::lookahead;
