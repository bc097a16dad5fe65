/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Cost-based ordering optimizer for document-filtering pipelines
//!
//! Given which filters would catch each sampled document and how many
//! seconds each filter costs per document, shrike orders the pipeline
//! so that cheap, high-yield filters shrink the corpus before the
//! expensive ones run. The crate offers:
//!
//! - `evaluator`: the cost oracle scoring any candidate order
//! - `heuristics`: greedy and lookahead single-pass orderings plus a
//!   simulated-annealing refiner
//! - `exact`: a provably optimal subset dynamic program, parallelized
//!   across subset levels
//! - `comparator`: heuristics vs. optimum side by side
//! - `ingest`: table construction from annotation records and timing
//!   logs
//!
//! ## Usage
//!
//! ```rust
//! use shared::filter::{FilterId, TriggerSet};
//! use shared::tables::{AnnotationTable, TimingTable};
//! use shrike::exact::ExactOptimizer;
//!
//! let annotations = AnnotationTable::from_pairs([
//!     (TriggerSet::empty(), 3),
//!     (TriggerSet::from_ids([FilterId(0)]), 7),
//! ]);
//! let timing = TimingTable::from_pairs([(FilterId(0), 2.0)]);
//!
//! let solution = ExactOptimizer::new().solve(&annotations, &timing).unwrap();
//! assert_eq!(solution.cost, 1.4);
//! ```

pub mod comparator;
pub mod error;
pub mod evaluator;
pub mod exact;
pub mod heuristics;
pub mod ingest;

// Re-export main components for convenience
pub use comparator::{compare, optimality_gap_pct, Comparison};
pub use error::OptimizeError;
pub use evaluator::{evaluate, validate, Evaluator};
pub use exact::{ExactOptimizer, ExactSolution, DEFAULT_MAX_FILTERS};
pub use heuristics::{anneal, greedy, lookahead, refine, AnnealingSchedule};
