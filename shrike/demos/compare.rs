/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use shared::dictionary::FilterDictionary;
use shared::filter::TriggerSet;
use shared::tables::{AnnotationTable, TimingTable};
use shrike::comparator::compare;
use shrike::exact::ExactOptimizer;
use shrike::heuristics::AnnealingSchedule;

fn main() {
    let mut dictionary = FilterDictionary::new();
    let url = dictionary.encode("url_filter");
    let gopher = dictionary.encode("gopher_quality");
    let dedup = dictionary.encode("exact_dedup");
    let lang = dictionary.encode("language_id");

    // 1000 sampled documents: 620 clean, the rest caught by various
    // filter combinations
    let annotations = AnnotationTable::from_pairs([
        (TriggerSet::empty(), 620),
        (TriggerSet::from_ids([url]), 90),
        (TriggerSet::from_ids([gopher]), 120),
        (TriggerSet::from_ids([url, gopher]), 45),
        (TriggerSet::from_ids([dedup]), 70),
        (TriggerSet::from_ids([lang, gopher]), 40),
        (TriggerSet::from_ids([lang]), 15),
    ]);

    // Mean measured seconds per document
    let timing = TimingTable::from_pairs([
        (url, 0.002),
        (gopher, 0.031),
        (dedup, 0.140),
        (lang, 0.018),
    ]);

    let report = compare(
        &annotations,
        &timing,
        &ExactOptimizer::new(),
        &AnnealingSchedule::default(),
        42,
    )
    .unwrap();

    println!(
        "greedy:    cost {:.6}  order {:?}",
        report.greedy_cost,
        dictionary.decode_order(&report.greedy_order)
    );
    println!(
        "refined:   cost {:.6}  order {:?}",
        report.refined_cost,
        dictionary.decode_order(&report.refined_order)
    );
    println!(
        "optimal:   cost {:.6}  order {:?}",
        report.optimal_cost,
        dictionary.decode_order(&report.optimal_order)
    );
    println!(
        "gaps: greedy {:.2}%  refined {:.2}%",
        report.greedy_gap_pct, report.refined_gap_pct
    );
}
