/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use clap::{Parser, ValueEnum};
use shared::dictionary::FilterDictionary;
use shrike::comparator::compare;
use shrike::exact::ExactOptimizer;
use shrike::heuristics::{greedy, refine, AnnealingSchedule};
use shrike::ingest::{annotations_from_records, timing_from_log};
use shrike::{evaluate, DEFAULT_MAX_FILTERS};

#[derive(Parser)]
#[command(
    name = "shrike-cli",
    version = "0.1.0",
    author = "Volodymyr Kadzhaia <vkadzhaia@gmail.com>",
    author = "Pieter Bonte <pieter.bonte@kuleuven.be>",
    about = "A CLI tool for shrike",
    long_about = "Shrike CLI - orders a document-filtering pipeline from a file of annotated document records and a pipeline timing log, so cheap high-yield filters run before expensive ones."
)]
struct Args {
    #[arg(short, long, help = "JSONL file of annotated document records", value_name = "FILE")]
    annotations: String,

    #[arg(short, long, help = "Pipeline execution log with per-step timings", value_name = "FILE")]
    timing_log: String,

    #[arg(short, long, value_enum, default_value = "compare", help = "Optimizer to run")]
    mode: Mode,

    #[arg(long, default_value_t = DEFAULT_MAX_FILTERS, help = "Exact search capacity bound")]
    max_filters: usize,

    #[arg(long, default_value_t = 0, help = "RNG seed for annealing")]
    seed: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Greedy,
    Refine,
    Exact,
    Compare,
}

fn main() {
    let args = Args::parse();

    let record_text = std::fs::read_to_string(&args.annotations)
        .expect("Cannot open annotation records file");
    let log_text =
        std::fs::read_to_string(&args.timing_log).expect("Cannot open timing log file");

    let mut dictionary = FilterDictionary::new();
    let timing = timing_from_log(&log_text, &mut dictionary);
    let annotations = match annotations_from_records(record_text.lines(), &mut dictionary) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Failed to read annotation records: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "{} filters, {} sampled documents",
        timing.len(),
        annotations.total_documents()
    );

    let result = run(&args, &annotations, &timing, &dictionary);
    if let Err(e) = result {
        eprintln!("Optimization failed: {}", e);
        std::process::exit(1);
    }
}

fn run(
    args: &Args,
    annotations: &shared::tables::AnnotationTable,
    timing: &shared::tables::TimingTable,
    dictionary: &FilterDictionary,
) -> Result<(), shrike::OptimizeError> {
    let schedule = AnnealingSchedule::default();

    match args.mode {
        Mode::Greedy => {
            let order = greedy(annotations, timing)?;
            let cost = evaluate(&order, annotations, timing)?;
            println!("greedy order: {:?}", dictionary.decode_order(&order));
            println!("cost: {:.6}", cost);
        }
        Mode::Refine => {
            let (order, cost) = refine(annotations, timing, &schedule, args.seed)?;
            println!("refined order: {:?}", dictionary.decode_order(&order));
            println!("cost: {:.6}", cost);
        }
        Mode::Exact => {
            let optimizer = ExactOptimizer::with_capacity(args.max_filters);
            let solution = optimizer.solve(annotations, timing)?;
            println!("optimal order: {:?}", dictionary.decode_order(&solution.order));
            println!("cost: {:.6}", solution.cost);
        }
        Mode::Compare => {
            let optimizer = ExactOptimizer::with_capacity(args.max_filters);
            let report = compare(annotations, timing, &optimizer, &schedule, args.seed)?;
            println!(
                "greedy:  {:.6}  ({:+.2}%)  {:?}",
                report.greedy_cost,
                report.greedy_gap_pct,
                dictionary.decode_order(&report.greedy_order)
            );
            println!(
                "refined: {:.6}  ({:+.2}%)  {:?}",
                report.refined_cost,
                report.refined_gap_pct,
                dictionary.decode_order(&report.refined_order)
            );
            println!(
                "optimal: {:.6}  {:?}",
                report.optimal_cost,
                dictionary.decode_order(&report.optimal_order)
            );
        }
    }
    Ok(())
}
