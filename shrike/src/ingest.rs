/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Builds the optimizer's input tables from the artifacts a pipeline
//! run leaves behind: JSON document records annotated with the filters
//! that would have caught them, and an execution log with per-step
//! timings.

use crate::error::OptimizeError;
use regex::Regex;
use serde_json::Value;
use shared::dictionary::FilterDictionary;
use shared::filter::TriggerSet;
use shared::tables::{AnnotationTable, TimingTable};

/// Aggregates trigger-set counts from JSON document records.
///
/// Each line is one document; its `metadata.filter_anno` field names
/// the filters that would remove it, either as an object keyed by
/// filter token or as an array of tokens. Records without the
/// annotation count as clean documents. Tokens are interned through the
/// dictionary so names and ids stay consistent with the timing side.
pub fn annotations_from_records<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    dictionary: &mut FilterDictionary,
) -> Result<AnnotationTable, OptimizeError> {
    let mut table = AnnotationTable::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: Value = serde_json::from_str(line)
            .map_err(|e| OptimizeError::MalformedRecord(e.to_string()))?;

        let anno = record.get("metadata").and_then(|m| m.get("filter_anno"));
        let set = match anno {
            None | Some(Value::Null) => TriggerSet::empty(),
            Some(Value::Object(map)) => map
                .keys()
                .map(|token| dictionary.encode(token))
                .collect(),
            Some(Value::Array(tokens)) => {
                let mut ids = Vec::with_capacity(tokens.len());
                for token in tokens {
                    let id = match token {
                        Value::String(name) => dictionary.encode(name),
                        Value::Number(number) => dictionary.encode(&number.to_string()),
                        other => {
                            return Err(OptimizeError::MalformedRecord(format!(
                                "unsupported filter_anno entry: {}",
                                other
                            )))
                        }
                    };
                    ids.push(id);
                }
                TriggerSet::from_ids(ids)
            }
            Some(other) => {
                return Err(OptimizeError::MalformedRecord(format!(
                    "unsupported filter_anno shape: {}",
                    other
                )))
            }
        };

        table.record(set, 1);
    }

    Ok(table)
}

/// Scrapes per-step costs out of a pipeline execution log.
///
/// Matches blocks of the form
///
/// ```text
/// Step 3 (url_filter)
///     Spent 12.80 seconds
/// ```
///
/// and keys each cost by the step number token, interned through the
/// same dictionary the annotations use.
pub fn timing_from_log(log_text: &str, dictionary: &mut FilterDictionary) -> TimingTable {
    let pattern = Regex::new(r"Step (\d+)[^\n]*\n\s+Spent\s+(\d+\.\d+)").unwrap();

    let mut timing = TimingTable::new();
    for captures in pattern.captures_iter(log_text) {
        let id = dictionary.encode(&captures[1]);
        let seconds = captures[2].parse::<f64>().unwrap_or(0.0);
        timing.set(id, seconds);
    }
    timing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::validate;
    use shared::filter::FilterId;

    #[test]
    fn test_object_keyed_annotations() {
        let lines = [
            r#"{"text": "a", "metadata": {"filter_anno": {"0": 0.91, "2": 0.4}}}"#,
            r#"{"text": "b", "metadata": {"filter_anno": {"2": 0.1, "0": 0.7}}}"#,
            r#"{"text": "c", "metadata": {}}"#,
        ];
        let mut dictionary = FilterDictionary::new();
        let table = annotations_from_records(lines, &mut dictionary).unwrap();

        assert_eq!(table.total_documents(), 3);
        // Both annotated records share one trigger set, key order aside
        assert_eq!(table.len(), 2);
        let live = table.live_sorted();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].1, 2);
    }

    #[test]
    fn test_array_annotations_and_clean_records() {
        let lines = [
            r#"{"metadata": {"filter_anno": [1, 0]}}"#,
            r#"{"metadata": {"filter_anno": []}}"#,
            r#"{"other": true}"#,
        ];
        let mut dictionary = FilterDictionary::new();
        let table = annotations_from_records(lines, &mut dictionary).unwrap();

        assert_eq!(table.total_documents(), 3);
        // Two clean documents: the empty array and the bare record
        let live = table.live_sorted();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].0.len(), 2);
    }

    #[test]
    fn test_malformed_record_is_an_error() {
        let mut dictionary = FilterDictionary::new();
        assert!(matches!(
            annotations_from_records(["not json"], &mut dictionary),
            Err(OptimizeError::MalformedRecord(_))
        ));
        assert!(matches!(
            annotations_from_records(
                [r#"{"metadata": {"filter_anno": "oops"}}"#],
                &mut dictionary
            ),
            Err(OptimizeError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_timing_log_scrape() {
        let log_text = "\
Starting pipeline with 3 steps
Step 0 (url_filter) finished
    Spent 12.80 seconds
Step 1 (word_len_filter) finished
    Spent 3.25 seconds
Step 2 (gopher_repetition) finished
    Spent 140.01 seconds
Wrote 17 shards
";
        let mut dictionary = FilterDictionary::new();
        let timing = timing_from_log(log_text, &mut dictionary);

        assert_eq!(timing.len(), 3);
        let id = dictionary.lookup("1").unwrap();
        assert_eq!(timing.get(id), Some(3.25));
    }

    #[test]
    fn test_records_and_log_share_one_id_space() {
        let log_text = "Step 0 ok\n  Spent 1.50\nStep 1 ok\n  Spent 2.00\n";
        let mut dictionary = FilterDictionary::new();
        let timing = timing_from_log(log_text, &mut dictionary);

        let lines = [
            r#"{"metadata": {"filter_anno": {"0": 1}}}"#,
            r#"{"metadata": {"filter_anno": {"1": 1, "0": 1}}}"#,
            r#"{"metadata": {}}"#,
        ];
        let table = annotations_from_records(lines, &mut dictionary).unwrap();

        assert!(validate(&table, &timing).is_ok());
        assert_eq!(
            table.referenced_filters().into_iter().collect::<Vec<_>>(),
            vec![FilterId(0), FilterId(1)]
        );
    }
}
