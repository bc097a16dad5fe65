/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::filter::FilterId;
use std::collections::HashMap;

// Dictionary for encoding and decoding filter names
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterDictionary {
    name_to_id: HashMap<String, FilterId>,
    id_to_name: HashMap<FilterId, String>,
    next_id: u32,
}

impl FilterDictionary {
    pub fn new() -> Self {
        FilterDictionary {
            name_to_id: HashMap::new(),
            id_to_name: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn encode(&mut self, name: &str) -> FilterId {
        if let Some(&id) = self.name_to_id.get(name) {
            id
        } else {
            let id = FilterId(self.next_id);
            self.name_to_id.insert(name.to_string(), id);
            self.id_to_name.insert(id, name.to_string());
            self.next_id += 1;
            id
        }
    }

    pub fn decode(&self, id: FilterId) -> Option<&str> {
        self.id_to_name.get(&id).map(|s| s.as_str())
    }

    /// Resolves a name without minting a fresh id
    pub fn lookup(&self, name: &str) -> Option<FilterId> {
        self.name_to_id.get(name).copied()
    }

    /// Formats an order of filter ids as their names, unknown ids as raw numbers
    pub fn decode_order(&self, order: &[FilterId]) -> Vec<String> {
        order
            .iter()
            .map(|&id| match self.decode(id) {
                Some(name) => name.to_string(),
                None => id.to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_stable() {
        let mut dict = FilterDictionary::new();
        let a = dict.encode("url_filter");
        let b = dict.encode("gopher");
        assert_eq!(dict.encode("url_filter"), a);
        assert_ne!(a, b);
        assert_eq!(dict.decode(a), Some("url_filter"));
        assert_eq!(dict.lookup("gopher"), Some(b));
        assert_eq!(dict.lookup("missing"), None);
    }

    #[test]
    fn test_decode_order() {
        let mut dict = FilterDictionary::new();
        let a = dict.encode("a");
        let b = dict.encode("b");
        let names = dict.decode_order(&[b, a, FilterId(99)]);
        assert_eq!(names, vec!["b", "a", "99"]);
    }
}
