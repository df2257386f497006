// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Bounded min-heap selection.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::frequency::FrequencyTable;
use crate::topk::select::Entry;

/// Priority collection capped at `bound` entries. Once full, a push either
/// displaces the lowest-ranked entry or is discarded, so the collection
/// always holds the `bound` highest-ranked entries seen so far.
#[derive(Debug)]
pub(crate) struct BoundedMinHeap {
    bound: usize,
    heap: BinaryHeap<Reverse<Entry>>,
}

impl BoundedMinHeap {
    pub fn new(bound: usize) -> Self {
        assert!(bound > 0, "bound must be positive");
        Self {
            bound,
            heap: BinaryHeap::with_capacity(bound + 1),
        }
    }

    pub fn push(&mut self, entry: Entry) {
        if self.heap.len() < self.bound {
            self.heap.push(Reverse(entry));
            return;
        }
        if let Some(Reverse(lowest)) = self.heap.peek() {
            if entry > *lowest {
                self.heap.pop();
                self.heap.push(Reverse(entry));
            }
        }
    }

    /// Drains the heap into a vector ordered best first.
    pub fn into_sorted_entries(self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .heap
            .into_iter()
            .map(|Reverse(entry)| entry)
            .collect();
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries
    }
}

pub(crate) fn select_by_heap(table: &FrequencyTable, k: usize) -> Vec<Entry> {
    let mut heap = BoundedMinHeap::new(k);
    for (value, count) in table.iter() {
        heap.push(Entry::new(value, count));
    }
    heap.into_sorted_entries()
}
