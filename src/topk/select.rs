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

//! Selection entry point and result rows.

use std::cmp::Ordering;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::frequency::FrequencyTable;
use crate::topk::bucket::select_by_buckets;
use crate::topk::heap::select_by_heap;

/// Result row for a selection: a value and its exact occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    value: i64,
    count: u64,
}

impl Entry {
    pub(crate) fn new(value: i64, count: u64) -> Self {
        Self { value, count }
    }

    /// Returns the selected value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Returns the value's occurrence count.
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Entries order by rank: the higher count is greater, and between equal
/// counts the smaller value is greater. Ties between equal counts therefore
/// always resolve the same way, independent of map iteration order.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.value.cmp(&self.value))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Selection strategy. Both strategies return identical output for
/// identical input; they differ only in cost profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Size-bounded min-heap: O(d log k) over d distinct values, O(k)
    /// auxiliary space.
    BoundedHeap,
    /// Count-indexed buckets: O(n) time and auxiliary space over input
    /// length n.
    FrequencyBuckets,
}

/// Selects the `k` highest-count entries with the default strategy
/// ([`Strategy::FrequencyBuckets`]).
pub fn select(table: &FrequencyTable, k: usize) -> Result<Vec<Entry>, Error> {
    select_with(table, k, Strategy::FrequencyBuckets)
}

/// Selects the `k` highest-count entries of `table`, best first.
///
/// The result holds exactly `k` entries ordered by descending count, with
/// equal counts ordered by ascending value.
pub fn select_with(
    table: &FrequencyTable,
    k: usize,
    strategy: Strategy,
) -> Result<Vec<Entry>, Error> {
    if table.is_empty() {
        return Err(Error::new(ErrorKind::InputEmpty, "no values to select from"));
    }
    if k == 0 {
        return Err(Error::new(ErrorKind::ArgumentInvalid, "k must be positive"));
    }
    if k > table.num_distinct() {
        return Err(Error::new(
            ErrorKind::ArgumentInvalid,
            "k exceeds the number of distinct values",
        )
        .with_context("k", k)
        .with_context("num_distinct", table.num_distinct()));
    }
    let entries = match strategy {
        Strategy::BoundedHeap => select_by_heap(table, k),
        Strategy::FrequencyBuckets => select_by_buckets(table, k),
    };
    Ok(entries)
}
