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

//! Count-indexed bucket selection.

use crate::frequency::FrequencyTable;
use crate::topk::select::Entry;

/// Groups values into buckets indexed by their count and scans from the
/// maximum possible count downward until `k` entries are collected. A count
/// cannot exceed the input length, so the bucket array is bounded by it.
pub(crate) fn select_by_buckets(table: &FrequencyTable, k: usize) -> Vec<Entry> {
    let max_count = table.num_values() as usize;
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); max_count + 1];
    for (value, count) in table.iter() {
        buckets[count as usize].push(value);
    }

    let mut selected = Vec::with_capacity(k);
    for count in (1..=max_count).rev() {
        let bucket = &mut buckets[count];
        if bucket.is_empty() {
            continue;
        }
        // ascending order inside a bucket keeps equal-count ties deterministic
        bucket.sort_unstable();
        for &value in bucket.iter() {
            selected.push(Entry::new(value, count as u64));
            if selected.len() == k {
                return selected;
            }
        }
    }
    selected
}
