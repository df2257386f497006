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

//! Exact frequency table implementation.

use crate::frequency::count_hash_map::CountHashMap;
use crate::frequency::count_hash_map::CountHashMapIter;

const MIN_MAP_SIZE: usize = 8;

/// Exact occurrence counts for every distinct value of an input sequence.
///
/// Built in a single pass and read-only afterwards. Counts are positive and
/// sum to the input length.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    map: CountHashMap,
    num_values: u64,
}

impl FrequencyTable {
    /// Counts every value in `values`.
    pub fn build(values: &[i64]) -> Self {
        let mut map = CountHashMap::new(MIN_MAP_SIZE);
        for &value in values {
            map.adjust_or_put_value(value, 1);
            if map.get_num_active() > map.get_capacity() {
                map.resize(map.get_length() * 2);
            }
        }
        Self {
            map,
            num_values: values.len() as u64,
        }
    }

    /// Returns the number of occurrences of `value`, 0 when absent.
    pub fn count(&self, value: i64) -> u64 {
        self.map.get(value)
    }

    /// Returns the number of distinct values counted.
    pub fn num_distinct(&self) -> usize {
        self.map.get_num_active()
    }

    /// Returns the total number of values counted, duplicates included.
    pub fn num_values(&self) -> u64 {
        self.num_values
    }

    /// Returns true if the table holds no values.
    pub fn is_empty(&self) -> bool {
        self.map.get_num_active() == 0
    }

    /// Iterates over `(value, count)` entries in unspecified order.
    pub fn iter(&self) -> TableIter<'_> {
        TableIter {
            inner: self.map.iter(),
        }
    }
}

/// Iterator over the `(value, count)` entries of a [`FrequencyTable`].
pub struct TableIter<'a> {
    inner: CountHashMapIter<'a>,
}

impl Iterator for TableIter<'_> {
    type Item = (i64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
