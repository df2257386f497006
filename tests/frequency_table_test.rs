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

use topfreq::FrequencyTable;

#[test]
fn test_empty_table() {
    let table = FrequencyTable::build(&[]);
    assert!(table.is_empty());
    assert_eq!(table.num_distinct(), 0);
    assert_eq!(table.num_values(), 0);
    assert_eq!(table.count(1), 0);
    assert_eq!(table.iter().count(), 0);
}

#[test]
fn test_counts_duplicates_exactly() {
    let table = FrequencyTable::build(&[3, -1, 3, 3, -1, 0]);
    assert!(!table.is_empty());
    assert_eq!(table.num_distinct(), 3);
    assert_eq!(table.num_values(), 6);
    assert_eq!(table.count(3), 3);
    assert_eq!(table.count(-1), 2);
    assert_eq!(table.count(0), 1);
    assert_eq!(table.count(42), 0);
}

#[test]
fn test_counts_sum_to_input_length() {
    let input: Vec<i64> = (0..100).map(|i| i % 13).collect();
    let table = FrequencyTable::build(&input);

    let total: u64 = table.iter().map(|(_, count)| count).sum();
    assert_eq!(total, table.num_values());
    assert_eq!(total, input.len() as u64);
}

#[test]
fn test_one_entry_per_distinct_value() {
    let input = [5, 5, 5, 5, 8, 8, 13];
    let table = FrequencyTable::build(&input);

    let mut seen: Vec<i64> = table.iter().map(|(value, _)| value).collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![5, 8, 13]);
    for (value, count) in table.iter() {
        assert!(count > 0);
        assert_eq!(count, table.count(value));
    }
}

#[test]
fn test_growth_past_initial_capacity() {
    // far beyond the initial map size, forcing repeated doubling
    let input: Vec<i64> = (0..10_000).flat_map(|i| [i, i]).collect();
    let table = FrequencyTable::build(&input);

    assert_eq!(table.num_distinct(), 10_000);
    assert_eq!(table.num_values(), 20_000);
    for value in [0, 1, 4_999, 9_999] {
        assert_eq!(table.count(value), 2);
    }
}

#[test]
fn test_extreme_key_values() {
    let table = FrequencyTable::build(&[i64::MIN, i64::MAX, i64::MIN, 0]);
    assert_eq!(table.num_distinct(), 3);
    assert_eq!(table.count(i64::MIN), 2);
    assert_eq!(table.count(i64::MAX), 1);
    assert_eq!(table.count(0), 1);
}
