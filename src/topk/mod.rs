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

//! Exact top-k selection over a frequency table.
//!
//! Given a [`FrequencyTable`] and a positive `k` no larger than the number
//! of distinct values, selection returns the `k` entries with the highest
//! counts, best first. Two strategies are available with the same contract:
//! a size-bounded min-heap and count-indexed buckets. Ties between equal
//! counts always resolve to the smaller value under both.
//!
//! # Usage
//!
//! ```rust
//! use topfreq::frequency::FrequencyTable;
//! use topfreq::topk::Strategy;
//! use topfreq::topk::select_with;
//!
//! let table = FrequencyTable::build(&[4, 4, 6, 6, 6, 1]);
//! let entries = select_with(&table, 2, Strategy::BoundedHeap).unwrap();
//! assert_eq!(entries[0].value(), 6);
//! assert_eq!(entries[0].count(), 3);
//! assert_eq!(entries[1].value(), 4);
//! ```

mod bucket;
mod heap;
mod select;

pub use self::select::Entry;
pub use self::select::Strategy;
pub use self::select::select;
pub use self::select::select_with;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::frequency::FrequencyTable;

/// Returns the `k` most frequent values in `nums`, most frequent first.
///
/// Equal counts order by ascending value. Fails with
/// [`ErrorKind::InputEmpty`] when `nums` is empty and with
/// [`ErrorKind::ArgumentInvalid`] when `k` is zero or exceeds the number of
/// distinct values.
///
/// # Examples
///
/// ```rust
/// let values = topfreq::top_k_frequent(&[1, 1, 1, 2, 2, 3], 2).unwrap();
/// assert_eq!(values, vec![1, 2]);
/// ```
pub fn top_k_frequent(nums: &[i64], k: usize) -> Result<Vec<i64>, Error> {
    if nums.is_empty() {
        return Err(Error::new(ErrorKind::InputEmpty, "input sequence is empty"));
    }
    let table = FrequencyTable::build(nums);
    let entries = select(&table, k)?;
    Ok(entries.iter().map(|entry| entry.value()).collect())
}
