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

//! Exact top-k frequent item selection over integer sequences.
//!
//! Given a sequence of integers and a positive `k` no larger than the number
//! of distinct values, the crate returns the k values with the highest
//! occurrence counts. Counting and selection are exact; ties between equal
//! counts always resolve to the smaller value, so results are fully
//! deterministic.
//!
//! # Usage
//!
//! ```rust
//! let values = topfreq::top_k_frequent(&[1, 1, 1, 2, 2, 3], 2).unwrap();
//! assert_eq!(values, vec![1, 2]);
//! ```
//!
//! The frequency table and the selector are also usable on their own, for
//! callers that want counts alongside the selected values or a specific
//! selection strategy. See [`frequency`] and [`topk`].

pub mod error;
pub mod frequency;
pub mod topk;

pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::frequency::FrequencyTable;
pub use self::topk::top_k_frequent;
