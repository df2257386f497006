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

//! Exact frequency counting for integer sequences.
//!
//! [`FrequencyTable`] maps every distinct value of an input sequence to its
//! exact occurrence count. The table is built once, in a single pass, and is
//! immutable afterwards. Unlike a sketch there is no error bound: every
//! distinct value is retained, and the backing map grows as needed.
//!
//! # Usage
//!
//! ```rust
//! use topfreq::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::build(&[5, 5, 5, 2, 2, 9]);
//! assert_eq!(table.count(5), 3);
//! assert_eq!(table.count(1), 0);
//! assert_eq!(table.num_distinct(), 3);
//! assert_eq!(table.num_values(), 6);
//! ```

mod count_hash_map;
mod table;

pub use self::table::FrequencyTable;
pub use self::table::TableIter;
