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

//! Open-addressing count map for long keys.

const LOAD_FACTOR: f64 = 0.75;
const DRIFT_LIMIT: usize = 1024;

#[derive(Debug, Clone)]
pub(crate) struct CountHashMap {
    lg_length: u8,
    load_threshold: usize,
    keys: Vec<i64>,
    counts: Vec<u64>,
    occupied: Vec<bool>,
    num_active: usize,
}

impl CountHashMap {
    pub fn new(map_size: usize) -> Self {
        assert!(map_size.is_power_of_two(), "map_size must be power of 2");
        let lg_length = map_size.trailing_zeros() as u8;
        let load_threshold = (map_size as f64 * LOAD_FACTOR) as usize;
        Self {
            lg_length,
            load_threshold,
            keys: vec![0; map_size],
            counts: vec![0; map_size],
            occupied: vec![false; map_size],
            num_active: 0,
        }
    }

    pub fn get(&self, key: i64) -> u64 {
        let probe = self.hash_probe(key);
        if self.occupied[probe] {
            return self.counts[probe];
        }
        0
    }

    pub fn adjust_or_put_value(&mut self, key: i64, adjust_amount: u64) {
        let probe = self.hash_probe(key);
        if self.occupied[probe] {
            self.counts[probe] += adjust_amount;
        } else {
            self.keys[probe] = key;
            self.counts[probe] = adjust_amount;
            self.occupied[probe] = true;
            self.num_active += 1;
        }
    }

    pub fn resize(&mut self, new_size: usize) {
        assert!(new_size.is_power_of_two(), "new_size must be power of 2");
        let old_keys = std::mem::take(&mut self.keys);
        let old_counts = std::mem::take(&mut self.counts);
        let old_occupied = std::mem::take(&mut self.occupied);
        self.keys = vec![0; new_size];
        self.counts = vec![0; new_size];
        self.occupied = vec![false; new_size];
        self.lg_length = new_size.trailing_zeros() as u8;
        self.load_threshold = (new_size as f64 * LOAD_FACTOR) as usize;
        self.num_active = 0;
        for i in 0..old_keys.len() {
            if old_occupied[i] {
                self.adjust_or_put_value(old_keys[i], old_counts[i]);
            }
        }
    }

    pub fn get_length(&self) -> usize {
        self.keys.len()
    }

    pub fn get_capacity(&self) -> usize {
        self.load_threshold
    }

    pub fn get_num_active(&self) -> usize {
        self.num_active
    }

    pub fn iter(&self) -> CountHashMapIter<'_> {
        CountHashMapIter::new(self)
    }

    fn hash_probe(&self, key: i64) -> usize {
        let mask = self.keys.len() - 1;
        let mut probe = (hash_key(key) as usize) & mask;
        let mut drift: usize = 1;
        while self.occupied[probe] && self.keys[probe] != key {
            probe = (probe + 1) & mask;
            drift += 1;
            debug_assert!(drift < DRIFT_LIMIT, "drift limit exceeded");
        }
        probe
    }
}

pub(crate) struct CountHashMapIter<'a> {
    map: &'a CountHashMap,
    index: usize,
    count: usize,
    stride: usize,
    mask: usize,
}

impl<'a> CountHashMapIter<'a> {
    fn new(map: &'a CountHashMap) -> Self {
        let size = map.keys.len();
        let stride = ((size as f64 * 0.6180339887498949) as usize) | 1;
        let mask = size - 1;
        let index = 0usize.wrapping_sub(stride);
        Self {
            map,
            index,
            count: 0,
            stride,
            mask,
        }
    }
}

impl Iterator for CountHashMapIter<'_> {
    type Item = (i64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.count >= self.map.num_active {
            return None;
        }
        loop {
            self.index = self.index.wrapping_add(self.stride) & self.mask;
            if self.map.occupied[self.index] {
                self.count += 1;
                return Some((self.map.keys[self.index], self.map.counts[self.index]));
            }
        }
    }
}

#[inline]
fn hash_key(key: i64) -> u64 {
    let (h1, _) = mur3::murmurhash3_x64_128(&key.to_le_bytes(), 0);
    h1
}

#[cfg(test)]
mod tests {
    use super::CountHashMap;

    #[test]
    fn test_adjust_and_get() {
        let mut map = CountHashMap::new(8);
        map.adjust_or_put_value(42, 1);
        map.adjust_or_put_value(42, 2);
        map.adjust_or_put_value(-7, 1);

        assert_eq!(map.get(42), 3);
        assert_eq!(map.get(-7), 1);
        assert_eq!(map.get(0), 0);
        assert_eq!(map.get_num_active(), 2);
    }

    #[test]
    fn test_resize_preserves_counts() {
        let mut map = CountHashMap::new(8);
        for key in 0..6 {
            map.adjust_or_put_value(key, (key + 1) as u64);
        }
        map.resize(32);

        assert_eq!(map.get_length(), 32);
        assert_eq!(map.get_num_active(), 6);
        for key in 0..6 {
            assert_eq!(map.get(key), (key + 1) as u64);
        }
    }

    #[test]
    fn test_iter_visits_every_active_slot_once() {
        let mut map = CountHashMap::new(16);
        for key in 100..110 {
            map.adjust_or_put_value(key, 1);
        }

        let mut seen: Vec<i64> = map.iter().map(|(key, _)| key).collect();
        seen.sort_unstable();
        assert_eq!(seen, (100..110).collect::<Vec<i64>>());
    }
}
