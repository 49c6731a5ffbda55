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

use std::ops::Index;

use bytes::{Bytes, BytesMut};

use crate::datum::Datum;

/// Row contains multiple columns, each column is represented by a datum.
///
/// Rows are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cols: Vec<Datum>,
}

impl Row {
    pub fn from_datums(cols: Vec<Datum>) -> Self {
        Self { cols }
    }

    pub fn num_columns(&self) -> usize {
        self.cols.len()
    }

    pub fn get(&self, idx: usize) -> Option<&Datum> {
        self.cols.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Datum> {
        self.cols.iter()
    }

    /// Stable byte encoding of the whole row, see [`Datum::encode_to`].
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.cols.len() * 9);
        for datum in &self.cols {
            datum.encode_to(&mut buf);
        }
        buf.freeze()
    }

    /// Hash of the row that is identical on every process and platform.
    pub fn hash64(&self) -> u64 {
        seahash::hash(&self.encode())
    }
}

impl Index<usize> for Row {
    type Output = Datum;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl From<Vec<Datum>> for Row {
    fn from(cols: Vec<Datum>) -> Self {
        Self::from_datums(cols)
    }
}

/// Build a [`Row`] from values convertible into [`Datum`].
///
/// ```
/// let row = common::row![1_i32, "a", 2.5_f64];
/// assert_eq!(row.num_columns(), 3);
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        $crate::row::Row::from_datums(vec![$($crate::datum::Datum::from($value)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable_for_equal_rows() {
        let a = row![1_i32, "abc", 3.5_f64];
        let b = row![1_i32, "abc", 3.5_f64];
        assert_eq!(a.hash64(), b.hash64());
        assert_ne!(a.hash64(), row![1_i32, "abd", 3.5_f64].hash64());
    }

    #[test]
    fn test_index_and_get() {
        let row = Row::from_datums(vec![Datum::Int64(9), Datum::Null]);
        assert_eq!(row[0], Datum::Int64(9));
        assert!(row[1].is_null());
        assert!(row.get(2).is_none());
        assert_eq!(row.iter().count(), 2);
    }
}
