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

//! Composite-key ordering of rows.

use std::cmp::Ordering;

use common::{row::Row, Error, Result};

/// Orders rows field by field, from the first column to the last.
///
/// The first field that differs decides the result. Fields at the same
/// position must share a kind and be non-null, anything else is an error
/// rather than a tie.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowComparator;

impl RowComparator {
    pub fn compare(&self, left: &Row, right: &Row) -> Result<Ordering> {
        if left.num_columns() != right.num_columns() {
            return Err(Error::arity_mismatch(
                left.num_columns(),
                right.num_columns(),
            ));
        }

        for (position, (l, r)) in left.iter().zip(right.iter()).enumerate() {
            match l.natural_cmp(r) {
                Some(Ordering::Equal) => continue,
                Some(ordering) => return Ok(ordering),
                None => {
                    return Err(Error::incomparable(
                        position,
                        l.kind().as_str(),
                        r.kind().as_str(),
                    ))
                }
            }
        }

        Ok(Ordering::Equal)
    }

    pub fn sort(&self, rows: &mut [Row]) -> Result<()> {
        self.sort_by_row(rows, |row| row)
    }

    /// Sort `items` by the row `row_of` extracts from each of them.
    ///
    /// All rows are checked against the first one before sorting, so a
    /// single incomparable row fails the whole call.
    pub fn sort_by_row<T, F>(&self, items: &mut [T], row_of: F) -> Result<()>
    where
        F: Fn(&T) -> &Row,
    {
        let Some(first) = items.first() else {
            return Ok(());
        };
        let reference = row_of(first);
        for item in items.iter() {
            self.check_comparable(reference, row_of(item))?;
        }

        // Every pair is comparable now.
        items.sort_by(|a, b| {
            self.compare(row_of(a), row_of(b))
                .unwrap_or(Ordering::Equal)
        });
        Ok(())
    }

    fn check_comparable(&self, reference: &Row, row: &Row) -> Result<()> {
        if reference.num_columns() != row.num_columns() {
            return Err(Error::arity_mismatch(
                reference.num_columns(),
                row.num_columns(),
            ));
        }
        for (position, (l, r)) in reference.iter().zip(row.iter()).enumerate() {
            if l.is_null() || r.is_null() || l.kind() != r.kind() {
                return Err(Error::incomparable(
                    position,
                    l.kind().as_str(),
                    r.kind().as_str(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use common::{datum::Datum, row, ErrorKind};

    use super::*;

    fn sample_rows() -> Vec<Row> {
        vec![
            row![1_i32, "a", 1.0_f64],
            row![1_i32, "a", 2.0_f64],
            row![1_i32, "b", 0.0_f64],
            row![2_i32, "a", -1.0_f64],
            row![-5_i32, "z", 9.0_f64],
        ]
    }

    #[test]
    fn test_reflexive_and_antisymmetric() {
        let comparator = RowComparator;
        let rows = sample_rows();
        for a in &rows {
            assert_eq!(comparator.compare(a, a).unwrap(), Ordering::Equal);
            for b in &rows {
                let ab = comparator.compare(a, b).unwrap();
                let ba = comparator.compare(b, a).unwrap();
                assert_eq!(ab, ba.reverse());
            }
        }
    }

    #[test]
    fn test_first_differing_field_decides() {
        let comparator = RowComparator;
        // Later fields would say otherwise.
        assert_eq!(
            comparator
                .compare(&row![1_i32, "z", 9.0_f64], &row![2_i32, "a", 0.0_f64])
                .unwrap(),
            Ordering::Less
        );
        assert_eq!(
            comparator
                .compare(&row![1_i32, "b", 0.0_f64], &row![1_i32, "a", 9.0_f64])
                .unwrap(),
            Ordering::Greater
        );
        assert_eq!(
            comparator
                .compare(&row![1_i32, "a", 1.0_f64], &row![1_i32, "a", 1.0_f64])
                .unwrap(),
            Ordering::Equal
        );
    }

    #[test]
    fn test_incomparable_fields_fail() {
        let comparator = RowComparator;
        let err = comparator
            .compare(&row![1_i32, "a"], &row![1_i32, 2_i64])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Comparison);

        let null_row = Row::from_datums(vec![Datum::Int32(1), Datum::Null]);
        let err = comparator
            .compare(&null_row, &null_row.clone())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Comparison);

        let err = comparator
            .compare(&row![1_i32], &row![1_i32, 2_i32])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Comparison);
    }

    #[test]
    fn test_sort() {
        let comparator = RowComparator;
        let mut rows = sample_rows();
        comparator.sort(&mut rows).unwrap();
        let expected = vec![
            row![-5_i32, "z", 9.0_f64],
            row![1_i32, "a", 1.0_f64],
            row![1_i32, "a", 2.0_f64],
            row![1_i32, "b", 0.0_f64],
            row![2_i32, "a", -1.0_f64],
        ];
        assert_eq!(rows, expected);

        let mut rows = sample_rows();
        rows.push(row![1_i32, 2_i32, 1.0_f64]);
        let err = comparator.sort(&mut rows).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Comparison);
    }
}
