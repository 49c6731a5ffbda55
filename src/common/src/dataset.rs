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

//! In-process view of a partitioned collection of rows.

use std::sync::Arc;

use crate::{row::Row, Error, Result};

pub type DatasetRef = Arc<Dataset>;

/// An immutable, partitioned multiset of rows.
///
/// Nothing here mutates a dataset in place, operations build new ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    partitions: Vec<Vec<Row>>,
}

impl Dataset {
    pub fn new(partitions: Vec<Vec<Row>>) -> Self {
        Self { partitions }
    }

    /// A dataset without any partition.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Spread `rows` over `num_partitions` partitions in round-robin order.
    pub fn from_rows(rows: impl IntoIterator<Item = Row>, num_partitions: usize) -> Result<Self> {
        if num_partitions == 0 {
            return Err(Error::invalid_config(
                "dataset requires at least one partition",
            ));
        }

        let mut partitions = vec![Vec::new(); num_partitions];
        for (idx, row) in rows.into_iter().enumerate() {
            partitions[idx % num_partitions].push(row);
        }
        Ok(Self { partitions })
    }

    pub fn num_partitions(&self) -> usize {
        self.partitions.len()
    }

    pub fn num_rows(&self) -> usize {
        self.partitions.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub fn partition(&self, idx: usize) -> Option<&[Row]> {
        self.partitions.get(idx).map(Vec::as_slice)
    }

    pub fn partitions(&self) -> &[Vec<Row>] {
        &self.partitions
    }

    /// Iterate all rows, partition by partition.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.partitions.iter().flatten()
    }

    pub fn into_ref(self) -> DatasetRef {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{row, ErrorKind};

    #[test]
    fn test_from_rows_round_robin() {
        let dataset = Dataset::from_rows((0..10_i64).map(|i| row![i]), 3).unwrap();
        assert_eq!(dataset.num_partitions(), 3);
        assert_eq!(dataset.num_rows(), 10);
        assert_eq!(dataset.partition(0).unwrap().len(), 4);
        assert_eq!(dataset.partition(1).unwrap().len(), 3);
        assert_eq!(dataset.partition(2).unwrap().len(), 3);
        assert!(dataset.partition(3).is_none());
        assert_eq!(dataset.partition(1).unwrap()[0], row![1_i64]);
    }

    #[test]
    fn test_empty() {
        let dataset = Dataset::empty();
        assert_eq!(dataset.num_partitions(), 0);
        assert!(dataset.is_empty());
        assert_eq!(dataset.iter().count(), 0);

        let dataset = Dataset::new(vec![vec![], vec![]]);
        assert_eq!(dataset.num_partitions(), 2);
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_from_rows_without_partitions() {
        let err = Dataset::from_rows((0..3_i64).map(|i| row![i]), 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        // No rows and no partitions is still rejected.
        let err = Dataset::from_rows(Vec::new(), 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
