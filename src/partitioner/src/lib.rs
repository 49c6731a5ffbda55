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

//! Partitioning strategies mapping rows to output partitions.

use std::{fmt::Debug, sync::Arc};

use common::{ensure, row::Row, ConfigBlock, Dataset, Result};

pub mod comparator;
mod factory;
mod hash;
mod identifier;
mod range;

pub use crate::{
    comparator::RowComparator,
    factory::{PartitionerFactory, HASH, RANGE, RESERVED_NAMES, TYPE_CONFIG_NAME, UUID},
    hash::HashPartitioner,
    identifier::{UuidPartitioner, UuidPartitionerConfig},
    range::RangePartitioner,
};

/// Partitioner locates the output partition of a row.
///
/// Once built a partitioner is immutable and shared by every worker, so
/// `partition` must depend on nothing but the row and the state fixed at
/// construction.
pub trait Partitioner: Send + Sync + Debug {
    fn name(&self) -> &str;

    fn num_partitions(&self) -> usize;

    /// Returns an index in `[0, num_partitions)`.
    fn partition(&self, row: &Row) -> Result<usize>;

    /// Locate the partition for each row in `rows`.
    ///
    /// Len of returned value is equal to the one of `rows`.
    fn locate_partitions(&self, rows: &[Row]) -> Result<Vec<usize>> {
        rows.iter().map(|row| self.partition(row)).collect()
    }

    /// Regroup all rows of `dataset` into `num_partitions` partitions.
    fn repartition(&self, dataset: &Dataset) -> Result<Dataset> {
        let num_partitions = self.num_partitions();
        let mut partitions = vec![Vec::new(); num_partitions];
        for row in dataset.iter() {
            let idx = self.partition(row)?;
            ensure!(
                idx < num_partitions,
                "partition out of range, partitioner:{}, partition:{idx}, num_partitions:{num_partitions}",
                self.name()
            );
            partitions[idx].push(row.clone());
        }

        Ok(Dataset::new(partitions))
    }
}

pub type PartitionerRef = Arc<dyn Partitioner>;

/// A partitioner that needs a second configuration phase after construction.
///
/// `configure` is called exactly once, before the partitioner is frozen and
/// shared.
pub trait ConfigurablePartitioner: Partitioner {
    fn configure(&mut self, config: &ConfigBlock, existing: &Dataset) -> Result<()>;

    fn freeze(self: Box<Self>) -> PartitionerRef;
}

/// What a partitioner constructor hands back to the factory.
pub enum Constructed {
    /// Ready to use as is.
    Plain(PartitionerRef),
    /// Must be configured before use.
    Configurable(Box<dyn ConfigurablePartitioner>),
}

impl Constructed {
    pub fn plain<P: Partitioner + 'static>(partitioner: P) -> Self {
        Constructed::Plain(Arc::new(partitioner))
    }

    pub fn configurable<P: ConfigurablePartitioner + 'static>(partitioner: P) -> Self {
        Constructed::Configurable(Box::new(partitioner))
    }
}
