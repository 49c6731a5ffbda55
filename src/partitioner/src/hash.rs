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

use common::{row::Row, Error, Result};

use crate::{factory::HASH, Partitioner};

/// Hash partitioner, `seahash(row) mod num_partitions`.
///
/// The row hash is computed over [`Row::encode`], so the same row lands in
/// the same partition on every worker.
#[derive(Debug, Clone)]
pub struct HashPartitioner {
    num_partitions: usize,
}

impl HashPartitioner {
    pub fn try_new(num_partitions: usize) -> Result<Self> {
        if num_partitions == 0 {
            return Err(Error::invalid_config(
                "hash partitioner requires at least one partition",
            ));
        }

        Ok(Self { num_partitions })
    }
}

impl Partitioner for HashPartitioner {
    fn name(&self) -> &str {
        HASH
    }

    fn num_partitions(&self) -> usize {
        self.num_partitions
    }

    fn partition(&self, row: &Row) -> Result<usize> {
        Ok((row.hash64() % self.num_partitions as u64) as usize)
    }
}
