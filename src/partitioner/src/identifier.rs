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

//! Identifier based partitioner.

use std::sync::Arc;

use common::{row::Row, ConfigBlock, Dataset, Error, Result};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::{factory::UUID, ConfigurablePartitioner, Partitioner, PartitionerRef};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UuidPartitionerConfig {
    /// Position of the identifier field in the row.
    pub field: usize,
    /// Partition count, defaults to the one of the existing dataset.
    pub partitions: Option<usize>,
}

/// Routes a row by the UUID found at a configured field.
///
/// The field may hold a [`Datum::Uuid`](common::datum::Datum::Uuid) or its
/// canonical string form. The partition is
/// `seahash(uuid bytes) mod num_partitions`, so a given UUID always maps to
/// the same partition regardless of how it was encoded.
#[derive(Debug, Clone, Default)]
pub struct UuidPartitioner {
    field: usize,
    /// Zero until configured.
    num_partitions: usize,
}

impl UuidPartitioner {
    fn identifier(&self, row: &Row) -> Result<Uuid> {
        let datum = row.get(self.field).ok_or_else(|| {
            Error::invalid_identifier(format!(
                "identifier field out of range, field:{}, num_columns:{}",
                self.field,
                row.num_columns()
            ))
        })?;

        if let Some(id) = datum.as_uuid() {
            return Ok(id);
        }
        match datum.as_str() {
            Some(v) => Uuid::parse_str(v).map_err(|e| {
                Error::invalid_identifier(format!("invalid uuid string, value:{v}, err:{e}"))
            }),
            None => Err(Error::invalid_identifier(format!(
                "identifier field must be Uuid or String, field:{}, kind:{}",
                self.field,
                datum.kind()
            ))),
        }
    }
}

impl Partitioner for UuidPartitioner {
    fn name(&self) -> &str {
        UUID
    }

    fn num_partitions(&self) -> usize {
        self.num_partitions
    }

    fn partition(&self, row: &Row) -> Result<usize> {
        common::ensure!(
            self.num_partitions > 0,
            "uuid partitioner is used before configured"
        );

        let uuid = self.identifier(row)?;
        Ok((seahash::hash(uuid.as_bytes()) % self.num_partitions as u64) as usize)
    }
}

impl ConfigurablePartitioner for UuidPartitioner {
    fn configure(&mut self, config: &ConfigBlock, existing: &Dataset) -> Result<()> {
        let UuidPartitionerConfig { field, partitions } = config.deserialize()?;
        let num_partitions = partitions.unwrap_or(existing.num_partitions());
        if num_partitions == 0 {
            return Err(Error::invalid_config(
                "uuid partitioner requires at least one partition",
            ));
        }

        debug!(field, num_partitions, "UuidPartitioner configured");
        self.field = field;
        self.num_partitions = num_partitions;
        Ok(())
    }

    fn freeze(self: Box<Self>) -> PartitionerRef {
        Arc::new(*self)
    }
}
