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

//! Partitioner factory

use common::{ConfigBlock, Dataset, Registry, Result};
use tracing::{debug, info};

use crate::{
    hash::HashPartitioner, identifier::UuidPartitioner, range::RangePartitioner, Constructed,
    PartitionerRef,
};

pub const TYPE_CONFIG_NAME: &str = "type";

pub const HASH: &str = "hash";
pub const RANGE: &str = "range";
pub const UUID: &str = "uuid";
pub const RESERVED_NAMES: &[&str] = &[HASH, RANGE, UUID];

/// Builds partitioners from a config block and the dataset to repartition.
///
/// Builtin strategies are selected by the reserved names, everything else
/// must have been registered beforehand.
#[derive(Debug, Clone)]
pub struct PartitionerFactory {
    registry: Registry<Constructed>,
}

impl Default for PartitionerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PartitionerFactory {
    pub fn new() -> Self {
        Self {
            registry: Registry::new("partitioner", RESERVED_NAMES),
        }
    }

    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> Result<()>
    where
        F: Fn() -> Result<Constructed> + Send + Sync + 'static,
    {
        self.registry.register(name, constructor)
    }

    pub fn registry(&self) -> &Registry<Constructed> {
        &self.registry
    }

    pub fn create(&self, config: &ConfigBlock, existing: &Dataset) -> Result<PartitionerRef> {
        let partitioner_type = config.require_string(TYPE_CONFIG_NAME)?;
        let num_partitions = existing.num_partitions();

        let constructed = match partitioner_type.as_str() {
            HASH => Constructed::plain(HashPartitioner::try_new(num_partitions)?),
            RANGE => Constructed::plain(RangePartitioner::try_new(num_partitions, existing)?),
            UUID => Constructed::configurable(UuidPartitioner::default()),
            other => self.registry.construct(other)?,
        };

        let partitioner = match constructed {
            Constructed::Plain(partitioner) => partitioner,
            Constructed::Configurable(mut partitioner) => {
                debug!(partitioner_type = partitioner_type.as_str(), "Configure partitioner");
                partitioner.configure(config, existing)?;
                partitioner.freeze()
            }
        };

        info!(
            partitioner_type = partitioner_type.as_str(),
            name = partitioner.name(),
            num_partitions = partitioner.num_partitions(),
            "Partitioner created"
        );
        Ok(partitioner)
    }
}
