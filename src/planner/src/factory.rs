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

//! Bulk planner factory

use std::sync::Arc;

use common::{ConfigBlock, Registry, Result};
use tracing::info;

use crate::{AppendPlanner, BulkPlanner, BulkPlannerRef, OverwritePlanner};

pub const TYPE_CONFIG_NAME: &str = "type";

pub const OVERWRITE: &str = "overwrite";
pub const APPEND: &str = "append";
pub const RESERVED_NAMES: &[&str] = &[OVERWRITE, APPEND];

/// Builds and configures planners from a planner config block.
#[derive(Debug, Clone)]
pub struct PlannerFactory {
    registry: Registry<Box<dyn BulkPlanner>>,
}

impl Default for PlannerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlannerFactory {
    pub fn new() -> Self {
        Self {
            registry: Registry::new("planner", RESERVED_NAMES),
        }
    }

    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> Result<()>
    where
        F: Fn() -> Result<Box<dyn BulkPlanner>> + Send + Sync + 'static,
    {
        self.registry.register(name, constructor)
    }

    pub fn registry(&self) -> &Registry<Box<dyn BulkPlanner>> {
        &self.registry
    }

    pub fn create(&self, config: &ConfigBlock) -> Result<BulkPlannerRef> {
        let planner_type = config.require_string(TYPE_CONFIG_NAME)?;
        let mut planner: Box<dyn BulkPlanner> = match planner_type.as_str() {
            OVERWRITE => Box::new(OverwritePlanner),
            APPEND => Box::new(AppendPlanner),
            other => self.registry.construct(other)?,
        };
        planner.configure(config)?;

        info!(
            planner_type = planner_type.as_str(),
            emitted = ?planner.emitted_mutation_types(),
            "Planner created"
        );
        Ok(Arc::from(planner))
    }
}
