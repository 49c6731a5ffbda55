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

//! Bulk planners classify an arriving dataset into mutation batches.

use std::{collections::BTreeSet, fmt::Debug, sync::Arc};

use common::{ConfigBlock, DatasetRef, Result};

mod append;
mod factory;
pub mod mutation;
mod overwrite;

pub use crate::{
    append::AppendPlanner,
    factory::{PlannerFactory, APPEND, OVERWRITE, RESERVED_NAMES, TYPE_CONFIG_NAME},
    mutation::{MutationBatch, MutationType},
    overwrite::OverwritePlanner,
};

pub trait BulkPlanner: Send + Sync + Debug {
    /// Called once before any planning.
    fn configure(&mut self, config: &ConfigBlock) -> Result<()>;

    /// Split `arriving` into ordered mutation batches.
    ///
    /// Every returned mutation type must be part of
    /// [`emitted_mutation_types`](BulkPlanner::emitted_mutation_types).
    fn plan_mutations_for_set(&self, arriving: DatasetRef) -> Result<Vec<MutationBatch>>;

    /// Every mutation type this planner may ever emit.
    ///
    /// Sinks check it before any data flows, so it must not depend on the
    /// input of a particular call.
    fn emitted_mutation_types(&self) -> BTreeSet<MutationType>;
}

pub type BulkPlannerRef = Arc<dyn BulkPlanner>;
