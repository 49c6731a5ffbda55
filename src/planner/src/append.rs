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

use std::collections::BTreeSet;

use common::{ConfigBlock, DatasetRef, Result};
use tracing::debug;

use crate::{BulkPlanner, MutationBatch, MutationType};

/// Inserts every arriving row, leaving existing ones untouched.
#[derive(Debug, Clone, Default)]
pub struct AppendPlanner;

impl BulkPlanner for AppendPlanner {
    fn configure(&mut self, _config: &ConfigBlock) -> Result<()> {
        Ok(())
    }

    fn plan_mutations_for_set(&self, arriving: DatasetRef) -> Result<Vec<MutationBatch>> {
        debug!(num_rows = arriving.num_rows(), "AppendPlanner plan mutations");
        Ok(vec![MutationBatch::new(MutationType::Insert, arriving)])
    }

    fn emitted_mutation_types(&self) -> BTreeSet<MutationType> {
        BTreeSet::from([MutationType::Insert])
    }
}
