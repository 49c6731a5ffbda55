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

/// Replaces the target with the whole arriving dataset.
#[derive(Debug, Clone, Default)]
pub struct OverwritePlanner;

impl BulkPlanner for OverwritePlanner {
    fn configure(&mut self, _config: &ConfigBlock) -> Result<()> {
        Ok(())
    }

    fn plan_mutations_for_set(&self, arriving: DatasetRef) -> Result<Vec<MutationBatch>> {
        debug!(num_rows = arriving.num_rows(), "OverwritePlanner plan mutations");
        Ok(vec![MutationBatch::new(MutationType::Overwrite, arriving)])
    }

    fn emitted_mutation_types(&self) -> BTreeSet<MutationType> {
        BTreeSet::from([MutationType::Overwrite])
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use common::{row, Dataset};

    use super::*;

    #[test]
    fn test_single_overwrite_batch() {
        let arriving =
            Dataset::from_rows((0..10_i64).map(|i| row![i, i % 3]), 3).unwrap().into_ref();
        let planner = OverwritePlanner;

        let batches = planner.plan_mutations_for_set(arriving.clone()).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].mutation_type, MutationType::Overwrite);
        assert!(Arc::ptr_eq(&batches[0].dataset, &arriving));
        assert_eq!(batches[0].dataset.as_ref(), arriving.as_ref());
    }

    #[test]
    fn test_empty_dataset() {
        let planner = OverwritePlanner;
        for arriving in [Dataset::empty(), Dataset::new(vec![vec![], vec![]])] {
            let batches = planner.plan_mutations_for_set(arriving.into_ref()).unwrap();
            assert_eq!(batches.len(), 1);
            assert_eq!(batches[0].mutation_type, MutationType::Overwrite);
            assert!(batches[0].dataset.is_empty());
        }
    }

    #[test]
    fn test_configuration_is_ignored() {
        let mut planner = OverwritePlanner;
        let config = ConfigBlock::from_toml_str("anything = [1, 2, 3]\n[nested]\nkey = \"v\"")
            .unwrap();
        planner.configure(&config).unwrap();
        assert_eq!(
            planner.emitted_mutation_types(),
            BTreeSet::from([MutationType::Overwrite])
        );
    }
}
