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

use std::{fmt, str::FromStr};

use common::{DatasetRef, Error};
use serde::{Deserialize, Serialize};

/// Semantic effect of a batch of rows on the downstream store.
///
/// More tags may be added, so match on it with a wildcard arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum MutationType {
    /// Nothing to apply.
    None,
    Insert,
    Update,
    Delete,
    /// Insert or update by key.
    Upsert,
    /// Replace the whole target with the batch.
    Overwrite,
}

impl MutationType {
    pub const ALL: [MutationType; 6] = [
        MutationType::None,
        MutationType::Insert,
        MutationType::Update,
        MutationType::Delete,
        MutationType::Upsert,
        MutationType::Overwrite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MutationType::None => "none",
            MutationType::Insert => "insert",
            MutationType::Update => "update",
            MutationType::Delete => "delete",
            MutationType::Upsert => "upsert",
            MutationType::Overwrite => "overwrite",
        }
    }
}

impl fmt::Display for MutationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MutationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MutationType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::unresolved("mutation type", s))
    }
}

/// A dataset tagged with the mutation it represents.
#[derive(Debug, Clone)]
pub struct MutationBatch {
    pub mutation_type: MutationType,
    pub dataset: DatasetRef,
}

impl MutationBatch {
    pub fn new(mutation_type: MutationType, dataset: DatasetRef) -> Self {
        Self {
            mutation_type,
            dataset,
        }
    }
}
