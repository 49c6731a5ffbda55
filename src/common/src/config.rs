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

//! Opaque key-value configuration blocks.

use serde::de::DeserializeOwned;
use toml::{Table, Value};

use crate::{Error, Result};

/// A configuration block handed over by whoever loads the job config.
///
/// Keys may be addressed by dotted paths, e.g. `partitioner.type`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigBlock {
    table: Table,
}

impl ConfigBlock {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let table: Table = toml::from_str(s)?;
        Ok(Self { table })
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    pub fn get_string(&self, path: &str) -> Result<Option<String>> {
        match self.lookup(path) {
            None => Ok(None),
            Some(Value::String(v)) => Ok(Some(v.clone())),
            Some(_) => Err(Error::wrong_type(path, "string")),
        }
    }

    pub fn require_string(&self, path: &str) -> Result<String> {
        self.get_string(path)?
            .ok_or_else(|| Error::missing_key(path))
    }

    pub fn get_usize(&self, path: &str) -> Result<Option<usize>> {
        match self.lookup(path) {
            None => Ok(None),
            Some(Value::Integer(v)) => usize::try_from(*v)
                .map(Some)
                .map_err(|_| Error::wrong_type(path, "non-negative integer")),
            Some(_) => Err(Error::wrong_type(path, "integer")),
        }
    }

    pub fn get_block(&self, path: &str) -> Result<Option<ConfigBlock>> {
        match self.lookup(path) {
            None => Ok(None),
            Some(Value::Table(t)) => Ok(Some(ConfigBlock::from(t.clone()))),
            Some(_) => Err(Error::wrong_type(path, "table")),
        }
    }

    /// Deserialize the whole block into a typed config.
    ///
    /// Keys unknown to `T` are ignored unless `T` denies them.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let typed: T = Value::Table(self.table.clone()).try_into()?;
        Ok(typed)
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.table.get(first)?;
        for segment in segments {
            current = current.as_table()?.get(segment)?;
        }
        Some(current)
    }
}

impl From<Table> for ConfigBlock {
    fn from(table: Table) -> Self {
        Self { table }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::ErrorKind;

    const CONFIG: &str = r#"
type = "uuid"
field = 2

[nested]
partitions = 8

[nested.deeper]
name = "inner"
"#;

    #[test]
    fn test_dotted_lookup() {
        let config = ConfigBlock::from_toml_str(CONFIG).unwrap();
        assert!(config.has_path("type"));
        assert!(config.has_path("nested.partitions"));
        assert!(config.has_path("nested.deeper.name"));
        assert!(!config.has_path("nested.missing"));
        assert!(!config.has_path("type.inner"));

        assert_eq!(config.get_string("type").unwrap().as_deref(), Some("uuid"));
        assert_eq!(config.get_usize("nested.partitions").unwrap(), Some(8));
        assert_eq!(
            config
                .get_block("nested.deeper")
                .unwrap()
                .unwrap()
                .require_string("name")
                .unwrap(),
            "inner"
        );
    }

    #[test]
    fn test_missing_and_wrong_type() {
        let config = ConfigBlock::from_toml_str(CONFIG).unwrap();
        let err = config.require_string("absent").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = config.get_string("field").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = config.get_block("type").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let config = ConfigBlock::from_toml_str("partitions = -1").unwrap();
        let err = config.get_usize("partitions").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_parse_failure() {
        let err = ConfigBlock::from_toml_str("type = ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_deserialize_ignores_foreign_keys() {
        #[derive(Debug, Default, Deserialize)]
        #[serde(default)]
        struct Partial {
            field: usize,
            partitions: Option<usize>,
        }

        let config = ConfigBlock::from_toml_str(CONFIG).unwrap();
        let partial: Partial = config.deserialize().unwrap();
        assert_eq!(partial.field, 2);
        assert_eq!(partial.partitions, None);

        let partial: Partial = ConfigBlock::empty().deserialize().unwrap();
        assert_eq!(partial.field, 0);
    }
}
