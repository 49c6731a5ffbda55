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

//! Named constructors for pluggable implementations.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{Error, Result};

pub type Constructor<T> = Arc<dyn Fn() -> Result<T> + Send + Sync>;

/// Maps implementation names to zero-argument constructors.
///
/// Names listed as reserved belong to the builtin implementations and can't
/// be registered.
pub struct Registry<T> {
    kind: &'static str,
    reserved: &'static [&'static str],
    constructors: HashMap<String, Constructor<T>>,
}

impl<T> Registry<T> {
    pub fn new(kind: &'static str, reserved: &'static [&'static str]) -> Self {
        Self {
            kind,
            reserved,
            constructors: HashMap::new(),
        }
    }

    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> Result<()>
    where
        F: Fn() -> Result<T> + Send + Sync + 'static,
    {
        let name = name.into();
        if name.is_empty() || self.reserved.contains(&name.as_str()) {
            return Err(Error::invalid_config(format!(
                "{} name is reserved or empty, name:{name}",
                self.kind
            )));
        }
        if self.constructors.contains_key(&name) {
            return Err(Error::invalid_config(format!(
                "{} already registered, name:{name}",
                self.kind
            )));
        }

        self.constructors.insert(name, Arc::new(constructor));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names in lexical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.constructors.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Build a new instance registered under `name`.
    ///
    /// Unknown names fail, and so does a failing constructor, whose error is
    /// wrapped together with the name.
    pub fn construct(&self, name: &str) -> Result<T> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| Error::unresolved(self.kind, name))?;

        constructor().map_err(|e| Error::construct(name, e))
    }
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            reserved: self.reserved,
            constructors: self.constructors.clone(),
        }
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &self.kind)
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const RESERVED: &[&str] = &["builtin"];

    #[test]
    fn test_register_and_construct() {
        let mut registry = Registry::<usize>::new("thing", RESERVED);
        registry.register("answer", || Ok(42)).unwrap();
        registry
            .register("broken", || Err(Error::missing_key("size")))
            .unwrap();

        assert!(registry.contains("answer"));
        assert_eq!(registry.names(), vec!["answer", "broken"]);
        assert_eq!(registry.construct("answer").unwrap(), 42);

        let err = registry.construct("missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resolution);

        let err = registry.construct("broken").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resolution);
    }

    #[test]
    fn test_reject_reserved_and_duplicate_names() {
        let mut registry = Registry::<usize>::new("thing", RESERVED);
        let err = registry.register("builtin", || Ok(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = registry.register("", || Ok(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        registry.register("custom", || Ok(1)).unwrap();
        let err = registry.register("custom", || Ok(2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(registry.construct("custom").unwrap(), 1);
    }
}
