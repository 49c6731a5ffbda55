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

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(#[from] InnerError);

impl From<anyhow::Error> for Error {
    fn from(source: anyhow::Error) -> Self {
        Self(InnerError::Other { source })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorKind {
    Config,
    Resolution,
    Comparison,
    InvalidIdentifier,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self.0 {
            InnerError::MissingKey { .. }
            | InnerError::WrongType { .. }
            | InnerError::InvalidConfig { .. }
            | InnerError::ParseConfig { .. } => ErrorKind::Config,
            InnerError::Unresolved { .. } | InnerError::Construct { .. } => {
                ErrorKind::Resolution
            }
            InnerError::Incomparable { .. } | InnerError::ArityMismatch { .. } => {
                ErrorKind::Comparison
            }
            InnerError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            InnerError::Other { .. } => ErrorKind::Internal,
        }
    }

    pub fn missing_key(key: impl Into<String>) -> Self {
        InnerError::MissingKey { key: key.into() }.into()
    }

    pub fn wrong_type(key: impl Into<String>, expected: &'static str) -> Self {
        InnerError::WrongType {
            key: key.into(),
            expected,
        }
        .into()
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        InnerError::InvalidConfig { msg: msg.into() }.into()
    }

    pub fn unresolved(kind: &'static str, name: impl Into<String>) -> Self {
        InnerError::Unresolved {
            kind,
            name: name.into(),
        }
        .into()
    }

    /// Wrap a failure raised while constructing a named implementation.
    pub fn construct(name: impl Into<String>, source: Error) -> Self {
        InnerError::Construct {
            name: name.into(),
            source: Box::new(source),
        }
        .into()
    }

    pub fn incomparable(position: usize, left: &'static str, right: &'static str) -> Self {
        InnerError::Incomparable {
            position,
            left,
            right,
        }
        .into()
    }

    pub fn arity_mismatch(left: usize, right: usize) -> Self {
        InnerError::ArityMismatch { left, right }.into()
    }

    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        InnerError::InvalidIdentifier { msg: msg.into() }.into()
    }
}

#[derive(Error, Debug)]
pub(crate) enum InnerError {
    #[error("missing config key, key:{key}")]
    MissingKey { key: String },

    #[error("config value has wrong type, key:{key}, expected:{expected}")]
    WrongType { key: String, expected: &'static str },

    #[error("invalid config, msg:{msg}")]
    InvalidConfig { msg: String },

    #[error("failed to parse config")]
    ParseConfig {
        #[from]
        source: toml::de::Error,
    },

    #[error("no {kind} registered under name, name:{name}")]
    Unresolved { kind: &'static str, name: String },

    #[error("failed to construct {name}")]
    Construct {
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("fields are not comparable, position:{position}, left:{left}, right:{right}")]
    Incomparable {
        position: usize,
        left: &'static str,
        right: &'static str,
    },

    #[error("rows have different arity, left:{left}, right:{right}")]
    ArityMismatch { left: usize, right: usize },

    #[error("invalid identifier, msg:{msg}")]
    InvalidIdentifier { msg: String },

    #[error(transparent)]
    Other {
        #[from]
        source: anyhow::Error,
    },
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Self(InnerError::ParseConfig { source })
    }
}

/// Util for working with anyhow + thiserror
/// Works like anyhow's [ensure](https://docs.rs/anyhow/latest/anyhow/macro.ensure.html)
/// But return `Return<T, ErrorFromAnyhow>`
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err(anyhow::anyhow!($msg).into());
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err.into());
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err(anyhow::anyhow!($fmt, $($arg)*).into());
        }
    };
}
