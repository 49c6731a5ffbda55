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

use std::{cmp::Ordering, fmt};

use bytes::{BufMut, Bytes};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatumKind {
    Null = 0,
    Boolean,
    Int32,
    Int64,
    UInt64,
    Double,
    String,
    Varbinary,
    /// Milliseconds since UNIX epoch.
    Timestamp,
    Uuid,
}

impl DatumKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatumKind::Null => "Null",
            DatumKind::Boolean => "Boolean",
            DatumKind::Int32 => "Int32",
            DatumKind::Int64 => "Int64",
            DatumKind::UInt64 => "UInt64",
            DatumKind::Double => "Double",
            DatumKind::String => "String",
            DatumKind::Varbinary => "Varbinary",
            DatumKind::Timestamp => "Timestamp",
            DatumKind::Uuid => "Uuid",
        }
    }
}

impl fmt::Display for DatumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single typed field value of a [`Row`](crate::row::Row).
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    UInt64(u64),
    Double(f64),
    String(String),
    Varbinary(Bytes),
    Timestamp(i64),
    Uuid(Uuid),
}

impl Datum {
    pub fn kind(&self) -> DatumKind {
        match self {
            Datum::Null => DatumKind::Null,
            Datum::Boolean(_) => DatumKind::Boolean,
            Datum::Int32(_) => DatumKind::Int32,
            Datum::Int64(_) => DatumKind::Int64,
            Datum::UInt64(_) => DatumKind::UInt64,
            Datum::Double(_) => DatumKind::Double,
            Datum::String(_) => DatumKind::String,
            Datum::Varbinary(_) => DatumKind::Varbinary,
            Datum::Timestamp(_) => DatumKind::Timestamp,
            Datum::Uuid(_) => DatumKind::Uuid,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    /// Natural order between two datums of the same kind.
    ///
    /// Returns `None` if the kinds differ or either side is null. Doubles are
    /// ordered by IEEE 754 `totalOrder`, so NaN has a stable position.
    pub fn natural_cmp(&self, other: &Datum) -> Option<Ordering> {
        match (self, other) {
            (Datum::Boolean(l), Datum::Boolean(r)) => Some(l.cmp(r)),
            (Datum::Int32(l), Datum::Int32(r)) => Some(l.cmp(r)),
            (Datum::Int64(l), Datum::Int64(r)) => Some(l.cmp(r)),
            (Datum::UInt64(l), Datum::UInt64(r)) => Some(l.cmp(r)),
            (Datum::Double(l), Datum::Double(r)) => Some(l.total_cmp(r)),
            (Datum::String(l), Datum::String(r)) => Some(l.cmp(r)),
            (Datum::Varbinary(l), Datum::Varbinary(r)) => Some(l.cmp(r)),
            (Datum::Timestamp(l), Datum::Timestamp(r)) => Some(l.cmp(r)),
            (Datum::Uuid(l), Datum::Uuid(r)) => Some(l.cmp(r)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Datum::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Datum::Uuid(v) => Some(*v),
            _ => None,
        }
    }

    /// Append a platform independent encoding of the datum to `buf`.
    ///
    /// The encoding is a kind tag followed by the little-endian payload.
    /// Variable-length payloads carry a length prefix so that adjacent
    /// datums never alias each other.
    pub fn encode_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.kind() as u8);
        match self {
            Datum::Null => {}
            Datum::Boolean(v) => buf.put_u8(*v as u8),
            Datum::Int32(v) => buf.put_i32_le(*v),
            Datum::Int64(v) | Datum::Timestamp(v) => buf.put_i64_le(*v),
            Datum::UInt64(v) => buf.put_u64_le(*v),
            Datum::Double(v) => buf.put_u64_le(v.to_bits()),
            Datum::String(v) => {
                buf.put_u64_le(v.len() as u64);
                buf.put_slice(v.as_bytes());
            }
            Datum::Varbinary(v) => {
                buf.put_u64_le(v.len() as u64);
                buf.put_slice(v);
            }
            Datum::Uuid(v) => buf.put_slice(v.as_bytes()),
        }
    }
}

impl From<bool> for Datum {
    fn from(v: bool) -> Self {
        Datum::Boolean(v)
    }
}

impl From<i32> for Datum {
    fn from(v: i32) -> Self {
        Datum::Int32(v)
    }
}

impl From<i64> for Datum {
    fn from(v: i64) -> Self {
        Datum::Int64(v)
    }
}

impl From<u64> for Datum {
    fn from(v: u64) -> Self {
        Datum::UInt64(v)
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self {
        Datum::Double(v)
    }
}

impl From<&str> for Datum {
    fn from(v: &str) -> Self {
        Datum::String(v.to_string())
    }
}

impl From<String> for Datum {
    fn from(v: String) -> Self {
        Datum::String(v)
    }
}

impl From<Bytes> for Datum {
    fn from(v: Bytes) -> Self {
        Datum::Varbinary(v)
    }
}

impl From<Uuid> for Datum {
    fn from(v: Uuid) -> Self {
        Datum::Uuid(v)
    }
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;

    use super::*;

    #[test]
    fn test_natural_cmp_same_kind() {
        assert_eq!(
            Datum::Int32(1).natural_cmp(&Datum::Int32(2)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Datum::from("b").natural_cmp(&Datum::from("a")),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Datum::Double(f64::NAN).natural_cmp(&Datum::Double(f64::NAN)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Datum::Double(-0.0).natural_cmp(&Datum::Double(0.0)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_natural_cmp_rejects_mixed_kinds_and_nulls() {
        assert_eq!(Datum::Int32(1).natural_cmp(&Datum::Int64(1)), None);
        assert_eq!(Datum::Null.natural_cmp(&Datum::Null), None);
        assert_eq!(Datum::Int32(1).natural_cmp(&Datum::Null), None);
    }

    #[test]
    fn test_accessors() {
        let id = Uuid::from_u128(42);
        assert_eq!(Datum::from(id).as_uuid(), Some(id));
        assert_eq!(Datum::from("a").as_uuid(), None);
        assert_eq!(Datum::from("a").as_str(), Some("a"));
        assert_eq!(Datum::from(id).as_str(), None);
    }

    #[test]
    fn test_encoding_is_length_prefixed() {
        let encode = |datums: &[Datum]| {
            let mut buf = BytesMut::new();
            for d in datums {
                d.encode_to(&mut buf);
            }
            buf.freeze()
        };

        // Kind tag, 8-byte length, payload.
        let encoded = encode(&[Datum::from("abc")]);
        assert_eq!(encoded.len(), 1 + 8 + 3);
        assert_eq!(&encoded[1..9], &3_u64.to_le_bytes());

        let left = encode(&[Datum::from("a"), Datum::from("bc")]);
        let right = encode(&[Datum::from("ab"), Datum::from("c")]);
        assert_ne!(left, right);

        // Same payload bits under a different kind must not collide either.
        assert_ne!(
            encode(&[Datum::Int64(7)]),
            encode(&[Datum::Timestamp(7)])
        );
    }
}
