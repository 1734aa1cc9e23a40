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

//! Enumerated constants of the columnar metadata model: physical types,
//! converted types, repetition markers and the refined logical-type
//! annotations. These mirror the format's Thrift definitions but are owned
//! here so the rest of the crate never probes a foreign annotation object.

use std::{fmt, result, str};

use crate::errors::SchemaError;

// ----------------------------------------------------------------------
// Mirrors the format's `Type`

/// Physical types supported by the format.
/// These control the on-disk storage of leaf values and are intended to be
/// combined with a converted or logical annotation for refined semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    BOOLEAN,
    INT32,
    INT64,
    INT96,
    FLOAT,
    DOUBLE,
    BYTE_ARRAY,
    FIXED_LEN_BYTE_ARRAY,
}

// ----------------------------------------------------------------------
// Mirrors the format's `ConvertedType`

/// Legacy semantic annotations refining a physical type.
/// This is only metadata and not needed to read or write the data; `NONE`
/// stands for an absent annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvertedType {
    #[default]
    NONE,
    /// A BYTE_ARRAY actually contains UTF8 encoded chars.
    UTF8,

    /// A map is converted as an optional field containing a repeated key/value
    /// pair.
    MAP,

    /// A key/value pair is converted into a group of two fields.
    MAP_KEY_VALUE,

    /// A list is converted into an optional field containing a repeated field
    /// for its values.
    LIST,

    /// An enum is converted into a binary field.
    ENUM,

    /// A decimal value with a precision and scale recorded alongside in the
    /// schema element.
    DECIMAL,

    /// A date stored as days since Unix epoch, encoded as the INT32 physical
    /// type.
    DATE,

    /// The total number of milliseconds since midnight, stored as INT32.
    TIME_MILLIS,

    /// The total number of microseconds since midnight, stored as INT64.
    TIME_MICROS,

    /// Date and time recorded as milliseconds since the Unix epoch, stored as
    /// INT64.
    TIMESTAMP_MILLIS,

    /// Date and time recorded as microseconds since the Unix epoch, stored as
    /// INT64.
    TIMESTAMP_MICROS,

    /// An unsigned 8 bit integer value stored as INT32.
    UINT_8,

    /// An unsigned 16 bit integer value stored as INT32.
    UINT_16,

    /// An unsigned 32 bit integer value stored as INT32.
    UINT_32,

    /// An unsigned 64 bit integer value stored as INT64.
    UINT_64,

    /// A signed 8 bit integer value stored as INT32.
    INT_8,

    /// A signed 16 bit integer value stored as INT32.
    INT_16,

    /// A signed 32 bit integer value stored as INT32.
    INT_32,

    /// A signed 64 bit integer value stored as INT64.
    INT_64,

    /// A JSON document embedded within a single UTF8 column.
    JSON,

    /// A BSON document embedded within a single BINARY column.
    BSON,

    /// An interval of time, stored as a FIXED_LEN_BYTE_ARRAY of length 12.
    INTERVAL,
}

// ----------------------------------------------------------------------
// Mirrors the format's `FieldRepetitionType`

/// Representation of field types in schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    /// Field is required (can not be null) and each record has exactly 1 value.
    REQUIRED,
    /// Field is optional (can be null) and each record has 0 or 1 values.
    OPTIONAL,
    /// Field is repeated and can contain 0 or more values.
    REPEATED,
}

// ----------------------------------------------------------------------
// Mirrors the unit field of the format's `TimeType`/`TimestampType`

/// Resolution of a time or timestamp annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    MILLIS,
    MICROS,
    NANOS,
}

// ----------------------------------------------------------------------
// Mirrors the format's `LogicalType` union

/// Refined logical-type annotations, decoded once at ingestion into an
/// explicit tagged union. The metadata wire form is a struct with one
/// non-null field per variant; consumers here match on the variant instead
/// of probing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalType {
    STRING,
    MAP,
    LIST,
    ENUM,
    DATE,
    TIME(TimeUnit),
    TIMESTAMP(TimeUnit),
    INTEGER {
        bit_width: i8,
        is_signed: bool,
    },
    /// The "unknown" annotation marking an always-null column.
    UNKNOWN,
    JSON,
    BSON,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for ConvertedType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LogicalType::TIME(unit) => write!(f, "TIME[{}]", unit),
            LogicalType::TIMESTAMP(unit) => write!(f, "TIMESTAMP[{}]", unit),
            LogicalType::INTEGER {
                bit_width,
                is_signed,
            } => write!(f, "INT({},{})", bit_width, is_signed),
            ref other => write!(f, "{:?}", other),
        }
    }
}

// ----------------------------------------------------------------------
// String conversions for schema parsing.

impl str::FromStr for Repetition {
    type Err = SchemaError;

    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        match s {
            "REQUIRED" => Ok(Repetition::REQUIRED),
            "OPTIONAL" => Ok(Repetition::OPTIONAL),
            "REPEATED" => Ok(Repetition::REPEATED),
            other => Err(general_err!("Invalid repetition {}", other)),
        }
    }
}

impl str::FromStr for Type {
    type Err = SchemaError;

    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        match s {
            "BOOLEAN" => Ok(Type::BOOLEAN),
            "INT32" => Ok(Type::INT32),
            "INT64" => Ok(Type::INT64),
            "INT96" => Ok(Type::INT96),
            "FLOAT" => Ok(Type::FLOAT),
            "DOUBLE" => Ok(Type::DOUBLE),
            "BYTE_ARRAY" | "BINARY" => Ok(Type::BYTE_ARRAY),
            "FIXED_LEN_BYTE_ARRAY" => Ok(Type::FIXED_LEN_BYTE_ARRAY),
            other => Err(general_err!("Invalid type {}", other)),
        }
    }
}

impl str::FromStr for ConvertedType {
    type Err = SchemaError;

    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(ConvertedType::NONE),
            "UTF8" => Ok(ConvertedType::UTF8),
            "MAP" => Ok(ConvertedType::MAP),
            "MAP_KEY_VALUE" => Ok(ConvertedType::MAP_KEY_VALUE),
            "LIST" => Ok(ConvertedType::LIST),
            "ENUM" => Ok(ConvertedType::ENUM),
            "DECIMAL" => Ok(ConvertedType::DECIMAL),
            "DATE" => Ok(ConvertedType::DATE),
            "TIME_MILLIS" => Ok(ConvertedType::TIME_MILLIS),
            "TIME_MICROS" => Ok(ConvertedType::TIME_MICROS),
            "TIMESTAMP_MILLIS" => Ok(ConvertedType::TIMESTAMP_MILLIS),
            "TIMESTAMP_MICROS" => Ok(ConvertedType::TIMESTAMP_MICROS),
            "UINT_8" => Ok(ConvertedType::UINT_8),
            "UINT_16" => Ok(ConvertedType::UINT_16),
            "UINT_32" => Ok(ConvertedType::UINT_32),
            "UINT_64" => Ok(ConvertedType::UINT_64),
            "INT_8" => Ok(ConvertedType::INT_8),
            "INT_16" => Ok(ConvertedType::INT_16),
            "INT_32" => Ok(ConvertedType::INT_32),
            "INT_64" => Ok(ConvertedType::INT_64),
            "JSON" => Ok(ConvertedType::JSON),
            "BSON" => Ok(ConvertedType::BSON),
            "INTERVAL" => Ok(ConvertedType::INTERVAL),
            other => Err(general_err!("Invalid converted type {}", other)),
        }
    }
}
