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

//! Common schema errors and macros.

use std::{fmt, result, str, string};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// General schema error.
    /// Returned when code violates normal workflow of working with schema
    /// metadata.
    General(String),
    /// "Not yet implemented" error.
    /// Returned when a schema uses an encoding this crate does not model,
    /// e.g. a bare repeated group without a LIST or MAP annotation.
    NYI(String),
    /// A requested column path does not resolve in the schema tree.
    PathNotFound(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SchemaError::General(ref message) => {
                write!(fmt, "Schema error: {}", message)
            }
            SchemaError::NYI(ref message) => write!(fmt, "NYI: {}", message),
            SchemaError::PathNotFound(ref path) => {
                write!(fmt, "Path not found: {}", path)
            }
        }
    }
}

impl std::error::Error for SchemaError {}

impl From<str::Utf8Error> for SchemaError {
    fn from(e: str::Utf8Error) -> SchemaError {
        SchemaError::General(format!("underlying utf8 error: {}", e))
    }
}

impl From<string::FromUtf8Error> for SchemaError {
    fn from(e: string::FromUtf8Error) -> SchemaError {
        SchemaError::General(format!("underlying utf8 error: {}", e))
    }
}

/// A specialized `Result` for schema errors.
pub type Result<T> = result::Result<T, SchemaError>;

// ----------------------------------------------------------------------
// Convenient macros for different errors

macro_rules! general_err {
    ($fmt:expr) => ($crate::errors::SchemaError::General($fmt.to_owned()));
    ($fmt:expr, $($args:expr),*) => ($crate::errors::SchemaError::General(format!($fmt, $($args),*)));
}

macro_rules! nyi_err {
    ($fmt:expr) => ($crate::errors::SchemaError::NYI($fmt.to_owned()));
    ($fmt:expr, $($args:expr),*) => ($crate::errors::SchemaError::NYI(format!($fmt, $($args),*)));
}

macro_rules! path_err {
    ($fmt:expr) => ($crate::errors::SchemaError::PathNotFound($fmt.to_owned()));
    ($fmt:expr, $($args:expr),*) => ($crate::errors::SchemaError::PathNotFound(format!($fmt, $($args),*)));
}
