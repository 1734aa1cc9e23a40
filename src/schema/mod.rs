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

//! Schema tree reconstruction, path and level resolution, flattening and
//! logical-form mapping.
//!
//! # Example
//!
//! ```rust
//! use parquet_schema::schema::{helper::SchemaHelper, parser::parse_message_type};
//!
//! let elements = parse_message_type(
//!     "
//!     message document {
//!         REQUIRED INT32 id;
//!         OPTIONAL GROUP meta {
//!             OPTIONAL BYTE_ARRAY author (UTF8);
//!         }
//!     }
//! ",
//! )
//! .unwrap();
//! let helper = SchemaHelper::new(elements).unwrap();
//! assert_eq!(helper.max_definition_level("meta.author").unwrap(), 2);
//! assert!(helper.flat_index().get("meta.author").is_some());
//! ```

pub mod element;
pub mod flatten;
pub mod form;
pub mod helper;
pub mod parser;
pub mod printer;
pub mod shape;
pub mod tree;
