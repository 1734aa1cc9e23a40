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

//! Schema resolution for Parquet-style columnar formats.
//!
//! A columnar file stores one flat array per leaf field while the logical data
//! model is a nested tree of required, optional and repeated groups. This crate
//! bridges the two representations: it rebuilds the nested schema tree from the
//! flat preorder element list found in file metadata, computes the repetition
//! and definition levels that govern how nested records map onto flat value
//! streams, collapses struct-only nesting into a flat dotted column namespace,
//! and describes each subtree as a backend-independent logical form.
//!
//! Decoding of page bytes, compression and the metadata wire format are left to
//! the surrounding reader; the input boundary here is an already-decoded
//! sequence of [`schema::element::SchemaElement`] records.

#![allow(non_camel_case_types)]

#[macro_use]
pub mod errors;
pub mod basic;
pub mod schema;
