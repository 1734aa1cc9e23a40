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

//! Structural detection of the canonical 3-level LIST and MAP encodings.
//!
//! These are advisory checks over a leaf column's ancestry, used downstream
//! to pick a list-vs-map reconstruction strategy. They are not schema
//! validators: any structural deviation, including a path that does not
//! resolve, yields `false` rather than an error.

use crate::basic::{ConvertedType, Repetition};
use crate::schema::helper::SchemaHelper;
use crate::schema::tree::{ColumnPath, NodePtr};

/// Whether the column at `path` (a leaf's full path in the schema) sits at
/// the bottom of a canonical 3-level LIST encoding: a LIST-annotated group
/// with a single REPEATED child holding a single, non-repeated element.
pub fn is_list_like(helper: &SchemaHelper, path: &ColumnPath) -> bool {
    if path.parts().len() < 3 {
        return false;
    }
    let group = match helper.schema_element(path.parent(2)) {
        Ok(node) => node,
        Err(_) => return false,
    };
    if group.converted_type() != ConvertedType::LIST {
        return false;
    }
    if group.children().len() != 1 {
        return false;
    }
    let repeated = match group.first_child() {
        Some(node) => node,
        None => return false,
    };
    if repeated.children().len() != 1 {
        return false;
    }
    if repeated.repetition_type() != Some(Repetition::REPEATED) {
        return false;
    }
    let element = match repeated.first_child() {
        Some(node) => node,
        None => return false,
    };
    element.repetition_type() != Some(Repetition::REPEATED)
}

/// Whether the column at `path` sits at the bottom of a canonical 3-level
/// MAP encoding: a MAP-annotated group with a single REPEATED child holding
/// exactly a REQUIRED `key` and a non-repeated `value`.
pub fn is_map_like(helper: &SchemaHelper, path: &ColumnPath) -> bool {
    if path.parts().len() < 3 {
        return false;
    }
    let group = match helper.schema_element(path.parent(2)) {
        Ok(node) => node,
        Err(_) => return false,
    };
    if group.converted_type() != ConvertedType::MAP {
        return false;
    }
    if group.children().len() != 1 {
        return false;
    }
    let key_value = match group.first_child() {
        Some(node) => node,
        None => return false,
    };
    if key_value.children().len() != 2 {
        return false;
    }
    if key_value.repetition_type() != Some(Repetition::REPEATED) {
        return false;
    }
    let (key, value): (&NodePtr, &NodePtr) =
        match (key_value.child("key"), key_value.child("value")) {
            (Some(key), Some(value)) => (key, value),
            _ => return false,
        };
    if key.repetition_type() != Some(Repetition::REQUIRED) {
        return false;
    }
    value.repetition_type() != Some(Repetition::REPEATED)
}
