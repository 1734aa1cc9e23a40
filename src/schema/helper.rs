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

//! Convenience access to a schema: path resolution, repetition/definition
//! levels and the flat column index.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::basic::Repetition;
use crate::errors::Result;
use crate::schema::element::SchemaElement;
use crate::schema::flatten::{flatten, FlatIndex};
use crate::schema::printer::schema_to_text;
use crate::schema::tree::{build_schema_tree, ColumnPath, NodePtr};

/// Owns the flat element list and everything resolved from it: the nested
/// tree (element 0 is the synthetic message root, whose name is not part of
/// any column path), a node-by-name map, and the flat column index.
///
/// Construction performs all mutation; a built helper is immutable and safe
/// to share across threads.
#[derive(Debug)]
pub struct SchemaHelper {
    schema_elements: Vec<SchemaElement>,
    root: NodePtr,
    by_name: HashMap<String, NodePtr>,
    flat: FlatIndex,
    text: OnceLock<String>,
}

impl SchemaHelper {
    pub fn new(schema_elements: Vec<SchemaElement>) -> Result<SchemaHelper> {
        let root = build_schema_tree(&schema_elements)?;
        let mut by_name = HashMap::new();
        collect_by_name(&root, &mut by_name);
        let flat = flatten(&root);
        Ok(SchemaHelper {
            schema_elements,
            root,
            by_name,
            flat,
            text: OnceLock::new(),
        })
    }

    /// The message root node.
    pub fn root(&self) -> &NodePtr {
        &self.root
    }

    /// The raw element list this helper was built from.
    pub fn schema_elements(&self) -> &[SchemaElement] {
        &self.schema_elements
    }

    /// The flat column index built once at construction.
    pub fn flat_index(&self) -> &FlatIndex {
        &self.flat
    }

    /// Resolves a dotted or segmented path to its tree node, walking child
    /// maps from the root one segment at a time. An empty path resolves to
    /// the root itself.
    pub fn schema_element<P: Into<ColumnPath>>(&self, path: P) -> Result<&NodePtr> {
        let path = path.into();
        let mut node = &self.root;
        for part in path.parts() {
            node = node.child(part).ok_or_else(|| path_err!("{}", path))?;
        }
        Ok(node)
    }

    /// Looks a node up by its bare element name. Top-level names are assumed
    /// globally unique; for deeper duplicates the later element in preorder
    /// wins.
    pub fn schema_element_by_name(&self, name: &str) -> Option<&NodePtr> {
        self.by_name.get(name)
    }

    /// True iff every node from the first path segment down to and including
    /// the target is REQUIRED. Short-circuits at the first non-required node
    /// without resolving the remaining segments.
    pub fn is_required<P: Into<ColumnPath>>(&self, path: P) -> Result<bool> {
        let path = path.into();
        let mut node = &self.root;
        for part in path.parts() {
            node = node.child(part).ok_or_else(|| path_err!("{}", path))?;
            if node.repetition() != Repetition::REQUIRED {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The number of REPEATED nodes from the first path segment down to and
    /// including the target: how many independent repetition contexts enclose
    /// a value at this path.
    pub fn max_repetition_level<P: Into<ColumnPath>>(&self, path: P) -> Result<i16> {
        self.count_levels(path.into(), |r| r == Repetition::REPEATED)
    }

    /// The number of non-REQUIRED nodes over the same range: the maximum
    /// depth of presence flags needed to tell a null at each nesting level
    /// from an actually present value.
    pub fn max_definition_level<P: Into<ColumnPath>>(&self, path: P) -> Result<i16> {
        self.count_levels(path.into(), |r| r != Repetition::REQUIRED)
    }

    fn count_levels<F>(&self, path: ColumnPath, count: F) -> Result<i16>
    where
        F: Fn(Repetition) -> bool,
    {
        let mut level = 0i16;
        let mut node = &self.root;
        for part in path.parts() {
            node = node.child(part).ok_or_else(|| path_err!("{}", path))?;
            if count(node.repetition()) {
                level += 1;
            }
        }
        Ok(level)
    }

    /// An indented diagnostic rendering of the full tree, computed on first
    /// use and memoized on this instance.
    pub fn text(&self) -> &str {
        self.text.get_or_init(|| schema_to_text(&self.root))
    }
}

impl PartialEq for SchemaHelper {
    fn eq(&self, other: &Self) -> bool {
        self.schema_elements == other.schema_elements
    }
}

impl fmt::Display for SchemaHelper {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.text())
    }
}

fn collect_by_name(node: &NodePtr, out: &mut HashMap<String, NodePtr>) {
    out.insert(node.name().to_owned(), node.clone());
    for child in node.children().values() {
        collect_by_name(child, out);
    }
}
