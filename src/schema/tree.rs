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

//! Nested schema tree nodes and reconstruction from the flat element list.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::basic::{ConvertedType, LogicalType, Repetition, Type};
use crate::errors::Result;
use crate::schema::element::SchemaElement;

/// Reference-counted pointer to a schema tree node.
pub type NodePtr = Arc<SchemaNode>;

/// A schema element together with its resolved children, in declaration
/// order. Leaves have an empty child map. The `is_flat` marker is set once
/// during flattening and never changes afterwards, so a fully built tree is
/// safe to share across threads.
#[derive(Debug)]
pub struct SchemaNode {
    element: SchemaElement,
    children: IndexMap<String, NodePtr>,
    is_flat: AtomicBool,
}

impl SchemaNode {
    pub fn name(&self) -> &str {
        &self.element.name
    }

    pub fn element(&self) -> &SchemaElement {
        &self.element
    }

    pub fn physical_type(&self) -> Option<Type> {
        self.element.physical_type
    }

    pub fn converted_type(&self) -> ConvertedType {
        self.element.converted_type
    }

    pub fn logical_type(&self) -> Option<LogicalType> {
        self.element.logical_type
    }

    /// The raw repetition marker; absent on the message root.
    pub fn repetition_type(&self) -> Option<Repetition> {
        self.element.repetition_type
    }

    /// The repetition marker, treating an absent one as REQUIRED. Only the
    /// message root lacks a marker in well-formed metadata, and the root is
    /// never part of a column path.
    pub fn repetition(&self) -> Repetition {
        self.element.repetition_type.unwrap_or(Repetition::REQUIRED)
    }

    /// A node with no realized children is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &IndexMap<String, NodePtr> {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&NodePtr> {
        self.children.get(name)
    }

    /// The first declared child, if any.
    pub fn first_child(&self) -> Option<&NodePtr> {
        self.children.values().next()
    }

    /// Whether this node was collapsed into the flat column namespace.
    pub fn is_flat(&self) -> bool {
        self.is_flat.load(Ordering::Relaxed)
    }

    pub(crate) fn mark_flat(&self) {
        self.is_flat.store(true, Ordering::Relaxed);
    }
}

// The `is_flat` marker is transient bookkeeping, not part of a node's
// identity.
impl PartialEq for SchemaNode {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element && self.children == other.children
    }
}

/// Reconstructs the nested tree from the flat preorder element list.
///
/// Element 0 is the message root; each group's children are serialized
/// contiguously directly after it, so a single forward walk consuming each
/// node's declared child count rebuilds the whole tree. Child counts are
/// trusted: beyond running off the end of the list (reported as an error, as
/// the index arithmetic makes that cheap to catch) malformed input is not
/// validated here and produces an unspecified tree.
pub fn build_schema_tree(elements: &[SchemaElement]) -> Result<NodePtr> {
    if elements.is_empty() {
        return Err(general_err!("schema element list is empty"));
    }
    let (root, _) = build_node(elements, 0)?;
    Ok(root)
}

fn build_node(elements: &[SchemaElement], index: usize) -> Result<(NodePtr, usize)> {
    let element = elements
        .get(index)
        .ok_or_else(|| general_err!("Index out of bound: {} >= {}", index, elements.len()))?;
    let num_children = element.num_children.unwrap_or(0).max(0) as usize;

    let mut children = IndexMap::with_capacity(num_children);
    let mut next = index + 1;
    for _ in 0..num_children {
        let (child, after) = build_node(elements, next)?;
        children.insert(child.name().to_owned(), child);
        next = after;
    }

    let node = Arc::new(SchemaNode {
        element: element.clone(),
        children,
        is_flat: AtomicBool::new(false),
    });
    Ok((node, next))
}

// ----------------------------------------------------------------------
// Column paths

/// A dotted or segmented path addressing a node in the schema tree. The
/// synthetic root's own name is never part of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnPath {
    parts: Vec<String>,
}

impl ColumnPath {
    pub fn new(parts: Vec<String>) -> Self {
        ColumnPath { parts }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// The path truncated by `n` trailing segments.
    pub fn parent(&self, n: usize) -> ColumnPath {
        let end = self.parts.len().saturating_sub(n);
        ColumnPath::new(self.parts[..end].to_vec())
    }
}

impl fmt::Display for ColumnPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.parts.join("."))
    }
}

impl From<&str> for ColumnPath {
    fn from(single_path: &str) -> Self {
        ColumnPath::new(single_path.split('.').map(|s| s.to_owned()).collect())
    }
}

impl From<String> for ColumnPath {
    fn from(single_path: String) -> Self {
        ColumnPath::from(single_path.as_str())
    }
}

impl From<Vec<String>> for ColumnPath {
    fn from(parts: Vec<String>) -> Self {
        ColumnPath::new(parts)
    }
}

impl From<&[&str]> for ColumnPath {
    fn from(parts: &[&str]) -> Self {
        ColumnPath::new(parts.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl From<&ColumnPath> for ColumnPath {
    fn from(path: &ColumnPath) -> Self {
        path.clone()
    }
}
