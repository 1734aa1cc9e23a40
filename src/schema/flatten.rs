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

//! Collapses struct-only nesting into the flat dotted-path column namespace.

use indexmap::IndexMap;

use crate::basic::{ConvertedType, Repetition};
use crate::schema::tree::NodePtr;

/// The flat column index: an ordered mapping from dotted path to the node
/// addressed by it. This is what page readers enumerate; LIST and MAP columns
/// appear as single opaque entries and plain struct nesting does not appear
/// at all, only its hoisted leaves.
#[derive(Debug, PartialEq, Default)]
pub struct FlatIndex {
    columns: IndexMap<String, NodePtr>,
}

impl FlatIndex {
    pub fn get(&self, path: &str) -> Option<&NodePtr> {
        self.columns.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.columns.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Dotted paths in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, NodePtr> {
        self.columns.iter()
    }
}

impl<'a> IntoIterator for &'a FlatIndex {
    type Item = (&'a String, &'a NodePtr);
    type IntoIter = indexmap::map::Iter<'a, String, NodePtr>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Builds the flat column index for the whole tree.
///
/// Walks struct nesting depth-first, registering leaves and LIST/MAP groups
/// under their joined dotted path. A LIST or MAP group stays opaque: its
/// internal repeated encoding must be decoded as one logical column, so it is
/// never expanded into the flat namespace. Children of a bare REPEATED group
/// without a LIST/MAP annotation are excluded entirely; the flat encoding does
/// not model them as addressable columns and they remain reachable only by
/// direct tree traversal. Collapsed struct nodes are marked flat.
///
/// The index is a pure function of the tree, so repeated invocations yield
/// the same result.
pub fn flatten(root: &NodePtr) -> FlatIndex {
    let mut columns = IndexMap::new();
    flatten_into(root, &mut Vec::new(), &mut columns);
    FlatIndex { columns }
}

fn flatten_into(node: &NodePtr, name_parts: &mut Vec<String>, out: &mut IndexMap<String, NodePtr>) {
    if node.repetition() == Repetition::REPEATED {
        return;
    }
    for (name, child) in node.children() {
        let opaque = matches!(
            child.converted_type(),
            ConvertedType::LIST | ConvertedType::MAP
        );
        if child.is_leaf() || opaque {
            out.insert(join(name_parts, name), child.clone());
        } else {
            name_parts.push(name.clone());
            flatten_into(child, name_parts, out);
            name_parts.pop();
            child.mark_flat();
        }
    }
}

fn join(parts: &[String], name: &str) -> String {
    if parts.is_empty() {
        name.to_owned()
    } else {
        format!("{}.{}", parts.join("."), name)
    }
}
