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

//! The flat schema element record, as decoded from file metadata.

use std::str;

use crate::basic::{ConvertedType, LogicalType, Repetition, Type};
use crate::errors::Result;

/// One element of the flat, preorder-serialized schema list.
///
/// Element 0 is always the synthetic message root. A group element carries
/// `num_children > 0` and no physical type; a leaf carries a physical type and
/// no children. The list is the read-only input boundary of this crate: apart
/// from name decoding at ingestion, elements are never mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaElement {
    pub name: String,
    /// Physical storage type; absent for group elements.
    pub physical_type: Option<Type>,
    /// Legacy semantic annotation; `NONE` when absent.
    pub converted_type: ConvertedType,
    /// Refined logical annotation, decoded into a tagged union at ingestion.
    pub logical_type: Option<LogicalType>,
    /// Absent only on the message root.
    pub repetition_type: Option<Repetition>,
    /// Present and positive only for group elements.
    pub num_children: Option<i32>,
}

impl SchemaElement {
    /// Whether this element declares children, i.e. is a group.
    pub fn is_group(&self) -> bool {
        self.num_children.map(|n| n > 0).unwrap_or(false)
    }

    /// Replaces the element name with one decoded from a raw byte sequence.
    ///
    /// Metadata decoders may surface names as undecoded bytes; they are
    /// turned into text once here, before any tree construction.
    pub fn set_name_from_bytes(&mut self, raw: &[u8]) -> Result<()> {
        self.name = str::from_utf8(raw)?.to_owned();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_group() {
        let mut element = SchemaElement {
            name: "leaf".to_owned(),
            physical_type: Some(Type::INT32),
            repetition_type: Some(Repetition::REQUIRED),
            ..Default::default()
        };
        assert!(!element.is_group());

        element.num_children = Some(0);
        assert!(!element.is_group());

        element.num_children = Some(2);
        assert!(element.is_group());
    }

    #[test]
    fn test_name_decoding() {
        let mut element = SchemaElement::default();
        element.set_name_from_bytes(b"amount").unwrap();
        assert_eq!(element.name, "amount");

        let result = element.set_name_from_bytes(&[0xff, 0xfe]);
        assert!(result.is_err());
        // the previously decoded name is untouched on failure
        assert_eq!(element.name, "amount");
    }
}
