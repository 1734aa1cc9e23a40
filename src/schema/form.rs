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

//! Maps a schema subtree to a backend-independent logical form, the shape
//! description an array-assembly layer needs to build the right nested
//! container for each column.

use serde_json::{json, Value};

use crate::basic::{ConvertedType, LogicalType, Repetition, TimeUnit, Type};
use crate::errors::Result;
use crate::schema::tree::SchemaNode;

/// Storage description of a leaf column, independent of any array backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeafRepr {
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    /// Variable-length byte list carrying UTF8 text.
    Utf8,
    /// Variable-length byte list without a text annotation.
    Bytes,
    /// Zero-width always-null column.
    Null,
    Date,
    Time(TimeUnit),
    Timestamp(TimeUnit),
}

impl std::fmt::Display for LeafRepr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            LeafRepr::Boolean => write!(f, "bool"),
            LeafRepr::Int8 => write!(f, "int8"),
            LeafRepr::Int16 => write!(f, "int16"),
            LeafRepr::Int32 => write!(f, "int32"),
            LeafRepr::Int64 => write!(f, "int64"),
            LeafRepr::UInt8 => write!(f, "uint8"),
            LeafRepr::UInt16 => write!(f, "uint16"),
            LeafRepr::UInt32 => write!(f, "uint32"),
            LeafRepr::UInt64 => write!(f, "uint64"),
            LeafRepr::Float32 => write!(f, "float32"),
            LeafRepr::Float64 => write!(f, "float64"),
            LeafRepr::Utf8 => write!(f, "utf8"),
            LeafRepr::Bytes => write!(f, "bytes"),
            LeafRepr::Null => write!(f, "null"),
            LeafRepr::Date => write!(f, "date"),
            LeafRepr::Time(unit) => write!(f, "time[{}]", unit_suffix(unit)),
            LeafRepr::Timestamp(unit) => write!(f, "timestamp[{}]", unit_suffix(unit)),
        }
    }
}

fn unit_suffix(unit: TimeUnit) -> &'static str {
    match unit {
        TimeUnit::MILLIS => "ms",
        TimeUnit::MICROS => "us",
        TimeUnit::NANOS => "ns",
    }
}

/// Logical shape of a schema subtree. Purely descriptive: it carries no data,
/// and `key` is the fully-dotted path used downstream to correlate a form
/// with its physical column buffers.
#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    Leaf {
        repr: LeafRepr,
        key: String,
    },
    List {
        content: Box<Form>,
        key: String,
    },
    Struct {
        fields: Vec<(String, Form)>,
        key: String,
    },
    Optional {
        content: Box<Form>,
        key: String,
    },
}

impl Form {
    pub fn key(&self) -> &str {
        match self {
            Form::Leaf { key, .. }
            | Form::List { key, .. }
            | Form::Struct { key, .. }
            | Form::Optional { key, .. } => key,
        }
    }

    /// JSON rendering of the form tree.
    pub fn to_json(&self) -> Value {
        match self {
            Form::Leaf { repr, key } => {
                json!({"class": "leaf", "repr": repr.to_string(), "key": key})
            }
            Form::List { content, key } => {
                json!({"class": "list", "content": content.to_json(), "key": key})
            }
            Form::Struct { fields, key } => {
                let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
                let contents: Vec<Value> = fields.iter().map(|(_, form)| form.to_json()).collect();
                json!({"class": "struct", "fields": names, "contents": contents, "key": key})
            }
            Form::Optional { content, key } => {
                json!({"class": "optional", "content": content.to_json(), "key": key})
            }
        }
    }
}

/// Maps a schema subtree to its logical form. `topname` is the accumulated
/// dotted path of the node's parent, empty at a root-level field.
///
/// OPTIONAL nodes wrap their form in [`Form::Optional`]; a canonical 3-level
/// LIST group produces an optional list regardless of its own repetition,
/// since the repeated middle level always admits an empty list. A bare
/// REPEATED group without a LIST or MAP annotation has no modeled form and
/// fails with the NYI error kind; this also covers MAP groups, which resolve
/// through the struct rule onto their repeated key_value child.
pub fn schema_to_form(node: &SchemaNode, topname: &str) -> Result<Form> {
    let key = if topname.is_empty() {
        node.name().to_owned()
    } else {
        format!("{}.{}", topname, node.name())
    };
    let mut optional = node.repetition_type() == Some(Repetition::OPTIONAL);

    let form = if node.is_leaf() {
        Form::Leaf {
            repr: leaf_repr(node)?,
            key: key.clone(),
        }
    } else if node.converted_type() == ConvertedType::LIST {
        let child = node
            .first_child()
            .ok_or_else(|| general_err!("LIST group {} has no child", key))?;
        let element = if child.repetition_type() == Some(Repetition::REPEATED) {
            // canonical 3-level encoding: the repeated level only structures
            // the list, the element is one below
            optional = true;
            child
                .first_child()
                .ok_or_else(|| general_err!("repeated level of {} has no child", key))?
        } else {
            // rare 2-level encoding with the element held directly
            child
        };
        Form::List {
            content: Box::new(schema_to_form(element, &key)?),
            key: key.clone(),
        }
    } else if node.repetition() == Repetition::REPEATED {
        return Err(nyi_err!(
            "repeated group {} has no LIST or MAP annotation",
            key
        ));
    } else {
        let mut fields = Vec::with_capacity(node.children().len());
        for (name, child) in node.children() {
            fields.push((name.clone(), schema_to_form(child, &key)?));
        }
        Form::Struct {
            fields,
            key: key.clone(),
        }
    };

    if optional {
        Ok(Form::Optional {
            content: Box::new(form),
            key,
        })
    } else {
        Ok(form)
    }
}

/// Resolves a leaf's storage description from its physical/converted type
/// combination, refined by the logical annotation where one is present.
fn leaf_repr(node: &SchemaNode) -> Result<LeafRepr> {
    let physical = node
        .physical_type()
        .ok_or_else(|| general_err!("leaf {} has no physical type", node.name()))?;

    if let Type::BYTE_ARRAY | Type::FIXED_LEN_BYTE_ARRAY = physical {
        return Ok(if node.converted_type() == ConvertedType::UTF8 {
            LeafRepr::Utf8
        } else {
            LeafRepr::Bytes
        });
    }
    if node.logical_type() == Some(LogicalType::UNKNOWN) {
        return Ok(LeafRepr::Null);
    }

    let repr = match physical {
        Type::BOOLEAN => LeafRepr::Boolean,
        Type::INT32 => from_int32(node)?,
        Type::INT64 => from_int64(node)?,
        Type::INT96 => LeafRepr::Timestamp(TimeUnit::NANOS),
        Type::FLOAT => LeafRepr::Float32,
        Type::DOUBLE => LeafRepr::Float64,
        Type::BYTE_ARRAY | Type::FIXED_LEN_BYTE_ARRAY => unreachable!(),
    };

    // timestamps default to nanoseconds; a refined logical annotation
    // re-tags the unit
    if repr == LeafRepr::Timestamp(TimeUnit::NANOS) {
        if let Some(LogicalType::TIMESTAMP(unit)) = node.logical_type() {
            return Ok(LeafRepr::Timestamp(unit));
        }
    }
    Ok(repr)
}

fn from_int32(node: &SchemaNode) -> Result<LeafRepr> {
    match node.converted_type() {
        ConvertedType::NONE | ConvertedType::INT_32 => Ok(LeafRepr::Int32),
        ConvertedType::INT_8 => Ok(LeafRepr::Int8),
        ConvertedType::INT_16 => Ok(LeafRepr::Int16),
        ConvertedType::UINT_8 => Ok(LeafRepr::UInt8),
        ConvertedType::UINT_16 => Ok(LeafRepr::UInt16),
        ConvertedType::UINT_32 => Ok(LeafRepr::UInt32),
        ConvertedType::DATE => Ok(LeafRepr::Date),
        ConvertedType::TIME_MILLIS => Ok(LeafRepr::Time(TimeUnit::MILLIS)),
        ConvertedType::DECIMAL => Ok(LeafRepr::Float64),
        other => Err(general_err!(
            "Unable to convert INT32 converted type {} for column {}",
            other,
            node.name()
        )),
    }
}

fn from_int64(node: &SchemaNode) -> Result<LeafRepr> {
    match node.converted_type() {
        ConvertedType::NONE | ConvertedType::INT_64 => Ok(LeafRepr::Int64),
        ConvertedType::UINT_64 => Ok(LeafRepr::UInt64),
        ConvertedType::TIME_MICROS => Ok(LeafRepr::Time(TimeUnit::MICROS)),
        ConvertedType::TIMESTAMP_MILLIS | ConvertedType::TIMESTAMP_MICROS => {
            Ok(LeafRepr::Timestamp(TimeUnit::NANOS))
        }
        ConvertedType::DECIMAL => Ok(LeafRepr::Float64),
        other => Err(general_err!(
            "Unable to convert INT64 converted type {} for column {}",
            other,
            node.name()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SchemaError;
    use crate::schema::element::SchemaElement;
    use crate::schema::parser::parse_message_type;
    use crate::schema::tree::{build_schema_tree, NodePtr};

    fn tree(message_type: &str) -> NodePtr {
        build_schema_tree(&parse_message_type(message_type).unwrap()).unwrap()
    }

    fn leaf(repr: LeafRepr, key: &str) -> Form {
        Form::Leaf {
            repr,
            key: key.to_owned(),
        }
    }

    #[test]
    fn test_optional_string_leaf() {
        let root = tree(
            "
            message test_schema {
                OPTIONAL BYTE_ARRAY b (UTF8);
            }
        ",
        );
        let form = schema_to_form(root.child("b").unwrap(), "").unwrap();
        assert_eq!(
            form,
            Form::Optional {
                content: Box::new(leaf(LeafRepr::Utf8, "b")),
                key: "b".to_owned(),
            }
        );
    }

    #[test]
    fn test_bytes_without_utf8() {
        let root = tree(
            "
            message test_schema {
                REQUIRED FIXED_LEN_BYTE_ARRAY digest;
            }
        ",
        );
        let form = schema_to_form(root.child("digest").unwrap(), "").unwrap();
        assert_eq!(form, leaf(LeafRepr::Bytes, "digest"));
    }

    #[test]
    fn test_three_level_list() {
        let root = tree(
            "
            message test_schema {
                OPTIONAL GROUP items (LIST) {
                    REPEATED GROUP list {
                        REQUIRED INT64 element;
                    }
                }
            }
        ",
        );
        let form = schema_to_form(root.child("items").unwrap(), "").unwrap();
        assert_eq!(form.key(), "items");
        // the repeated middle level is skipped; the element keys under the
        // list group itself
        assert_eq!(
            form,
            Form::Optional {
                content: Box::new(Form::List {
                    content: Box::new(leaf(LeafRepr::Int64, "items.element")),
                    key: "items".to_owned(),
                }),
                key: "items".to_owned(),
            }
        );
    }

    #[test]
    fn test_required_three_level_list_is_still_optional() {
        let root = tree(
            "
            message test_schema {
                REQUIRED GROUP items (LIST) {
                    REPEATED GROUP list {
                        REQUIRED INT32 element;
                    }
                }
            }
        ",
        );
        let form = schema_to_form(root.child("items").unwrap(), "").unwrap();
        assert!(matches!(form, Form::Optional { .. }));
    }

    #[test]
    fn test_two_level_list() {
        let root = tree(
            "
            message test_schema {
                OPTIONAL GROUP l (LIST) {
                    REQUIRED INT32 element;
                }
            }
        ",
        );
        let form = schema_to_form(root.child("l").unwrap(), "").unwrap();
        assert_eq!(
            form,
            Form::Optional {
                content: Box::new(Form::List {
                    content: Box::new(leaf(LeafRepr::Int32, "l.element")),
                    key: "l".to_owned(),
                }),
                key: "l".to_owned(),
            }
        );
    }

    #[test]
    fn test_struct_fields_in_order() {
        let root = tree(
            "
            message test_schema {
                REQUIRED GROUP s {
                    REQUIRED INT32 x;
                    OPTIONAL DOUBLE y;
                }
            }
        ",
        );
        let form = schema_to_form(root.child("s").unwrap(), "").unwrap();
        assert_eq!(
            form,
            Form::Struct {
                fields: vec![
                    ("x".to_owned(), leaf(LeafRepr::Int32, "s.x")),
                    (
                        "y".to_owned(),
                        Form::Optional {
                            content: Box::new(leaf(LeafRepr::Float64, "s.y")),
                            key: "s.y".to_owned(),
                        }
                    ),
                ],
                key: "s".to_owned(),
            }
        );
    }

    #[test]
    fn test_bare_repeated_group_is_nyi() {
        let root = tree(
            "
            message test_schema {
                REPEATED GROUP events {
                    REQUIRED INT64 ts;
                }
            }
        ",
        );
        let err = schema_to_form(root.child("events").unwrap(), "").unwrap_err();
        assert!(matches!(err, SchemaError::NYI(_)));
    }

    #[test]
    fn test_map_group_resolves_to_nyi_via_struct_rule() {
        let root = tree(
            "
            message test_schema {
                OPTIONAL GROUP m (MAP) {
                    REPEATED GROUP key_value {
                        REQUIRED BYTE_ARRAY key (UTF8);
                        OPTIONAL INT32 value;
                    }
                }
            }
        ",
        );
        let err = schema_to_form(root.child("m").unwrap(), "").unwrap_err();
        assert!(matches!(err, SchemaError::NYI(_)));
    }

    #[test]
    fn test_timestamp_unit_refinement() {
        let mut elements = parse_message_type(
            "
            message test_schema {
                REQUIRED INT64 ts (TIMESTAMP_MICROS);
            }
        ",
        )
        .unwrap();
        // without a refined annotation the unit stays at the nanosecond
        // default
        let root = build_schema_tree(&elements).unwrap();
        let form = schema_to_form(root.child("ts").unwrap(), "").unwrap();
        assert_eq!(form, leaf(LeafRepr::Timestamp(TimeUnit::NANOS), "ts"));

        elements[1].logical_type = Some(LogicalType::TIMESTAMP(TimeUnit::MICROS));
        let root = build_schema_tree(&elements).unwrap();
        let form = schema_to_form(root.child("ts").unwrap(), "").unwrap();
        assert_eq!(form, leaf(LeafRepr::Timestamp(TimeUnit::MICROS), "ts"));
    }

    #[test]
    fn test_int96_timestamp() {
        let root = tree(
            "
            message test_schema {
                REQUIRED INT96 legacy_ts;
            }
        ",
        );
        let form = schema_to_form(root.child("legacy_ts").unwrap(), "").unwrap();
        assert_eq!(
            form,
            leaf(LeafRepr::Timestamp(TimeUnit::NANOS), "legacy_ts")
        );
    }

    #[test]
    fn test_unknown_annotation_is_null() {
        let mut elements = parse_message_type(
            "
            message test_schema {
                OPTIONAL INT32 nothing;
            }
        ",
        )
        .unwrap();
        elements[1].logical_type = Some(LogicalType::UNKNOWN);
        let root = build_schema_tree(&elements).unwrap();
        let form = schema_to_form(root.child("nothing").unwrap(), "").unwrap();
        assert_eq!(
            form,
            Form::Optional {
                content: Box::new(leaf(LeafRepr::Null, "nothing")),
                key: "nothing".to_owned(),
            }
        );
    }

    #[test]
    fn test_converted_int_widths() {
        let root = tree(
            "
            message test_schema {
                REQUIRED INT32 a (INT_8);
                REQUIRED INT32 b (UINT_16);
                REQUIRED INT32 c (DATE);
                REQUIRED INT64 d (UINT_64);
                REQUIRED INT64 e (TIME_MICROS);
            }
        ",
        );
        let reprs: Vec<LeafRepr> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|name| match schema_to_form(root.child(name).unwrap(), "").unwrap() {
                Form::Leaf { repr, .. } => repr,
                other => panic!("expected leaf, got {:?}", other),
            })
            .collect();
        assert_eq!(
            reprs,
            vec![
                LeafRepr::Int8,
                LeafRepr::UInt16,
                LeafRepr::Date,
                LeafRepr::UInt64,
                LeafRepr::Time(TimeUnit::MICROS),
            ]
        );
    }

    #[test]
    fn test_unsupported_combination() {
        let mut element = SchemaElement {
            name: "bad".to_owned(),
            physical_type: Some(Type::INT32),
            converted_type: ConvertedType::TIMESTAMP_MICROS,
            ..Default::default()
        };
        element.repetition_type = Some(Repetition::REQUIRED);
        let root = build_schema_tree(&[
            SchemaElement {
                name: "m".to_owned(),
                num_children: Some(1),
                ..Default::default()
            },
            element,
        ])
        .unwrap();
        let err = schema_to_form(root.child("bad").unwrap(), "").unwrap_err();
        assert!(matches!(err, SchemaError::General(_)));
    }

    #[test]
    fn test_to_json() {
        let root = tree(
            "
            message test_schema {
                OPTIONAL BYTE_ARRAY b (UTF8);
            }
        ",
        );
        let form = schema_to_form(root.child("b").unwrap(), "").unwrap();
        assert_eq!(
            form.to_json(),
            serde_json::json!({
                "class": "optional",
                "content": {"class": "leaf", "repr": "utf8", "key": "b"},
                "key": "b",
            })
        );
    }
}
