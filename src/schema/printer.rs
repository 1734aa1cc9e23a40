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

//! Schema tree printer.
//! Renders one line per node with its physical type, annotations and
//! repetition marker, children indented beneath. Diagnostics only, not a
//! machine-parsed format.

use std::io;

use crate::basic::ConvertedType;
use crate::schema::tree::SchemaNode;

/// Renders the tree rooted at `node` as indented text.
pub fn schema_to_text(node: &SchemaNode) -> String {
    let mut text = String::new();
    Printer::new(&mut text).print(node);
    text
}

/// Prints the tree rooted at `node` to `out`.
#[allow(unused_must_use)]
pub fn print_schema(out: &mut dyn io::Write, node: &SchemaNode) {
    writeln!(out, "{}", schema_to_text(node));
}

struct Printer<'a> {
    output: &'a mut String,
    indent: Vec<&'static str>,
}

impl<'a> Printer<'a> {
    fn new(output: &'a mut String) -> Self {
        Printer {
            output,
            indent: Vec::new(),
        }
    }

    fn print(&mut self, node: &SchemaNode) {
        for rail in &self.indent {
            self.output.push_str(rail);
        }
        self.output.push_str("- ");
        self.output.push_str(node.name());
        self.output.push_str(": ");

        let mut parts = Vec::new();
        if let Some(physical) = node.physical_type() {
            parts.push(physical.to_string());
        }
        if let Some(logical) = node.logical_type() {
            parts.push(logical.to_string());
        }
        if node.converted_type() != ConvertedType::NONE {
            parts.push(node.converted_type().to_string());
        }
        if let Some(repetition) = node.repetition_type() {
            parts.push(repetition.to_string());
        }
        self.output.push_str(&parts.join(", "));

        self.indent.push("| ");
        let last = node.children().len().saturating_sub(1);
        for (i, child) in node.children().values().enumerate() {
            if i == last {
                if let Some(rail) = self.indent.last_mut() {
                    *rail = "  ";
                }
            }
            self.output.push('\n');
            self.print(child);
        }
        self.indent.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{LogicalType, TimeUnit};
    use crate::schema::parser::parse_message_type;
    use crate::schema::tree::{build_schema_tree, NodePtr};

    fn tree(message_type: &str) -> NodePtr {
        build_schema_tree(&parse_message_type(message_type).unwrap()).unwrap()
    }

    #[test]
    fn test_render_flat_message() {
        let root = tree(
            "
            message test_schema {
                REQUIRED INT32 a;
                OPTIONAL BYTE_ARRAY b (UTF8);
            }
        ",
        );
        let expected = vec![
            "- test_schema: ",
            "| - a: INT32, REQUIRED",
            "  - b: BYTE_ARRAY, UTF8, OPTIONAL",
        ]
        .join("\n");
        assert_eq!(schema_to_text(&root), expected);
    }

    #[test]
    fn test_render_nested_message() {
        let root = tree(
            "
            message test_schema {
                REQUIRED INT32 a;
                OPTIONAL GROUP s {
                    REQUIRED GROUP t {
                        OPTIONAL INT64 y;
                    }
                    OPTIONAL BYTE_ARRAY b (UTF8);
                }
            }
        ",
        );
        let expected = vec![
            "- test_schema: ",
            "| - a: INT32, REQUIRED",
            "  - s: OPTIONAL",
            "  | - t: REQUIRED",
            "  |   - y: INT64, OPTIONAL",
            "    - b: BYTE_ARRAY, UTF8, OPTIONAL",
        ]
        .join("\n");
        assert_eq!(schema_to_text(&root), expected);
    }

    #[test]
    fn test_render_logical_annotation() {
        let mut elements = parse_message_type(
            "
            message test_schema {
                REQUIRED INT64 ts (TIMESTAMP_MICROS);
            }
        ",
        )
        .unwrap();
        elements[1].logical_type = Some(LogicalType::TIMESTAMP(TimeUnit::MICROS));
        let root = build_schema_tree(&elements).unwrap();
        assert_eq!(
            schema_to_text(&root),
            "- test_schema: \n  - ts: INT64, TIMESTAMP[MICROS], TIMESTAMP_MICROS, REQUIRED"
        );
    }

    #[test]
    fn test_print_schema_appends_newline() {
        let root = tree(
            "
            message test_schema {
                REQUIRED INT32 a;
            }
        ",
        );
        let mut out = Vec::new();
        print_schema(&mut out, &root);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.ends_with('\n'));
        assert!(printed.contains("- a: INT32, REQUIRED"));
    }
}
