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

//! Parser for message-type strings into the flat schema element list.
//!
//! Message type grammar:
//! ```text
//! message <name> {
//!     <repetition> GROUP <name> [(<converted-type>)] { ... }
//!     <repetition> <physical-type> <name> [(<converted-type>)];
//! }
//! ```
//! Keywords are matched case-insensitively; names keep their original case.
//! Only converted-type annotations are recognized; refined logical
//! annotations are attached to the produced elements programmatically where
//! needed.
//!
//! # Example
//!
//! ```rust
//! use parquet_schema::schema::parser::parse_message_type;
//!
//! let elements = parse_message_type(
//!     "
//!     message spark_schema {
//!         OPTIONAL BYTE_ARRAY a (UTF8);
//!         REQUIRED GROUP b {
//!             REQUIRED INT32 c;
//!         }
//!     }
//! ",
//! )
//! .unwrap();
//! assert_eq!(elements.len(), 4);
//! assert_eq!(elements[0].num_children, Some(2));
//! ```

use crate::basic::{ConvertedType, Repetition, Type};
use crate::errors::Result;
use crate::schema::element::SchemaElement;

/// Parses a message-type string into the flat preorder element list consumed
/// by [`build_schema_tree`](crate::schema::tree::build_schema_tree) and
/// [`SchemaHelper`](crate::schema::helper::SchemaHelper).
pub fn parse_message_type(message_type: &str) -> Result<Vec<SchemaElement>> {
    Parser {
        tokens: tokenize(message_type),
        index: 0,
    }
    .parse_message()
}

const SPECIAL_CHARS: &[char] = &['{', '}', '(', ')', ';', ','];

fn tokenize(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, c) in input.char_indices() {
        if c.is_whitespace() || SPECIAL_CHARS.contains(&c) {
            if let Some(s) = start.take() {
                tokens.push(&input[s..i]);
            }
            if !c.is_whitespace() {
                tokens.push(&input[i..i + c.len_utf8()]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(&input[s..]);
    }
    tokens
}

struct Parser<'a> {
    tokens: Vec<&'a str>,
    index: usize,
}

impl<'a> Parser<'a> {
    fn next(&mut self) -> Result<&'a str> {
        let token = self
            .tokens
            .get(self.index)
            .ok_or_else(|| general_err!("Unexpected end of schema"))?;
        self.index += 1;
        Ok(token)
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.index).copied()
    }

    fn expect(&mut self, expected: &str) -> Result<()> {
        let token = self.next()?;
        if token != expected {
            return Err(general_err!("Expected '{}', found '{}'", expected, token));
        }
        Ok(())
    }

    fn parse_message(&mut self) -> Result<Vec<SchemaElement>> {
        let keyword = self.next()?;
        if !keyword.eq_ignore_ascii_case("message") {
            return Err(general_err!("Message type does not start with 'message'"));
        }
        let name = self.next()?.to_owned();

        let mut elements = vec![SchemaElement {
            name,
            num_children: Some(0),
            ..Default::default()
        }];
        let num_children = self.parse_group_body(&mut elements)?;
        elements[0].num_children = Some(num_children);
        Ok(elements)
    }

    /// Parses `{ field* }`, appending fields in preorder, and returns the
    /// number of direct children.
    fn parse_group_body(&mut self, elements: &mut Vec<SchemaElement>) -> Result<i32> {
        self.expect("{")?;
        let mut num_children = 0;
        while self.peek() != Some("}") {
            self.parse_field(elements)?;
            num_children += 1;
        }
        self.expect("}")?;
        if self.peek() == Some(";") {
            self.index += 1;
        }
        Ok(num_children)
    }

    fn parse_field(&mut self, elements: &mut Vec<SchemaElement>) -> Result<()> {
        let repetition: Repetition = self.next()?.to_uppercase().parse()?;
        let token = self.next()?;

        if token.eq_ignore_ascii_case("group") {
            let name = self.next()?.to_owned();
            let converted_type = self.parse_annotation()?;
            let index = elements.len();
            elements.push(SchemaElement {
                name,
                converted_type,
                repetition_type: Some(repetition),
                num_children: Some(0),
                ..Default::default()
            });
            let num_children = self.parse_group_body(elements)?;
            elements[index].num_children = Some(num_children);
        } else {
            let physical_type: Type = token.to_uppercase().parse()?;
            let name = self.next()?.to_owned();
            let converted_type = self.parse_annotation()?;
            self.expect(";")?;
            elements.push(SchemaElement {
                name,
                physical_type: Some(physical_type),
                converted_type,
                repetition_type: Some(repetition),
                ..Default::default()
            });
        }
        Ok(())
    }

    fn parse_annotation(&mut self) -> Result<ConvertedType> {
        if self.peek() != Some("(") {
            return Ok(ConvertedType::NONE);
        }
        self.index += 1;
        let converted = self.next()?.to_uppercase().parse()?;
        self.expect(")")?;
        Ok(converted)
    }
}
