// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed vs. generic attribute encoding
//!
//! Attributes the schema defines for the object's type become typed elements
//! in the object's namespace; everything else becomes a
//! `gen:stringAttribute`. A type the schema does not know has an empty known
//! set, so all of its attributes go generic.

use std::io::{self, Write};

use cityjson_lite_core::SchemaAttributeSet;
use serde_json::{Map, Value};

use crate::format::value_text;
use crate::writer::XmlSink;

/// How one attribute is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeEncoding {
    Typed,
    Generic,
}

impl AttributeEncoding {
    #[inline]
    pub fn classify(schema: &SchemaAttributeSet, object_type: &str, key: &str) -> Self {
        if schema.is_known(object_type, key) {
            Self::Typed
        } else {
            Self::Generic
        }
    }
}

/// Qualified element name of a typed attribute
fn typed_name(prefix: &str, key: &str) -> String {
    if key.contains(':') {
        key.to_string()
    } else {
        format!("{}:{}", prefix, key)
    }
}

/// Write every attribute of one object, in document order
pub fn emit_attributes<W: Write>(
    sink: &mut XmlSink<W>,
    schema: &SchemaAttributeSet,
    object_type: &str,
    prefix: &str,
    attributes: &Map<String, Value>,
) -> io::Result<()> {
    for (key, value) in attributes {
        let text = value_text(value);
        match AttributeEncoding::classify(schema, object_type, key) {
            AttributeEncoding::Typed => {
                sink.text_element(&typed_name(prefix, key), &text)?;
            }
            AttributeEncoding::Generic => {
                sink.open_with("gen:stringAttribute", &[("name", key.as_str())])?;
                sink.text_element("gen:value", &text)?;
                sink.close("gen:stringAttribute")?;
            }
        }
    }
    Ok(())
}
