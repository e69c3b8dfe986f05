// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry instances of a city object

use serde::Deserialize;
use serde_json::Value;

use crate::boundary::Shape;
use crate::error::{Error, Result};
use crate::semantics::{RawSemantics, Semantics};
use crate::vertex::VertexStore;

/// One geometry of a city object at a given level of detail
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub lod: u8,
    pub shape: Shape,
    pub semantics: Option<Semantics>,
}

impl Geometry {
    pub fn new(lod: u8, shape: Shape) -> Self {
        Self {
            lod,
            shape,
            semantics: None,
        }
    }

    pub fn with_semantics(mut self, semantics: Semantics) -> Self {
        self.semantics = Some(semantics);
        self
    }

    #[inline]
    pub fn has_semantics(&self) -> bool {
        self.semantics.is_some()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    lod: Value,
    #[serde(default)]
    boundaries: Value,
    semantics: Option<RawSemantics>,
}

impl RawGeometry {
    /// Decode and validate against the document's vertex store
    pub(crate) fn decode(self, object: &str, vertices: &VertexStore) -> Result<Geometry> {
        let shape = Shape::from_json(&self.kind, self.boundaries)?;
        // GeometryInstance carries no lod; unsupported kinds are skipped later anyway
        let lod = match parse_lod(object, &self.lod) {
            Ok(lod) => lod,
            Err(_) if shape.kind().is_none() => 0,
            Err(e) => return Err(e),
        };
        shape.check(object, vertices)?;

        let semantics = match self.semantics {
            Some(raw) => Semantics::from_raw(object, &shape, raw)?,
            None => None,
        };
        if let Some(sem) = &semantics {
            sem.check(object, &shape)?;
        }

        Ok(Geometry {
            lod,
            shape,
            semantics,
        })
    }
}

/// LOD as an integer level.
///
/// Older documents use numbers (`2`, `2.1`), newer ones strings (`"2.2"`);
/// both reduce to their integer level.
fn parse_lod(object: &str, value: &Value) -> Result<u8> {
    let level = match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.trunc() as u64)),
        Value::String(s) => s.split('.').next().and_then(|head| head.parse::<u64>().ok()),
        _ => None,
    };
    level
        .and_then(|l| u8::try_from(l).ok())
        .ok_or_else(|| {
            Error::InvalidDocument(format!("city object '{}': invalid lod {}", object, value))
        })
}
