// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Semantic surfaces
//!
//! A geometry may classify its polygons with semantic surfaces (roof, wall,
//! ground, ...). `values` mirrors the boundary nesting exactly and each leaf
//! is either an index into `surfaces` or unset.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::boundary::Shape;
use crate::error::{Error, Result};

/// One semantic surface descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticSurface {
    /// Surface type tag, e.g. `RoofSurface`
    pub surface_type: String,
    /// Every other member of the descriptor, in document order
    pub attributes: Map<String, Value>,
}

impl SemanticSurface {
    pub fn new(surface_type: impl Into<String>) -> Self {
        Self {
            surface_type: surface_type.into(),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    fn from_json(object: &str, mut raw: Map<String, Value>) -> Result<Self> {
        let surface_type = match raw.remove("type") {
            Some(Value::String(s)) => s,
            _ => {
                return Err(Error::InvalidDocument(format!(
                    "city object '{}': semantic surface without a type",
                    object
                )))
            }
        };
        Ok(Self {
            surface_type,
            attributes: raw,
        })
    }
}

/// Semantic value tree, congruent to the boundaries it classifies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticValues {
    /// One leaf per polygon of a surface set
    Surfaces(Vec<Option<usize>>),
    /// One list of leaves per shell of a solid
    Shells(Vec<Vec<Option<usize>>>),
}

impl SemanticValues {
    /// All leaves in natural order (shell-major for solids)
    pub fn leaves(&self) -> Box<dyn Iterator<Item = Option<usize>> + '_> {
        match self {
            SemanticValues::Surfaces(values) => Box::new(values.iter().copied()),
            SemanticValues::Shells(shells) => Box::new(shells.iter().flatten().copied()),
        }
    }
}

/// Semantic surfaces of one geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Semantics {
    pub surfaces: Vec<SemanticSurface>,
    pub values: SemanticValues,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSemantics {
    #[serde(default)]
    surfaces: Vec<Map<String, Value>>,
    #[serde(default)]
    values: Value,
}

impl Semantics {
    /// Decode the raw `semantics` member against its geometry's shape.
    ///
    /// A `null` value tree (or a `null` shell inside a solid's tree) means
    /// every covered polygon is unset. Unsupported shapes carry no semantics.
    pub(crate) fn from_raw(object: &str, shape: &Shape, raw: RawSemantics) -> Result<Option<Self>> {
        let values = match shape {
            Shape::Solid(shells) => {
                if raw.values.is_null() {
                    SemanticValues::Shells(shells.iter().map(|s| vec![None; s.len()]).collect())
                } else {
                    let decoded: Vec<Option<Vec<Option<usize>>>> =
                        serde_json::from_value(raw.values)?;
                    SemanticValues::Shells(
                        decoded
                            .into_iter()
                            .enumerate()
                            .map(|(i, shell)| {
                                shell.unwrap_or_else(|| {
                                    vec![None; shells.get(i).map_or(0, Vec::len)]
                                })
                            })
                            .collect(),
                    )
                }
            }
            Shape::MultiSurface(polygons) | Shape::CompositeSurface(polygons) => {
                if raw.values.is_null() {
                    SemanticValues::Surfaces(vec![None; polygons.len()])
                } else {
                    SemanticValues::Surfaces(serde_json::from_value(raw.values)?)
                }
            }
            Shape::Unsupported(_) => return Ok(None),
        };

        let surfaces = raw
            .surfaces
            .into_iter()
            .map(|s| SemanticSurface::from_json(object, s))
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(Self { surfaces, values }))
    }

    /// Verify the value tree is congruent to `shape` and every leaf is in range
    pub fn check(&self, object: &str, shape: &Shape) -> Result<()> {
        let mismatch = |detail: String| Error::SemanticsMismatch {
            object: object.to_string(),
            detail,
        };

        match (&self.values, shape) {
            (SemanticValues::Shells(values), Shape::Solid(shells)) => {
                if values.len() != shells.len() {
                    return Err(mismatch(format!(
                        "{} value shells for {} shells",
                        values.len(),
                        shells.len()
                    )));
                }
                for (i, (v, s)) in values.iter().zip(shells).enumerate() {
                    if v.len() != s.len() {
                        return Err(mismatch(format!(
                            "shell {}: {} values for {} polygons",
                            i,
                            v.len(),
                            s.len()
                        )));
                    }
                }
            }
            (
                SemanticValues::Surfaces(values),
                Shape::MultiSurface(polygons) | Shape::CompositeSurface(polygons),
            ) => {
                if values.len() != polygons.len() {
                    return Err(mismatch(format!(
                        "{} values for {} polygons",
                        values.len(),
                        polygons.len()
                    )));
                }
            }
            _ => {
                return Err(mismatch(format!(
                    "value tree nesting does not fit a {}",
                    shape.type_name()
                )))
            }
        }

        let count = self.surfaces.len();
        if let Some(index) = self.values.leaves().flatten().find(|&i| i >= count) {
            return Err(Error::SemanticIndexOutOfRange {
                object: object.to_string(),
                index,
                count,
            });
        }
        Ok(())
    }
}
