// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary representation
//!
//! Geometry is nested lists of vertex indices:
//! ring → polygon → shell → solid, or a flat polygon list for surface sets.

use serde_json::Value;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::vertex::VertexStore;

/// Ordered vertex indices of a closed ring (the closing vertex is implicit)
pub type Ring = Vec<usize>;

/// Polygon: ring 0 is the exterior, the remaining rings are holes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    rings: SmallVec<[Ring; 1]>,
}

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self {
            rings: SmallVec::from_vec(rings),
        }
    }

    /// Exterior ring. Loaded polygons always have one.
    #[inline]
    pub fn exterior(&self) -> &Ring {
        &self.rings[0]
    }

    #[inline]
    pub fn interiors(&self) -> &[Ring] {
        self.rings.get(1..).unwrap_or(&[])
    }

    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    fn check(&self, object: &str, vertices: &VertexStore) -> Result<()> {
        if self.rings.is_empty() {
            return Err(Error::EmptyPolygon(object.to_string()));
        }
        for ring in &self.rings {
            if ring.is_empty() {
                return Err(Error::EmptyRing(object.to_string()));
            }
            if let Some(&index) = ring.iter().find(|&&i| !vertices.contains(i)) {
                return Err(Error::VertexOutOfRange {
                    object: object.to_string(),
                    index,
                    count: vertices.len(),
                });
            }
        }
        Ok(())
    }
}

/// Shell of a solid: a closed set of polygons
pub type Shell = Vec<Polygon>;

/// Geometry kinds the converter knows how to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Solid,
    MultiSurface,
    CompositeSurface,
}

impl GeometryKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Solid" => Some(Self::Solid),
            "MultiSurface" => Some(Self::MultiSurface),
            "CompositeSurface" => Some(Self::CompositeSurface),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::MultiSurface => "MultiSurface",
            Self::CompositeSurface => "CompositeSurface",
        }
    }
}

/// Boundaries of one geometry, tagged by kind
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Shell 0 is the exterior shell, later shells are cavities
    Solid(Vec<Shell>),
    MultiSurface(Vec<Polygon>),
    CompositeSurface(Vec<Polygon>),
    /// Any other CityJSON geometry type; boundaries are not decoded
    Unsupported(String),
}

impl Shape {
    /// Decode `boundaries` for a CityJSON geometry `type`
    pub fn from_json(kind: &str, boundaries: Value) -> Result<Self> {
        let shape = match GeometryKind::from_str(kind) {
            Some(GeometryKind::Solid) => {
                let raw: Vec<Vec<Vec<Ring>>> = serde_json::from_value(boundaries)?;
                Shape::Solid(
                    raw.into_iter()
                        .map(|shell| shell.into_iter().map(Polygon::new).collect())
                        .collect(),
                )
            }
            Some(GeometryKind::MultiSurface) => Shape::MultiSurface(decode_surfaces(boundaries)?),
            Some(GeometryKind::CompositeSurface) => {
                Shape::CompositeSurface(decode_surfaces(boundaries)?)
            }
            None => Shape::Unsupported(kind.to_string()),
        };
        Ok(shape)
    }

    pub fn kind(&self) -> Option<GeometryKind> {
        match self {
            Shape::Solid(_) => Some(GeometryKind::Solid),
            Shape::MultiSurface(_) => Some(GeometryKind::MultiSurface),
            Shape::CompositeSurface(_) => Some(GeometryKind::CompositeSurface),
            Shape::Unsupported(_) => None,
        }
    }

    /// CityJSON type name, including unsupported kinds
    pub fn type_name(&self) -> &str {
        match self {
            Shape::Unsupported(name) => name,
            other => other.kind().map(|k| k.as_str()).unwrap_or_default(),
        }
    }

    /// All polygons in natural order (shell-major for solids)
    pub fn polygons(&self) -> Box<dyn Iterator<Item = &Polygon> + '_> {
        match self {
            Shape::Solid(shells) => Box::new(shells.iter().flatten()),
            Shape::MultiSurface(polygons) | Shape::CompositeSurface(polygons) => {
                Box::new(polygons.iter())
            }
            Shape::Unsupported(_) => Box::new(std::iter::empty()),
        }
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons().count()
    }

    /// Structural well-formedness: every ring non-empty and every index in range
    pub fn check(&self, object: &str, vertices: &VertexStore) -> Result<()> {
        self.polygons().try_for_each(|p| p.check(object, vertices))
    }
}

fn decode_surfaces(boundaries: Value) -> Result<Vec<Polygon>> {
    let raw: Vec<Vec<Ring>> = serde_json::from_value(boundaries)?;
    Ok(raw.into_iter().map(Polygon::new).collect())
}
