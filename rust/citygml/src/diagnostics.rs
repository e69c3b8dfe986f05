// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Diagnostics for skipped input
//!
//! Unsupported parts of the input are skipped, logged, and recorded here so
//! callers can report them after the run.

use std::fmt;

/// One skipped unit of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// City object type without an emitter; its member element stays empty
    UnsupportedCityObject { id: String, object_type: String },
    /// Geometry type the converter cannot emit
    UnsupportedGeometry { object_id: String, kind: String },
    /// Semantic surfaces on a composite surface
    SemanticsOnCompositeSurface { object_id: String, lod: u8 },
    /// Semantics-bearing geometry on a type that does not reconstruct semantics
    SemanticsSkipped {
        object_id: String,
        object_type: String,
        lod: u8,
    },
    /// Surface type that is not a valid XML name; the geometry is skipped
    InvalidSurfaceType {
        object_id: String,
        surface_type: String,
    },
    /// Surface attribute key that is not a valid XML name; the key is dropped
    InvalidAttributeName { object_id: String, name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedCityObject { id, object_type } => {
                write!(f, "{}: {} not implemented yet", id, object_type)
            }
            Diagnostic::UnsupportedGeometry { object_id, kind } => {
                write!(f, "{}: geometry type {} not supported", object_id, kind)
            }
            Diagnostic::SemanticsOnCompositeSurface { object_id, lod } => write!(
                f,
                "{}: semantics on LOD{} CompositeSurface not supported",
                object_id, lod
            ),
            Diagnostic::SemanticsSkipped {
                object_id,
                object_type,
                lod,
            } => write!(
                f,
                "{}: LOD{} geometry with semantics skipped for {}",
                object_id, lod, object_type
            ),
            Diagnostic::InvalidSurfaceType {
                object_id,
                surface_type,
            } => write!(
                f,
                "{}: semantic surface type {:?} is not a valid element name",
                object_id, surface_type
            ),
            Diagnostic::InvalidAttributeName { object_id, name } => write!(
                f,
                "{}: surface attribute {:?} is not a valid element name",
                object_id, name
            ),
        }
    }
}

/// Ordered collection of diagnostics for one run
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(%diagnostic, "Skipped unsupported input");
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
