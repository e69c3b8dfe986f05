// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Values threaded through every emission call
//!
//! [`EmitContext`] is the read-only input (vertices, schema table); [`RunState`]
//! is the only mutable state of a run (id counter, diagnostics, counts).

use cityjson_lite_core::{SchemaAttributeSet, VertexStore};

use crate::diagnostics::Diagnostics;
use crate::ids::IdGenerator;

/// Immutable inputs of one conversion run
#[derive(Debug, Clone, Copy)]
pub struct EmitContext<'a> {
    pub vertices: &'a VertexStore,
    pub schema: &'a SchemaAttributeSet,
    /// Write plain composite surfaces as multi-surfaces
    pub normalize_composite: bool,
}

impl<'a> EmitContext<'a> {
    pub fn new(vertices: &'a VertexStore, schema: &'a SchemaAttributeSet) -> Self {
        Self {
            vertices,
            schema,
            normalize_composite: true,
        }
    }

    pub fn with_normalize_composite(mut self, normalize: bool) -> Self {
        self.normalize_composite = normalize;
        self
    }
}

/// Counts of what was written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// City objects with an emitter (unsupported types are not counted)
    pub city_objects: usize,
    /// Geometries written (skipped geometries are not counted)
    pub geometries: usize,
    /// Typed semantic surface blocks written
    pub semantic_surfaces: usize,
}

/// Mutable state of one conversion run
#[derive(Debug)]
pub struct RunState {
    pub ids: IdGenerator,
    pub diagnostics: Diagnostics,
    pub stats: ConversionStats,
}

impl RunState {
    pub fn new(id_prefix: &str) -> Self {
        Self {
            ids: IdGenerator::new(id_prefix),
            diagnostics: Diagnostics::new(),
            stats: ConversionStats::default(),
        }
    }

    /// Keep generated ids clear of ids the document already uses
    pub fn with_reserved_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = self.ids.reserve(ids);
        self
    }
}
