// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Semantic surface reconstruction
//!
//! A semantics-bearing geometry is written twice:
//!
//! 1. one typed block per semantic surface (`bldg:boundedBy/bldg:RoofSurface`)
//!    with a fresh `gml:id`, its extra attributes, and a `gml:MultiSurface`
//!    holding every polygon classified with that surface, in boundary order;
//! 2. a bundled skeleton with the geometry's own nesting (solid shells or a
//!    single multi-surface). Each scope gets one `xlink:href` reference per
//!    *distinct* surface used in it, in ascending index order, followed by
//!    the unclassified polygons of that scope written inline.
//!
//! Every reference in (2) points at a block written in (1). Surface
//! attribute keys that are not valid element names are left out.

use std::collections::BTreeSet;
use std::io::{self, Write};

use cityjson_lite_core::{Geometry, Polygon, SemanticValues, Semantics, Shape, Shell};

use crate::context::{EmitContext, RunState};
use crate::format::value_text;
use crate::gml::{emit_surface_member, Aggregate, Boundary};
use crate::writer::{is_xml_name, XmlSink};

/// Boundaries paired with their semantic value tree
#[derive(Debug, Clone, Copy)]
pub enum Classified<'g> {
    Solid {
        shells: &'g [Shell],
        values: &'g [Vec<Option<usize>>],
    },
    MultiSurface {
        polygons: &'g [Polygon],
        values: &'g [Option<usize>],
    },
}

impl<'g> Classified<'g> {
    /// Pair a shape with its values; `None` for kinds without semantic
    /// reconstruction (composite surfaces, unsupported kinds)
    pub fn new(shape: &'g Shape, values: &'g SemanticValues) -> Option<Self> {
        match (shape, values) {
            (Shape::Solid(shells), SemanticValues::Shells(values)) => {
                Some(Classified::Solid { shells, values })
            }
            (Shape::MultiSurface(polygons), SemanticValues::Surfaces(values)) => {
                Some(Classified::MultiSurface { polygons, values })
            }
            _ => None,
        }
    }

    /// CityGML geometry name of the bundled skeleton
    pub fn kind_name(&self) -> &'static str {
        match self {
            Classified::Solid { .. } => "Solid",
            Classified::MultiSurface { .. } => "MultiSurface",
        }
    }

    /// Scopes of the skeleton: one per shell, or a single flat scope
    pub fn scopes(&self) -> Vec<(&'g [Polygon], &'g [Option<usize>])> {
        match *self {
            Classified::Solid { shells, values } => shells
                .iter()
                .zip(values)
                .map(|(s, v)| (s.as_slice(), v.as_slice()))
                .collect(),
            Classified::MultiSurface { polygons, values } => vec![(polygons, values)],
        }
    }

    /// Polygons classified as `surface`, in natural order (shell-major)
    pub fn polygons_of(&self, surface: usize) -> Vec<&'g Polygon> {
        self.scopes()
            .into_iter()
            .flat_map(|(polygons, values)| polygons.iter().zip(values))
            .filter(|(_, v)| **v == Some(surface))
            .map(|(p, _)| p)
            .collect()
    }
}

/// Distinct surface indices used in one scope, ascending
pub fn fold_references(values: &[Option<usize>]) -> Vec<usize> {
    values
        .iter()
        .flatten()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Write the typed surface blocks and the bundled skeleton of one geometry.
///
/// `prefix` is the namespace prefix of the owning city object (`bldg`).
pub fn emit_semantic_geometry<W: Write>(
    sink: &mut XmlSink<W>,
    ctx: &EmitContext<'_>,
    state: &mut RunState,
    prefix: &str,
    geometry: &Geometry,
    semantics: &Semantics,
    classified: Classified<'_>,
) -> io::Result<()> {
    let ids = state.ids.allocate(semantics.surfaces.len());
    tracing::debug!(
        lod = geometry.lod,
        kind = classified.kind_name(),
        surfaces = ids.len(),
        "Reconstructing semantic surfaces"
    );

    let lod_multi_surface = format!("{}:lod{}MultiSurface", prefix, geometry.lod);
    let bounded_by = format!("{}:boundedBy", prefix);

    for (i, (surface, id)) in semantics.surfaces.iter().zip(&ids).enumerate() {
        let surface_tag = format!("{}:{}", prefix, surface.surface_type);

        sink.open(&bounded_by)?;
        sink.open_with(&surface_tag, &[("gml:id", id.as_str())])?;
        for (key, value) in surface.attributes.iter().filter(|(k, _)| is_xml_name(k)) {
            sink.text_element(key, &value_text(value))?;
        }
        sink.open(&lod_multi_surface)?;
        sink.open(Aggregate::MultiSurface.element())?;
        for polygon in classified.polygons_of(i) {
            emit_surface_member(sink, ctx.vertices, polygon)?;
        }
        sink.close(Aggregate::MultiSurface.element())?;
        sink.close(&lod_multi_surface)?;
        sink.close(&surface_tag)?;
        sink.close(&bounded_by)?;

        state.stats.semantic_surfaces += 1;
    }

    let container = format!("{}:lod{}{}", prefix, geometry.lod, classified.kind_name());
    sink.open(&container)?;
    match classified {
        Classified::Solid { .. } => {
            sink.open("gml:Solid")?;
            for (i, (polygons, values)) in classified.scopes().into_iter().enumerate() {
                let tag = Boundary::for_index(i).element();
                sink.open(tag)?;
                sink.open(Aggregate::CompositeSurface.element())?;
                emit_scope(sink, ctx, polygons, values, &ids)?;
                sink.close(Aggregate::CompositeSurface.element())?;
                sink.close(tag)?;
            }
            sink.close("gml:Solid")?;
        }
        Classified::MultiSurface { polygons, values } => {
            sink.open(Aggregate::MultiSurface.element())?;
            emit_scope(sink, ctx, polygons, values, &ids)?;
            sink.close(Aggregate::MultiSurface.element())?;
        }
    }
    sink.close(&container)
}

/// References to the distinct surfaces of a scope, then its unclassified polygons
fn emit_scope<W: Write>(
    sink: &mut XmlSink<W>,
    ctx: &EmitContext<'_>,
    polygons: &[Polygon],
    values: &[Option<usize>],
    ids: &[String],
) -> io::Result<()> {
    for id in fold_references(values).into_iter().filter_map(|i| ids.get(i)) {
        let href = format!("#{}", id);
        sink.empty("gml:surfaceMember", &[("xlink:href", href.as_str())])?;
    }
    for (polygon, _) in polygons.iter().zip(values).filter(|(_, v)| v.is_none()) {
        emit_surface_member(sink, ctx.vertices, polygon)?;
    }
    Ok(())
}
