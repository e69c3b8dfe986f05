// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry dispatch
//!
//! Routes each geometry on its kind and on whether it carries semantics:
//!
//! | kind             | plain                          | with semantics           |
//! |------------------|--------------------------------|--------------------------|
//! | Solid            | `lodNSolid/gml:Solid`          | surfaces + skeleton      |
//! | MultiSurface     | `lodNMultiSurface`             | surfaces + skeleton      |
//! | CompositeSurface | literal or normalized          | skipped, diagnostic      |
//! | anything else    | skipped, diagnostic            | skipped, diagnostic      |
//!
//! A semantics-bearing geometry whose surface types are not valid element
//! names is skipped with a diagnostic as well.

use std::io::{self, Write};

use cityjson_lite_core::{Geometry, Semantics, Shape};

use crate::context::{EmitContext, RunState};
use crate::diagnostics::Diagnostic;
use crate::gml::{emit_solid, emit_surfaces, Aggregate};
use crate::semantic::{emit_semantic_geometry, Classified};
use crate::writer::{is_xml_name, XmlSink};

/// What a city object type does with semantics-bearing geometries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticPolicy {
    /// Typed surface blocks plus a referencing skeleton
    Reconstruct,
    /// Drop the geometry and record a diagnostic
    Skip,
}

/// Per-type geometry handling
#[derive(Debug, Clone, Copy)]
pub struct GeometryPolicy {
    pub semantics: SemanticPolicy,
    /// Write composite surfaces as `gml:MultiSurface` under a
    /// `lodNMultiSurface` container
    pub normalize_composite: bool,
}

/// Owner of the geometries being dispatched
#[derive(Debug, Clone, Copy)]
pub struct Owner<'a> {
    pub id: &'a str,
    pub object_type: &'a str,
    /// Namespace prefix of the owner's module (`bldg`, `wtr`, ...)
    pub prefix: &'a str,
}

/// Emit one geometry, or skip it with a diagnostic
pub fn emit_geometry<W: Write>(
    sink: &mut XmlSink<W>,
    ctx: &EmitContext<'_>,
    state: &mut RunState,
    owner: Owner<'_>,
    policy: GeometryPolicy,
    geometry: &Geometry,
) -> io::Result<()> {
    if geometry.shape.kind().is_none() {
        state.diagnostics.push(Diagnostic::UnsupportedGeometry {
            object_id: owner.id.to_string(),
            kind: geometry.shape.type_name().to_string(),
        });
        return Ok(());
    }

    match (&geometry.semantics, policy.semantics) {
        (Some(_), SemanticPolicy::Skip) => {
            state.diagnostics.push(Diagnostic::SemanticsSkipped {
                object_id: owner.id.to_string(),
                object_type: owner.object_type.to_string(),
                lod: geometry.lod,
            });
            Ok(())
        }
        (Some(semantics), SemanticPolicy::Reconstruct) => {
            match Classified::new(&geometry.shape, &semantics.values) {
                Some(_) if !check_names(state, owner, semantics) => {}
                Some(classified) => {
                    emit_semantic_geometry(
                        sink,
                        ctx,
                        state,
                        owner.prefix,
                        geometry,
                        semantics,
                        classified,
                    )?;
                    state.stats.geometries += 1;
                }
                None => state.diagnostics.push(Diagnostic::SemanticsOnCompositeSurface {
                    object_id: owner.id.to_string(),
                    lod: geometry.lod,
                }),
            }
            Ok(())
        }
        (None, _) => {
            emit_plain(sink, ctx, owner.prefix, policy.normalize_composite, geometry)?;
            state.stats.geometries += 1;
            Ok(())
        }
    }
}

/// Record names in `semantics` that cannot become element names. False when
/// a surface type is invalid, since its block cannot be written and the
/// skeleton would reference a missing block.
fn check_names(state: &mut RunState, owner: Owner<'_>, semantics: &Semantics) -> bool {
    if let Some(surface) = semantics
        .surfaces
        .iter()
        .find(|s| s.surface_type.contains(':') || !is_xml_name(&s.surface_type))
    {
        state.diagnostics.push(Diagnostic::InvalidSurfaceType {
            object_id: owner.id.to_string(),
            surface_type: surface.surface_type.clone(),
        });
        return false;
    }
    for surface in &semantics.surfaces {
        for name in surface.attributes.keys().filter(|k| !is_xml_name(k)) {
            state.diagnostics.push(Diagnostic::InvalidAttributeName {
                object_id: owner.id.to_string(),
                name: name.clone(),
            });
        }
    }
    true
}

/// Geometry without semantics inside its `<prefix>:lod<N><Kind>` container
fn emit_plain<W: Write>(
    sink: &mut XmlSink<W>,
    ctx: &EmitContext<'_>,
    prefix: &str,
    normalize_composite: bool,
    geometry: &Geometry,
) -> io::Result<()> {
    let kind = match &geometry.shape {
        Shape::CompositeSurface(_) if normalize_composite => "MultiSurface",
        shape => shape.type_name(),
    };
    let container = format!("{}:lod{}{}", prefix, geometry.lod, kind);

    sink.open(&container)?;
    match &geometry.shape {
        Shape::Solid(shells) => emit_solid(sink, ctx.vertices, shells)?,
        Shape::MultiSurface(polygons) => {
            emit_surfaces(sink, ctx.vertices, polygons, Aggregate::MultiSurface)?
        }
        Shape::CompositeSurface(polygons) => {
            let aggregate = if normalize_composite {
                Aggregate::MultiSurface
            } else {
                Aggregate::CompositeSurface
            };
            emit_surfaces(sink, ctx.vertices, polygons, aggregate)?
        }
        Shape::Unsupported(_) => {}
    }
    sink.close(&container)
}
