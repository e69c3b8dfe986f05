// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! City object dispatch
//!
//! Every object is wrapped in a `cityObjectMember`. Types with an emitter
//! profile get their attributes and geometries written inside
//! `<prefix>:<Type gml:id="...">`; any other type leaves the member empty and
//! records a diagnostic.

use std::io::{self, Write};

use cityjson_lite_core::{CityObject, CityObjectType};

use crate::attributes::emit_attributes;
use crate::context::{EmitContext, RunState};
use crate::diagnostics::Diagnostic;
use crate::dispatch::{emit_geometry, GeometryPolicy, Owner, SemanticPolicy};
use crate::namespaces::ModuleFamily;
use crate::writer::XmlSink;

const MEMBER: &str = "cityObjectMember";

/// How one city object type is written
#[derive(Debug, Clone, Copy)]
pub struct ObjectProfile {
    pub family: ModuleFamily,
    pub geometry: GeometryPolicy,
}

/// Emitter profile of a type, `None` when the type has no emitter
pub fn profile_of(object_type: &CityObjectType) -> Option<ObjectProfile> {
    let (family, semantics) = match object_type {
        CityObjectType::Building => (ModuleFamily::Building, SemanticPolicy::Reconstruct),
        CityObjectType::WaterBody => (ModuleFamily::WaterBody, SemanticPolicy::Skip),
        CityObjectType::LandUse => (ModuleFamily::LandUse, SemanticPolicy::Skip),
        _ => return None,
    };
    Some(ObjectProfile {
        family,
        geometry: GeometryPolicy {
            semantics,
            normalize_composite: true,
        },
    })
}

/// Write one city object as a `cityObjectMember`
pub fn emit_city_object<W: Write>(
    sink: &mut XmlSink<W>,
    ctx: &EmitContext<'_>,
    state: &mut RunState,
    object: &CityObject,
) -> io::Result<()> {
    sink.open(MEMBER)?;

    match profile_of(&object.object_type) {
        Some(profile) => {
            let prefix = profile.family.prefix();
            let type_name = object.object_type.as_str();
            tracing::debug!(
                id = %object.id,
                object_type = type_name,
                geometries = object.geometries.len(),
                "Writing city object"
            );

            let tag = format!("{}:{}", prefix, type_name);
            sink.open_with(&tag, &[("gml:id", object.id.as_str())])?;
            emit_attributes(sink, ctx.schema, type_name, prefix, &object.attributes)?;

            let owner = Owner {
                id: &object.id,
                object_type: type_name,
                prefix,
            };
            let policy = GeometryPolicy {
                normalize_composite: ctx.normalize_composite,
                ..profile.geometry
            };
            for geometry in &object.geometries {
                emit_geometry(sink, ctx, state, owner, policy, geometry)?;
            }
            sink.close(&tag)?;
            state.stats.city_objects += 1;
        }
        None => state.diagnostics.push(Diagnostic::UnsupportedCityObject {
            id: object.id.clone(),
            object_type: object.object_type.to_string(),
        }),
    }

    sink.close(MEMBER)
}
