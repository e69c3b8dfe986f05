// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CityJSON to CityGML conversion
//!
//! One forward pass over the loaded document, streaming into the output.
//! Everything that can fail fatally (parsing, schema resolution) happens
//! before the first byte is written; after that only sink errors abort, and
//! output already written stays written.

use std::io::Write;

use cityjson_lite_core::{CityJsonDocument, Metadata, SchemaAttributeSet};

use crate::city_object::emit_city_object;
use crate::config::ConversionOptions;
use crate::context::{ConversionStats, EmitContext, RunState};
use crate::diagnostics::Diagnostic;
use crate::error::Result;
use crate::format::position;
use crate::namespaces::root_attributes;
use crate::writer::XmlSink;

const PROVENANCE: &str = "Automatically converted from CityJSON (http://www.cityjson.org)";
const ROOT: &str = "CityModel";

/// Outcome of one conversion run
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub stats: ConversionStats,
    /// Skipped input, in document order
    pub diagnostics: Vec<Diagnostic>,
}

impl ConversionReport {
    /// True when nothing was skipped
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Convert a loaded document with an already resolved schema table
pub fn convert<W: Write>(
    doc: &CityJsonDocument,
    schema: &SchemaAttributeSet,
    options: &ConversionOptions,
    out: W,
) -> Result<ConversionReport> {
    tracing::info!(
        version = %doc.version,
        city_objects = doc.city_objects.len(),
        vertices = doc.vertices.len(),
        "Converting CityJSON to CityGML"
    );

    let ctx = EmitContext::new(&doc.vertices, schema)
        .with_normalize_composite(options.normalize_composite);
    let mut state = RunState::new(&options.id_prefix)
        .with_reserved_ids(doc.city_objects.iter().map(|o| o.id.as_str()));
    let mut sink = XmlSink::new(out, options.indent);

    if options.xml_declaration {
        sink.declaration()?;
        sink.comment(PROVENANCE)?;
    }

    let root_attrs = root_attributes(doc);
    let root_attrs: Vec<(&str, &str)> = root_attrs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    sink.open_with(ROOT, &root_attrs)?;

    if let Some(metadata) = &doc.metadata {
        emit_metadata(&mut sink, metadata)?;
    }
    for object in &doc.city_objects {
        emit_city_object(&mut sink, &ctx, &mut state, object)?;
    }

    sink.close(ROOT)?;
    sink.flush()?;

    tracing::info!(
        city_objects = state.stats.city_objects,
        geometries = state.stats.geometries,
        semantic_surfaces = state.stats.semantic_surfaces,
        skipped = state.diagnostics.len(),
        "Conversion complete"
    );

    Ok(ConversionReport {
        stats: state.stats,
        diagnostics: state.diagnostics.into_vec(),
    })
}

/// Parse a CityJSON document, resolve its schema from `options.schema_dir`,
/// and convert it.
///
/// A document that fails to load or a schema that cannot be found is
/// reported before anything is written to `out`.
pub fn convert_str<W: Write>(
    content: &str,
    options: &ConversionOptions,
    out: W,
) -> Result<ConversionReport> {
    let doc = CityJsonDocument::from_str(content)?;
    let schema = SchemaAttributeSet::load(&options.schema_dir, doc.version)?;
    convert(&doc, &schema, options, out)
}

/// Dataset envelope and name
fn emit_metadata<W: Write>(sink: &mut XmlSink<W>, metadata: &Metadata) -> std::io::Result<()> {
    if let Some(bbox) = &metadata.bbox {
        sink.open("gml:boundedBy")?;
        sink.open_with("gml:Envelope", &[("srsDimension", "3")])?;
        sink.text_element("gml:lowerCorner", &position(bbox.lower_corner()))?;
        sink.text_element("gml:upperCorner", &position(bbox.upper_corner()))?;
        sink.close("gml:Envelope")?;
        sink.close("gml:boundedBy")?;
    }
    if let Some(title) = &metadata.title {
        sink.text_element("gml:name", title)?;
    }
    Ok(())
}
