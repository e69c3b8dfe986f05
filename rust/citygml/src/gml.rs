// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural GML emission
//!
//! Raw geometry independent of semantics: rings, polygons, shells, solids and
//! surface aggregates.

use std::io::{self, Write};

use cityjson_lite_core::{Polygon, Ring, Shell, VertexStore};

use crate::format::position;
use crate::writer::XmlSink;

/// Exterior/interior boundary tag, for rings inside a polygon and shells inside a solid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Exterior,
    Interior,
}

impl Boundary {
    /// Position 0 is the exterior, every later position an interior
    #[inline]
    pub fn for_index(index: usize) -> Self {
        if index == 0 {
            Self::Exterior
        } else {
            Self::Interior
        }
    }

    pub fn element(&self) -> &'static str {
        match self {
            Self::Exterior => "gml:exterior",
            Self::Interior => "gml:interior",
        }
    }
}

/// Surface aggregate element used for a flat polygon list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    MultiSurface,
    CompositeSurface,
}

impl Aggregate {
    pub fn element(&self) -> &'static str {
        match self {
            Self::MultiSurface => "gml:MultiSurface",
            Self::CompositeSurface => "gml:CompositeSurface",
        }
    }
}

/// `gml:LinearRing` with one `gml:pos` per vertex, closed by repeating the first
pub fn emit_ring<W: Write>(
    sink: &mut XmlSink<W>,
    vertices: &VertexStore,
    ring: &Ring,
) -> io::Result<()> {
    sink.open("gml:LinearRing")?;
    let mut first = None;
    for p in ring.iter().filter_map(|&i| vertices.get(i)) {
        first.get_or_insert(p);
        sink.text_element("gml:pos", &position(p))?;
    }
    if let Some(p) = first {
        sink.text_element("gml:pos", &position(p))?;
    }
    sink.close("gml:LinearRing")
}

/// `gml:Polygon`: ring 0 as exterior, the others as interiors, in order
pub fn emit_polygon<W: Write>(
    sink: &mut XmlSink<W>,
    vertices: &VertexStore,
    polygon: &Polygon,
) -> io::Result<()> {
    sink.open("gml:Polygon")?;
    for (i, ring) in polygon.rings().iter().enumerate() {
        let tag = Boundary::for_index(i).element();
        sink.open(tag)?;
        emit_ring(sink, vertices, ring)?;
        sink.close(tag)?;
    }
    sink.close("gml:Polygon")
}

/// Polygon wrapped in `gml:surfaceMember`
pub fn emit_surface_member<W: Write>(
    sink: &mut XmlSink<W>,
    vertices: &VertexStore,
    polygon: &Polygon,
) -> io::Result<()> {
    sink.open("gml:surfaceMember")?;
    emit_polygon(sink, vertices, polygon)?;
    sink.close("gml:surfaceMember")
}

/// Flat polygon list as a `gml:MultiSurface` or `gml:CompositeSurface`
pub fn emit_surfaces<W: Write>(
    sink: &mut XmlSink<W>,
    vertices: &VertexStore,
    polygons: &[Polygon],
    aggregate: Aggregate,
) -> io::Result<()> {
    sink.open(aggregate.element())?;
    for polygon in polygons {
        emit_surface_member(sink, vertices, polygon)?;
    }
    sink.close(aggregate.element())
}

/// One shell as a `gml:CompositeSurface`
pub fn emit_shell<W: Write>(
    sink: &mut XmlSink<W>,
    vertices: &VertexStore,
    shell: &Shell,
) -> io::Result<()> {
    emit_surfaces(sink, vertices, shell, Aggregate::CompositeSurface)
}

/// `gml:Solid`: shell 0 as exterior, later shells as interiors
pub fn emit_solid<W: Write>(
    sink: &mut XmlSink<W>,
    vertices: &VertexStore,
    shells: &[Shell],
) -> io::Result<()> {
    sink.open("gml:Solid")?;
    for (i, shell) in shells.iter().enumerate() {
        let tag = Boundary::for_index(i).element();
        sink.open(tag)?;
        emit_shell(sink, vertices, shell)?;
        sink.close(tag)?;
    }
    sink.close("gml:Solid")
}
