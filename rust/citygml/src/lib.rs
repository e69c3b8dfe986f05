// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # CityJSON-Lite CityGML
//!
//! Streaming CityGML 2.0 writer for CityJSON models.
//!
//! ## Overview
//!
//! - **Structural emitters**: rings, polygons, shells and solids over the shared vertex store
//! - **Semantic surfaces**: one typed `boundedBy` block per semantic surface, plus a
//!   skeleton that references those blocks by `xlink:href`
//! - **Attributes**: schema-known keys become typed elements, the rest `gen:stringAttribute`
//! - **Diagnostics**: unsupported input is skipped and reported, never fatal
//!
//! Output goes straight to any [`std::io::Write`]; nothing is buffered or retracted.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cityjson_lite_citygml::{convert_str, ConversionOptions};
//!
//! let options = ConversionOptions::from_env();
//! let report = convert_str(&content, &options, std::io::stdout().lock())?;
//!
//! for diagnostic in &report.diagnostics {
//!     eprintln!("{}", diagnostic);
//! }
//! ```

pub mod attributes;
pub mod city_object;
pub mod config;
pub mod context;
pub mod converter;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod gml;
pub mod ids;
pub mod namespaces;
pub mod semantic;
pub mod writer;

pub use attributes::{emit_attributes, AttributeEncoding};
pub use city_object::{emit_city_object, profile_of, ObjectProfile};
pub use config::ConversionOptions;
pub use context::{ConversionStats, EmitContext, RunState};
pub use converter::{convert, convert_str, ConversionReport};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use dispatch::{emit_geometry, GeometryPolicy, Owner, SemanticPolicy};
pub use error::{Error, Result};
pub use ids::IdGenerator;
pub use namespaces::ModuleFamily;
pub use semantic::{emit_semantic_geometry, fold_references, Classified};
pub use writer::XmlSink;
