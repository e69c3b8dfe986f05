// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # CityJSON-Lite Core
//!
//! Document model for CityJSON city models.
//!
//! ## Overview
//!
//! - **Vertex store**: shared, indexed coordinates (decompressed at load)
//! - **Boundaries**: ring → polygon → shell → solid, or flat surface sets
//! - **Semantics**: per-polygon surface classification, congruent to boundaries
//! - **Schema table**: recognized attribute names per city object type
//!
//! Everything is decoded and validated once; the resulting model is immutable.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cityjson_lite_core::{CityJsonDocument, SchemaAttributeSet};
//!
//! let doc = CityJsonDocument::from_str(&content)?;
//! let schema = SchemaAttributeSet::load(Path::new("schema"), doc.version)?;
//!
//! for co in &doc.city_objects {
//!     println!("{} ({}): {} geometries", co.id, co.object_type, co.geometries.len());
//! }
//! ```

pub mod boundary;
pub mod city_object;
pub mod document;
pub mod error;
pub mod geometry;
pub mod metadata;
pub mod schema;
pub mod semantics;
pub mod version;
pub mod vertex;

pub use boundary::{GeometryKind, Polygon, Ring, Shape, Shell};
pub use city_object::{CityObject, CityObjectType};
pub use document::CityJsonDocument;
pub use error::{Error, Result};
pub use geometry::Geometry;
pub use metadata::{BoundingBox, Metadata};
pub use schema::SchemaAttributeSet;
pub use semantics::{SemanticSurface, SemanticValues, Semantics};
pub use version::CityJsonVersion;
pub use vertex::{Transform, VertexStore};
