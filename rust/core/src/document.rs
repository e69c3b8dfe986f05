// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CityJSON document loading
//!
//! The whole document is decoded and validated up front; emitters only ever
//! see a well-formed, immutable model.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::city_object::{CityObject, CityObjectType, RawCityObject};
use crate::error::{Error, Result};
use crate::metadata::{Metadata, RawMetadata};
use crate::version::CityJsonVersion;
use crate::vertex::{Transform, VertexStore};

/// A loaded CityJSON document
#[derive(Debug, Clone)]
pub struct CityJsonDocument {
    pub version: CityJsonVersion,
    pub vertices: VertexStore,
    /// City objects in document order
    pub city_objects: Vec<CityObject>,
    pub metadata: Option<Metadata>,
    /// Whether the document carries an `appearance` member
    pub has_appearance: bool,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(rename = "type")]
    doc_type: String,
    version: String,
    #[serde(rename = "CityObjects", default)]
    city_objects: Map<String, Value>,
    #[serde(default)]
    vertices: Vec<[f64; 3]>,
    transform: Option<Transform>,
    metadata: Option<RawMetadata>,
    appearance: Option<Value>,
}

impl CityJsonDocument {
    /// Parse and validate a CityJSON document
    pub fn from_str(content: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawDocument = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDocument) -> Result<Self> {
        if raw.doc_type != "CityJSON" {
            return Err(Error::InvalidDocument(format!(
                "expected type 'CityJSON', found '{}'",
                raw.doc_type
            )));
        }
        let version = CityJsonVersion::parse(&raw.version)?;
        let vertices = VertexStore::with_transform(raw.vertices, raw.transform.as_ref());

        let city_objects = raw
            .city_objects
            .into_iter()
            .map(|(id, value)| {
                let co: RawCityObject = serde_json::from_value(value)?;
                co.decode(id, &vertices)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            %version,
            vertex_count = vertices.len(),
            city_object_count = city_objects.len(),
            "Loaded CityJSON document"
        );

        Ok(Self {
            version,
            vertices,
            city_objects,
            metadata: raw.metadata.map(Metadata::from),
            has_appearance: raw.appearance.is_some(),
        })
    }

    /// Distinct city object types present, in first-seen order
    pub fn object_types(&self) -> Vec<&CityObjectType> {
        let mut seen: Vec<&CityObjectType> = Vec::new();
        for co in &self.city_objects {
            if !seen.contains(&&co.object_type) {
                seen.push(&co.object_type);
            }
        }
        seen
    }

    pub fn get(&self, id: &str) -> Option<&CityObject> {
        self.city_objects.iter().find(|co| co.id == id)
    }
}
