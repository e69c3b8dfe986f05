// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schema attribute table
//!
//! The versioned CityJSON JSON-schema lists, per city object type, the
//! attributes the format defines (`definitions.<Type>.properties.attributes.properties`).
//! Those names become typed CityGML elements; everything else is written as a
//! generic attribute. The table is built once when the schema is loaded and is
//! read-only afterwards.

use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::version::CityJsonVersion;

/// Recognized attribute names per city object type
#[derive(Debug, Clone, Default)]
pub struct SchemaAttributeSet {
    known: FxHashMap<String, FxHashSet<String>>,
}

impl SchemaAttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the known attributes of one type (mostly useful in tests)
    pub fn with_type<I, S>(mut self, object_type: &str, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known
            .entry(object_type.to_string())
            .or_default()
            .extend(attributes.into_iter().map(Into::into));
        self
    }

    /// Build the table from a parsed schema document
    pub fn from_schema(schema: &Value) -> Result<Self> {
        let definitions = schema
            .get("definitions")
            .and_then(Value::as_object)
            .ok_or_else(|| Error::InvalidDocument("schema has no 'definitions'".to_string()))?;

        let known = definitions
            .iter()
            .filter_map(|(type_name, def)| {
                let attrs = def
                    .pointer("/properties/attributes/properties")
                    .and_then(Value::as_object)?;
                Some((type_name.clone(), attrs.keys().cloned().collect()))
            })
            .collect();

        Ok(Self { known })
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let schema: Value = serde_json::from_str(content)?;
        Self::from_schema(&schema)
    }

    /// Load the schema matching `version` from `schema_dir`.
    ///
    /// A missing or unreadable file is fatal for the run.
    pub fn load(schema_dir: &Path, version: CityJsonVersion) -> Result<Self> {
        let path = schema_dir.join(version.schema_file_name());
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::SchemaNotFound {
                version: version.to_string(),
                path: path.clone(),
            },
            _ => Error::Io {
                path: path.clone(),
                source: e,
            },
        })?;
        let set = Self::from_str(&content)?;
        tracing::debug!(path = %path.display(), types = set.known.len(), "Loaded schema");
        Ok(set)
    }

    /// Known attributes of a type; `None` for types the schema does not define
    #[inline]
    pub fn known_attributes(&self, object_type: &str) -> Option<&FxHashSet<String>> {
        self.known.get(object_type)
    }

    /// Whether `attribute` is defined for `object_type`.
    ///
    /// Unknown types have an empty known set, so this is simply `false`.
    #[inline]
    pub fn is_known(&self, object_type: &str, attribute: &str) -> bool {
        self.known
            .get(object_type)
            .is_some_and(|set| set.contains(attribute))
    }

    pub fn type_count(&self) -> usize {
        self.known.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Value {
        json!({
            "definitions": {
                "Building": {
                    "properties": {
                        "type": {"enum": ["Building"]},
                        "attributes": {
                            "properties": {
                                "measuredHeight": {"type": "number"},
                                "roofType": {"type": "string"}
                            }
                        }
                    }
                },
                "WaterBody": {
                    "properties": {
                        "attributes": {"properties": {"class": {"type": "string"}}}
                    }
                },
                "Semantic": {"properties": {"type": {"type": "string"}}}
            }
        })
    }

    #[test]
    fn test_from_schema() {
        let set = SchemaAttributeSet::from_schema(&schema()).unwrap();
        assert!(set.is_known("Building", "measuredHeight"));
        assert!(set.is_known("Building", "roofType"));
        assert!(set.is_known("WaterBody", "class"));
        assert!(!set.is_known("Building", "class"));
        // Definitions without attributes are not city object types
        assert!(set.known_attributes("Semantic").is_none());
        assert_eq!(set.type_count(), 2);
    }

    #[test]
    fn test_unknown_type_has_no_known_attributes() {
        let set = SchemaAttributeSet::from_schema(&schema()).unwrap();
        assert!(set.known_attributes("Bridge").is_none());
        assert!(!set.is_known("Bridge", "measuredHeight"));
    }

    #[test]
    fn test_schema_without_definitions() {
        let result = SchemaAttributeSet::from_schema(&json!({"title": "x"}));
        assert!(matches!(result, Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn test_missing_schema_file_is_fatal() {
        let dir = std::env::temp_dir().join("cityjson-lite-no-such-schema-dir");
        match SchemaAttributeSet::load(&dir, CityJsonVersion::new(0, 6)) {
            Err(Error::SchemaNotFound { version, path }) => {
                assert_eq!(version, "0.6");
                assert!(path.ends_with("cityjson-v06.schema.json"));
            }
            other => panic!("expected SchemaNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_dir() {
        let dir = std::env::temp_dir().join(format!("cityjson-lite-schema-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("cityjson-v10.schema.json"),
            serde_json::to_string(&schema()).unwrap(),
        )
        .unwrap();

        let set = SchemaAttributeSet::load(&dir, CityJsonVersion::new(1, 0)).unwrap();
        assert!(set.is_known("Building", "roofType"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_with_type_builder() {
        let set = SchemaAttributeSet::new().with_type("LandUse", ["function", "usage"]);
        assert!(set.is_known("LandUse", "usage"));
        assert!(!set.is_known("LandUse", "class"));
    }
}
