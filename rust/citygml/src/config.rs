// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion options, with environment variable overrides.

use std::path::PathBuf;

/// Conversion options.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Directory holding the versioned `cityjson-vXY.schema.json` files.
    pub schema_dir: PathBuf,
    /// Prefix of generated semantic surface ids.
    pub id_prefix: String,
    /// Indentation width of the emitted XML (0 = no indentation).
    pub indent: usize,
    /// Emit the XML declaration and provenance comment.
    pub xml_declaration: bool,
    /// Write plain composite surfaces as `gml:MultiSurface`; when false they
    /// keep a literal `gml:CompositeSurface` in a `lodNCompositeSurface` container.
    pub normalize_composite: bool,
}

impl ConversionOptions {
    /// Load options from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::defaults();
        Self {
            schema_dir: std::env::var("CITYJSON_SCHEMA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.schema_dir),
            id_prefix: std::env::var("CITYJSON_ID_PREFIX")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.id_prefix),
            indent: std::env::var("CITYJSON_INDENT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.indent),
            xml_declaration: std::env::var("CITYJSON_XML_DECLARATION")
                .map(|s| !matches!(s.as_str(), "0" | "false" | "no"))
                .unwrap_or(defaults.xml_declaration),
            normalize_composite: std::env::var("CITYJSON_NORMALIZE_COMPOSITE")
                .map(|s| !matches!(s.as_str(), "0" | "false" | "no"))
                .unwrap_or(defaults.normalize_composite),
        }
    }

    fn defaults() -> Self {
        Self {
            schema_dir: PathBuf::from("schema"),
            id_prefix: "sem".into(),
            indent: 2,
            xml_declaration: true,
            normalize_composite: true,
        }
    }

    pub fn with_schema_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.schema_dir = dir.into();
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn with_normalize_composite(mut self, normalize: bool) -> Self {
        self.normalize_composite = normalize;
        self
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self::defaults()
    }
}
