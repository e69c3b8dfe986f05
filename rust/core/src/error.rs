// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for document loading and schema resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a CityJSON document or its schema
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Unsupported CityJSON version: {0}")]
    UnsupportedVersion(String),

    #[error("Cannot find schema v{version} at {path}")]
    SchemaNotFound { version: String, path: PathBuf },

    #[error("City object '{object}': vertex index {index} out of range ({count} vertices)")]
    VertexOutOfRange {
        object: String,
        index: usize,
        count: usize,
    },

    #[error("City object '{0}': ring without vertices")]
    EmptyRing(String),

    #[error("City object '{0}': polygon without an exterior ring")]
    EmptyPolygon(String),

    #[error("City object '{object}': semantic values do not match boundaries ({detail})")]
    SemanticsMismatch { object: String, detail: String },

    #[error("City object '{object}': semantic surface index {index} out of range ({count} surfaces)")]
    SemanticIndexOutOfRange {
        object: String,
        index: usize,
        count: usize,
    },
}
