// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared vertex storage
//!
//! CityJSON stores every coordinate once in a document-wide array and
//! geometries refer to it by index. Compressed documents carry integer
//! vertices plus a `transform` (scale + translate) that is applied once at
//! load time, so emitters always see real-world coordinates.

use serde::Deserialize;

/// Quantization transform of a compressed CityJSON document
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 3],
    pub translate: [f64; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: [1.0, 1.0, 1.0],
            translate: [0.0, 0.0, 0.0],
        }
    }
}

impl Transform {
    /// Apply the transform to one stored vertex
    #[inline]
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        [
            v[0] * self.scale[0] + self.translate[0],
            v[1] * self.scale[1] + self.translate[1],
            v[2] * self.scale[2] + self.translate[2],
        ]
    }
}

/// Read-only indexed array of 3D coordinates
#[derive(Debug, Clone, Default)]
pub struct VertexStore {
    coords: Vec<[f64; 3]>,
}

impl VertexStore {
    pub fn new(coords: Vec<[f64; 3]>) -> Self {
        Self { coords }
    }

    /// Build the store from raw document vertices, decompressing when a
    /// transform is present
    pub fn with_transform(raw: Vec<[f64; 3]>, transform: Option<&Transform>) -> Self {
        match transform {
            Some(t) => Self::new(raw.into_iter().map(|v| t.apply(v)).collect()),
            None => Self::new(raw),
        }
    }

    /// Coordinate at `index`.
    ///
    /// Indices are validated when the document is loaded, so emitters can
    /// rely on every boundary index being in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<[f64; 3]> {
        self.coords.get(index).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.coords.len()
    }
}
