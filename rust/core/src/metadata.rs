// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dataset metadata
//!
//! Only the bounding box and the dataset title are carried over to the
//! output; every other metadata member is ignored.

use serde::Deserialize;

/// Axis-aligned 3D extent of the dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Minimum Z coordinate
    pub min_z: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
    /// Maximum Z coordinate
    pub max_z: f64,
}

impl BoundingBox {
    /// Build from the CityJSON six-number form `[minx, miny, minz, maxx, maxy, maxz]`
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match *values {
            [min_x, min_y, min_z, max_x, max_y, max_z] => Some(Self {
                min_x,
                min_y,
                min_z,
                max_x,
                max_y,
                max_z,
            }),
            _ => None,
        }
    }

    #[inline]
    pub fn lower_corner(&self) -> [f64; 3] {
        [self.min_x, self.min_y, self.min_z]
    }

    #[inline]
    pub fn upper_corner(&self) -> [f64; 3] {
        [self.max_x, self.max_y, self.max_z]
    }
}

/// Metadata members used by the converter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub bbox: Option<BoundingBox>,
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawMetadata {
    #[serde(default, alias = "geographicalExtent")]
    bbox: Option<Vec<f64>>,
    #[serde(default, rename = "datasetTitle", alias = "title")]
    title: Option<String>,
}

impl From<RawMetadata> for Metadata {
    fn from(raw: RawMetadata) -> Self {
        Self {
            bbox: raw.bbox.as_deref().and_then(BoundingBox::from_slice),
            title: raw.title,
        }
    }
}
