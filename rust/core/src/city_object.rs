// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! City objects
//!
//! Fast type checking using an enum instead of string comparison.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::geometry::{Geometry, RawGeometry};
use crate::vertex::VertexStore;

/// CityJSON city object types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CityObjectType {
    // Buildings
    Building,
    BuildingPart,
    BuildingInstallation,

    // Bridges
    Bridge,
    BridgePart,
    BridgeInstallation,
    BridgeConstructionElement,

    // Tunnels
    Tunnel,
    TunnelPart,
    TunnelInstallation,

    // Transportation
    Road,
    Railway,
    TransportSquare,

    // Vegetation
    PlantCover,
    SolitaryVegetationObject,

    // Everything else
    WaterBody,
    LandUse,
    TINRelief,
    CityFurniture,
    GenericCityObject,
    CityObjectGroup,

    /// Type name not known to this crate (extensions, typos, newer versions)
    Unknown(String),
}

impl CityObjectType {
    pub fn from_str(s: &str) -> Self {
        match s {
            "Building" => Self::Building,
            "BuildingPart" => Self::BuildingPart,
            "BuildingInstallation" => Self::BuildingInstallation,

            "Bridge" => Self::Bridge,
            "BridgePart" => Self::BridgePart,
            "BridgeInstallation" => Self::BridgeInstallation,
            "BridgeConstructionElement" => Self::BridgeConstructionElement,

            "Tunnel" => Self::Tunnel,
            "TunnelPart" => Self::TunnelPart,
            "TunnelInstallation" => Self::TunnelInstallation,

            "Road" => Self::Road,
            "Railway" => Self::Railway,
            "TransportSquare" => Self::TransportSquare,

            "PlantCover" => Self::PlantCover,
            "SolitaryVegetationObject" => Self::SolitaryVegetationObject,

            "WaterBody" => Self::WaterBody,
            "LandUse" => Self::LandUse,
            "TINRelief" => Self::TINRelief,
            "CityFurniture" => Self::CityFurniture,
            "GenericCityObject" => Self::GenericCityObject,
            "CityObjectGroup" => Self::CityObjectGroup,

            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Building => "Building",
            Self::BuildingPart => "BuildingPart",
            Self::BuildingInstallation => "BuildingInstallation",

            Self::Bridge => "Bridge",
            Self::BridgePart => "BridgePart",
            Self::BridgeInstallation => "BridgeInstallation",
            Self::BridgeConstructionElement => "BridgeConstructionElement",

            Self::Tunnel => "Tunnel",
            Self::TunnelPart => "TunnelPart",
            Self::TunnelInstallation => "TunnelInstallation",

            Self::Road => "Road",
            Self::Railway => "Railway",
            Self::TransportSquare => "TransportSquare",

            Self::PlantCover => "PlantCover",
            Self::SolitaryVegetationObject => "SolitaryVegetationObject",

            Self::WaterBody => "WaterBody",
            Self::LandUse => "LandUse",
            Self::TINRelief => "TINRelief",
            Self::CityFurniture => "CityFurniture",
            Self::GenericCityObject => "GenericCityObject",
            Self::CityObjectGroup => "CityObjectGroup",

            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for CityObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A city object with its attributes and geometries
#[derive(Debug, Clone, PartialEq)]
pub struct CityObject {
    pub id: String,
    pub object_type: CityObjectType,
    /// Attributes in document order
    pub attributes: Map<String, Value>,
    pub geometries: Vec<Geometry>,
}

impl CityObject {
    pub fn new(id: impl Into<String>, object_type: CityObjectType) -> Self {
        Self {
            id: id.into(),
            object_type,
            attributes: Map::new(),
            geometries: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometries.push(geometry);
        self
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCityObject {
    #[serde(rename = "type")]
    object_type: String,
    #[serde(default)]
    attributes: Map<String, Value>,
    #[serde(default)]
    geometry: Vec<RawGeometry>,
}

impl RawCityObject {
    pub(crate) fn decode(self, id: String, vertices: &VertexStore) -> Result<CityObject> {
        let geometries = self
            .geometry
            .into_iter()
            .map(|g| g.decode(&id, vertices))
            .collect::<Result<Vec<_>>>()?;
        Ok(CityObject {
            object_type: CityObjectType::from_str(&self.object_type),
            attributes: self.attributes,
            geometries,
            id,
        })
    }
}
