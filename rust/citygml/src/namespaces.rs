// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CityGML 2.0 namespace modules
//!
//! The root `CityModel` declares a fixed base set plus one module per family
//! actually present among the city objects.

use std::collections::BTreeSet;

use cityjson_lite_core::{CityJsonDocument, CityObjectType};

pub const CORE_NS: &str = "http://www.opengis.net/citygml/2.0";
pub const SCHEMA_LOCATION: &str = "http://www.opengis.net/citygml/2.0 ./CityGML_2.0/CityGML.xsd";

const BASE_NAMESPACES: &[(&str, &str)] = &[
    ("xmlns", CORE_NS),
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ("xmlns:xAL", "urn:oasis:names:tc:ciq:xsdschema:xAL:2.0"),
    ("xmlns:xlink", "http://www.w3.org/1999/xlink"),
    ("xmlns:gml", "http://www.opengis.net/gml"),
];

const APPEARANCE_NS: (&str, &str) = ("xmlns:app", "http://www.opengis.net/citygml/appearance/2.0");

/// Thematic module a city object type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModuleFamily {
    Building,
    WaterBody,
    Vegetation,
    Relief,
    Transportation,
    LandUse,
    Generics,
    Bridge,
    Tunnel,
    CityFurniture,
}

impl ModuleFamily {
    /// Family of a city object type; `None` for types without a CityGML module
    pub fn of(object_type: &CityObjectType) -> Option<Self> {
        use CityObjectType as T;
        match object_type {
            T::Building | T::BuildingPart | T::BuildingInstallation => Some(Self::Building),
            T::WaterBody => Some(Self::WaterBody),
            T::PlantCover | T::SolitaryVegetationObject => Some(Self::Vegetation),
            T::TINRelief => Some(Self::Relief),
            T::Road | T::Railway | T::TransportSquare => Some(Self::Transportation),
            T::LandUse => Some(Self::LandUse),
            T::GenericCityObject => Some(Self::Generics),
            T::Bridge | T::BridgePart | T::BridgeInstallation | T::BridgeConstructionElement => {
                Some(Self::Bridge)
            }
            T::Tunnel | T::TunnelPart | T::TunnelInstallation => Some(Self::Tunnel),
            T::CityFurniture => Some(Self::CityFurniture),
            T::CityObjectGroup | T::Unknown(_) => None,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Building => "bldg",
            Self::WaterBody => "wtr",
            Self::Vegetation => "veg",
            Self::Relief => "dem",
            Self::Transportation => "tran",
            Self::LandUse => "luse",
            Self::Generics => "gen",
            Self::Bridge => "brg",
            Self::Tunnel => "tun",
            Self::CityFurniture => "cif",
        }
    }

    pub fn uri(&self) -> &'static str {
        match self {
            Self::Building => "http://www.opengis.net/citygml/building/2.0",
            Self::WaterBody => "http://www.opengis.net/citygml/waterbody/2.0",
            Self::Vegetation => "http://www.opengis.net/citygml/vegetation/2.0",
            Self::Relief => "http://www.opengis.net/citygml/relief/2.0",
            Self::Transportation => "http://www.opengis.net/citygml/transportation/2.0",
            Self::LandUse => "http://www.opengis.net/citygml/landuse/2.0",
            Self::Generics => "http://www.opengis.net/citygml/generics/2.0",
            Self::Bridge => "http://www.opengis.net/citygml/bridge/2.0",
            Self::Tunnel => "http://www.opengis.net/citygml/tunnel/2.0",
            Self::CityFurniture => "http://www.opengis.net/citygml/cityfurniture/2.0",
        }
    }

    fn declaration(&self) -> (String, &'static str) {
        (format!("xmlns:{}", self.prefix()), self.uri())
    }
}

/// Families to declare on the root: those of the present objects, plus
/// generics whenever any object carries attributes
pub fn families_present(doc: &CityJsonDocument) -> BTreeSet<ModuleFamily> {
    let mut families: BTreeSet<_> = doc
        .city_objects
        .iter()
        .filter_map(|o| ModuleFamily::of(&o.object_type))
        .collect();
    if doc.city_objects.iter().any(|o| !o.attributes.is_empty()) {
        families.insert(ModuleFamily::Generics);
    }
    families
}

/// Attributes of the root `CityModel` element, in declaration order
pub fn root_attributes(doc: &CityJsonDocument) -> Vec<(String, String)> {
    let mut attrs: Vec<(String, String)> = BASE_NAMESPACES
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    if doc.has_appearance {
        attrs.push((APPEARANCE_NS.0.to_string(), APPEARANCE_NS.1.to_string()));
    }
    attrs.extend(families_present(doc).iter().map(|f| {
        let (k, v) = f.declaration();
        (k, v.to_string())
    }));
    attrs.push(("xsi:schemaLocation".to_string(), SCHEMA_LOCATION.to_string()));
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityjson_lite_core::{CityJsonVersion, CityObject, VertexStore};
    use serde_json::json;

    fn doc(objects: Vec<CityObject>) -> CityJsonDocument {
        CityJsonDocument {
            version: CityJsonVersion::new(1, 0),
            vertices: VertexStore::new(Vec::new()),
            city_objects: objects,
            metadata: None,
            has_appearance: false,
        }
    }

    fn keys(attrs: &[(String, String)]) -> Vec<&str> {
        attrs.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_family_lookup() {
        assert_eq!(ModuleFamily::of(&CityObjectType::BuildingPart), Some(ModuleFamily::Building));
        assert_eq!(ModuleFamily::of(&CityObjectType::Railway).map(|f| f.prefix()), Some("tran"));
        assert_eq!(ModuleFamily::of(&CityObjectType::Unknown("+Noise".into())), None);
    }

    #[test]
    fn test_only_present_families_declared() {
        let d = doc(vec![
            CityObject::new("b1", CityObjectType::Building),
            CityObject::new("w1", CityObjectType::WaterBody),
        ]);
        let attrs = root_attributes(&d);
        let k = keys(&attrs);
        assert!(k.contains(&"xmlns:bldg"));
        assert!(k.contains(&"xmlns:wtr"));
        assert!(!k.contains(&"xmlns:veg"));
        assert!(!k.contains(&"xmlns:gen"));
        assert!(!k.contains(&"xmlns:app"));
        assert_eq!(k.first(), Some(&"xmlns"));
        assert_eq!(k.last(), Some(&"xsi:schemaLocation"));
    }

    #[test]
    fn test_generics_declared_for_attributes() {
        let d = doc(vec![
            CityObject::new("b1", CityObjectType::Building).with_attribute("owner", json!("x")),
        ]);
        assert!(families_present(&d).contains(&ModuleFamily::Generics));
    }

    #[test]
    fn test_appearance_namespace() {
        let mut d = doc(Vec::new());
        d.has_appearance = true;
        assert!(keys(&root_attributes(&d)).contains(&"xmlns:app"));
    }
}
