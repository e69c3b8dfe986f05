// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end conversion of small CityJSON documents, schema resolved from disk.

use std::path::PathBuf;

use approx::assert_relative_eq;
use cityjson_lite_citygml::{convert_str, ConversionOptions, Diagnostic, Error};
use serde_json::{json, Value};

/// Schema directory holding a v1.0 schema, unique per test
fn schema_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cityjson-lite-it-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let schema = json!({
        "definitions": {
            "Building": {
                "properties": {
                    "attributes": {
                        "properties": {
                            "measuredHeight": {"type": "number"},
                            "roofType": {"type": "string"},
                            "yearOfConstruction": {"type": "integer"}
                        }
                    }
                }
            },
            "WaterBody": {
                "properties": {"attributes": {"properties": {"class": {"type": "string"}}}}
            }
        }
    });
    std::fs::write(dir.join("cityjson-v10.schema.json"), schema.to_string()).unwrap();
    dir
}

fn cube_vertices() -> Value {
    json!([
        [0, 0, 0], [10, 0, 0], [10, 10, 0], [0, 10, 0],
        [0, 0, 6], [10, 0, 6], [10, 10, 6], [0, 10, 6],
        [2, 2, 1], [4, 2, 1], [4, 4, 1]
    ])
}

fn document(city_objects: Value) -> String {
    json!({
        "type": "CityJSON",
        "version": "1.0",
        "metadata": {
            "geographicalExtent": [0, 0, 0, 10, 10, 6],
            "datasetTitle": "Test district"
        },
        "CityObjects": city_objects,
        "vertices": cube_vertices()
    })
    .to_string()
}

fn convert(name: &str, content: &str) -> (String, cityjson_lite_citygml::ConversionReport) {
    let dir = schema_dir(name);
    let options = ConversionOptions::default()
        .with_schema_dir(&dir)
        .with_indent(0);
    let mut out = Vec::new();
    let report = convert_str(content, &options, &mut out).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();
    (String::from_utf8(out).unwrap(), report)
}

/// Slice from the first `open` to the next `close` after it
fn section<'a>(xml: &'a str, open: &str, close: &str) -> &'a str {
    let start = xml.find(open).unwrap_or_else(|| panic!("missing {}", open));
    let end = xml[start..].find(close).unwrap_or_else(|| panic!("unclosed {}", open)) + start;
    &xml[start..end]
}

fn roof_solid() -> Value {
    json!({
        "type": "Building",
        "geometry": [{
            "type": "Solid",
            "lod": 2,
            "boundaries": [
                [[[0, 3, 2, 1]], [[4, 5, 6, 7]], [[0, 1, 5, 4]], [[1, 2, 6, 5]]],
                [[[8, 9, 10]]]
            ],
            "semantics": {
                "surfaces": [{"type": "RoofSurface"}],
                "values": [[0, 0, 0, 0], [null]]
            }
        }]
    })
}

#[test]
fn test_document_header() {
    let (xml, _) = convert("header", &document(json!({"b1": roof_solid()})));
    let mut lines = xml.lines();
    assert_eq!(lines.next(), Some("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert_eq!(
        lines.next(),
        Some("<!-- Automatically converted from CityJSON (http://www.cityjson.org) -->")
    );
    let root = lines.next().unwrap();
    assert!(root.starts_with("<CityModel xmlns=\"http://www.opengis.net/citygml/2.0\""));
    assert!(root.contains("xmlns:bldg=\"http://www.opengis.net/citygml/building/2.0\""));
    assert!(!root.contains("xmlns:wtr"));
    assert!(root.contains("xsi:schemaLocation="));
    assert!(xml.contains("<gml:lowerCorner>0.000 0.000 0.000</gml:lowerCorner>"));
    assert!(xml.contains("<gml:upperCorner>10.000 10.000 6.000</gml:upperCorner>"));
    assert!(xml.contains("<gml:name>Test district</gml:name>"));
    assert!(xml.ends_with("</CityModel>\n"));
}

#[test]
fn test_scenario_roof_solid_with_cavity() {
    let (xml, report) = convert("scenario-a", &document(json!({"b1": roof_solid()})));

    assert_eq!(xml.matches("<bldg:RoofSurface gml:id=").count(), 1);
    let block = section(&xml, "<bldg:boundedBy>", "</bldg:boundedBy>");
    assert_eq!(block.matches("<gml:Polygon>").count(), 4);

    let skeleton = section(&xml, "<bldg:lod2Solid>", "</bldg:lod2Solid>");
    let exterior = section(skeleton, "<gml:exterior>\n<gml:CompositeSurface>", "</gml:CompositeSurface>");
    assert_eq!(exterior.matches("<gml:surfaceMember xlink:href=\"#sem-0\"/>").count(), 1);
    assert_eq!(exterior.matches("<gml:Polygon>").count(), 0);
    let interior = section(skeleton, "<gml:interior>\n<gml:CompositeSurface>", "</gml:CompositeSurface>");
    assert_eq!(interior.matches("xlink:href").count(), 0);
    assert_eq!(interior.matches("<gml:Polygon>").count(), 1);

    assert_eq!(report.stats.city_objects, 1);
    assert_eq!(report.stats.semantic_surfaces, 1);
    assert!(report.is_complete());
}

#[test]
fn test_scenario_composite_surface_normalized() {
    let content = document(json!({
        "b1": {
            "type": "Building",
            "geometry": [{
                "type": "CompositeSurface",
                "lod": 2,
                "boundaries": [[[0, 3, 2, 1]], [[4, 5, 6, 7]]]
            }]
        }
    }));
    let (xml, _) = convert("scenario-b", &content);
    assert!(xml.contains("<bldg:lod2MultiSurface>\n<gml:MultiSurface>\n"));
    assert!(!xml.contains("CompositeSurface"));
}

#[test]
fn test_scenario_unknown_attribute_is_generic() {
    let content = document(json!({
        "b1": {
            "type": "Building",
            "attributes": {"measuredHeight": 6, "owner": "Gemeente Delft"},
            "geometry": []
        }
    }));
    let (xml, _) = convert("scenario-c", &content);
    assert!(xml.contains("<bldg:measuredHeight>6.000</bldg:measuredHeight>"));
    assert!(xml.contains(
        "<gen:stringAttribute name=\"owner\">\n<gen:value>Gemeente Delft</gen:value>\n</gen:stringAttribute>"
    ));
    assert!(!xml.contains("name=\"measuredHeight\""));
    assert!(xml.contains("xmlns:gen="));
}

#[test]
fn test_scenario_unknown_type_continues() {
    let content = document(json!({
        "b1": roof_solid(),
        "n1": {
            "type": "+NoiseBarrier",
            "attributes": {"height": 3},
            "geometry": [{"type": "MultiSurface", "lod": 1, "boundaries": [[[0, 1, 2]]]}]
        },
        "w1": {
            "type": "WaterBody",
            "attributes": {"class": "canal"},
            "geometry": [{"type": "MultiSurface", "lod": 1, "boundaries": [[[0, 1, 2, 3]]]}]
        }
    }));
    let (xml, report) = convert("scenario-d", &content);

    assert_eq!(xml.matches("<cityObjectMember>\n</cityObjectMember>").count(), 1);
    assert_eq!(xml.matches("<cityObjectMember>").count(), 3);
    assert!(xml.contains("<wtr:WaterBody gml:id=\"w1\">"));
    assert!(xml.contains("<wtr:class>canal</wtr:class>"));
    assert!(xml.contains("<wtr:lod1MultiSurface>"));

    assert_eq!(report.stats.city_objects, 2);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::UnsupportedCityObject {
            id: "n1".to_string(),
            object_type: "+NoiseBarrier".to_string()
        }]
    );
}

#[test]
fn test_transform_decompression() {
    let content = json!({
        "type": "CityJSON",
        "version": "http://www.cityjson.org/version/1.0",
        "transform": {"scale": [0.001, 0.001, 0.01], "translate": [84000.0, 447000.0, 0.0]},
        "CityObjects": {
            "b1": {
                "type": "Building",
                "geometry": [{"type": "MultiSurface", "lod": 1, "boundaries": [[[0, 1, 2]]]}]
            }
        },
        "vertices": [[1500, 2500, 300], [2500, 2500, 300], [2500, 3500, 300]]
    })
    .to_string();
    let (xml, _) = convert("transform", &content);

    let first = xml
        .lines()
        .find_map(|l| l.strip_prefix("<gml:pos>"))
        .and_then(|l| l.strip_suffix("</gml:pos>"))
        .unwrap();
    let coords: Vec<f64> = first.split(' ').map(|c| c.parse().unwrap()).collect();
    assert_relative_eq!(coords[0], 84001.5, epsilon = 1e-6);
    assert_relative_eq!(coords[1], 447002.5, epsilon = 1e-6);
    assert_relative_eq!(coords[2], 3.0, epsilon = 1e-6);
    assert_eq!(first, "84001.500 447002.500 3.000");
}

#[test]
fn test_missing_schema_writes_nothing() {
    let dir = std::env::temp_dir().join(format!("cityjson-lite-it-empty-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let options = ConversionOptions::default().with_schema_dir(&dir);

    let content = json!({
        "type": "CityJSON",
        "version": "0.9",
        "CityObjects": {},
        "vertices": []
    })
    .to_string();
    let mut out = Vec::new();
    let result = convert_str(&content, &options, &mut out);

    assert!(matches!(
        result,
        Err(Error::Core(cityjson_lite_core::Error::SchemaNotFound { .. }))
    ));
    assert!(out.is_empty());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_invalid_document_writes_nothing() {
    let dir = schema_dir("invalid");
    let options = ConversionOptions::default().with_schema_dir(&dir);
    let content = document(json!({
        "b1": {
            "type": "Building",
            "geometry": [{"type": "MultiSurface", "lod": 1, "boundaries": [[[0, 1, 99]]]}]
        }
    }));
    let mut out = Vec::new();
    let result = convert_str(&content, &options, &mut out);
    assert!(matches!(
        result,
        Err(Error::Core(cityjson_lite_core::Error::VertexOutOfRange { index: 99, .. }))
    ));
    assert!(out.is_empty());
    std::fs::remove_dir_all(&dir).unwrap();
}
