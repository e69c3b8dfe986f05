// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CityJSON format version and schema file resolution

use std::fmt;

use crate::error::{Error, Result};

/// Prefix used by early CityJSON files for the `version` member
const VERSION_URL_PREFIX: &str = "http://www.cityjson.org/version/";

/// Declared `major.minor` format version of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityJsonVersion {
    pub major: u32,
    pub minor: u32,
}

impl CityJsonVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse `"1.0"`, `"1.1"` or the legacy URL form
    /// `"http://www.cityjson.org/version/0.6"`.
    ///
    /// A patch component (`"1.1.3"`) is accepted and ignored.
    pub fn parse(s: &str) -> Result<Self> {
        let bare = s.trim().trim_start_matches(VERSION_URL_PREFIX);
        let mut parts = bare.split('.');
        let major = parts.next().and_then(|p| p.parse().ok());
        let minor = parts.next().and_then(|p| p.parse().ok());
        match (major, minor) {
            (Some(major), Some(minor)) => Ok(Self { major, minor }),
            _ => Err(Error::UnsupportedVersion(s.to_string())),
        }
    }

    /// File name of the JSON schema for this version, e.g. `cityjson-v10.schema.json`
    pub fn schema_file_name(&self) -> String {
        format!("cityjson-v{}{}.schema.json", self.major, self.minor)
    }
}

impl fmt::Display for CityJsonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(CityJsonVersion::parse("1.0").unwrap(), CityJsonVersion::new(1, 0));
        assert_eq!(CityJsonVersion::parse("1.1.3").unwrap(), CityJsonVersion::new(1, 1));
    }

    #[test]
    fn test_parse_legacy_url() {
        let v = CityJsonVersion::parse("http://www.cityjson.org/version/0.6").unwrap();
        assert_eq!(v, CityJsonVersion::new(0, 6));
        assert_eq!(v.to_string(), "0.6");
    }

    #[test]
    fn test_schema_file_name() {
        assert_eq!(
            CityJsonVersion::new(0, 6).schema_file_name(),
            "cityjson-v06.schema.json"
        );
        assert_eq!(
            CityJsonVersion::new(1, 0).schema_file_name(),
            "cityjson-v10.schema.json"
        );
    }

    #[test]
    fn test_invalid_version() {
        assert!(matches!(
            CityJsonVersion::parse("latest"),
            Err(Error::UnsupportedVersion(_))
        ));
        assert!(CityJsonVersion::parse("2").is_err());
    }
}
