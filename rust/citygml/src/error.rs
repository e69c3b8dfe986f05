// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for CityGML emission
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a conversion.
///
/// Unsupported input (unknown object types, geometry kinds, semantics on
/// composite surfaces) is never an error; it is recorded as a
/// [`Diagnostic`](crate::Diagnostic) and skipped.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Output write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Core error: {0}")]
    Core(#[from] cityjson_lite_core::Error),
}
