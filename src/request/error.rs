// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from handling structured requests.

use thiserror::Error;

use crate::params::ValidationError;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("'parameters' must be a JSON object, got: {value}")]
    BadParameters { value: String },

    #[error("Parameter '{name}' must be a number, got: {value}")]
    NotNumeric { name: &'static str, value: String },

    #[error("Parameter '{name}' must be a string, got: {value}")]
    NotAString { name: &'static str, value: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Couldn't parse the request as JSON: {0}")]
    BadJson(#[from] serde_json::Error),
}
