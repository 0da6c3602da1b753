// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all satlink-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use super::sweep::SweepArgsError;
use crate::params::ValidationError;
use crate::request::RequestError;

/// The *only* publicly visible error from satlink.
#[derive(Error, Debug)]
pub enum SatlinkError {
    /// An error from validating link parameters.
    #[error("{0}")]
    Params(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// An error related to the sweep subcommand.
    #[error("{0}")]
    Sweep(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

impl From<ValidationError> for SatlinkError {
    fn from(e: ValidationError) -> Self {
        Self::Params(e.to_string())
    }
}

impl From<RequestError> for SatlinkError {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::Validation(e) => Self::from(e),
            RequestError::BadParameters { .. }
            | RequestError::NotNumeric { .. }
            | RequestError::NotAString { .. }
            | RequestError::BadJson(_) => Self::Generic(e.to_string()),
        }
    }
}

impl From<SweepArgsError> for SatlinkError {
    fn from(e: SweepArgsError) -> Self {
        Self::Sweep(e.to_string())
    }
}

impl From<serde_json::Error> for SatlinkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<std::io::Error> for SatlinkError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
