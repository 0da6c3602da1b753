// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::pointing::REF_ELLIPSOIDS_COMMA_SEPARATED;

use super::POLARIZATIONS_COMMA_SEPARATED;

/// Errors raised when link parameters are missing, ambiguous or outside
/// their physical ranges. These always mean the *input* is at fault; a
/// physically hopeless but well-formed link is not a validation error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be positive, but was {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, but was {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} was {value}, but efficiencies must be within (0, 1]")]
    EfficiencyOutOfRange { field: &'static str, value: f64 },

    #[error("{field} was {value}°, not within -90° to 90°")]
    LatitudeOutOfRange { field: &'static str, value: f64 },

    #[error("{field} was {value}°, not within -180° to 180°")]
    LongitudeOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must be finite, but was {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error(
        "Unrecognised polarization '{0}'. Supported polarizations: {}",
        *POLARIZATIONS_COMMA_SEPARATED
    )]
    UnknownPolarization(String),

    #[error(
        "Unrecognised reference ellipsoid '{0}'. Supported ellipsoids: {}",
        *REF_ELLIPSOIDS_COMMA_SEPARATED
    )]
    UnknownEllipsoid(String),
}
