// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Things that can go wrong when turning station and satellite positions into
/// a pointing solution. These are facts about the physical situation, not
/// about malformed input; callers are expected to fold them into their
/// results rather than abort.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum GeometryError {
    #[error("Satellite is below the horizon (elevation {elevation_deg:.2}°, azimuth {azimuth_deg:.2}°, slant range {slant_range_km:.1} km)")]
    BelowHorizon {
        elevation_deg: f64,
        azimuth_deg: f64,
        slant_range_km: f64,
    },

    #[error("Station and satellite positions coincide; no pointing direction exists")]
    Degenerate,
}
