// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Free-space propagation loss and slant-range resolution.


use std::f64::consts::PI;

use crate::params::GeometrySpec;
use crate::pointing::{look_angles, GeodeticPosition, GeometryError};
use crate::units::{km_to_m, linear_to_db, wavelength};

/// Free-space path loss between isotropic antennas \[dB\],
/// FSPL = 20·log10(4πd/λ).
pub fn free_space_path_loss_db(distance_m: f64, frequency_hz: f64) -> f64 {
    let ratio = 4.0 * PI * distance_m / wavelength(frequency_hz);
    linear_to_db(ratio * ratio)
}

/// The link geometry once resolved: a slant range, plus look angles when a
/// position pair produced it. An explicitly supplied range carries no
/// pointing information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedGeometry {
    pub slant_range_km: f64,
    pub elevation_deg: Option<f64>,
    pub azimuth_deg: Option<f64>,
}

/// Turn a [`GeometrySpec`] into a slant range and look angles.
///
/// A position pair whose elevation comes out negative fails with
/// [`GeometryError::BelowHorizon`]; the error carries the computed numbers
/// because the straight-line geometry is still well defined, the planet is
/// just in the way.
pub fn resolve_geometry(spec: &GeometrySpec) -> Result<ResolvedGeometry, GeometryError> {
    match spec {
        GeometrySpec::SlantRange { range_km } => Ok(ResolvedGeometry {
            slant_range_km: *range_km,
            elevation_deg: None,
            azimuth_deg: None,
        }),

        GeometrySpec::Positions(p) => {
            let station = GeodeticPosition {
                longitude_deg: p.rx_longitude_deg,
                latitude_deg: p.rx_latitude_deg,
                height_m: p.rx_height_m,
            };
            let satellite = GeodeticPosition {
                longitude_deg: p.sat_longitude_deg,
                latitude_deg: p.sat_latitude_deg,
                height_m: km_to_m(p.sat_altitude_km),
            };
            let la = look_angles(station, satellite, p.ellipsoid)?;
            if la.elevation_deg < 0.0 {
                return Err(GeometryError::BelowHorizon {
                    elevation_deg: la.elevation_deg,
                    azimuth_deg: la.azimuth_deg,
                    slant_range_km: la.slant_range_km,
                });
            }
            Ok(ResolvedGeometry {
                slant_range_km: la.slant_range_km,
                elevation_deg: Some(la.elevation_deg),
                azimuth_deg: Some(la.azimuth_deg),
            })
        }
    }
}
