// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Station-to-satellite pointing geometry.
//!
//! Positions are geodetic (longitude, latitude, height above the reference
//! ellipsoid). The slant range and look angles come from converting both
//! positions to Earth-centred Earth-fixed coordinates and rotating the
//! difference vector into the station's local east-north-up frame.

mod ellipsoid;
mod error;

pub use ellipsoid::{ReferenceEllipsoid, REF_ELLIPSOIDS_COMMA_SEPARATED};
pub use error::GeometryError;

/// A position in geodetic coordinates on some reference ellipsoid.
///
/// Longitude is positive east, latitude positive north, height in metres
/// above the ellipsoid surface (not above mean sea level; the difference is
/// irrelevant at link-budget accuracy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPosition {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub height_m: f64,
}

/// Where to point a dish, and how far away the target is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAngles {
    pub slant_range_km: f64,
    /// Angle above the local horizontal plane \[degrees\]. Negative means the
    /// target is below the horizon.
    pub elevation_deg: f64,
    /// Compass bearing clockwise from true north \[degrees, 0..360).
    pub azimuth_deg: f64,
}

/// Convert a geodetic position to Earth-centred Earth-fixed Cartesian
/// coordinates \[metres\].
pub fn geodetic_to_ecef(pos: GeodeticPosition, ellipsoid: ReferenceEllipsoid) -> [f64; 3] {
    let (sin_lat, cos_lat) = pos.latitude_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = pos.longitude_deg.to_radians().sin_cos();
    let e2 = ellipsoid.eccentricity_squared();
    // Prime-vertical radius of curvature at this latitude.
    let n = ellipsoid.semi_major_axis() / (1.0 - e2 * sin_lat * sin_lat).sqrt();
    [
        (n + pos.height_m) * cos_lat * cos_lon,
        (n + pos.height_m) * cos_lat * sin_lon,
        (n * (1.0 - e2) + pos.height_m) * sin_lat,
    ]
}

/// Compute the slant range and look angles from a station to a target.
///
/// Both positions must be on the same reference ellipsoid. The only failure
/// mode is coincident positions, where no direction is defined; a target
/// below the horizon is a perfectly good geometric answer and comes back with
/// a negative elevation.
pub fn look_angles(
    station: GeodeticPosition,
    target: GeodeticPosition,
    ellipsoid: ReferenceEllipsoid,
) -> Result<LookAngles, GeometryError> {
    let [sx, sy, sz] = geodetic_to_ecef(station, ellipsoid);
    let [tx, ty, tz] = geodetic_to_ecef(target, ellipsoid);
    let (dx, dy, dz) = (tx - sx, ty - sy, tz - sz);
    let range_m = (dx * dx + dy * dy + dz * dz).sqrt();
    if range_m == 0.0 {
        return Err(GeometryError::Degenerate);
    }

    let (sin_lat, cos_lat) = station.latitude_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = station.longitude_deg.to_radians().sin_cos();

    // Rotate the ECEF difference vector into the station's east-north-up
    // frame.
    let east = -sin_lon * dx + cos_lon * dy;
    let north = -sin_lat * cos_lon * dx - sin_lat * sin_lon * dy + cos_lat * dz;
    let up = cos_lat * cos_lon * dx + cos_lat * sin_lon * dy + sin_lat * dz;

    // Rounding can push |up/range| a few ULPs past 1 when the target is at
    // zenith; clamp before asin.
    let elevation_deg = (up / range_m).clamp(-1.0, 1.0).asin().to_degrees();
    let azimuth_deg = {
        let az = east.atan2(north).to_degrees();
        if az < 0.0 {
            az + 360.0
        } else {
            az
        }
    };

    Ok(LookAngles {
        slant_range_km: range_m / 1e3,
        elevation_deg,
        azimuth_deg,
    })
}
