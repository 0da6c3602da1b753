// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Useful constants.
//!
//! All constants *must* be double precision. `satlink` does every calculation
//! in double precision; dB quantities are only rounded for display.

// Things that should never change.

/// Speed of light in vacuum \[metres/second\]
pub const VEL_C: f64 = 299792458.0;

/// Boltzmann constant \[joules/kelvin\] (2019 SI exact value).
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Reference noise temperature for noise-figure conversions \[kelvin\]
pub const T0: f64 = 290.0;

/// Altitude of the geosynchronous belt above the equator \[kilometres\]
pub const GEOSYNC_ALTITUDE_KM: f64 = 35786.0;

// Defaults for quantities that operators rarely supply.

/// Antenna noise temperature assumed when none is given \[kelvin\]. A
/// clear-sky Ku-band aperture pointed well above the horizon sees roughly
/// this much from sky and sidelobe ground pickup.
pub const DEFAULT_ANTENNA_NOISE_TEMP_K: f64 = 20.0;

/// Attenuation of RG6-class coax at L-band IF \[dB per 100 feet\]
pub const COAX_LOSS_DB_PER_100FT: f64 = 8.0;
