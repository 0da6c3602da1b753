// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversions between the units that turn up in link budgets.
//!
//! Everything here is a pure function of its argument. Keeping dB/linear
//! conversions in one place means the rest of the crate never calls `log10`
//! or `powf` directly.


use crate::constants::VEL_C;

/// Convert a decibel quantity to a linear power ratio.
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// Convert a linear power ratio to decibels.
///
/// The argument must be positive; anything else means a caller skipped
/// validation, which is a bug rather than a runtime condition.
#[inline]
pub fn linear_to_db(linear: f64) -> f64 {
    assert!(
        linear > 0.0,
        "linear_to_db called with non-positive value {linear}"
    );
    10.0 * linear.log10()
}

/// Gigahertz to hertz.
#[inline]
pub fn ghz_to_hz(ghz: f64) -> f64 {
    ghz * 1e9
}

/// International feet to metres.
#[inline]
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * 0.3048
}

/// Kilometres to metres.
#[inline]
pub fn km_to_m(km: f64) -> f64 {
    km * 1e3
}

/// Wavelength of an electromagnetic wave in a vacuum \[metres\].
#[inline]
pub fn wavelength(freq_hz: f64) -> f64 {
    VEL_C / freq_hz
}

/// Frequency of an electromagnetic wave in a vacuum \[hertz\].
#[inline]
pub fn frequency(wavelength_m: f64) -> f64 {
    VEL_C / wavelength_m
}

/// Power in watts to dB relative to one watt.
#[inline]
pub fn watts_to_dbw(watts: f64) -> f64 {
    linear_to_db(watts)
}
