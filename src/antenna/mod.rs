// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parabolic-dish antenna gain.


use std::f64::consts::PI;

use crate::units::{linear_to_db, wavelength};

/// Boresight gain of a circular parabolic aperture \[dBi\].
///
/// G = η (πD/λ)², with D the diameter in metres and η the aperture
/// efficiency in (0, 1]. Used for both the transmit and receive dish when
/// the operator gives dimensions instead of a measured gain.
pub fn dish_gain_dbi(diameter_m: f64, frequency_hz: f64, efficiency: f64) -> f64 {
    let aperture_ratio = PI * diameter_m / wavelength(frequency_hz);
    linear_to_db(efficiency * aperture_ratio * aperture_ratio)
}
