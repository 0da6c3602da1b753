// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Receiver noise: noise-figure/temperature conversions, coax attenuation
//! and the Friis cascade.


use crate::constants::{BOLTZMANN, COAX_LOSS_DB_PER_100FT, T0};
use crate::units::{db_to_linear, linear_to_db};

/// One two-port stage in a receive chain, described by its noise figure and
/// gain. A passive attenuator at the reference temperature has a noise
/// figure equal to its loss, so a 4 dB coax run is `{ 4.0, -4.0 }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseStage {
    pub noise_figure_db: f64,
    pub gain_db: f64,
}

/// Cascaded noise figure of stages in signal order \[dB\].
///
/// Friis: F = F₁ + (F₂ − 1)/G₁ + (F₃ − 1)/(G₁G₂) + …, accumulated in the
/// linear domain. An empty chain is transparent (0 dB).
pub fn cascaded_noise_figure_db(stages: &[NoiseStage]) -> f64 {
    let mut factor = 1.0;
    let mut gain = 1.0;
    for stage in stages {
        factor += (db_to_linear(stage.noise_figure_db) - 1.0) / gain;
        gain *= db_to_linear(stage.gain_db);
    }
    linear_to_db(factor)
}

/// Equivalent noise temperature of a noise figure \[kelvin\],
/// T = T₀(F − 1).
pub fn noise_figure_to_temperature_k(noise_figure_db: f64) -> f64 {
    T0 * (db_to_linear(noise_figure_db) - 1.0)
}

/// Noise figure of an equivalent noise temperature \[dB\],
/// NF = 10·log10(1 + T/T₀).
pub fn temperature_to_noise_figure_db(temperature_k: f64) -> f64 {
    linear_to_db(1.0 + temperature_k / T0)
}

/// Attenuation of a coax run \[dB\].
pub fn coax_loss_db(length_ft: f64) -> f64 {
    COAX_LOSS_DB_PER_100FT * length_ft / 100.0
}

/// Thermal noise power in a bandwidth \[dBW\], N = 10·log10(kTB).
pub fn noise_power_dbw(system_temperature_k: f64, bandwidth_hz: f64) -> f64 {
    linear_to_db(BOLTZMANN * system_temperature_k * bandwidth_hz)
}
