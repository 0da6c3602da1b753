// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The RF chain: transmit EIRP and the receive figure of merit.


use log::debug;

use crate::antenna::dish_gain_dbi;
use crate::constants::DEFAULT_ANTENNA_NOISE_TEMP_K;
use crate::noise::{
    cascaded_noise_figure_db, coax_loss_db, noise_figure_to_temperature_k, NoiseStage,
};
use crate::params::{LinkParameters, ReceiveSpec, TransmitSpec};
use crate::units::{linear_to_db, watts_to_dbw};

/// Effective isotropically radiated power after output backoff \[dBW\].
///
/// A directly supplied EIRP is trusted as-is; otherwise the dish gain is
/// derived from its dimensions and added to the amplifier power.
pub fn transmit_eirp_dbw(params: &LinkParameters) -> f64 {
    let saturated = match params.transmit {
        TransmitSpec::Eirp { eirp_dbw } => eirp_dbw,
        TransmitSpec::Dish {
            size_m,
            power_w,
            efficiency,
        } => {
            let gain_dbi = dish_gain_dbi(size_m, params.frequency_hz, efficiency);
            debug!("Transmit dish gain: {gain_dbi:.2} dBi");
            watts_to_dbw(power_w) + gain_dbi
        }
    };
    saturated - params.output_backoff_db
}

/// The receive side boiled down to the numbers the budget needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceiveFigure {
    /// Receive antenna gain \[dBi\]
    pub gain_dbi: f64,
    /// Antenna noise temperature plus the cascaded chain temperature,
    /// referred to the LNB input \[K\]
    pub system_noise_temperature_k: f64,
    /// Figure of merit, G/T = gain − 10·log10(T_sys) \[dB/K\]
    pub g_over_t_db: f64,
}

/// Resolve the receive gain and system noise temperature.
///
/// The noise cascade runs LNB → coax → receiver, in signal order. The LNB's
/// gain sits ahead of the coax and receiver, so with typical LNB gains the
/// downstream stages contribute almost nothing; the cascade is still done
/// properly so that pathological chains (no LNB gain, long coax) come out
/// right.
pub fn receive_figure_of_merit(params: &LinkParameters) -> ReceiveFigure {
    let gain_dbi = match params.receive {
        ReceiveSpec::DishGain { gain_dbi } => gain_dbi,
        ReceiveSpec::DishSize { size_m, efficiency } => {
            dish_gain_dbi(size_m, params.frequency_hz, efficiency)
        }
    };

    let coax_db = coax_loss_db(params.coax_length_ft);
    let stages = [
        NoiseStage {
            noise_figure_db: params.lnb_noise_figure_db,
            gain_db: params.lnb_gain_db,
        },
        // Matched attenuator at the reference temperature: NF equals loss.
        NoiseStage {
            noise_figure_db: coax_db,
            gain_db: -coax_db,
        },
        NoiseStage {
            noise_figure_db: params.rx_noise_figure_db,
            gain_db: 0.0,
        },
    ];
    let chain_noise_figure_db = cascaded_noise_figure_db(&stages);
    let chain_temperature_k = noise_figure_to_temperature_k(chain_noise_figure_db);
    debug!(
        "Receive chain: coax {coax_db:.2} dB, cascaded NF {chain_noise_figure_db:.4} dB, \
         equivalent temperature {chain_temperature_k:.2} K"
    );

    let antenna_temperature_k = params
        .antenna_noise_temp_k
        .unwrap_or(DEFAULT_ANTENNA_NOISE_TEMP_K);
    let system_noise_temperature_k = antenna_temperature_k + chain_temperature_k;

    ReceiveFigure {
        gain_dbi,
        system_noise_temperature_k,
        g_over_t_db: gain_dbi - linear_to_db(system_noise_temperature_k),
    }
}
