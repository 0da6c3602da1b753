// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The link-budget orchestrator: one pass from parameters to a verdict.


use log::debug;
use serde::{Deserialize, Serialize};

use crate::chain::{receive_figure_of_merit, transmit_eirp_dbw};
use crate::noise::noise_power_dbw;
use crate::params::{LinkParameters, Polarization, ValidationError};
use crate::pointing::GeometryError;
use crate::propagation::{free_space_path_loss_db, resolve_geometry, ResolvedGeometry};
use crate::units::km_to_m;

/// The outcome of a link-budget analysis.
///
/// `elevation_deg` and `azimuth_deg` are `None` when the slant range was
/// supplied directly (no pointing information exists). The path-dependent
/// fields (`slant_range_km`, `path_loss_db`, `received_carrier_power_dbw`,
/// `carrier_to_noise_ratio_db`, `link_margin_db`) are `None` only when the
/// geometry was degenerate; a below-horizon pass still populates all of
/// them, since the straight-line numbers are well defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkBudgetResult {
    pub eirp_dbw: f64,
    pub slant_range_km: Option<f64>,
    pub elevation_deg: Option<f64>,
    pub azimuth_deg: Option<f64>,
    pub path_loss_db: Option<f64>,
    pub rx_gain_dbi: f64,
    pub system_noise_temperature_k: f64,
    pub g_over_t_db: f64,
    pub received_carrier_power_dbw: Option<f64>,
    pub noise_power_dbw: f64,
    pub carrier_to_noise_ratio_db: Option<f64>,
    pub link_margin_db: Option<f64>,
    /// True when the margin is non-negative *and* the geometry produced no
    /// fault.
    pub link_closes: bool,
    pub polarization: Polarization,
    /// Human-readable description of the geometry fault that forced
    /// `link_closes` to false, when one occurred.
    pub reason: Option<String>,
}

/// Everything downstream of the path-loss computation.
#[derive(Debug, Clone, Copy)]
struct PathNumbers {
    path_loss_db: f64,
    carrier_dbw: f64,
    cnr_db: f64,
    margin_db: f64,
}

/// Run a complete link budget.
///
/// Fails only when the parameters themselves are bad. A physically
/// infeasible link (satellite below the horizon, coincident positions) is
/// an *answer*, not an error: it comes back as a result with
/// `link_closes = false` and a `reason`.
pub fn analyze(params: &LinkParameters) -> Result<LinkBudgetResult, ValidationError> {
    params.validate()?;

    let eirp_dbw = transmit_eirp_dbw(params);
    let rx = receive_figure_of_merit(params);
    let noise_dbw = noise_power_dbw(rx.system_noise_temperature_k, params.bandwidth_hz);
    debug!(
        "EIRP {eirp_dbw:.2} dBW, rx gain {:.2} dBi, T_sys {:.2} K, noise {noise_dbw:.2} dBW",
        rx.gain_dbi, rx.system_noise_temperature_k
    );

    // A geometry fault is downgraded, not propagated: below the horizon the
    // straight-line numbers still get filled in, while degenerate geometry
    // leaves the path-dependent fields empty.
    let (geometry, fault) = match resolve_geometry(&params.geometry) {
        Ok(resolved) => (Some(resolved), None),
        Err(fault) => {
            debug!("Geometry fault: {fault}");
            let geometry = match fault {
                GeometryError::BelowHorizon {
                    elevation_deg,
                    azimuth_deg,
                    slant_range_km,
                } => Some(ResolvedGeometry {
                    slant_range_km,
                    elevation_deg: Some(elevation_deg),
                    azimuth_deg: Some(azimuth_deg),
                }),
                GeometryError::Degenerate => None,
            };
            (geometry, Some(fault))
        }
    };

    let path = geometry.map(|g| {
        let path_loss_db = free_space_path_loss_db(km_to_m(g.slant_range_km), params.frequency_hz);
        let carrier_dbw = eirp_dbw - path_loss_db - params.atmospheric_loss_db
            - params.mispointing_loss_db
            - params.lna_feed_loss_db
            + rx.gain_dbi;
        let cnr_db = carrier_dbw - noise_dbw;
        PathNumbers {
            path_loss_db,
            carrier_dbw,
            cnr_db,
            margin_db: cnr_db - params.minimum_cnr_db - params.implementation_margin_db,
        }
    });

    let link_closes = fault.is_none() && path.map_or(false, |p| p.margin_db >= 0.0);

    Ok(LinkBudgetResult {
        eirp_dbw,
        slant_range_km: geometry.map(|g| g.slant_range_km),
        elevation_deg: geometry.and_then(|g| g.elevation_deg),
        azimuth_deg: geometry.and_then(|g| g.azimuth_deg),
        path_loss_db: path.map(|p| p.path_loss_db),
        rx_gain_dbi: rx.gain_dbi,
        system_noise_temperature_k: rx.system_noise_temperature_k,
        g_over_t_db: rx.g_over_t_db,
        received_carrier_power_dbw: path.map(|p| p.carrier_dbw),
        noise_power_dbw: noise_dbw,
        carrier_to_noise_ratio_db: path.map(|p| p.cnr_db),
        link_margin_db: path.map(|p| p.margin_db),
        link_closes,
        polarization: params.polarization,
        reason: fault.map(|f| f.to_string()),
    })
}
