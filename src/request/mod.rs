// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The structured request/response adapter.
//!
//! Requests are JSON documents of the form
//! `{ "parameters": { "freq": 12e9, "rx_dish_size": "1.2", ... } }`.
//! Values for the known numeric fields may arrive as JSON numbers or as
//! strings (conversational front-ends are sloppy about this); strings are
//! coerced. Missing fields take the demo defaults, so an empty request is a
//! valid request describing a stock Ku-band downlink.
//!
//! The response is either
//! `{ "message": ..., "results": { ... } }` or
//! `{ "message": ..., "error": true }`; the adapter never panics on bad
//! input.

mod error;
#[cfg(test)]
mod tests;

pub use error::RequestError;

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::{analyze, LinkBudgetResult};
use crate::constants::GEOSYNC_ALTITUDE_KM;
use crate::params::{
    GeometrySpec, LinkParameters, Polarization, PositionGeometry, ReceiveSpec, TransmitSpec,
    ValidationError, DEFAULT_ATMOSPHERIC_LOSS_DB, DEFAULT_BANDWIDTH_HZ, DEFAULT_COAX_LENGTH_FT,
    DEFAULT_EIRP_DBW, DEFAULT_FREQ_HZ, DEFAULT_IMPLEMENTATION_MARGIN_DB, DEFAULT_LNA_FEED_LOSS_DB,
    DEFAULT_LNB_GAIN_DB, DEFAULT_LNB_NOISE_FIGURE_DB, DEFAULT_MINIMUM_CNR_DB,
    DEFAULT_MISPOINTING_LOSS_DB, DEFAULT_OUTPUT_BACKOFF_DB, DEFAULT_RX_DISH_EFFICIENCY,
    DEFAULT_RX_DISH_SIZE_M, DEFAULT_RX_NOISE_FIGURE_DB, DEFAULT_SLANT_RANGE_KM,
    DEFAULT_TX_DISH_EFFICIENCY,
};
use crate::pointing::ReferenceEllipsoid;

const SUCCESS_MESSAGE: &str = "Link budget calculation successful";

/// The wire response. Exactly one of `results` or `error` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<LinkBudgetResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
}

impl RequestResponse {
    fn success(results: LinkBudgetResult) -> RequestResponse {
        RequestResponse {
            message: SUCCESS_MESSAGE.to_string(),
            results: Some(results),
            error: None,
        }
    }

    fn failure(err: &RequestError) -> RequestResponse {
        RequestResponse {
            message: format!("Error calculating link budget: {err}"),
            results: None,
            error: Some(true),
        }
    }
}

/// Handle one request document. Every malfunction, from unparseable JSON to
/// out-of-range values, becomes an error response rather than an `Err` or a
/// panic; the caller always gets something it can serialize back.
pub fn handle_request(request: &str) -> RequestResponse {
    match run(request) {
        Ok(results) => RequestResponse::success(results),
        Err(err) => {
            debug!("Request failed: {err}");
            RequestResponse::failure(&err)
        }
    }
}

fn run(request: &str) -> Result<LinkBudgetResult, RequestError> {
    let document: Value = serde_json::from_str(request)?;
    let parameters = match document.get("parameters") {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(other) => {
            return Err(RequestError::BadParameters {
                value: other.to_string(),
            })
        }
    };
    let params = match parameters {
        Some(map) => build_parameters(map)?,
        None => build_parameters(&serde_json::Map::new())?,
    };
    Ok(analyze(&params)?)
}

/// Pull a numeric field out of the map, coercing strings. `Ok(None)` means
/// absent (or JSON null, which front-ends use interchangeably with absent).
fn numeric(
    map: &serde_json::Map<String, Value>,
    name: &'static str,
) -> Result<Option<f64>, RequestError> {
    match map.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(RequestError::NotNumeric {
                name,
                value: s.clone(),
            }),
        },
        Some(other) => Err(RequestError::NotNumeric {
            name,
            value: other.to_string(),
        }),
    }
}

/// Pull a string field out of the map. Only `polarization` and
/// `ref_ellipsoid` go through here.
fn string(
    map: &serde_json::Map<String, Value>,
    name: &'static str,
) -> Result<Option<String>, RequestError> {
    match map.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(RequestError::NotAString {
            name,
            value: other.to_string(),
        }),
    }
}

/// Build `LinkParameters` out of loose named values, applying the demo
/// defaults and the precedence rules: an explicit EIRP beats transmit dish
/// parameters, an explicit receive gain beats a receive dish size, and a
/// complete position set beats a slant range.
fn build_parameters(
    map: &serde_json::Map<String, Value>,
) -> Result<LinkParameters, RequestError> {
    let transmit = match (
        numeric(map, "eirp")?,
        numeric(map, "tx_dish_size")?,
        numeric(map, "tx_power")?,
    ) {
        (Some(eirp_dbw), _, _) => TransmitSpec::Eirp { eirp_dbw },
        (None, Some(size_m), Some(power_w)) => TransmitSpec::Dish {
            size_m,
            power_w,
            efficiency: numeric(map, "tx_dish_efficiency")?.unwrap_or(DEFAULT_TX_DISH_EFFICIENCY),
        },
        (None, _, _) => TransmitSpec::Eirp {
            eirp_dbw: DEFAULT_EIRP_DBW,
        },
    };

    let receive = match numeric(map, "rx_dish_gain")? {
        Some(gain_dbi) => {
            debug!("Using rx_dish_gain {gain_dbi} dBi, ignoring any rx_dish_size");
            ReceiveSpec::DishGain { gain_dbi }
        }
        None => ReceiveSpec::DishSize {
            size_m: numeric(map, "rx_dish_size")?.unwrap_or(DEFAULT_RX_DISH_SIZE_M),
            efficiency: numeric(map, "rx_dish_efficiency")?.unwrap_or(DEFAULT_RX_DISH_EFFICIENCY),
        },
    };

    let geometry = match (
        numeric(map, "rx_long")?,
        numeric(map, "rx_lat")?,
        numeric(map, "sat_long")?,
    ) {
        (Some(rx_longitude_deg), Some(rx_latitude_deg), Some(sat_longitude_deg)) => {
            debug!("Complete position set supplied; ignoring any slant_range");
            GeometrySpec::Positions(PositionGeometry {
                rx_longitude_deg,
                rx_latitude_deg,
                rx_height_m: numeric(map, "rx_height")?.unwrap_or(0.0),
                sat_longitude_deg,
                sat_latitude_deg: numeric(map, "sat_lat")?.unwrap_or(0.0),
                sat_altitude_km: numeric(map, "sat_alt")?.unwrap_or(GEOSYNC_ALTITUDE_KM),
                ellipsoid: match string(map, "ref_ellipsoid")? {
                    Some(s) => ReferenceEllipsoid::from_str(&s)
                        .map_err(|_| ValidationError::UnknownEllipsoid(s))?,
                    None => ReferenceEllipsoid::default(),
                },
            })
        }
        _ => GeometrySpec::SlantRange {
            range_km: numeric(map, "slant_range")?.unwrap_or(DEFAULT_SLANT_RANGE_KM),
        },
    };

    let polarization = match string(map, "polarization")? {
        Some(s) => {
            Polarization::from_str(&s).map_err(|_| ValidationError::UnknownPolarization(s))?
        }
        None => Polarization::default(),
    };

    Ok(LinkParameters {
        frequency_hz: numeric(map, "freq")?.unwrap_or(DEFAULT_FREQ_HZ),
        bandwidth_hz: numeric(map, "bw")?.unwrap_or(DEFAULT_BANDWIDTH_HZ),
        transmit,
        output_backoff_db: numeric(map, "obo")?.unwrap_or(DEFAULT_OUTPUT_BACKOFF_DB),
        receive,
        lnb_noise_figure_db: numeric(map, "lnb_noise_fig")?.unwrap_or(DEFAULT_LNB_NOISE_FIGURE_DB),
        lnb_gain_db: numeric(map, "lnb_gain")?.unwrap_or(DEFAULT_LNB_GAIN_DB),
        rx_noise_figure_db: numeric(map, "rx_noise_fig")?.unwrap_or(DEFAULT_RX_NOISE_FIGURE_DB),
        coax_length_ft: numeric(map, "coax_length")?.unwrap_or(DEFAULT_COAX_LENGTH_FT),
        geometry,
        antenna_noise_temp_k: numeric(map, "antenna_noise_temp")?,
        atmospheric_loss_db: numeric(map, "atmospheric_loss")?
            .unwrap_or(DEFAULT_ATMOSPHERIC_LOSS_DB),
        mispointing_loss_db: numeric(map, "mispointing_loss")?
            .unwrap_or(DEFAULT_MISPOINTING_LOSS_DB),
        lna_feed_loss_db: numeric(map, "lna_feed_loss")?.unwrap_or(DEFAULT_LNA_FEED_LOSS_DB),
        polarization,
        minimum_cnr_db: numeric(map, "min_cnr")?.unwrap_or(DEFAULT_MINIMUM_CNR_DB),
        implementation_margin_db: numeric(map, "impl_margin")?
            .unwrap_or(DEFAULT_IMPLEMENTATION_MARGIN_DB),
    })
}
