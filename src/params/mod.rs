// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The link description that the analysis consumes.
//!
//! The three mutually exclusive input groups (how the transmitter is
//! described, how the receive dish is described, how the geometry is
//! described) are tagged unions, so an incomplete group cannot be
//! represented here. Adapters own the job of building these unions out of
//! loose optional fields and applying precedence between them; this module
//! owns the numeric range checks.

mod error;

pub use error::ValidationError;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::constants::GEOSYNC_ALTITUDE_KM;
use crate::pointing::ReferenceEllipsoid;

// Demo defaults, applied by the adapters when a field is absent. Library
// callers constructing `LinkParameters` directly say what they mean and get
// no defaults.

/// Default carrier frequency: 12 GHz Ku-band downlink \[Hz\]
pub const DEFAULT_FREQ_HZ: f64 = 12e9;
/// Default bandwidth: a full 36 MHz transponder \[Hz\]
pub const DEFAULT_BANDWIDTH_HZ: f64 = 36e6;
/// Default transmit EIRP \[dBW\]
pub const DEFAULT_EIRP_DBW: f64 = 50.0;
/// Default output backoff \[dB\]
pub const DEFAULT_OUTPUT_BACKOFF_DB: f64 = 0.0;
/// Default transmit dish efficiency when a dish is given without one
pub const DEFAULT_TX_DISH_EFFICIENCY: f64 = 0.56;
/// Default receive dish diameter \[metres\]
pub const DEFAULT_RX_DISH_SIZE_M: f64 = 0.9;
/// Default receive dish aperture efficiency
pub const DEFAULT_RX_DISH_EFFICIENCY: f64 = 0.65;
/// Default LNB noise figure \[dB\]
pub const DEFAULT_LNB_NOISE_FIGURE_DB: f64 = 0.7;
/// Default LNB gain \[dB\]
pub const DEFAULT_LNB_GAIN_DB: f64 = 55.0;
/// Default receiver noise figure \[dB\]
pub const DEFAULT_RX_NOISE_FIGURE_DB: f64 = 8.0;
/// Default coax run between LNB and receiver \[feet\]
pub const DEFAULT_COAX_LENGTH_FT: f64 = 50.0;
/// Default slant range \[km\]
pub const DEFAULT_SLANT_RANGE_KM: f64 = 38000.0;
/// Default clear-sky atmospheric loss \[dB\]
pub const DEFAULT_ATMOSPHERIC_LOSS_DB: f64 = 0.5;
/// Default antenna mispointing loss \[dB\]
pub const DEFAULT_MISPOINTING_LOSS_DB: f64 = 0.0;
/// Default loss between feed and LNA \[dB\]
pub const DEFAULT_LNA_FEED_LOSS_DB: f64 = 0.0;
/// Default demodulator CNR threshold \[dB\]
pub const DEFAULT_MINIMUM_CNR_DB: f64 = 8.0;
/// Default implementation margin \[dB\]
pub const DEFAULT_IMPLEMENTATION_MARGIN_DB: f64 = 1.0;

/// How the transmit side is described: either a measured EIRP, or dish
/// dimensions and amplifier power to derive one from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransmitSpec {
    Eirp {
        eirp_dbw: f64,
    },

    Dish {
        size_m: f64,
        power_w: f64,
        efficiency: f64,
    },
}

/// How the receive dish is described: either a measured gain, or dimensions
/// to derive one from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReceiveSpec {
    DishGain { gain_dbi: f64 },

    DishSize { size_m: f64, efficiency: f64 },
}

/// Station and satellite positions on a reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionGeometry {
    pub rx_longitude_deg: f64,
    pub rx_latitude_deg: f64,
    pub rx_height_m: f64,
    pub sat_longitude_deg: f64,
    pub sat_latitude_deg: f64,
    pub sat_altitude_km: f64,
    pub ellipsoid: ReferenceEllipsoid,
}

impl PositionGeometry {
    /// A geostationary satellite at the given longitude, with the station
    /// fields zeroed. Handy as a base for struct-update syntax.
    pub fn at_geo_longitude(sat_longitude_deg: f64) -> PositionGeometry {
        PositionGeometry {
            rx_longitude_deg: 0.0,
            rx_latitude_deg: 0.0,
            rx_height_m: 0.0,
            sat_longitude_deg,
            sat_latitude_deg: 0.0,
            sat_altitude_km: GEOSYNC_ALTITUDE_KM,
            ellipsoid: ReferenceEllipsoid::default(),
        }
    }
}

/// How the link geometry is described: either a straight-line range, or
/// positions to derive range and look angles from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometrySpec {
    SlantRange { range_km: f64 },

    Positions(PositionGeometry),
}

/// Carrier polarization. Carried through to the result for reporting; the
/// noise model does not depend on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Polarization {
    #[strum(serialize = "linear")]
    Linear,

    #[strum(serialize = "circular")]
    Circular,
}

impl Default for Polarization {
    fn default() -> Self {
        Polarization::Linear
    }
}

lazy_static::lazy_static! {
    pub static ref POLARIZATIONS_COMMA_SEPARATED: String = Polarization::iter().join(", ");
}

/// Everything the analysis needs to know about a link. Immutable once
/// built; adapters apply defaults and precedence before construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkParameters {
    /// Carrier centre frequency \[Hz\]
    pub frequency_hz: f64,
    /// Occupied (noise) bandwidth \[Hz\]
    pub bandwidth_hz: f64,
    pub transmit: TransmitSpec,
    /// Amplifier output backoff, subtracted from the EIRP \[dB\]
    pub output_backoff_db: f64,
    pub receive: ReceiveSpec,
    pub lnb_noise_figure_db: f64,
    pub lnb_gain_db: f64,
    pub rx_noise_figure_db: f64,
    pub coax_length_ft: f64,
    pub geometry: GeometrySpec,
    /// Antenna noise temperature \[K\]. When absent, a clear-sky default is
    /// assumed by the analysis.
    pub antenna_noise_temp_k: Option<f64>,
    pub atmospheric_loss_db: f64,
    pub mispointing_loss_db: f64,
    /// Loss between the feed and the LNA \[dB\]. Attenuates the carrier
    /// only; it is not part of the receiver noise cascade.
    pub lna_feed_loss_db: f64,
    pub polarization: Polarization,
    /// CNR the demodulator needs to lock \[dB\]
    pub minimum_cnr_db: f64,
    /// Margin held in reserve for modem imperfections \[dB\]
    pub implementation_margin_db: f64,
}

fn positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::Negative { field, value })
    }
}

fn efficiency(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ValidationError::EfficiencyOutOfRange { field, value })
    }
}

fn latitude(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::LatitudeOutOfRange { field, value })
    }
}

fn longitude(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::LongitudeOutOfRange { field, value })
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}

impl LinkParameters {
    /// Check every numeric field against its physical range.
    ///
    /// Group completeness cannot fail here (the tagged unions make
    /// incomplete groups unrepresentable); this catches values that would
    /// otherwise reach a logarithm or a trig call. All comparisons are
    /// written so that NaN fails them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        positive("frequency", self.frequency_hz)?;
        positive("bandwidth", self.bandwidth_hz)?;

        match self.transmit {
            TransmitSpec::Eirp { eirp_dbw } => finite("EIRP", eirp_dbw)?,
            TransmitSpec::Dish {
                size_m,
                power_w,
                efficiency: eff,
            } => {
                positive("transmit dish size", size_m)?;
                positive("transmit power", power_w)?;
                efficiency("transmit dish efficiency", eff)?;
            }
        }
        non_negative("output backoff", self.output_backoff_db)?;

        match self.receive {
            ReceiveSpec::DishGain { gain_dbi } => finite("receive dish gain", gain_dbi)?,
            ReceiveSpec::DishSize {
                size_m,
                efficiency: eff,
            } => {
                positive("receive dish size", size_m)?;
                efficiency("receive dish efficiency", eff)?;
            }
        }

        non_negative("LNB noise figure", self.lnb_noise_figure_db)?;
        finite("LNB gain", self.lnb_gain_db)?;
        non_negative("receiver noise figure", self.rx_noise_figure_db)?;
        non_negative("coax length", self.coax_length_ft)?;

        match self.geometry {
            GeometrySpec::SlantRange { range_km } => positive("slant range", range_km)?,
            GeometrySpec::Positions(p) => {
                longitude("rx longitude", p.rx_longitude_deg)?;
                latitude("rx latitude", p.rx_latitude_deg)?;
                finite("rx height", p.rx_height_m)?;
                longitude("satellite longitude", p.sat_longitude_deg)?;
                latitude("satellite latitude", p.sat_latitude_deg)?;
                positive("satellite altitude", p.sat_altitude_km)?;
            }
        }

        if let Some(temp) = self.antenna_noise_temp_k {
            positive("antenna noise temperature", temp)?;
        }
        non_negative("atmospheric loss", self.atmospheric_loss_db)?;
        non_negative("mispointing loss", self.mispointing_loss_db)?;
        non_negative("LNA feed loss", self.lna_feed_loss_db)?;
        finite("minimum CNR", self.minimum_cnr_db)?;
        non_negative("implementation margin", self.implementation_margin_db)?;

        Ok(())
    }
}
