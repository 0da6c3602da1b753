// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. The `analyze` and `sweep`
//! subcommands both describe a link, so the link arguments are shared between
//! them.

mod printers;

pub(super) use printers::InfoPrinter;
pub(crate) use printers::{display_warnings, Warn};

use std::str::FromStr;

use clap::Parser;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::SatlinkError;
use crate::{
    constants::{DEFAULT_ANTENNA_NOISE_TEMP_K, GEOSYNC_ALTITUDE_KM},
    params::{
        GeometrySpec, LinkParameters, Polarization, PositionGeometry, ReceiveSpec, TransmitSpec,
        ValidationError, DEFAULT_ATMOSPHERIC_LOSS_DB, DEFAULT_BANDWIDTH_HZ, DEFAULT_COAX_LENGTH_FT,
        DEFAULT_EIRP_DBW, DEFAULT_FREQ_HZ, DEFAULT_IMPLEMENTATION_MARGIN_DB,
        DEFAULT_LNA_FEED_LOSS_DB, DEFAULT_LNB_GAIN_DB, DEFAULT_LNB_NOISE_FIGURE_DB,
        DEFAULT_MINIMUM_CNR_DB, DEFAULT_MISPOINTING_LOSS_DB, DEFAULT_OUTPUT_BACKOFF_DB,
        DEFAULT_RX_DISH_EFFICIENCY, DEFAULT_RX_DISH_SIZE_M, DEFAULT_RX_NOISE_FIGURE_DB,
        DEFAULT_SLANT_RANGE_KM, DEFAULT_TX_DISH_EFFICIENCY, POLARIZATIONS_COMMA_SEPARATED,
    },
    pointing::{ReferenceEllipsoid, REF_ELLIPSOIDS_COMMA_SEPARATED},
};

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    static ref FREQ_HELP: String =
        format!("The carrier centre frequency [Hz]. Default: {DEFAULT_FREQ_HZ:e}");

    static ref BW_HELP: String =
        format!("The carrier noise bandwidth [Hz]. Default: {DEFAULT_BANDWIDTH_HZ:e}");

    static ref EIRP_HELP: String =
        format!("The saturated EIRP of the transmitter [dBW]. Overrides any transmit dish parameters. Default: {DEFAULT_EIRP_DBW}");

    static ref OBO_HELP: String =
        format!("The transmitter output backoff [dB]. Default: {DEFAULT_OUTPUT_BACKOFF_DB}");

    static ref TX_DISH_EFFICIENCY_HELP: String =
        format!("The transmit dish aperture efficiency. Default: {DEFAULT_TX_DISH_EFFICIENCY}");

    static ref RX_DISH_SIZE_HELP: String =
        format!("The receive dish diameter [m]. Default: {DEFAULT_RX_DISH_SIZE_M}");

    static ref RX_DISH_EFFICIENCY_HELP: String =
        format!("The receive dish aperture efficiency. Default: {DEFAULT_RX_DISH_EFFICIENCY}");

    static ref LNB_NOISE_FIG_HELP: String =
        format!("The LNB noise figure [dB]. Default: {DEFAULT_LNB_NOISE_FIGURE_DB}");

    static ref LNB_GAIN_HELP: String =
        format!("The LNB gain [dB]. Default: {DEFAULT_LNB_GAIN_DB}");

    static ref RX_NOISE_FIG_HELP: String =
        format!("The receiver noise figure [dB]. Default: {DEFAULT_RX_NOISE_FIGURE_DB}");

    static ref COAX_LENGTH_HELP: String =
        format!("The length of coax between the LNB and the receiver [ft]. Default: {DEFAULT_COAX_LENGTH_FT}");

    static ref ANTENNA_NOISE_TEMP_HELP: String =
        format!("The antenna noise temperature [K]. Default: {DEFAULT_ANTENNA_NOISE_TEMP_K} (clear sky)");

    static ref SLANT_RANGE_HELP: String =
        format!("The slant range to the satellite [km]. Ignored when a complete position set is supplied. Default: {DEFAULT_SLANT_RANGE_KM}");

    static ref SAT_ALT_HELP: String =
        format!("The satellite altitude above the reference ellipsoid [km]. Default: {GEOSYNC_ALTITUDE_KM} (geosynchronous)");

    static ref REF_ELLIPSOID_HELP: String =
        format!("The reference ellipsoid for position geometry. Supported ellipsoids: {}. Default: {}", *REF_ELLIPSOIDS_COMMA_SEPARATED, ReferenceEllipsoid::default());

    static ref ATMOSPHERIC_LOSS_HELP: String =
        format!("Clear-sky atmospheric loss [dB]. Default: {DEFAULT_ATMOSPHERIC_LOSS_DB}");

    static ref MISPOINTING_LOSS_HELP: String =
        format!("Antenna mispointing loss [dB]. Default: {DEFAULT_MISPOINTING_LOSS_DB}");

    static ref LNA_FEED_LOSS_HELP: String =
        format!("Loss between the feed and the LNA [dB]. Default: {DEFAULT_LNA_FEED_LOSS_DB}");

    static ref POLARIZATION_HELP: String =
        format!("The link polarization, reported in the results. Supported polarizations: {}. Default: {}", *POLARIZATIONS_COMMA_SEPARATED, Polarization::default());

    static ref MIN_CNR_HELP: String =
        format!("The minimum C/N the modem needs to lock [dB]. Default: {DEFAULT_MINIMUM_CNR_DB}");

    static ref IMPL_MARGIN_HELP: String =
        format!("Implementation margin held against the minimum C/N [dB]. Default: {DEFAULT_IMPLEMENTATION_MARGIN_DB}");
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(SatlinkError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(SatlinkError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(SatlinkError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

/// Arguments describing one link. Everything is optional; unspecified values
/// take the defaults of the domestic Ku-band downlink described in the help
/// texts.
#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct LinkArgs {
    #[clap(long, help = FREQ_HELP.as_str(), help_heading = "SIGNAL")]
    pub(super) freq: Option<f64>,

    #[clap(long, help = BW_HELP.as_str(), help_heading = "SIGNAL")]
    pub(super) bw: Option<f64>,

    #[clap(long, help = POLARIZATION_HELP.as_str(), help_heading = "SIGNAL")]
    pub(super) polarization: Option<String>,

    #[clap(long, help = EIRP_HELP.as_str(), help_heading = "TRANSMITTER")]
    pub(super) eirp: Option<f64>,

    #[clap(long, help = OBO_HELP.as_str(), help_heading = "TRANSMITTER")]
    pub(super) obo: Option<f64>,

    /// The transmit dish diameter [m]. Must be paired with --tx-power.
    #[clap(long, help_heading = "TRANSMITTER")]
    pub(super) tx_dish_size: Option<f64>,

    /// The transmit power fed to the dish [W]. Must be paired with
    /// --tx-dish-size.
    #[clap(long, help_heading = "TRANSMITTER")]
    pub(super) tx_power: Option<f64>,

    #[clap(long, help = TX_DISH_EFFICIENCY_HELP.as_str(), help_heading = "TRANSMITTER")]
    pub(super) tx_dish_efficiency: Option<f64>,

    /// A measured receive dish gain [dBi]. Overrides any receive dish size.
    #[clap(long, help_heading = "RECEIVER")]
    pub(super) rx_dish_gain: Option<f64>,

    #[clap(long, help = RX_DISH_SIZE_HELP.as_str(), help_heading = "RECEIVER")]
    pub(super) rx_dish_size: Option<f64>,

    #[clap(long, help = RX_DISH_EFFICIENCY_HELP.as_str(), help_heading = "RECEIVER")]
    pub(super) rx_dish_efficiency: Option<f64>,

    #[clap(long, help = LNB_NOISE_FIG_HELP.as_str(), help_heading = "RECEIVER")]
    pub(super) lnb_noise_fig: Option<f64>,

    #[clap(long, help = LNB_GAIN_HELP.as_str(), help_heading = "RECEIVER")]
    pub(super) lnb_gain: Option<f64>,

    #[clap(long, help = RX_NOISE_FIG_HELP.as_str(), help_heading = "RECEIVER")]
    pub(super) rx_noise_fig: Option<f64>,

    #[clap(long, help = COAX_LENGTH_HELP.as_str(), help_heading = "RECEIVER")]
    pub(super) coax_length: Option<f64>,

    #[clap(long, help = ANTENNA_NOISE_TEMP_HELP.as_str(), help_heading = "RECEIVER")]
    pub(super) antenna_noise_temp: Option<f64>,

    #[clap(long, help = SLANT_RANGE_HELP.as_str(), help_heading = "GEOMETRY")]
    pub(super) slant_range: Option<f64>,

    /// The receive station longitude [degrees, east positive].
    #[clap(long, help_heading = "GEOMETRY")]
    pub(super) rx_long: Option<f64>,

    /// The receive station latitude [degrees, north positive].
    #[clap(long, help_heading = "GEOMETRY")]
    pub(super) rx_lat: Option<f64>,

    /// The receive station height above the reference ellipsoid [m]. Default:
    /// 0
    #[clap(long, help_heading = "GEOMETRY")]
    pub(super) rx_height: Option<f64>,

    /// The satellite longitude [degrees, east positive].
    #[clap(long, help_heading = "GEOMETRY")]
    pub(super) sat_long: Option<f64>,

    /// The satellite latitude [degrees, north positive]. Default: 0
    /// (geostationary arc)
    #[clap(long, help_heading = "GEOMETRY")]
    pub(super) sat_lat: Option<f64>,

    #[clap(long, help = SAT_ALT_HELP.as_str(), help_heading = "GEOMETRY")]
    pub(super) sat_alt: Option<f64>,

    #[clap(long, help = REF_ELLIPSOID_HELP.as_str(), help_heading = "GEOMETRY")]
    pub(super) ref_ellipsoid: Option<String>,

    #[clap(long, help = ATMOSPHERIC_LOSS_HELP.as_str(), help_heading = "LOSSES")]
    pub(super) atmospheric_loss: Option<f64>,

    #[clap(long, help = MISPOINTING_LOSS_HELP.as_str(), help_heading = "LOSSES")]
    pub(super) mispointing_loss: Option<f64>,

    #[clap(long, help = LNA_FEED_LOSS_HELP.as_str(), help_heading = "LOSSES")]
    pub(super) lna_feed_loss: Option<f64>,

    #[clap(long, help = MIN_CNR_HELP.as_str(), help_heading = "LINK QUALITY")]
    pub(super) min_cnr: Option<f64>,

    #[clap(long, help = IMPL_MARGIN_HELP.as_str(), help_heading = "LINK QUALITY")]
    pub(super) impl_margin: Option<f64>,
}

impl LinkArgs {
    /// Merge two sets of link arguments, preferring `self` when a value is
    /// present in both.
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            freq: self.freq.or(other.freq),
            bw: self.bw.or(other.bw),
            polarization: self.polarization.or(other.polarization),
            eirp: self.eirp.or(other.eirp),
            obo: self.obo.or(other.obo),
            tx_dish_size: self.tx_dish_size.or(other.tx_dish_size),
            tx_power: self.tx_power.or(other.tx_power),
            tx_dish_efficiency: self.tx_dish_efficiency.or(other.tx_dish_efficiency),
            rx_dish_gain: self.rx_dish_gain.or(other.rx_dish_gain),
            rx_dish_size: self.rx_dish_size.or(other.rx_dish_size),
            rx_dish_efficiency: self.rx_dish_efficiency.or(other.rx_dish_efficiency),
            lnb_noise_fig: self.lnb_noise_fig.or(other.lnb_noise_fig),
            lnb_gain: self.lnb_gain.or(other.lnb_gain),
            rx_noise_fig: self.rx_noise_fig.or(other.rx_noise_fig),
            coax_length: self.coax_length.or(other.coax_length),
            antenna_noise_temp: self.antenna_noise_temp.or(other.antenna_noise_temp),
            slant_range: self.slant_range.or(other.slant_range),
            rx_long: self.rx_long.or(other.rx_long),
            rx_lat: self.rx_lat.or(other.rx_lat),
            rx_height: self.rx_height.or(other.rx_height),
            sat_long: self.sat_long.or(other.sat_long),
            sat_lat: self.sat_lat.or(other.sat_lat),
            sat_alt: self.sat_alt.or(other.sat_alt),
            ref_ellipsoid: self.ref_ellipsoid.or(other.ref_ellipsoid),
            atmospheric_loss: self.atmospheric_loss.or(other.atmospheric_loss),
            mispointing_loss: self.mispointing_loss.or(other.mispointing_loss),
            lna_feed_loss: self.lna_feed_loss.or(other.lna_feed_loss),
            min_cnr: self.min_cnr.or(other.min_cnr),
            impl_margin: self.impl_margin.or(other.impl_margin),
        }
    }

    /// Turn loose arguments into validated link parameters, applying defaults
    /// and the precedence rules. Precedence collisions are pushed onto the
    /// warning printer; the caller is expected to `display_warnings`.
    pub(super) fn parse(self) -> Result<LinkParameters, SatlinkError> {
        let LinkArgs {
            freq,
            bw,
            polarization,
            eirp,
            obo,
            tx_dish_size,
            tx_power,
            tx_dish_efficiency,
            rx_dish_gain,
            rx_dish_size,
            rx_dish_efficiency,
            lnb_noise_fig,
            lnb_gain,
            rx_noise_fig,
            coax_length,
            antenna_noise_temp,
            slant_range,
            rx_long,
            rx_lat,
            rx_height,
            sat_long,
            sat_lat,
            sat_alt,
            ref_ellipsoid,
            atmospheric_loss,
            mispointing_loss,
            lna_feed_loss,
            min_cnr,
            impl_margin,
        } = self;

        let transmit = match (eirp, tx_dish_size, tx_power) {
            (Some(eirp_dbw), None, None) => TransmitSpec::Eirp { eirp_dbw },
            (Some(eirp_dbw), ..) => {
                "Both an EIRP and transmit dish parameters were specified; using the EIRP".warn();
                TransmitSpec::Eirp { eirp_dbw }
            }
            (None, Some(size_m), Some(power_w)) => TransmitSpec::Dish {
                size_m,
                power_w,
                efficiency: tx_dish_efficiency.unwrap_or(DEFAULT_TX_DISH_EFFICIENCY),
            },
            (None, None, None) => TransmitSpec::Eirp {
                eirp_dbw: DEFAULT_EIRP_DBW,
            },
            (None, ..) => {
                "An incomplete transmit dish was specified (both a size and a power are needed); using the default EIRP".warn();
                TransmitSpec::Eirp {
                    eirp_dbw: DEFAULT_EIRP_DBW,
                }
            }
        };

        let receive = match (rx_dish_gain, rx_dish_size) {
            (Some(gain_dbi), Some(_)) => {
                "Both a receive dish gain and a receive dish size were specified; using the gain"
                    .warn();
                ReceiveSpec::DishGain { gain_dbi }
            }
            (Some(gain_dbi), None) => ReceiveSpec::DishGain { gain_dbi },
            (None, size) => ReceiveSpec::DishSize {
                size_m: size.unwrap_or(DEFAULT_RX_DISH_SIZE_M),
                efficiency: rx_dish_efficiency.unwrap_or(DEFAULT_RX_DISH_EFFICIENCY),
            },
        };

        let geometry = match (rx_long, rx_lat, sat_long) {
            (Some(rx_longitude_deg), Some(rx_latitude_deg), Some(sat_longitude_deg)) => {
                if slant_range.is_some() {
                    "Both positions and a slant range were specified; using the positions".warn();
                }
                let ellipsoid = match ref_ellipsoid.as_deref() {
                    Some(e) => ReferenceEllipsoid::from_str(e)
                        .map_err(|_| ValidationError::UnknownEllipsoid(e.to_string()))?,
                    None => ReferenceEllipsoid::default(),
                };
                GeometrySpec::Positions(PositionGeometry {
                    rx_longitude_deg,
                    rx_latitude_deg,
                    rx_height_m: rx_height.unwrap_or(0.0),
                    sat_longitude_deg,
                    sat_latitude_deg: sat_lat.unwrap_or(0.0),
                    sat_altitude_km: sat_alt.unwrap_or(GEOSYNC_ALTITUDE_KM),
                    ellipsoid,
                })
            }
            (None, None, None) => GeometrySpec::SlantRange {
                range_km: slant_range.unwrap_or(DEFAULT_SLANT_RANGE_KM),
            },
            _ => {
                "An incomplete position set was specified (receiver longitude and latitude and satellite longitude are all needed); using the slant range".warn();
                GeometrySpec::SlantRange {
                    range_km: slant_range.unwrap_or(DEFAULT_SLANT_RANGE_KM),
                }
            }
        };

        let polarization = match polarization.as_deref() {
            Some(p) => Polarization::from_str(p)
                .map_err(|_| ValidationError::UnknownPolarization(p.to_string()))?,
            None => Polarization::default(),
        };

        let params = LinkParameters {
            frequency_hz: freq.unwrap_or(DEFAULT_FREQ_HZ),
            bandwidth_hz: bw.unwrap_or(DEFAULT_BANDWIDTH_HZ),
            transmit,
            output_backoff_db: obo.unwrap_or(DEFAULT_OUTPUT_BACKOFF_DB),
            receive,
            lnb_noise_figure_db: lnb_noise_fig.unwrap_or(DEFAULT_LNB_NOISE_FIGURE_DB),
            lnb_gain_db: lnb_gain.unwrap_or(DEFAULT_LNB_GAIN_DB),
            rx_noise_figure_db: rx_noise_fig.unwrap_or(DEFAULT_RX_NOISE_FIGURE_DB),
            coax_length_ft: coax_length.unwrap_or(DEFAULT_COAX_LENGTH_FT),
            geometry,
            antenna_noise_temp_k: antenna_noise_temp,
            atmospheric_loss_db: atmospheric_loss.unwrap_or(DEFAULT_ATMOSPHERIC_LOSS_DB),
            mispointing_loss_db: mispointing_loss.unwrap_or(DEFAULT_MISPOINTING_LOSS_DB),
            lna_feed_loss_db: lna_feed_loss.unwrap_or(DEFAULT_LNA_FEED_LOSS_DB),
            polarization,
            minimum_cnr_db: min_cnr.unwrap_or(DEFAULT_MINIMUM_CNR_DB),
            implementation_margin_db: impl_margin.unwrap_or(DEFAULT_IMPLEMENTATION_MARGIN_DB),
        };
        params.validate()?;
        Ok(params)
    }
}

/// Echo the parameters that analysis will run with.
pub(super) fn print_link_info(params: &LinkParameters) {
    let mut printer = InfoPrinter::new("Link info".into());
    printer.push_block(vec![
        format!(
            "Carrier: {} GHz in {} MHz, {} polarization",
            params.frequency_hz / 1e9,
            params.bandwidth_hz / 1e6,
            params.polarization
        )
        .into(),
        format!(
            "Needs {} dB C/N plus {} dB implementation margin",
            params.minimum_cnr_db, params.implementation_margin_db
        )
        .into(),
    ]);
    match params.transmit {
        TransmitSpec::Eirp { eirp_dbw } => {
            printer.push_line(format!("Transmit EIRP: {eirp_dbw} dBW").into())
        }
        TransmitSpec::Dish {
            size_m,
            power_w,
            efficiency,
        } => printer.push_line(
            format!("Transmit dish: {size_m} m at {}% efficiency, {power_w} W", efficiency * 100.0)
                .into(),
        ),
    }
    if params.output_backoff_db > 0.0 {
        printer.push_line(format!("Output backoff: {} dB", params.output_backoff_db).into());
    }
    match params.receive {
        ReceiveSpec::DishGain { gain_dbi } => {
            printer.push_line(format!("Receive gain: {gain_dbi} dBi (measured)").into())
        }
        ReceiveSpec::DishSize { size_m, efficiency } => printer.push_line(
            format!("Receive dish: {size_m} m at {}% efficiency", efficiency * 100.0).into(),
        ),
    }
    printer.push_block(vec![
        format!(
            "LNB: {} dB noise figure, {} dB gain",
            params.lnb_noise_figure_db, params.lnb_gain_db
        )
        .into(),
        format!(
            "{} ft of coax into a receiver with {} dB noise figure",
            params.coax_length_ft, params.rx_noise_figure_db
        )
        .into(),
    ]);
    match params.geometry {
        GeometrySpec::SlantRange { range_km } => {
            printer.push_line(format!("Slant range: {range_km} km").into())
        }
        GeometrySpec::Positions(p) => printer.push_block(vec![
            format!(
                "Receiver at ({}°, {}°, {} m) on {}",
                p.rx_longitude_deg, p.rx_latitude_deg, p.rx_height_m, p.ellipsoid
            )
            .into(),
            format!(
                "Satellite at ({}°, {}°), altitude {} km",
                p.sat_longitude_deg, p.sat_latitude_deg, p.sat_altitude_km
            )
            .into(),
        ]),
    }
    printer.push_line(
        format!(
            "Losses: {} dB atmospheric, {} dB mispointing, {} dB LNA feed",
            params.atmospheric_loss_db, params.mispointing_loss_db, params.lna_feed_loss_db
        )
        .into(),
    );
    printer.display();
}
