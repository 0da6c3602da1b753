// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render a link-budget result as a human-readable report.


use crate::analysis::LinkBudgetResult;

const VERTICAL_AND_RIGHT: char = '├';
const UP_AND_RIGHT: char = '└';

/// Format the result as a multi-line report. Geometry-dependent quantities
/// that could not be computed render as "n/a"; the elevation and azimuth
/// lines appear only when positions were supplied.
pub fn format_report(result: &LinkBudgetResult) -> String {
    fn opt(value: Option<f64>, unit: &str) -> String {
        match value {
            Some(v) => format!("{v:.2} {unit}"),
            None => "n/a".to_string(),
        }
    }

    let mut rows: Vec<(&str, String)> = vec![
        ("EIRP", format!("{:.2} dBW", result.eirp_dbw)),
        ("Slant range", opt(result.slant_range_km, "km")),
    ];
    if let (Some(el), Some(az)) = (result.elevation_deg, result.azimuth_deg) {
        rows.push(("Elevation", format!("{el:.2}°")));
        rows.push(("Azimuth", format!("{az:.2}°")));
    }
    rows.extend([
        ("Path loss", opt(result.path_loss_db, "dB")),
        ("Rx gain", format!("{:.2} dBi", result.rx_gain_dbi)),
        (
            "System noise temp",
            format!("{:.2} K", result.system_noise_temperature_k),
        ),
        ("G/T", format!("{:.2} dB/K", result.g_over_t_db)),
        (
            "Carrier power",
            opt(result.received_carrier_power_dbw, "dBW"),
        ),
        ("Noise power", format!("{:.2} dBW", result.noise_power_dbw)),
        ("C/N", opt(result.carrier_to_noise_ratio_db, "dB")),
        ("Link margin", opt(result.link_margin_db, "dB")),
        ("Polarization", result.polarization.to_string()),
    ]);
    if let Some(reason) = result.reason.as_deref() {
        rows.push(("Fault", reason.to_string()));
    }

    let width = rows.iter().map(|(label, _)| label.len() + 1).max().unwrap_or(0);
    let mut out = String::from("Link budget\n");
    for (label, value) in rows {
        let label = format!("{label}:");
        out.push_str(&format!("{VERTICAL_AND_RIGHT} {label:<width$} {value}\n"));
    }
    let verdict = if result.link_closes {
        "closes"
    } else {
        "does not close"
    };
    out.push_str(&format!("{UP_AND_RIGHT} The link {verdict}\n"));
    out
}
