// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

fn results(response: RequestResponse) -> LinkBudgetResult {
    assert_eq!(response.message, "Link budget calculation successful");
    assert_eq!(response.error, None);
    response.results.expect("success responses carry results")
}

#[test]
fn test_empty_request_is_the_demo_downlink() {
    let results = results(handle_request("{}"));
    assert_abs_diff_eq!(results.eirp_dbw, 50.0);
    assert_eq!(results.slant_range_km, Some(38000.0));
    assert_eq!(results.elevation_deg, None);
    assert_abs_diff_eq!(
        results.carrier_to_noise_ratio_db.unwrap(),
        17.616977611157793,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        results.link_margin_db.unwrap(),
        8.616977611157793,
        epsilon = 1e-9
    );
    assert!(results.link_closes);
}

#[test]
fn test_missing_null_and_empty_parameters_agree() {
    let bare = handle_request("{}");
    assert_eq!(handle_request(r#"{"parameters": null}"#), bare);
    assert_eq!(handle_request(r#"{"parameters": {}}"#), bare);
}

#[test]
fn test_numbers_as_strings_are_coerced() {
    let quoted = handle_request(
        r#"{"parameters": {"freq": "12e9", "bw": "36e6", "eirp": " 50.0 "}}"#,
    );
    assert_eq!(quoted, handle_request("{}"));
}

#[test]
fn test_measured_gain_beats_dish_size() {
    let results = results(handle_request(
        r#"{"parameters": {"rx_dish_gain": 33, "rx_dish_size": 3.0}}"#,
    ));
    assert_abs_diff_eq!(results.rx_gain_dbi, 33.0);
}

#[test]
fn test_positions_beat_slant_range() {
    let results = results(handle_request(
        r#"{"parameters": {
            "rx_long": -82.0, "rx_lat": 28.5, "sat_long": -101.0,
            "slant_range": 12345.0
        }}"#,
    ));
    assert_abs_diff_eq!(
        results.slant_range_km.unwrap(),
        37029.26416267641,
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(
        results.elevation_deg.unwrap(),
        50.718989555961684,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        results.azimuth_deg.unwrap(),
        215.84061947601745,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        results.link_margin_db.unwrap(),
        8.841747904862402,
        epsilon = 1e-9
    );
}

#[test]
fn test_incomplete_positions_fall_back_to_slant_range() {
    // sat_long is missing, so the position set is ignored.
    let results = results(handle_request(
        r#"{"parameters": {"rx_long": -82.0, "rx_lat": 28.5, "slant_range": 40000.0}}"#,
    ));
    assert_eq!(results.slant_range_km, Some(40000.0));
    assert_eq!(results.elevation_deg, None);
}

#[test]
fn test_transmit_dish_path() {
    let results = results(handle_request(
        r#"{"parameters": {"freq": 14e9, "tx_dish_size": 2.4, "tx_power": 100.0}}"#,
    ));
    assert_abs_diff_eq!(results.eirp_dbw, 68.41524921318302, epsilon = 1e-9);
}

#[test]
fn test_uppercase_ellipsoid_name() {
    let results = results(handle_request(
        r#"{"parameters": {
            "rx_long": -82.0, "rx_lat": 28.5, "sat_long": -101.0,
            "ref_ellipsoid": "WGS84"
        }}"#,
    ));
    assert!(results.elevation_deg.is_some());
}

#[test]
fn test_circular_polarization() {
    let results = results(handle_request(r#"{"parameters": {"polarization": "circular"}}"#));
    assert_eq!(results.polarization, Polarization::Circular);
}

#[test]
fn test_below_horizon_still_succeeds() {
    // Tampa looking for a satellite over the Indian Ocean.
    let results = results(handle_request(
        r#"{"parameters": {"rx_long": -82.0, "rx_lat": 28.5, "sat_long": 98.0}}"#,
    ));
    assert!(!results.link_closes);
    assert!(results.reason.as_deref().unwrap().contains("below the horizon"));
}

#[test]
fn test_malformed_json_is_an_error_response() {
    let response = handle_request("{not json");
    assert_eq!(response.error, Some(true));
    assert_eq!(response.results, None);
    assert!(response.message.starts_with("Error calculating link budget: "));
}

#[test]
fn test_non_numeric_value_is_an_error_response() {
    let response = handle_request(r#"{"parameters": {"freq": true}}"#);
    assert_eq!(response.error, Some(true));
    assert!(response.message.contains("'freq' must be a number"));

    let response = handle_request(r#"{"parameters": {"bw": "wide"}}"#);
    assert_eq!(response.error, Some(true));
    assert!(response.message.contains("'bw' must be a number"));
}

#[test]
fn test_non_object_parameters_is_an_error_response() {
    let response = handle_request(r#"{"parameters": 5}"#);
    assert_eq!(response.error, Some(true));
    assert!(response.message.contains("must be a JSON object"));
}

#[test]
fn test_validation_failure_is_an_error_response() {
    let response = handle_request(r#"{"parameters": {"freq": -1.0}}"#);
    assert_eq!(response.error, Some(true));
    assert!(response.message.contains("frequency must be positive"));
}

#[test]
fn test_unknown_names_are_ignored() {
    let response = handle_request(r#"{"parameters": {"modulation": "8PSK"}}"#);
    assert_eq!(response.error, None);
}
