// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{get_cmd_output, satlink};

#[test]
fn test_sweep_prints_a_table() {
    let cmd = satlink()
        .args([
            "sweep",
            "--start-freq",
            "10.7",
            "--stop-freq",
            "12.7",
            "--step",
            "0.5",
            "--no-progress-bars",
        ])
        .ok();
    assert!(cmd.is_ok(), "sweep failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);

    assert!(stdout.contains("(5 frequencies)"), "{stdout}");
    assert!(stdout.contains("Frequency"), "{stdout}");
    assert!(stdout.contains("10.70 GHz"), "{stdout}");
    assert!(stdout.contains("12.70 GHz"), "{stdout}");
    assert!(stdout.contains("closes"), "{stdout}");
}

#[test]
fn test_sweep_json_is_one_object_per_frequency() {
    let cmd = satlink()
        .args([
            "sweep",
            "--start-freq",
            "10.7",
            "--stop-freq",
            "12.7",
            "--step",
            "0.5",
            "--no-progress-bars",
            "--json",
        ])
        .ok();
    assert!(cmd.is_ok(), "sweep failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);

    let points: Vec<serde_json::Value> = stdout
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(points.len(), 5);
    assert_eq!(points[0]["frequency_hz"], 10.7e9);
    assert!(points[4]["results"]["link_closes"].is_boolean());
}

#[test]
fn test_sweep_requires_a_band() {
    let cmd = satlink().arg("sweep").ok();
    assert!(cmd.is_err(), "sweep succeeded without a band");
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No start frequency"), "{stderr}");
}

#[test]
fn test_sweep_margin_falls_with_frequency() {
    let cmd = satlink()
        .args([
            "sweep",
            "--start-freq",
            "10.7",
            "--stop-freq",
            "12.7",
            "--step",
            "2.0",
            "--rx-dish-gain",
            "40.0",
            "--no-progress-bars",
            "--json",
        ])
        .ok();
    assert!(cmd.is_ok(), "sweep failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);

    let margins: Vec<f64> = stdout
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| {
            let point: serde_json::Value = serde_json::from_str(l).unwrap();
            point["results"]["link_margin_db"].as_f64().unwrap()
        })
        .collect();
    assert_eq!(margins.len(), 2);
    // A fixed-gain receive antenna cannot recoup the path loss growing with
    // frequency, so the margin must fall across the band.
    assert!(margins[1] < margins[0], "{margins:?}");
}
