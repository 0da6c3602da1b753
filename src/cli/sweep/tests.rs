// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use approx::assert_abs_diff_eq;
use indoc::indoc;

use super::*;

fn args_with_band(start: Option<f64>, stop: Option<f64>, step: Option<f64>) -> SweepArgs {
    SweepArgs {
        start_freq: start,
        stop_freq: stop,
        step,
        ..Default::default()
    }
}

#[test]
fn test_band_includes_start_and_stop() {
    let params = args_with_band(Some(10.7), Some(12.7), Some(0.25))
        .parse()
        .unwrap();
    assert_eq!(params.freqs_hz.len(), 9);
    assert_abs_diff_eq!(*params.freqs_hz.first(), 10.7e9, epsilon = 1.0);
    assert_abs_diff_eq!(*params.freqs_hz.last(), 12.7e9, epsilon = 1.0);
}

#[test]
fn test_band_with_exact_step_division() {
    let params = args_with_band(Some(10.0), Some(11.0), Some(0.1))
        .parse()
        .unwrap();
    assert_eq!(params.freqs_hz.len(), 11);
    assert_abs_diff_eq!(*params.freqs_hz.last(), 11.0e9, epsilon = 1.0);
}

#[test]
fn test_default_step_is_used() {
    let params = args_with_band(Some(12.0), Some(12.5), None).parse().unwrap();
    assert_eq!(params.freqs_hz.len(), 6);
    assert_abs_diff_eq!(params.freqs_hz[1], 12.1e9, epsilon = 1.0);
}

#[test]
fn test_degenerate_band_is_a_single_frequency() {
    let params = args_with_band(Some(12.2), Some(12.2), None).parse().unwrap();
    assert_eq!(params.freqs_hz.len(), 1);
    assert_abs_diff_eq!(*params.freqs_hz.first(), 12.2e9, epsilon = 1.0);
}

#[test]
fn test_missing_band_edges_are_rejected() {
    let err = args_with_band(None, Some(12.75), None).parse().unwrap_err();
    assert!(err.to_string().contains("No start frequency was specified"));

    let err = args_with_band(Some(10.7), None, None).parse().unwrap_err();
    assert!(err.to_string().contains("No stop frequency was specified"));
}

#[test]
fn test_backwards_band_is_rejected() {
    let err = args_with_band(Some(12.75), Some(10.7), None)
        .parse()
        .unwrap_err();
    assert!(err.to_string().contains("below the start frequency"));
}

#[test]
fn test_bad_steps_are_rejected() {
    let err = args_with_band(Some(10.7), Some(12.75), Some(0.0))
        .parse()
        .unwrap_err();
    assert!(err.to_string().contains("step must be positive"));

    let err = args_with_band(Some(10.7), Some(12.75), Some(-0.5))
        .parse()
        .unwrap_err();
    assert!(err.to_string().contains("step must be positive"));
}

#[test]
fn test_base_parameters_come_from_the_link_args() {
    let args = SweepArgs {
        link_args: LinkArgs {
            rx_dish_size: Some(1.2),
            ..Default::default()
        },
        start_freq: Some(10.7),
        stop_freq: Some(12.75),
        ..Default::default()
    };
    let params = args.parse().unwrap();
    match params.base.receive {
        crate::params::ReceiveSpec::DishSize { size_m, .. } => {
            assert_abs_diff_eq!(size_m, 1.2)
        }
        other => panic!("Unexpected receive spec: {other:?}"),
    }
}

#[test]
fn test_merge_prefers_cli_args() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    let contents = indoc! {r#"
        start_freq = 10.7
        stop_freq = 12.75
        json = true

        [link]
        rx_dish_size = 1.2
    "#};
    file.write_all(contents.as_bytes()).unwrap();

    let args = SweepArgs {
        args_file: Some(file.path().to_path_buf()),
        start_freq: Some(11.2),
        ..Default::default()
    };
    let merged = args.merge().unwrap();
    assert_eq!(merged.args_file, None);
    assert_eq!(merged.start_freq, Some(11.2));
    assert_eq!(merged.stop_freq, Some(12.75));
    assert_eq!(merged.link_args.rx_dish_size, Some(1.2));
    assert!(merged.json);
}
