// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use approx::assert_abs_diff_eq;
use indoc::indoc;

use satlink::analysis::LinkBudgetResult;

use crate::{get_cmd_output, json_part, satlink};

#[test]
fn test_no_args_prints_help() {
    let cmd = satlink().ok();
    assert!(cmd.is_err(), "satlink succeeded without a subcommand");
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("USAGE"), "{stderr}");
}

#[test]
fn test_satlink_help_is_correct() {
    let mut stdouts = vec![];

    // First with --help
    let cmd = satlink().arg("--help").ok();
    assert!(cmd.is_ok());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty());
    stdouts.push(stdout);

    // Then with -h
    let cmd = satlink().arg("-h").ok();
    assert!(cmd.is_ok());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty());
    stdouts.push(stdout);

    for stdout in stdouts {
        assert!(stdout.contains("analyze"));
        assert!(stdout.contains("Evaluate a link budget and report whether the link closes."));
        assert!(stdout.contains("sweep"));
        assert!(stdout.contains("request"));
    }
}

#[test]
fn test_analyze_help_is_correct() {
    let cmd = satlink().args(["analyze", "--help"]).ok();
    assert!(cmd.is_ok());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty());

    assert!(stdout.contains("--freq"), "{stdout}");
    assert!(stdout.contains("--rx-dish-size"), "{stdout}");
    assert!(stdout.contains("--slant-range"), "{stdout}");
    assert!(stdout.contains("RECEIVER"), "{stdout}");
    assert!(stdout.contains("GEOMETRY"), "{stdout}");
}

#[test]
fn test_default_link_closes() {
    let cmd = satlink().arg("analyze").ok();
    assert!(cmd.is_ok(), "analyze failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Link info"), "{stdout}");
    assert!(stdout.contains("The link closes"), "{stdout}");
}

#[test]
fn test_json_results_parse() {
    let cmd = satlink().args(["analyze", "--json"]).ok();
    assert!(cmd.is_ok(), "analyze failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);

    let result: LinkBudgetResult = serde_json::from_str(json_part(&stdout)).unwrap();
    assert_abs_diff_eq!(result.eirp_dbw, 50.0);
    assert_abs_diff_eq!(
        result.link_margin_db.unwrap(),
        8.616977611157793,
        epsilon = 1e-9
    );
    assert!(result.link_closes);
}

#[test]
fn test_json_is_the_last_thing_on_stdout() {
    // Anything after the JSON breaks consumers that parse to the end of the
    // stream, so log lines may only precede it.
    let cmd = satlink().args(["analyze", "--json"]).ok();
    assert!(cmd.is_ok(), "analyze failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.trim_end().ends_with('}'), "{stdout}");

    let cmd = satlink().arg("request").write_stdin("{}").ok();
    assert!(cmd.is_ok(), "request failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.trim_end().ends_with('}'), "{stdout}");
}

#[test]
fn test_bad_parameters_exit_nonzero() {
    let cmd = satlink().args(["analyze", "--freq=-1.0"]).ok();
    assert!(cmd.is_err(), "analyze succeeded with a negative frequency");
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("frequency must be positive"), "{stderr}");
}

#[test]
fn test_below_horizon_link_does_not_close() {
    let cmd = satlink()
        .args([
            "analyze",
            "--rx-long=-82.0",
            "--rx-lat=28.5",
            "--sat-long=98.0",
        ])
        .ok();
    assert!(cmd.is_ok(), "analyze failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("below the horizon"), "{stdout}");
    assert!(stdout.contains("The link does not close"), "{stdout}");
}

#[test]
fn test_arg_file_is_merged_with_cli_args() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    let contents = indoc! {r#"
        [link]
        freq = 11.7e9
        eirp = 40.0
    "#};
    file.write_all(contents.as_bytes()).unwrap();

    let cmd = satlink()
        .arg("analyze")
        .arg(file.path())
        .args(["--eirp", "45.0", "--json"])
        .ok();
    assert!(cmd.is_ok(), "analyze failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    let result: LinkBudgetResult = serde_json::from_str(json_part(&stdout)).unwrap();
    // The CLI EIRP wins; the file frequency fills the gap.
    assert_abs_diff_eq!(result.eirp_dbw, 45.0);
}

#[test]
fn test_save_toml_reproduces_the_run() {
    let tmp_dir = tempfile::TempDir::new().unwrap();
    let toml_path = tmp_dir.path().join("args.toml");

    let cmd = satlink()
        .args(["analyze", "--freq", "11.2e9", "--json"])
        .arg("--save-toml")
        .arg(&toml_path)
        .ok();
    assert!(cmd.is_ok(), "analyze failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    let first: LinkBudgetResult = serde_json::from_str(json_part(&stdout)).unwrap();

    let saved = std::fs::read_to_string(&toml_path).unwrap();
    assert!(saved.contains("[link]"), "{saved}");
    assert!(saved.contains("freq = 11200000000.0"), "{saved}");

    let cmd = satlink().arg("analyze").arg(&toml_path).ok();
    assert!(
        cmd.is_ok(),
        "analyze failed on its own saved arguments: {}",
        cmd.err().unwrap()
    );
    let (stdout, _) = get_cmd_output(cmd);
    // The saved file includes `json = true`.
    let second: LinkBudgetResult = serde_json::from_str(json_part(&stdout)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dry_run_stops_before_analysis() {
    let cmd = satlink().args(["analyze", "--dry-run"]).ok();
    assert!(cmd.is_ok(), "analyze failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Link info"), "{stdout}");
    assert!(!stdout.contains("The link closes"), "{stdout}");
}
