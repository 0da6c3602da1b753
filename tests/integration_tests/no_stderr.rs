// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use crate::{get_cmd_output, satlink};

#[test]
fn test_analyze_no_stderr() {
    let cmd = satlink().arg("analyze").ok();
    assert!(
        cmd.is_ok(),
        "analyze failed with default arguments: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_sweep_no_stderr() {
    let cmd = satlink()
        .args([
            "sweep",
            "--start-freq",
            "10.7",
            "--stop-freq",
            "11.7",
            "--no-progress-bars",
        ])
        .ok();
    assert!(
        cmd.is_ok(),
        "sweep failed on a simple band: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_request_no_stderr() {
    let cmd = satlink().arg("request").write_stdin("{}").ok();
    assert!(
        cmd.is_ok(),
        "request failed on an empty request: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}
