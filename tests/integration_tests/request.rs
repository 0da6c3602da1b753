// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use crate::{get_cmd_output, json_part, satlink};

#[test]
fn test_request_from_stdin() {
    let cmd = satlink().arg("request").write_stdin("{}").ok();
    assert!(cmd.is_ok(), "request failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);

    let response: serde_json::Value = serde_json::from_str(json_part(&stdout)).unwrap();
    assert_eq!(response["message"], "Link budget calculation successful");
    assert!(response["results"]["link_closes"].as_bool().unwrap());
}

#[test]
fn test_request_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"parameters": {"freq": "11.7e9", "eirp": 45}}"#)
        .unwrap();

    let cmd = satlink().arg("request").arg(file.path()).ok();
    assert!(cmd.is_ok(), "request failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);

    let response: serde_json::Value = serde_json::from_str(json_part(&stdout)).unwrap();
    assert_eq!(response["message"], "Link budget calculation successful");
    assert_eq!(response["results"]["eirp_dbw"], 45.0);
}

#[test]
fn test_dash_reads_stdin() {
    let cmd = satlink().args(["request", "-"]).write_stdin("{}").ok();
    assert!(cmd.is_ok(), "request failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Link budget calculation successful"),
        "{stdout}"
    );
}

#[test]
fn test_bad_requests_are_answered_not_fatal() {
    let cmd = satlink().arg("request").write_stdin("{ nope").ok();
    assert!(
        cmd.is_ok(),
        "request exited non-zero on a malformed request: {}",
        cmd.err().unwrap()
    );
    let (stdout, _) = get_cmd_output(cmd);

    let response: serde_json::Value = serde_json::from_str(json_part(&stdout)).unwrap();
    assert_eq!(response["error"], true);
    assert!(
        response["message"]
            .as_str()
            .unwrap()
            .starts_with("Error calculating link budget:"),
        "{}",
        response["message"]
    );
}
