// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod analyze;
mod no_stderr;
mod request;
mod sweep;

use std::{process::Output, str::from_utf8};

use assert_cmd::{output::OutputError, Command};

fn satlink() -> Command {
    Command::cargo_bin("satlink").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

/// Log lines precede any JSON on stdout; the JSON runs from the first brace
/// to the end.
fn json_part(stdout: &str) -> &str {
    let start = stdout
        .find('{')
        .expect("no JSON object found in the command's stdout");
    stdout[start..].trim()
}
