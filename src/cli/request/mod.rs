// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Answer a JSON link-budget request with a JSON response.

use std::path::PathBuf;

use clap::Parser;
use log::debug;

use super::SatlinkError;
use crate::request::handle_request;

#[derive(Parser, Debug, Clone)]
pub(super) struct RequestArgs {
    /// Path to the JSON request document. If this is unspecified or -, the
    /// request is read from stdin.
    #[clap(name = "REQUEST_FILE", parse(from_os_str))]
    file: Option<PathBuf>,
}

impl RequestArgs {
    pub(super) fn run(self) -> Result<(), SatlinkError> {
        let request = match self.file.as_deref() {
            None => read_stdin()?,
            Some(p) if p == std::path::Path::new("-") => read_stdin()?,
            Some(p) => {
                debug!("Reading the request from {p:?}");
                std::fs::read_to_string(p)?
            }
        };

        // Problems with the request itself are reported inside the response
        // document, not as process failures.
        let response = handle_request(&request);
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}

fn read_stdin() -> Result<String, std::io::Error> {
    debug!("Reading the request from stdin");
    std::io::read_to_string(std::io::stdin())
}
