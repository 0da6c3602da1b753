// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Evaluate one link budget and report it.


use std::path::PathBuf;

use clap::Parser;
use log::debug;
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, print_link_info, LinkArgs, ARG_FILE_HELP};
use super::SatlinkError;
use crate::analysis::analyze;
use crate::report::format_report;

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct AnalyzeArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "link")]
    #[serde(default)]
    link_args: LinkArgs,

    /// Print the result as JSON instead of a formatted report.
    #[clap(long, help_heading = "OUTPUT")]
    #[serde(default)]
    json: bool,
}

impl AnalyzeArgs {
    /// Merge the command-line arguments with any arguments file, preferring
    /// the command line.
    pub(super) fn merge(self) -> Result<AnalyzeArgs, SatlinkError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file.as_ref() {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let AnalyzeArgs {
                args_file: _,
                link_args,
                json,
            } = unpack_arg_file!(arg_file);

            Ok(AnalyzeArgs {
                args_file: None,
                link_args: cli_args.link_args.merge(link_args),
                json: cli_args.json || json,
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), SatlinkError> {
        let Self {
            args_file: _,
            link_args,
            json,
        } = self;

        let params = link_args.parse()?;
        if !json {
            print_link_info(&params);
        }
        display_warnings();

        if dry_run {
            debug!("Dry run, so not performing analysis.");
            return Ok(());
        }

        let result = analyze(&params)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print!("{}", format_report(&result));
        }

        Ok(())
    }
}
