// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Evaluate a link budget at every frequency across a band.

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::Parser;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vec1::Vec1;

use super::common::{display_warnings, InfoPrinter, LinkArgs, Warn, ARG_FILE_HELP};
use super::SatlinkError;
use crate::analysis::{analyze, LinkBudgetResult};
use crate::params::LinkParameters;
use crate::units::ghz_to_hz;
use crate::PROGRESS_BARS;

pub(super) const DEFAULT_STEP_GHZ: f64 = 0.1;

lazy_static::lazy_static! {
    static ref STEP_HELP: String =
        format!("The frequency step between evaluations [GHz]. Default: {DEFAULT_STEP_GHZ}");
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct SweepArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "link")]
    #[serde(default)]
    link_args: LinkArgs,

    /// The first frequency to evaluate [GHz].
    #[clap(long, help_heading = "SWEEP")]
    start_freq: Option<f64>,

    /// The last frequency to evaluate [GHz].
    #[clap(long, help_heading = "SWEEP")]
    stop_freq: Option<f64>,

    #[clap(long, help = STEP_HELP.as_str(), help_heading = "SWEEP")]
    step: Option<f64>,

    /// Print one JSON object per frequency instead of a table.
    #[clap(long, help_heading = "OUTPUT")]
    #[serde(default)]
    json: bool,
}

#[derive(Debug)]
struct SweepParams {
    base: LinkParameters,
    freqs_hz: Vec1<f64>,
    json: bool,
}

#[derive(Serialize)]
struct SweepPoint<'a> {
    frequency_hz: f64,
    results: &'a LinkBudgetResult,
}

impl SweepArgs {
    /// Merge the command-line arguments with any arguments file, preferring
    /// the command line.
    pub(super) fn merge(self) -> Result<SweepArgs, SatlinkError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file.as_ref() {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let SweepArgs {
                args_file: _,
                link_args,
                start_freq,
                stop_freq,
                step,
                json,
            } = unpack_arg_file!(arg_file);

            Ok(SweepArgs {
                args_file: None,
                link_args: cli_args.link_args.merge(link_args),
                start_freq: cli_args.start_freq.or(start_freq),
                stop_freq: cli_args.stop_freq.or(stop_freq),
                step: cli_args.step.or(step),
                json: cli_args.json || json,
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<SweepParams, SatlinkError> {
        let Self {
            args_file: _,
            link_args,
            start_freq,
            stop_freq,
            step,
            json,
        } = self;

        if link_args.freq.is_some() {
            "The swept band is set by --start-freq and --stop-freq; ignoring the supplied carrier frequency".warn();
        }
        let base = link_args.parse()?;

        let start = start_freq.ok_or(SweepArgsError::NoStartFreq)?;
        let stop = stop_freq.ok_or(SweepArgsError::NoStopFreq)?;
        let step = step.unwrap_or(DEFAULT_STEP_GHZ);
        if start <= 0.0 {
            return Err(SweepArgsError::NonPositiveStart { start }.into());
        }
        if stop < start {
            return Err(SweepArgsError::StopBelowStart { start, stop }.into());
        }
        if step <= 0.0 {
            return Err(SweepArgsError::NonPositiveStep { step }.into());
        }

        // The tolerance stops the last frequency falling out of the band from
        // float rounding.
        let num_freqs = ((stop - start) / step + 1e-9).floor() as usize + 1;
        let freqs_hz = Vec1::try_from_vec(
            (0..num_freqs)
                .map(|i| ghz_to_hz(start + i as f64 * step))
                .collect(),
        )
        .expect("there is always at least the start frequency");

        if !json {
            let mut printer = InfoPrinter::new("Sweep info".into());
            printer.push_line(
                format!(
                    "Band: {start} to {stop} GHz in {step} GHz steps ({num_freqs} frequencies)"
                )
                .into(),
            );
            printer.display();
        }

        Ok(SweepParams {
            base,
            freqs_hz,
            json,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), SatlinkError> {
        let SweepParams {
            base,
            freqs_hz,
            json,
        } = self.parse()?;
        display_warnings();

        if dry_run {
            debug!("Dry run, so not performing the sweep.");
            return Ok(());
        }

        let progress = ProgressBar::with_draw_target(
            Some(freqs_hz.len() as u64),
            if PROGRESS_BARS.load() {
                ProgressDrawTarget::stdout()
            } else {
                ProgressDrawTarget::hidden()
            },
        )
        .with_style(
            ProgressStyle::default_bar()
                .template("{msg:10}: [{wide_bar:.blue}] {pos:4}/{len:4} frequencies ({elapsed_precise}<{eta_precise})")
                .unwrap()
                .progress_chars("=> "),
        )
        .with_position(0)
        .with_message("Sweeping");

        let freqs: &[f64] = &freqs_hz;
        let results = freqs
            .par_iter()
            .progress_with(progress)
            .map(|&frequency_hz| {
                let params = LinkParameters {
                    frequency_hz,
                    ..base.clone()
                };
                analyze(&params).map(|results| (frequency_hz, results))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if json {
            for (frequency_hz, results) in &results {
                let point = SweepPoint {
                    frequency_hz: *frequency_hz,
                    results,
                };
                println!("{}", serde_json::to_string(&point)?);
            }
        } else {
            print_table(&results);
        }

        Ok(())
    }
}

fn print_table(results: &[(f64, LinkBudgetResult)]) {
    fn db(value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{v:.2}"),
            None => "n/a".to_string(),
        }
    }

    println!(
        "{:>9}  {:>9}  {:>8}  {:>8}  Verdict",
        "Frequency", "Path loss", "C/N", "Margin"
    );
    for (frequency_hz, result) in results {
        println!(
            "{:>5.2} GHz  {:>6} dB  {:>5} dB  {:>5} dB  {}",
            frequency_hz / 1e9,
            db(result.path_loss_db),
            db(result.carrier_to_noise_ratio_db),
            db(result.link_margin_db),
            if result.link_closes { "closes" } else { "fails" }
        );
    }
}

#[derive(Error, Debug)]
pub(super) enum SweepArgsError {
    #[error("No start frequency was specified (--start-freq)")]
    NoStartFreq,

    #[error("No stop frequency was specified (--stop-freq)")]
    NoStopFreq,

    #[error("The sweep start frequency must be positive, but was {start} GHz")]
    NonPositiveStart { start: f64 },

    #[error("The stop frequency ({stop} GHz) is below the start frequency ({start} GHz)")]
    StopBelowStart { start: f64, stop: f64 },

    #[error("The frequency step must be positive, but was {step} GHz")]
    NonPositiveStep { step: f64 },
}
