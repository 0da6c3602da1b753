// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Link-budget analysis for Earth-space satellite communication links.
 */

pub mod analysis;
pub mod antenna;
pub mod chain;
mod cli;
pub mod constants;
pub mod noise;
pub mod params;
pub mod pointing;
pub mod propagation;
pub mod report;
pub mod request;
pub mod units;

// Re-exports.
pub use cli::{Satlink, SatlinkError};

use crossbeam_utils::atomic::AtomicCell;

/// Whether progress bars should be drawn.
static PROGRESS_BARS: AtomicCell<bool> = AtomicCell::new(false);
