// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reference ellipsoids for geodetic coordinates.

use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The supported Earth reference ellipsoids. WGS84 is what GPS coordinates
/// are quoted against and is the default everywhere in this crate; GRS80
/// differs from it only in the twelfth significant figure of the flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ReferenceEllipsoid {
    #[strum(serialize = "wgs84")]
    Wgs84,

    #[strum(serialize = "grs80")]
    Grs80,
}

impl Default for ReferenceEllipsoid {
    fn default() -> Self {
        ReferenceEllipsoid::Wgs84
    }
}

impl ReferenceEllipsoid {
    /// The equatorial radius (semi-major axis) \[metres\].
    pub fn semi_major_axis(self) -> f64 {
        match self {
            // Both ellipsoids share the same semi-major axis.
            ReferenceEllipsoid::Wgs84 | ReferenceEllipsoid::Grs80 => 6378137.0,
        }
    }

    /// The (first) flattening, dimensionless.
    pub fn flattening(self) -> f64 {
        match self {
            ReferenceEllipsoid::Wgs84 => 1.0 / 298.257223563,
            ReferenceEllipsoid::Grs80 => 1.0 / 298.257222101,
        }
    }

    /// The square of the first eccentricity, e² = f(2 − f).
    pub fn eccentricity_squared(self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }
}

lazy_static::lazy_static! {
    pub static ref REF_ELLIPSOIDS_COMMA_SEPARATED: String = ReferenceEllipsoid::iter().join(", ");
}
