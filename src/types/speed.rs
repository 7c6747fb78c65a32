// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Speed type for vehicles.
//!
//! Speeds are unsigned: braking saturates at a standstill rather than
//! going negative.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Vehicle speed in km/h.
///
/// # Examples
///
/// ```
/// use devsim_lib::types::Speed;
///
/// let speed = Speed::ZERO.increased(60).decreased(80);
/// assert_eq!(speed, Speed::ZERO);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Speed(u16);

impl Speed {
    /// Standstill.
    pub const ZERO: Self = Self(0);

    /// Creates a new speed.
    #[must_use]
    pub const fn new(kmh: u16) -> Self {
        Self(kmh)
    }

    /// Returns the speed in km/h.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the speed after accelerating by `amount` km/h.
    #[must_use]
    pub const fn increased(self, amount: u16) -> Self {
        Self(self.0.saturating_add(amount))
    }

    /// Returns the speed after braking by `amount` km/h, saturating at 0.
    #[must_use]
    pub const fn decreased(self, amount: u16) -> Self {
        Self(self.0.saturating_sub(amount))
    }

    /// Returns `true` if the vehicle is not moving.
    #[must_use]
    pub const fn is_stationary(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/h", self.0)
    }
}

impl From<u16> for Speed {
    fn from(kmh: u16) -> Self {
        Self(kmh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceleration_and_braking() {
        let speed = Speed::ZERO.increased(60);
        assert_eq!(speed.value(), 60);

        let speed = speed.decreased(20);
        assert_eq!(speed.value(), 40);
    }

    #[test]
    fn braking_saturates_at_zero() {
        let speed = Speed::new(10).decreased(50);
        assert_eq!(speed, Speed::ZERO);
        assert!(speed.is_stationary());
    }

    #[test]
    fn acceleration_saturates() {
        let speed = Speed::new(u16::MAX).increased(1);
        assert_eq!(speed.value(), u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(Speed::new(80).to_string(), "80 km/h");
    }

    #[test]
    fn ordering() {
        assert!(Speed::new(30) < Speed::new(31));
    }
}
