// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Battery level type.
//!
//! This module provides a type-safe representation of battery charge,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Battery charge as a percentage (0-100).
///
/// Draining and recharging saturate at the bounds, so a level can never
/// leave the valid range.
///
/// # Examples
///
/// ```
/// use devsim_lib::types::BatteryLevel;
///
/// let mut level = BatteryLevel::new(30).unwrap();
/// level = level.drained(50);
/// assert_eq!(level.value(), 0);
///
/// level = level.recharged(250);
/// assert_eq!(level, BatteryLevel::FULL);
///
/// // Invalid values return error
/// assert!(BatteryLevel::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BatteryLevel(u8);

impl BatteryLevel {
    /// Fully discharged (0%).
    pub const EMPTY: Self = Self(0);

    /// Fully charged (100%).
    pub const FULL: Self = Self(100);

    /// Level at or below which the battery is considered low.
    pub const LOW_WATERMARK: u8 = 10;

    /// Creates a new battery level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a battery level, clamping to the valid range.
    ///
    /// Values above 100 are clamped to 100.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the charge percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the level after consuming `cost` percent, saturating at 0.
    #[must_use]
    pub const fn drained(self, cost: u8) -> Self {
        Self(self.0.saturating_sub(cost))
    }

    /// Returns the level after charging by `pct` percent, clamped at 100.
    #[must_use]
    pub const fn recharged(self, pct: u8) -> Self {
        Self::clamped(self.0.saturating_add(pct))
    }

    /// Returns `true` if the level is at or below the low watermark (10%).
    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.0 <= Self::LOW_WATERMARK
    }

    /// Returns `true` if the battery is completely full.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.0 == 100
    }

    /// Returns `true` if the level is at least `required` percent.
    #[must_use]
    pub const fn covers(&self, required: u8) -> bool {
        self.0 >= required
    }
}

impl Default for BatteryLevel {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for BatteryLevel {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_values() {
        for v in 0..=100 {
            let level = BatteryLevel::new(v).unwrap();
            assert_eq!(level.value(), v);
        }
    }

    #[test]
    fn invalid_value() {
        assert!(BatteryLevel::new(101).is_err());
    }

    #[test]
    fn clamped() {
        assert_eq!(BatteryLevel::clamped(50).value(), 50);
        assert_eq!(BatteryLevel::clamped(150).value(), 100);
    }

    #[test]
    fn drain_saturates_at_zero() {
        let level = BatteryLevel::clamped(3);
        assert_eq!(level.drained(10), BatteryLevel::EMPTY);
    }

    #[test]
    fn drain_never_increases_level() {
        for start in 0..=100u8 {
            for cost in 0..=110u8 {
                let before = BatteryLevel::clamped(start);
                let after = before.drained(cost);
                assert!(after <= before);
                assert!(after.value() <= 100);
            }
        }
    }

    #[test]
    fn recharge_clamps_at_full() {
        let level = BatteryLevel::clamped(90);
        assert_eq!(level.recharged(30), BatteryLevel::FULL);
        assert_eq!(BatteryLevel::FULL.recharged(1), BatteryLevel::FULL);
    }

    #[test]
    fn low_watermark() {
        assert!(BatteryLevel::clamped(10).is_low());
        assert!(BatteryLevel::EMPTY.is_low());
        assert!(!BatteryLevel::clamped(11).is_low());
    }

    #[test]
    fn covers_required_minimum() {
        let level = BatteryLevel::clamped(5);
        assert!(level.covers(5));
        assert!(!level.covers(6));
    }

    #[test]
    fn display() {
        assert_eq!(BatteryLevel::clamped(75).to_string(), "75%");
    }

    #[test]
    fn default_is_full() {
        assert_eq!(BatteryLevel::default(), BatteryLevel::FULL);
    }
}
