// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Altitude type for aircraft.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Altitude above ground in feet.
///
/// Climbing is clamped against the aircraft's service ceiling.
///
/// # Examples
///
/// ```
/// use devsim_lib::types::Altitude;
///
/// let alt = Altitude::GROUND.climbed(5_000, Altitude::new(3_500));
/// assert_eq!(alt.value(), 3_500);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Altitude(u32);

impl Altitude {
    /// On the ground.
    pub const GROUND: Self = Self(0);

    /// Creates a new altitude.
    #[must_use]
    pub const fn new(feet: u32) -> Self {
        Self(feet)
    }

    /// Returns the altitude in feet.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the altitude after climbing by `feet`, clamped to `ceiling`.
    #[must_use]
    pub const fn climbed(self, feet: u32, ceiling: Self) -> Self {
        let next = self.0.saturating_add(feet);
        if next > ceiling.0 { ceiling } else { Self(next) }
    }

    /// Returns `true` if the aircraft is airborne.
    #[must_use]
    pub const fn is_airborne(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ft", self.0)
    }
}

impl From<u32> for Altitude {
    fn from(feet: u32) -> Self {
        Self(feet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climb_is_clamped_to_ceiling() {
        let ceiling = Altitude::new(35_000);
        let alt = Altitude::new(34_000).climbed(5_000, ceiling);
        assert_eq!(alt, ceiling);
    }

    #[test]
    fn climb_below_ceiling() {
        let alt = Altitude::new(1_000).climbed(5_000, Altitude::new(35_000));
        assert_eq!(alt.value(), 6_000);
    }

    #[test]
    fn ground_is_not_airborne() {
        assert!(!Altitude::GROUND.is_airborne());
        assert!(Altitude::new(500).is_airborne());
    }

    #[test]
    fn display() {
        assert_eq!(Altitude::new(1_000).to_string(), "1000 ft");
    }
}
