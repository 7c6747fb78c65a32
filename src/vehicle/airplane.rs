// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-wing aircraft.

use crate::outcome::{ActionOutcome, Refusal};
use crate::types::{Altitude, FuelType, Speed};

use super::{Vehicle, VehicleCore, VehicleKind};

/// A fixed-wing aircraft. Needs a takeoff roll above
/// [`Self::TAKEOFF_MIN`] before it can leave the ground, and taxis on
/// the runway while it is down there.
#[derive(Debug, Clone)]
pub struct Airplane {
    core: VehicleCore,
    max_altitude: Altitude,
    altitude: Altitude,
}

impl Airplane {
    /// Minimum takeoff speed, exclusive.
    pub const TAKEOFF_MIN: Speed = Speed::new(200);
    /// Altitude reached immediately after takeoff.
    pub const TAKEOFF_ALTITUDE: Altitude = Altitude::new(1_000);
    /// Speed retained after touching down.
    pub const LANDING_SPEED: Speed = Speed::new(50);

    /// Creates an airplane parked on the runway.
    pub fn new(brand: impl Into<String>, model: impl Into<String>, max_altitude_ft: u32) -> Self {
        Self {
            core: VehicleCore::new(brand, model, VehicleKind::Airplane, FuelType::JetFuel),
            max_altitude: Altitude::new(max_altitude_ft),
            altitude: Altitude::GROUND,
        }
    }

    /// Returns the current altitude.
    #[must_use]
    pub const fn altitude(&self) -> Altitude {
        self.altitude
    }

    /// Lifts off to [`Self::TAKEOFF_ALTITUDE`]. Requires a running
    /// engine and a ground speed above [`Self::TAKEOFF_MIN`].
    pub fn take_off(&mut self) -> ActionOutcome {
        if !self.core.engine_on() {
            return Refusal::EngineOff.into();
        }
        if self.core.speed() <= Self::TAKEOFF_MIN {
            return Refusal::TooSlow {
                minimum: Self::TAKEOFF_MIN,
            }
            .into();
        }
        self.altitude = Self::TAKEOFF_ALTITUDE;
        ActionOutcome::completed(format!(
            "{} is airborne at {}",
            self.core.full_name(),
            self.altitude
        ))
    }

    /// Climbs by `feet`, clamped to the service ceiling. Refused on the
    /// ground.
    pub fn climb(&mut self, feet: u32) -> ActionOutcome {
        if !self.altitude.is_airborne() {
            return Refusal::NotAirborne.into();
        }
        self.altitude = self.altitude.climbed(feet, self.max_altitude);
        ActionOutcome::completed(format!("climbing to {}", self.altitude))
    }

    /// Touches down, slowing to [`Self::LANDING_SPEED`]. Refused on the
    /// ground.
    pub fn land(&mut self) -> ActionOutcome {
        if !self.altitude.is_airborne() {
            return Refusal::AlreadyOnGround.into();
        }
        self.altitude = Altitude::GROUND;
        self.core.set_speed(Self::LANDING_SPEED);
        ActionOutcome::completed(format!(
            "{} has landed, rolling out at {}",
            self.core.full_name(),
            self.core.speed()
        ))
    }
}

impl Vehicle for Airplane {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn travel(&self) -> ActionOutcome {
        if !self.core.engine_on() {
            return Refusal::EngineOff.into();
        }
        if self.altitude.is_airborne() {
            ActionOutcome::completed(format!(
                "{} is flying at {}, speed {}",
                self.core.full_name(),
                self.altitude,
                self.core.speed()
            ))
        } else {
            ActionOutcome::completed(format!(
                "{} is taxiing on the runway at {}",
                self.core.full_name(),
                self.core.speed()
            ))
        }
    }

    fn specs(&self) -> String {
        format!(
            "service ceiling {}, {} fuel",
            self.max_altitude,
            self.core.fuel()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airplane() -> Airplane {
        Airplane::new("Boeing", "747", 35_000)
    }

    #[test]
    fn takeoff_requires_engine_and_speed() {
        let mut plane = airplane();
        assert_eq!(plane.take_off().refusal(), Some(&Refusal::EngineOff));

        plane.start_engine();
        plane.accelerate(200);
        assert_eq!(
            plane.take_off().refusal(),
            Some(&Refusal::TooSlow {
                minimum: Airplane::TAKEOFF_MIN
            })
        );

        plane.accelerate(1);
        assert!(plane.take_off().is_completed());
        assert_eq!(plane.altitude(), Airplane::TAKEOFF_ALTITUDE);
    }

    #[test]
    fn travel_taxis_on_ground_and_flies_above() {
        let mut plane = airplane();
        plane.start_engine();
        plane.accelerate(40);
        assert_eq!(
            plane.travel().message(),
            "Boeing 747 is taxiing on the runway at 40 km/h"
        );

        plane.accelerate(300);
        plane.take_off();
        assert_eq!(
            plane.travel().message(),
            "Boeing 747 is flying at 1000 ft, speed 340 km/h"
        );
    }

    #[test]
    fn climb_is_clamped_and_needs_air() {
        let mut plane = airplane();
        assert_eq!(plane.climb(1_000).refusal(), Some(&Refusal::NotAirborne));

        plane.start_engine();
        plane.accelerate(250);
        plane.take_off();
        plane.climb(50_000);
        assert_eq!(plane.altitude().value(), 35_000);
    }

    #[test]
    fn landing_slows_to_rollout_speed() {
        let mut plane = airplane();
        plane.start_engine();
        plane.accelerate(250);
        plane.take_off();

        assert!(plane.land().is_completed());
        assert_eq!(plane.altitude(), Altitude::GROUND);
        assert_eq!(plane.core().speed(), Airplane::LANDING_SPEED);

        assert_eq!(plane.land().refusal(), Some(&Refusal::AlreadyOnGround));
    }
}
