// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rotary-wing aircraft.

use crate::outcome::{ActionOutcome, Refusal};
use crate::types::{Altitude, FuelType, Speed};

use super::{Vehicle, VehicleCore, VehicleKind};

/// A helicopter. Starting the engine spins up the rotors; takeoff is
/// vertical, with no takeoff roll, and the aircraft can hover in place.
#[derive(Debug, Clone)]
pub struct Helicopter {
    core: VehicleCore,
    rotor_diameter_m: f32,
    altitude: Altitude,
    rotors_spinning: bool,
}

impl Helicopter {
    /// Altitude reached by a vertical takeoff.
    pub const TAKEOFF_ALTITUDE: Altitude = Altitude::new(500);

    /// Creates a helicopter parked on the helipad.
    pub fn new(brand: impl Into<String>, model: impl Into<String>, rotor_diameter_m: f32) -> Self {
        Self {
            core: VehicleCore::new(brand, model, VehicleKind::Helicopter, FuelType::Avgas),
            rotor_diameter_m,
            altitude: Altitude::GROUND,
            rotors_spinning: false,
        }
    }

    /// Returns the current altitude.
    #[must_use]
    pub const fn altitude(&self) -> Altitude {
        self.altitude
    }

    /// Returns `true` while the rotors are turning.
    #[must_use]
    pub const fn rotors_spinning(&self) -> bool {
        self.rotors_spinning
    }

    /// Lifts off vertically to [`Self::TAKEOFF_ALTITUDE`]. Requires
    /// spinning rotors.
    pub fn take_off(&mut self) -> ActionOutcome {
        if !self.rotors_spinning {
            return Refusal::RotorsStopped.into();
        }
        self.altitude = Self::TAKEOFF_ALTITUDE;
        ActionOutcome::completed(format!(
            "{} lifted off to {}",
            self.core.full_name(),
            self.altitude
        ))
    }

    /// Holds position in the air, dropping forward speed to zero.
    /// Refused on the ground.
    pub fn hover(&mut self) -> ActionOutcome {
        if !self.altitude.is_airborne() {
            return Refusal::NotAirborne.into();
        }
        self.core.set_speed(Speed::ZERO);
        ActionOutcome::completed(format!(
            "{} is hovering at {}",
            self.core.full_name(),
            self.altitude
        ))
    }

    /// Descends vertically back onto the helipad. Refused on the ground.
    pub fn land(&mut self) -> ActionOutcome {
        if !self.altitude.is_airborne() {
            return Refusal::AlreadyOnGround.into();
        }
        self.altitude = Altitude::GROUND;
        self.core.set_speed(Speed::ZERO);
        ActionOutcome::completed(format!("{} has landed", self.core.full_name()))
    }
}

impl Vehicle for Helicopter {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    // Rotor state follows the engine.

    fn start_engine(&mut self) -> ActionOutcome {
        if self.core.engine_on() {
            return Refusal::EngineAlreadyRunning.into();
        }
        self.core.set_engine(true);
        self.rotors_spinning = true;
        ActionOutcome::completed(format!(
            "{} engine started, rotors spinning",
            self.core.full_name()
        ))
    }

    fn stop_engine(&mut self) -> ActionOutcome {
        if !self.core.engine_on() {
            return Refusal::EngineAlreadyOff.into();
        }
        self.core.set_engine(false);
        self.rotors_spinning = false;
        self.altitude = Altitude::GROUND;
        self.core.set_speed(Speed::ZERO);
        ActionOutcome::completed(format!(
            "{} engine stopped, rotors winding down",
            self.core.full_name()
        ))
    }

    fn travel(&self) -> ActionOutcome {
        if !self.rotors_spinning {
            return Refusal::RotorsStopped.into();
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
                "{} is ready for takeoff on the helipad",
                self.core.full_name()
            ))
        }
    }

    fn specs(&self) -> String {
        format!(
            "{}m rotor diameter, {} fuel",
            self.rotor_diameter_m,
            self.core.fuel()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helicopter() -> Helicopter {
        Helicopter::new("Airbus", "H125", 10.7)
    }

    #[test]
    fn takeoff_requires_rotors() {
        let mut heli = helicopter();
        assert_eq!(heli.take_off().refusal(), Some(&Refusal::RotorsStopped));

        heli.start_engine();
        assert!(heli.rotors_spinning());
        assert!(heli.take_off().is_completed());
        assert_eq!(heli.altitude(), Helicopter::TAKEOFF_ALTITUDE);
    }

    #[test]
    fn travel_distinguishes_helipad_from_air() {
        let mut heli = helicopter();
        assert_eq!(heli.travel().refusal(), Some(&Refusal::RotorsStopped));

        heli.start_engine();
        assert_eq!(
            heli.travel().message(),
            "Airbus H125 is ready for takeoff on the helipad"
        );

        heli.take_off();
        heli.accelerate(120);
        assert_eq!(
            heli.travel().message(),
            "Airbus H125 is flying at 500 ft, speed 120 km/h"
        );
    }

    #[test]
    fn hover_zeroes_forward_speed() {
        let mut heli = helicopter();
        assert_eq!(heli.hover().refusal(), Some(&Refusal::NotAirborne));

        heli.start_engine();
        heli.take_off();
        heli.accelerate(100);
        assert!(heli.hover().is_completed());
        assert!(heli.core().speed().is_stationary());
    }

    #[test]
    fn stopping_engine_grounds_the_aircraft() {
        let mut heli = helicopter();
        heli.start_engine();
        heli.take_off();
        heli.accelerate(80);

        assert!(heli.stop_engine().is_completed());
        assert!(!heli.rotors_spinning());
        assert_eq!(heli.altitude(), Altitude::GROUND);
        assert!(heli.core().speed().is_stationary());
    }

    #[test]
    fn landing_transitions() {
        let mut heli = helicopter();
        assert_eq!(heli.land().refusal(), Some(&Refusal::AlreadyOnGround));

        heli.start_engine();
        heli.take_off();
        assert!(heli.land().is_completed());
        assert_eq!(heli.land().refusal(), Some(&Refusal::AlreadyOnGround));
    }
}
