// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Human-powered bicycle.

use crate::outcome::{ActionOutcome, Refusal};
use crate::types::FuelType;

use super::{Vehicle, VehicleCore, VehicleKind};

/// A bicycle. Has no engine, so the engine-dependent actions are
/// permanently available: the shared engine flag stays on and the
/// start/stop overrides succeed without changing anything.
#[derive(Debug, Clone)]
pub struct Bicycle {
    core: VehicleCore,
    gears: u8,
    current_gear: u8,
}

impl Bicycle {
    /// Creates a stationary bicycle in first gear.
    pub fn new(brand: impl Into<String>, model: impl Into<String>, gears: u8) -> Self {
        let mut core = VehicleCore::new(brand, model, VehicleKind::Bicycle, FuelType::HumanPower);
        // Pedal power is always available.
        core.set_engine(true);
        Self {
            core,
            gears,
            current_gear: 1,
        }
    }

    /// Returns the currently selected gear.
    #[must_use]
    pub const fn current_gear(&self) -> u8 {
        self.current_gear
    }

    /// Shifts to `gear`. Refused outside `1..=gears`.
    pub fn change_gear(&mut self, gear: u8) -> ActionOutcome {
        if !(1..=self.gears).contains(&gear) {
            return Refusal::InvalidGear {
                requested: gear,
                max: self.gears,
            }
            .into();
        }
        self.current_gear = gear;
        ActionOutcome::completed(format!("shifted to gear {gear}"))
    }

    /// Rings the bell.
    #[must_use]
    pub fn ring_bell(&self) -> ActionOutcome {
        ActionOutcome::completed(format!("{}: ring ring", self.core.full_name()))
    }
}

impl Vehicle for Bicycle {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    // No engine to start or stop. Both succeed and leave pedal power on.

    fn start_engine(&mut self) -> ActionOutcome {
        ActionOutcome::completed(format!(
            "{} has no engine, just start pedaling",
            self.core.full_name()
        ))
    }

    fn stop_engine(&mut self) -> ActionOutcome {
        self.core.set_speed(crate::types::Speed::ZERO);
        ActionOutcome::completed(format!(
            "{} has no engine, stopped pedaling",
            self.core.full_name()
        ))
    }

    fn travel(&self) -> ActionOutcome {
        if self.core.speed().is_stationary() {
            ActionOutcome::completed(format!(
                "{} is stationary, start pedaling",
                self.core.full_name()
            ))
        } else {
            ActionOutcome::completed(format!(
                "{} is pedaling along at {} in gear {}",
                self.core.full_name(),
                self.core.speed(),
                self.current_gear
            ))
        }
    }

    fn specs(&self) -> String {
        format!("{} gears, {}", self.gears, self.core.fuel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_always_completes() {
        let mut bike = Bicycle::new("Trek", "FX 3", 9);
        assert_eq!(
            bike.travel().message(),
            "Trek FX 3 is stationary, start pedaling"
        );

        bike.accelerate(20);
        assert_eq!(
            bike.travel().message(),
            "Trek FX 3 is pedaling along at 20 km/h in gear 1"
        );
    }

    #[test]
    fn accelerate_never_needs_an_engine_start() {
        let mut bike = Bicycle::new("Trek", "FX 3", 9);
        assert!(bike.accelerate(15).is_completed());
    }

    #[test]
    fn engine_actions_are_friendly_no_ops() {
        let mut bike = Bicycle::new("Trek", "FX 3", 9);
        bike.accelerate(20);
        assert!(bike.start_engine().is_completed());

        assert!(bike.stop_engine().is_completed());
        assert!(bike.core().speed().is_stationary());
        // Pedal power stays available.
        assert!(bike.accelerate(10).is_completed());
    }

    #[test]
    fn gear_changes_are_bounded() {
        let mut bike = Bicycle::new("Trek", "FX 3", 9);
        assert!(bike.change_gear(9).is_completed());
        assert_eq!(bike.current_gear(), 9);

        assert_eq!(
            bike.change_gear(10).refusal(),
            Some(&Refusal::InvalidGear {
                requested: 10,
                max: 9
            })
        );
        assert_eq!(
            bike.change_gear(0).refusal(),
            Some(&Refusal::InvalidGear {
                requested: 0,
                max: 9
            })
        );
        assert_eq!(bike.current_gear(), 9);
    }

    #[test]
    fn bell_rings() {
        let bike = Bicycle::new("Trek", "FX 3", 9);
        assert_eq!(bike.ring_bell().message(), "Trek FX 3: ring ring");
    }
}
