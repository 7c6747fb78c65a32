// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Road car.

use crate::outcome::{ActionOutcome, Refusal};
use crate::types::FuelType;

use super::{Vehicle, VehicleCore, VehicleKind};

/// A gasoline road car. Drives whenever the engine is running.
#[derive(Debug, Clone)]
pub struct Car {
    core: VehicleCore,
    doors: u8,
}

impl Car {
    const WHEELS: u8 = 4;

    /// Creates a stationary car with the engine off.
    pub fn new(brand: impl Into<String>, model: impl Into<String>, doors: u8) -> Self {
        Self {
            core: VehicleCore::new(brand, model, VehicleKind::Car, FuelType::Gasoline),
            doors,
        }
    }

    /// Sounds the horn. Works with the engine off.
    #[must_use]
    pub fn honk(&self) -> ActionOutcome {
        ActionOutcome::completed(format!("{}: honk honk", self.core.full_name()))
    }

    /// Opens the trunk.
    #[must_use]
    pub fn open_trunk(&self) -> ActionOutcome {
        ActionOutcome::completed(format!("{} trunk is open", self.core.full_name()))
    }
}

impl Vehicle for Car {
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
        ActionOutcome::completed(format!(
            "{} is driving on the road at {}",
            self.core.full_name(),
            self.core.speed()
        ))
    }

    fn specs(&self) -> String {
        format!(
            "{} doors, {} wheels, {} fuel",
            self.doors,
            Self::WHEELS,
            self.core.fuel()
        )
    }
}
