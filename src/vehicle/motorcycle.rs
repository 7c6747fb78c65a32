// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Motorcycle.

use crate::outcome::{ActionOutcome, Refusal};
use crate::types::{FuelType, Speed};

use super::{Vehicle, VehicleCore, VehicleKind};

/// A gasoline motorcycle. Rides like a car but can pop a wheelie
/// once it is moving fast enough.
#[derive(Debug, Clone)]
pub struct Motorcycle {
    core: VehicleCore,
    engine_cc: u16,
}

impl Motorcycle {
    /// Minimum speed for a wheelie, exclusive.
    pub const WHEELIE_MIN: Speed = Speed::new(30);

    /// Creates a stationary motorcycle with the engine off.
    pub fn new(brand: impl Into<String>, model: impl Into<String>, engine_cc: u16) -> Self {
        Self {
            core: VehicleCore::new(brand, model, VehicleKind::Motorcycle, FuelType::Gasoline),
            engine_cc,
        }
    }

    /// Pops a wheelie. Refused below [`Self::WHEELIE_MIN`].
    #[must_use]
    pub fn wheelie(&self) -> ActionOutcome {
        if self.core.speed() <= Self::WHEELIE_MIN {
            return Refusal::TooSlow {
                minimum: Self::WHEELIE_MIN,
            }
            .into();
        }
        ActionOutcome::completed(format!(
            "{} pops a wheelie at {}",
            self.core.full_name(),
            self.core.speed()
        ))
    }
}

impl Vehicle for Motorcycle {
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
            "{} is riding on the road at {}",
            self.core.full_name(),
            self.core.speed()
        ))
    }

    fn specs(&self) -> String {
        format!("{}cc engine, 2 wheels", self.engine_cc)
    }
}
