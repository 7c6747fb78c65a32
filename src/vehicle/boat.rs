// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Watercraft.

use crate::outcome::{ActionOutcome, Refusal};
use crate::types::FuelType;

use super::{Vehicle, VehicleCore, VehicleKind};

/// A diesel boat. Starts out moored with the anchor down and refuses to
/// move until it is raised.
#[derive(Debug, Clone)]
pub struct Boat {
    core: VehicleCore,
    hull: String,
    anchor_down: bool,
}

impl Boat {
    /// Creates a moored boat. The anchor starts down.
    pub fn new(brand: impl Into<String>, model: impl Into<String>, hull: impl Into<String>) -> Self {
        Self {
            core: VehicleCore::new(brand, model, VehicleKind::Boat, FuelType::Diesel),
            hull: hull.into(),
            anchor_down: true,
        }
    }

    /// Returns `true` while the boat is anchored.
    #[must_use]
    pub const fn anchor_down(&self) -> bool {
        self.anchor_down
    }

    /// Raises the anchor.
    pub fn raise_anchor(&mut self) -> ActionOutcome {
        if !self.anchor_down {
            return Refusal::AnchorAlreadyRaised.into();
        }
        self.anchor_down = false;
        ActionOutcome::completed(format!("{} anchor raised", self.core.full_name()))
    }

    /// Drops the anchor.
    pub fn drop_anchor(&mut self) -> ActionOutcome {
        if self.anchor_down {
            return Refusal::AnchorAlreadyDown.into();
        }
        self.anchor_down = true;
        ActionOutcome::completed(format!("{} anchor dropped", self.core.full_name()))
    }

    /// Sounds the horn. Works while moored.
    #[must_use]
    pub fn sound_horn(&self) -> ActionOutcome {
        ActionOutcome::completed(format!("{}: hooooonk", self.core.full_name()))
    }
}

impl Vehicle for Boat {
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
        if self.anchor_down {
            return Refusal::AnchorDown.into();
        }
        ActionOutcome::completed(format!(
            "{} is sailing on open water at {}",
            self.core.full_name(),
            self.core.speed()
        ))
    }

    fn specs(&self) -> String {
        format!("{} hull, {} fuel", self.hull, self.core.fuel())
    }
}
