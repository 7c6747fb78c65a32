// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vehicle hierarchy.
//!
//! [`VehicleCore`] owns the state shared by every vehicle (engine flag and
//! speed); the [`Vehicle`] trait provides the shared actions and requires
//! each variant to supply its own [`travel`](Vehicle::travel) rule set.
//! The movement contract is deliberately polymorphic: calling `travel()`
//! through a `&dyn Vehicle` must produce the concrete variant's behavior
//! (a boat refuses while its anchor is down, an airplane taxis on the
//! ground and flies above it, a bicycle never needs an engine).
//!
//! # Examples
//!
//! ```
//! use devsim_lib::vehicle::{Airplane, Boat, Car, Vehicle};
//!
//! let mut fleet: Vec<Box<dyn Vehicle>> = vec![
//!     Box::new(Car::new("Toyota", "Camry", 4)),
//!     Box::new(Boat::new("Yamaha", "242X", "Speedboat")),
//!     Box::new(Airplane::new("Boeing", "747", 35_000)),
//! ];
//!
//! for vehicle in &mut fleet {
//!     vehicle.start_engine();
//!     // Same call, variant-specific rules.
//!     println!("{}", vehicle.travel());
//! }
//! ```

mod airplane;
mod bicycle;
mod boat;
mod car;
mod helicopter;
mod motorcycle;

pub use airplane::Airplane;
pub use bicycle::Bicycle;
pub use boat::Boat;
pub use car::Car;
pub use helicopter::Helicopter;
pub use motorcycle::Motorcycle;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::outcome::{ActionOutcome, Refusal};
use crate::types::{FuelType, Speed};

/// The category of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    /// Road car.
    Car,
    /// Motorcycle.
    Motorcycle,
    /// Fixed-wing aircraft.
    Airplane,
    /// Watercraft.
    Boat,
    /// Human-powered bicycle.
    Bicycle,
    /// Rotary-wing aircraft.
    Helicopter,
}

impl VehicleKind {
    /// Returns the display string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Motorcycle => "Motorcycle",
            Self::Airplane => "Airplane",
            Self::Boat => "Boat",
            Self::Bicycle => "Bicycle",
            Self::Helicopter => "Helicopter",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of a vehicle's current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStatus {
    /// Brand and model, e.g. `Toyota Camry`.
    pub full_name: String,
    /// Vehicle category.
    pub kind: VehicleKind,
    /// Energy source.
    pub fuel: FuelType,
    /// Whether the engine is running.
    pub engine_on: bool,
    /// Current speed.
    pub speed: Speed,
}

/// State shared by every vehicle variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleCore {
    brand: String,
    model: String,
    kind: VehicleKind,
    fuel: FuelType,
    speed: Speed,
    engine_on: bool,
}

impl VehicleCore {
    /// Creates a stationary vehicle with the engine off.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        kind: VehicleKind,
        fuel: FuelType,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            kind,
            fuel,
            speed: Speed::ZERO,
            engine_on: false,
        }
    }

    /// Returns `brand model` as a single display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Returns the vehicle category.
    #[must_use]
    pub const fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Returns the energy source.
    #[must_use]
    pub const fn fuel(&self) -> FuelType {
        self.fuel
    }

    /// Returns the current speed.
    #[must_use]
    pub const fn speed(&self) -> Speed {
        self.speed
    }

    /// Returns `true` if the engine is running.
    #[must_use]
    pub const fn engine_on(&self) -> bool {
        self.engine_on
    }

    /// Starts the engine.
    pub fn start_engine(&mut self) -> ActionOutcome {
        if self.engine_on {
            return Refusal::EngineAlreadyRunning.into();
        }
        self.engine_on = true;
        ActionOutcome::completed(format!("{} engine started", self.full_name()))
    }

    /// Stops the engine and brings the vehicle to a standstill.
    pub fn stop_engine(&mut self) -> ActionOutcome {
        if !self.engine_on {
            return Refusal::EngineAlreadyOff.into();
        }
        self.engine_on = false;
        self.speed = Speed::ZERO;
        ActionOutcome::completed(format!("{} engine stopped", self.full_name()))
    }

    /// Accelerates by `amount` km/h. Refused while the engine is off.
    pub fn accelerate(&mut self, amount: u16) -> ActionOutcome {
        if !self.engine_on {
            return Refusal::EngineOff.into();
        }
        self.speed = self.speed.increased(amount);
        ActionOutcome::completed(format!("accelerating to {}", self.speed))
    }

    /// Brakes by `amount` km/h, saturating at a standstill.
    pub fn brake(&mut self, amount: u16) -> ActionOutcome {
        if self.speed.is_stationary() {
            return Refusal::AlreadyStopped.into();
        }
        self.speed = self.speed.decreased(amount);
        ActionOutcome::completed(format!("braking to {}", self.speed))
    }

    /// Returns a serializable snapshot of the current state.
    #[must_use]
    pub fn status(&self) -> VehicleStatus {
        VehicleStatus {
            full_name: self.full_name(),
            kind: self.kind,
            fuel: self.fuel,
            engine_on: self.engine_on,
            speed: self.speed,
        }
    }

    // Variant overrides (helicopter rotors, bicycle pedaling) need direct
    // access to the shared flags.

    pub(crate) const fn set_engine(&mut self, on: bool) {
        self.engine_on = on;
    }

    pub(crate) const fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }
}

/// Shared vehicle behavior with a variant-specific movement rule.
///
/// Provided methods delegate to [`VehicleCore`]; [`travel`](Self::travel)
/// and [`specs`](Self::specs) must be supplied by each variant.
pub trait Vehicle {
    /// Returns the shared vehicle state.
    fn core(&self) -> &VehicleCore;

    /// Returns the shared vehicle state mutably.
    fn core_mut(&mut self) -> &mut VehicleCore;

    /// Moves the vehicle according to its own rule set.
    fn travel(&self) -> ActionOutcome;

    /// Returns a variant-specific configuration summary.
    fn specs(&self) -> String;

    /// Starts the engine.
    fn start_engine(&mut self) -> ActionOutcome {
        self.core_mut().start_engine()
    }

    /// Stops the engine.
    fn stop_engine(&mut self) -> ActionOutcome {
        self.core_mut().stop_engine()
    }

    /// Accelerates by `amount` km/h.
    fn accelerate(&mut self, amount: u16) -> ActionOutcome {
        self.core_mut().accelerate(amount)
    }

    /// Brakes by `amount` km/h.
    fn brake(&mut self, amount: u16) -> ActionOutcome {
        self.core_mut().brake(amount)
    }

    /// Returns a snapshot of the vehicle state.
    fn status(&self) -> VehicleStatus {
        self.core().status()
    }
}
