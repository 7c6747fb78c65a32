// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fuel type for vehicles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The energy source a vehicle runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    /// Standard gasoline.
    Gasoline,
    /// Diesel.
    Diesel,
    /// Jet fuel for turbine aircraft.
    JetFuel,
    /// Aviation gasoline for piston aircraft.
    Avgas,
    /// Battery electric.
    Electric,
    /// Human powered, no engine at all.
    HumanPower,
}

impl FuelType {
    /// Returns the display string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gasoline => "Gasoline",
            Self::Diesel => "Diesel",
            Self::JetFuel => "Jet Fuel",
            Self::Avgas => "Avgas",
            Self::Electric => "Electric",
            Self::HumanPower => "Human Power",
        }
    }

    /// Returns `true` for fuels that require an engine.
    #[must_use]
    pub const fn needs_engine(&self) -> bool {
        !matches!(self, Self::HumanPower)
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gasoline" | "petrol" => Ok(Self::Gasoline),
            "diesel" => Ok(Self::Diesel),
            "jet fuel" | "jetfuel" => Ok(Self::JetFuel),
            "avgas" => Ok(Self::Avgas),
            "electric" => Ok(Self::Electric),
            "human power" | "human" => Ok(Self::HumanPower),
            _ => Err(ValueError::UnknownFuelType(s.to_string())),
        }
    }
}
