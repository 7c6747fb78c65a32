// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the device and vehicle models.
//!
//! This module provides type-safe representations of the values the state
//! machines mutate. Each type enforces its valid range at construction or
//! saturates on mutation, preventing invalid state at runtime.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off device power
//! - [`LockState`] - Locked/Unlocked screen state
//! - [`BatteryLevel`] - Battery charge (0-100%)
//! - [`Speed`] - Vehicle speed in km/h (never negative)
//! - [`Altitude`] - Aircraft altitude in feet, clamped to a ceiling
//! - [`FuelType`] - Vehicle energy source
//! - [`CameraMode`] - Shooting mode for camera phones

mod altitude;
mod battery;
mod camera;
mod fuel;
mod power;
mod speed;

pub use altitude::Altitude;
pub use battery::BatteryLevel;
pub use camera::CameraMode;
pub use fuel::FuelType;
pub use power::{LockState, PowerState};
pub use speed::Speed;
