// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Discriminated results for device and vehicle actions.
//!
//! Every state-mutating action returns an [`ActionOutcome`] rather than an
//! error: an unmet precondition (device off, battery too low, anchor down)
//! is an expected, reportable result of the call, not an exceptional
//! condition. Callers match on the outcome or print its message.
//!
//! # Examples
//!
//! ```
//! use devsim_lib::device::DeviceCore;
//!
//! let mut phone = DeviceCore::new("Samsung", "Galaxy S23", 256, 8, "Android 14");
//!
//! // Calling while powered off is refused, not raised.
//! let outcome = phone.make_call("555-0123");
//! assert!(outcome.is_refused());
//!
//! phone.power_on();
//! let outcome = phone.make_call("555-0123");
//! assert!(outcome.is_completed());
//! println!("{outcome}");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{BatteryLevel, Speed};

/// The result of a device or vehicle action.
///
/// Either the action completed (with a human-readable detail message) or it
/// was refused because a precondition was not met. Refusals leave the
/// object's state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The action was performed; the string describes what happened.
    Completed(String),
    /// The action was refused; the refusal names the unmet precondition.
    Refused(Refusal),
}

impl ActionOutcome {
    /// Creates a completed outcome from a detail message.
    pub fn completed(detail: impl Into<String>) -> Self {
        Self::Completed(detail.into())
    }

    /// Creates a refused outcome.
    #[must_use]
    pub const fn refused(refusal: Refusal) -> Self {
        Self::Refused(refusal)
    }

    /// Returns `true` if the action was performed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Returns `true` if the action was refused.
    #[must_use]
    pub const fn is_refused(&self) -> bool {
        matches!(self, Self::Refused(_))
    }

    /// Returns the refusal, if the action was refused.
    #[must_use]
    pub const fn refusal(&self) -> Option<&Refusal> {
        match self {
            Self::Refused(r) => Some(r),
            Self::Completed(_) => None,
        }
    }

    /// Returns the outcome message, for either variant.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed(detail) => write!(f, "{detail}"),
            Self::Refused(refusal) => write!(f, "{refusal}"),
        }
    }
}

impl From<Refusal> for ActionOutcome {
    fn from(refusal: Refusal) -> Self {
        Self::Refused(refusal)
    }
}

/// The reason an action was refused.
///
/// One variant per distinct precondition. The `Display` text is the
/// user-facing message printed by demonstration drivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Refusal {
    /// The device must be powered on first.
    PoweredOff,
    /// The device is already powered on.
    AlreadyOn,
    /// The device is already powered off.
    AlreadyOff,
    /// Not enough battery for the action.
    BatteryTooLow {
        /// Minimum level the action requires.
        required: u8,
        /// Current battery level.
        level: BatteryLevel,
    },
    /// The battery is already full.
    BatteryFull,
    /// The screen is not locked, so there is nothing to unlock.
    ScreenNotLocked,
    /// There is no call to end.
    NoActiveCall,
    /// Installing the app would exceed the storage capacity.
    InsufficientStorage {
        /// The app that did not fit.
        app: String,
    },
    /// The engine must be started first.
    EngineOff,
    /// The engine is already running.
    EngineAlreadyRunning,
    /// The engine is already off.
    EngineAlreadyOff,
    /// The vehicle is already stationary.
    AlreadyStopped,
    /// The anchor is down and must be raised before sailing.
    AnchorDown,
    /// The anchor is already raised.
    AnchorAlreadyRaised,
    /// The anchor is already down.
    AnchorAlreadyDown,
    /// The vehicle is moving too slowly for the maneuver.
    TooSlow {
        /// Minimum speed the maneuver requires.
        minimum: Speed,
    },
    /// The maneuver requires being airborne.
    NotAirborne,
    /// The aircraft is already on the ground.
    AlreadyOnGround,
    /// The rotors are not spinning.
    RotorsStopped,
    /// The requested gear does not exist.
    InvalidGear {
        /// The gear that was requested.
        requested: u8,
        /// Highest available gear.
        max: u8,
    },
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoweredOff => write!(f, "cannot proceed, device is powered off"),
            Self::AlreadyOn => write!(f, "device is already on"),
            Self::AlreadyOff => write!(f, "device is already off"),
            Self::BatteryTooLow { required, level } => {
                write!(f, "battery too low: {level} available, {required}% required")
            }
            Self::BatteryFull => write!(f, "battery is already full"),
            Self::ScreenNotLocked => write!(f, "screen is not locked"),
            Self::NoActiveCall => write!(f, "no active call"),
            Self::InsufficientStorage { app } => {
                write!(f, "not enough storage for {app}")
            }
            Self::EngineOff => write!(f, "cannot move, start the engine first"),
            Self::EngineAlreadyRunning => write!(f, "engine is already running"),
            Self::EngineAlreadyOff => write!(f, "engine is already off"),
            Self::AlreadyStopped => write!(f, "vehicle is already stopped"),
            Self::AnchorDown => write!(f, "cannot move, anchor down"),
            Self::AnchorAlreadyRaised => write!(f, "anchor is already raised"),
            Self::AnchorAlreadyDown => write!(f, "anchor is already down"),
            Self::TooSlow { minimum } => {
                write!(f, "too slow, at least {minimum} required")
            }
            Self::NotAirborne => write!(f, "must be airborne first"),
            Self::AlreadyOnGround => write!(f, "already on the ground"),
            Self::RotorsStopped => write!(f, "rotors are not spinning"),
            Self::InvalidGear { requested, max } => {
                write!(f, "invalid gear {requested}, choose between 1 and {max}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_outcome() {
        let outcome = ActionOutcome::completed("powered on");
        assert!(outcome.is_completed());
        assert!(!outcome.is_refused());
        assert!(outcome.refusal().is_none());
        assert_eq!(outcome.message(), "powered on");
    }

    #[test]
    fn refused_outcome() {
        let outcome = ActionOutcome::refused(Refusal::PoweredOff);
        assert!(outcome.is_refused());
        assert_eq!(outcome.refusal(), Some(&Refusal::PoweredOff));
        assert_eq!(outcome.message(), "cannot proceed, device is powered off");
    }

    #[test]
    fn refusal_into_outcome() {
        let outcome: ActionOutcome = Refusal::EngineOff.into();
        assert!(outcome.is_refused());
    }

    #[test]
    fn battery_too_low_display() {
        let refusal = Refusal::BatteryTooLow {
            required: 10,
            level: BatteryLevel::clamped(4),
        };
        assert_eq!(
            refusal.to_string(),
            "battery too low: 4% available, 10% required"
        );
    }

    #[test]
    fn invalid_gear_display() {
        let refusal = Refusal::InvalidGear {
            requested: 25,
            max: 21,
        };
        assert_eq!(
            refusal.to_string(),
            "invalid gear 25, choose between 1 and 21"
        );
    }

    #[test]
    fn serde_round_trip() {
        let outcome = ActionOutcome::refused(Refusal::AnchorDown);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: ActionOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
