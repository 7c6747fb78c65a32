// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smartphone hierarchy.
//!
//! [`DeviceCore`] is the base state machine; the [`Smartphone`] trait gives
//! every variant the shared actions through delegation and lets variants
//! override the actions that differ ([`take_photo`](Smartphone::take_photo)
//! and [`current_activity`](Smartphone::current_activity)). Callers that
//! only hold a `&mut dyn Smartphone` dispatch to the concrete variant's
//! behavior.
//!
//! # Variants
//!
//! - [`DeviceCore`] - the plain base phone
//! - [`GamingPhone`] - high refresh rate, game mode with a higher battery cost
//! - [`CameraPhone`] - flash and shooting modes, higher-quality photos
//!
//! # Examples
//!
//! ```
//! use devsim_lib::device::{CameraPhone, DeviceCore, GamingPhone, Smartphone};
//!
//! let mut phones: Vec<Box<dyn Smartphone>> = vec![
//!     Box::new(DeviceCore::new("Samsung", "Galaxy S23", 256, 8, "Android 14")),
//!     Box::new(GamingPhone::new("ASUS", "ROG Phone 6", "Adreno 730", 144)),
//!     Box::new(CameraPhone::new("Google", "Pixel 8", 50, 1.7)),
//! ];
//!
//! for phone in &mut phones {
//!     phone.power_on();
//!     // Dispatches to the concrete variant's override.
//!     println!("{}: {}", phone.core().full_name(), phone.current_activity());
//! }
//! ```

mod camera;
mod core;
mod gaming;

pub use camera::CameraPhone;
pub use core::{DeviceCore, Message, Photo, StatusReport};
pub use gaming::GamingPhone;

use crate::outcome::ActionOutcome;

/// Shared smartphone behavior.
///
/// Provided methods delegate to the base [`DeviceCore`]; variants override
/// only the actions whose behavior differs, preserving the result-contract
/// shape (an [`ActionOutcome`], never a panic or error).
pub trait Smartphone {
    /// Returns the base device state.
    fn core(&self) -> &DeviceCore;

    /// Returns the base device state mutably.
    fn core_mut(&mut self) -> &mut DeviceCore;

    /// Powers on the device.
    fn power_on(&mut self) -> ActionOutcome {
        self.core_mut().power_on()
    }

    /// Powers off the device, locking the screen and ending any call.
    fn power_off(&mut self) -> ActionOutcome {
        self.core_mut().power_off()
    }

    /// Unlocks the screen.
    fn unlock(&mut self) -> ActionOutcome {
        self.core_mut().unlock()
    }

    /// Locks the screen.
    fn lock(&mut self) -> ActionOutcome {
        self.core_mut().lock()
    }

    /// Charges the battery by `pct` percent.
    fn recharge(&mut self, pct: u8) -> ActionOutcome {
        self.core_mut().recharge(pct)
    }

    /// Makes a phone call.
    fn make_call(&mut self, number: &str) -> ActionOutcome {
        self.core_mut().make_call(number)
    }

    /// Ends the active call.
    fn end_call(&mut self) -> ActionOutcome {
        self.core_mut().end_call()
    }

    /// Sends a text message.
    fn send_message(&mut self, to: &str, body: &str) -> ActionOutcome {
        self.core_mut().send_message(to, body)
    }

    /// Installs an app.
    fn install_app(&mut self, name: &str, size_mb: u32) -> ActionOutcome {
        self.core_mut().install_app(name, size_mb)
    }

    /// Takes a photo. Camera-focused variants override this.
    fn take_photo(&mut self) -> ActionOutcome {
        self.core_mut().take_photo()
    }

    /// Adds a contact.
    fn add_contact(&mut self, name: &str, number: &str) -> ActionOutcome {
        self.core_mut().add_contact(name, number)
    }

    /// Returns a snapshot of the device state.
    fn status(&self) -> StatusReport {
        self.core().status()
    }

    /// Describes what the device is currently geared for.
    ///
    /// The one deliberately polymorphic description: each variant reports
    /// its specialty.
    fn current_activity(&self) -> String {
        "performing smartphone functions".to_string()
    }
}

impl Smartphone for DeviceCore {
    fn core(&self) -> &DeviceCore {
        self
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        self
    }
}
