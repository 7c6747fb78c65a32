// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Base smartphone state machine.
//!
//! [`DeviceCore`] owns the identity, configuration, and mutable state shared
//! by every phone variant. All actions return an
//! [`ActionOutcome`](crate::outcome::ActionOutcome); unmet preconditions are
//! refused, never raised.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fleet::DeviceId;
use crate::outcome::{ActionOutcome, Refusal};
use crate::types::{BatteryLevel, LockState, PowerState};

/// Minimum battery level required to power on (level must exceed 5%).
const POWER_ON_MIN: u8 = 6;
/// Minimum battery level and cost for a phone call.
const CALL_MIN: u8 = 5;
const CALL_COST: u8 = 3;
/// Minimum battery level and cost for a text message.
const MESSAGE_MIN: u8 = 3;
const MESSAGE_COST: u8 = 1;
/// Minimum battery level and cost for a photo.
const PHOTO_MIN: u8 = 2;
const PHOTO_COST: u8 = 1;
/// Battery cost of an app installation.
const INSTALL_COST: u8 = 2;
/// Simplified storage model: every installed app occupies a fixed 100 MB.
const APP_SLOT_MB: u32 = 100;

/// A photo captured by the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Generated file name, e.g. `photo_1.jpg`.
    pub file_name: String,
    /// Capture timestamp.
    pub taken_at: DateTime<Utc>,
}

/// An outbound text message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The recipient's number.
    pub to: String,
    /// Message body.
    pub body: String,
    /// Send timestamp.
    pub sent_at: DateTime<Utc>,
}

/// Snapshot of a device's current state.
///
/// Serializable summary returned by [`DeviceCore::status`], used by
/// demonstration drivers and the fleet registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Device identifier.
    pub id: DeviceId,
    /// Brand and model, e.g. `Samsung Galaxy S23`.
    pub full_name: String,
    /// Configuration summary, e.g. `256GB Storage, 8GB RAM, Android 14`.
    pub specs: String,
    /// Current power state.
    pub power: PowerState,
    /// Current lock state.
    pub lock: LockState,
    /// Current battery level.
    pub battery: BatteryLevel,
    /// Number the device is currently calling, if any.
    pub active_call: Option<String>,
    /// Number of installed apps.
    pub apps_installed: usize,
    /// Number of saved contacts.
    pub contacts_saved: usize,
    /// Number of photos taken.
    pub photos_taken: usize,
    /// Number of messages sent.
    pub messages_sent: usize,
}

/// Base smartphone with core functionality.
///
/// Identity and configuration are immutable after creation; state is
/// mutated in place by action calls. A fresh device starts powered off,
/// locked, with a full battery.
///
/// # Examples
///
/// ```
/// use devsim_lib::device::DeviceCore;
///
/// let mut phone = DeviceCore::new("Samsung", "Galaxy S23", 256, 8, "Android 14");
/// assert!(phone.power_on().is_completed());
/// assert!(phone.unlock().is_completed());
/// assert!(phone.take_photo().is_completed());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceCore {
    id: DeviceId,
    brand: String,
    model: String,
    storage_gb: u16,
    ram_gb: u16,
    os: String,
    power: PowerState,
    lock: LockState,
    battery: BatteryLevel,
    active_call: Option<String>,
    apps: BTreeSet<String>,
    contacts: BTreeMap<String, String>,
    photos: Vec<Photo>,
    messages: Vec<Message>,
}

impl DeviceCore {
    /// Creates a fully initialized device: powered off, locked, battery full.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        storage_gb: u16,
        ram_gb: u16,
        os: impl Into<String>,
    ) -> Self {
        Self {
            id: DeviceId::new(),
            brand: brand.into(),
            model: model.into(),
            storage_gb,
            ram_gb,
            os: os.into(),
            power: PowerState::Off,
            lock: LockState::Locked,
            battery: BatteryLevel::FULL,
            active_call: None,
            apps: BTreeSet::new(),
            contacts: BTreeMap::new(),
            photos: Vec::new(),
            messages: Vec::new(),
        }
    }

    // ========== Identity & configuration ==========

    /// Returns the device identifier.
    #[must_use]
    pub const fn id(&self) -> DeviceId {
        self.id
    }

    /// Returns the brand name.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns `brand model` as a single display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Returns a configuration summary string.
    #[must_use]
    pub fn specs(&self) -> String {
        format!(
            "{}GB Storage, {}GB RAM, {}",
            self.storage_gb, self.ram_gb, self.os
        )
    }

    // ========== State accessors ==========

    /// Returns the current power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns the current lock state.
    #[must_use]
    pub const fn lock_state(&self) -> LockState {
        self.lock
    }

    /// Returns the current battery level.
    #[must_use]
    pub const fn battery(&self) -> BatteryLevel {
        self.battery
    }

    /// Returns the number currently being called, if any.
    #[must_use]
    pub fn active_call(&self) -> Option<&str> {
        self.active_call.as_deref()
    }

    /// Returns the installed app names.
    #[must_use]
    pub const fn apps(&self) -> &BTreeSet<String> {
        &self.apps
    }

    /// Returns the contact directory.
    #[must_use]
    pub const fn contacts(&self) -> &BTreeMap<String, String> {
        &self.contacts
    }

    /// Returns the captured photos, oldest first.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Returns the sent messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    // ========== Actions ==========

    /// Powers on the device.
    ///
    /// Refused when already on or when the battery is at 5% or below.
    pub fn power_on(&mut self) -> ActionOutcome {
        if self.power.is_on() {
            return Refusal::AlreadyOn.into();
        }
        if !self.battery.covers(POWER_ON_MIN) {
            return Refusal::BatteryTooLow {
                required: POWER_ON_MIN,
                level: self.battery,
            }
            .into();
        }
        self.power = PowerState::On;
        ActionOutcome::completed(format!("{} powered on", self.full_name()))
    }

    /// Powers off the device.
    ///
    /// Always leaves the screen locked and ends any active call.
    pub fn power_off(&mut self) -> ActionOutcome {
        if !self.power.is_on() {
            return Refusal::AlreadyOff.into();
        }
        self.power = PowerState::Off;
        self.lock = LockState::Locked;
        self.active_call = None;
        ActionOutcome::completed(format!("{} powered off", self.full_name()))
    }

    /// Unlocks the screen.
    ///
    /// Succeeds only while powered on with the screen locked; otherwise the
    /// call is refused and state is unchanged.
    pub fn unlock(&mut self) -> ActionOutcome {
        if !self.power.is_on() {
            return Refusal::PoweredOff.into();
        }
        if !self.lock.is_locked() {
            return Refusal::ScreenNotLocked.into();
        }
        self.lock = LockState::Unlocked;
        ActionOutcome::completed(format!("{} unlocked", self.full_name()))
    }

    /// Locks the screen. Always succeeds.
    pub fn lock(&mut self) -> ActionOutcome {
        self.lock = LockState::Locked;
        ActionOutcome::completed(format!("{} locked", self.full_name()))
    }

    /// Charges the battery by `pct` percent, clamped at 100.
    pub fn recharge(&mut self, pct: u8) -> ActionOutcome {
        if self.battery.is_full() {
            return Refusal::BatteryFull.into();
        }
        self.battery = self.battery.recharged(pct);
        ActionOutcome::completed(format!("charging, battery at {}", self.battery))
    }

    /// Makes a phone call.
    pub fn make_call(&mut self, number: &str) -> ActionOutcome {
        if !self.power.is_on() {
            return Refusal::PoweredOff.into();
        }
        if !self.battery.covers(CALL_MIN) {
            return Refusal::BatteryTooLow {
                required: CALL_MIN,
                level: self.battery,
            }
            .into();
        }
        self.active_call = Some(number.to_string());
        self.consume_battery(CALL_COST);
        ActionOutcome::completed(format!("calling {number}"))
    }

    /// Ends the active call, if there is one.
    pub fn end_call(&mut self) -> ActionOutcome {
        match self.active_call.take() {
            Some(number) => ActionOutcome::completed(format!("ended call with {number}")),
            None => Refusal::NoActiveCall.into(),
        }
    }

    /// Sends a text message.
    pub fn send_message(&mut self, to: &str, body: &str) -> ActionOutcome {
        if !self.power.is_on() {
            return Refusal::PoweredOff.into();
        }
        if !self.battery.covers(MESSAGE_MIN) {
            return Refusal::BatteryTooLow {
                required: MESSAGE_MIN,
                level: self.battery,
            }
            .into();
        }
        self.messages.push(Message {
            to: to.to_string(),
            body: body.to_string(),
            sent_at: Utc::now(),
        });
        self.consume_battery(MESSAGE_COST);
        ActionOutcome::completed(format!("message sent to {to}"))
    }

    /// Installs an app of the given size.
    ///
    /// Storage accounting is deliberately simplified: each installed app is
    /// assumed to occupy a fixed 100 MB slot.
    pub fn install_app(&mut self, name: &str, size_mb: u32) -> ActionOutcome {
        if !self.power.is_on() {
            return Refusal::PoweredOff.into();
        }
        let used = u32::try_from(self.apps.len()).unwrap_or(u32::MAX).saturating_mul(APP_SLOT_MB);
        let capacity = u32::from(self.storage_gb) * 1024;
        if size_mb > capacity.saturating_sub(used) {
            return Refusal::InsufficientStorage {
                app: name.to_string(),
            }
            .into();
        }
        self.apps.insert(name.to_string());
        self.consume_battery(INSTALL_COST);
        ActionOutcome::completed(format!("installed {name}"))
    }

    /// Takes a photo with the standard camera.
    pub fn take_photo(&mut self) -> ActionOutcome {
        if !self.power.is_on() {
            return Refusal::PoweredOff.into();
        }
        if !self.battery.covers(PHOTO_MIN) {
            return Refusal::BatteryTooLow {
                required: PHOTO_MIN,
                level: self.battery,
            }
            .into();
        }
        self.store_photo("photo");
        self.consume_battery(PHOTO_COST);
        ActionOutcome::completed(format!("photo taken, total {}", self.photos.len()))
    }

    /// Adds a contact. Always succeeds; an existing name is overwritten.
    pub fn add_contact(&mut self, name: &str, number: &str) -> ActionOutcome {
        self.contacts.insert(name.to_string(), number.to_string());
        ActionOutcome::completed(format!("added contact {name}"))
    }

    /// Returns a serializable snapshot of the current state.
    #[must_use]
    pub fn status(&self) -> StatusReport {
        StatusReport {
            id: self.id,
            full_name: self.full_name(),
            specs: self.specs(),
            power: self.power,
            lock: self.lock,
            battery: self.battery,
            active_call: self.active_call.clone(),
            apps_installed: self.apps.len(),
            contacts_saved: self.contacts.len(),
            photos_taken: self.photos.len(),
            messages_sent: self.messages.len(),
        }
    }

    // ========== Internal helpers ==========

    /// Appends a photo named `{prefix}_{n}.jpg`.
    pub(crate) fn store_photo(&mut self, prefix: &str) {
        let file_name = format!("{prefix}_{}.jpg", self.photos.len() + 1);
        self.photos.push(Photo {
            file_name,
            taken_at: Utc::now(),
        });
    }

    /// Consumes battery, saturating at 0, and warns when the level is low.
    pub(crate) fn consume_battery(&mut self, cost: u8) {
        self.battery = self.battery.drained(cost);
        if self.battery.is_low() {
            tracing::warn!(device = %self.id, level = %self.battery, "battery low");
        }
    }

    /// Sets the battery level directly. Test hook for precondition checks.
    #[cfg(test)]
    pub(crate) fn set_battery(&mut self, level: BatteryLevel) {
        self.battery = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> DeviceCore {
        DeviceCore::new("Samsung", "Galaxy S23", 256, 8, "Android 14")
    }

    #[test]
    fn new_device_is_off_locked_and_full() {
        let phone = phone();
        assert_eq!(phone.power(), PowerState::Off);
        assert_eq!(phone.lock_state(), LockState::Locked);
        assert_eq!(phone.battery(), BatteryLevel::FULL);
        assert!(phone.active_call().is_none());
    }

    #[test]
    fn full_name_and_specs() {
        let phone = phone();
        assert_eq!(phone.full_name(), "Samsung Galaxy S23");
        assert_eq!(phone.specs(), "256GB Storage, 8GB RAM, Android 14");
    }

    #[test]
    fn power_on_requires_battery_above_five() {
        let mut phone = phone();
        phone.set_battery(BatteryLevel::clamped(5));
        let outcome = phone.power_on();
        assert!(matches!(
            outcome.refusal(),
            Some(Refusal::BatteryTooLow { required: 6, .. })
        ));
        assert_eq!(phone.power(), PowerState::Off);

        phone.set_battery(BatteryLevel::clamped(6));
        assert!(phone.power_on().is_completed());
        assert_eq!(phone.power(), PowerState::On);
    }

    #[test]
    fn power_on_twice_is_refused() {
        let mut phone = phone();
        phone.power_on();
        assert_eq!(phone.power_on().refusal(), Some(&Refusal::AlreadyOn));
    }

    #[test]
    fn power_off_forces_lock_and_ends_call() {
        let mut phone = phone();
        phone.power_on();
        phone.unlock();
        phone.make_call("555-0123");
        assert!(phone.active_call().is_some());

        assert!(phone.power_off().is_completed());
        assert_eq!(phone.lock_state(), LockState::Locked);
        assert!(phone.active_call().is_none());
    }

    #[test]
    fn power_off_when_off_is_refused() {
        let mut phone = phone();
        assert_eq!(phone.power_off().refusal(), Some(&Refusal::AlreadyOff));
    }

    #[test]
    fn unlock_succeeds_only_when_on_and_locked() {
        let mut phone = phone();

        // Powered off: refused, state unchanged.
        assert_eq!(phone.unlock().refusal(), Some(&Refusal::PoweredOff));
        assert_eq!(phone.lock_state(), LockState::Locked);

        phone.power_on();
        assert!(phone.unlock().is_completed());
        assert_eq!(phone.lock_state(), LockState::Unlocked);

        // Already unlocked: refused, state unchanged.
        assert_eq!(phone.unlock().refusal(), Some(&Refusal::ScreenNotLocked));
        assert_eq!(phone.lock_state(), LockState::Unlocked);
    }

    #[test]
    fn lock_always_succeeds() {
        let mut phone = phone();
        assert!(phone.lock().is_completed());
        phone.power_on();
        phone.unlock();
        assert!(phone.lock().is_completed());
        assert_eq!(phone.lock_state(), LockState::Locked);
    }

    #[test]
    fn recharge_clamps_and_refuses_when_full() {
        let mut phone = phone();
        assert_eq!(phone.recharge(10).refusal(), Some(&Refusal::BatteryFull));

        phone.set_battery(BatteryLevel::clamped(80));
        assert!(phone.recharge(50).is_completed());
        assert_eq!(phone.battery(), BatteryLevel::FULL);
    }

    #[test]
    fn call_lifecycle() {
        let mut phone = phone();
        phone.power_on();

        let outcome = phone.make_call("555-0123");
        assert_eq!(outcome.message(), "calling 555-0123");
        assert_eq!(phone.active_call(), Some("555-0123"));
        assert_eq!(phone.battery().value(), 97);

        let outcome = phone.end_call();
        assert_eq!(outcome.message(), "ended call with 555-0123");
        assert_eq!(phone.end_call().refusal(), Some(&Refusal::NoActiveCall));
    }

    #[test]
    fn call_requires_power_and_battery() {
        let mut phone = phone();
        assert_eq!(
            phone.make_call("555-0123").refusal(),
            Some(&Refusal::PoweredOff)
        );

        phone.power_on();
        phone.set_battery(BatteryLevel::clamped(4));
        assert!(matches!(
            phone.make_call("555-0123").refusal(),
            Some(Refusal::BatteryTooLow { required: 5, .. })
        ));
    }

    #[test]
    fn send_message_records_and_drains() {
        let mut phone = phone();
        phone.power_on();
        assert!(phone.send_message("555-0123", "Hello!").is_completed());
        assert_eq!(phone.messages().len(), 1);
        assert_eq!(phone.messages()[0].to, "555-0123");
        assert_eq!(phone.battery().value(), 99);
    }

    #[test]
    fn install_app_respects_storage_model() {
        // 1 GB = 1024 MB = ten 100 MB app slots plus change.
        let mut phone = DeviceCore::new("Acme", "Mini", 1, 2, "Android");
        phone.power_on();

        for i in 0..10 {
            assert!(phone.install_app(&format!("app{i}"), 100).is_completed());
        }
        // 1000 MB used, 24 MB free: a 100 MB app no longer fits.
        let outcome = phone.install_app("one-too-many", 100);
        assert!(matches!(
            outcome.refusal(),
            Some(Refusal::InsufficientStorage { .. })
        ));
        assert_eq!(phone.apps().len(), 10);
    }

    #[test]
    fn take_photo_numbers_files() {
        let mut phone = phone();
        phone.power_on();
        phone.take_photo();
        phone.take_photo();
        assert_eq!(phone.photos()[0].file_name, "photo_1.jpg");
        assert_eq!(phone.photos()[1].file_name, "photo_2.jpg");
    }

    #[test]
    fn photo_requires_battery() {
        let mut phone = phone();
        phone.power_on();
        phone.set_battery(BatteryLevel::clamped(1));
        assert!(matches!(
            phone.take_photo().refusal(),
            Some(Refusal::BatteryTooLow { required: 2, .. })
        ));
        assert!(phone.photos().is_empty());
    }

    #[test]
    fn add_contact_works_while_off() {
        let mut phone = phone();
        assert!(phone.add_contact("Alice", "555-0100").is_completed());
        assert_eq!(phone.contacts().get("Alice").map(String::as_str), Some("555-0100"));
    }

    #[test]
    fn battery_never_below_zero() {
        let mut phone = phone();
        phone.set_battery(BatteryLevel::clamped(1));
        phone.consume_battery(200);
        assert_eq!(phone.battery(), BatteryLevel::EMPTY);
    }

    #[test]
    fn status_snapshot() {
        let mut phone = phone();
        phone.power_on();
        phone.add_contact("Alice", "555-0100");
        phone.take_photo();

        let status = phone.status();
        assert_eq!(status.full_name, "Samsung Galaxy S23");
        assert_eq!(status.power, PowerState::On);
        assert_eq!(status.contacts_saved, 1);
        assert_eq!(status.photos_taken, 1);

        // Snapshot is serializable.
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("Galaxy"));
    }
}
