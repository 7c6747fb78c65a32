// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fleet registry for coordinating multiple smartphones.
//!
//! The [`Fleet`] holds heterogeneous devices behind `dyn Smartphone` and
//! drives them through the shared trait, so a camera phone and a gaming
//! phone sit side by side in the same registry. Lifecycle changes are
//! announced to subscribers via [`FleetEvent`] callbacks.

mod device_id;

pub use device_id::DeviceId;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::device::{Smartphone, StatusReport};
use crate::error::Error;

/// Unique identifier for a fleet event subscription.
///
/// Returned by [`Fleet::subscribe`] and used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Lifecycle event published by a [`Fleet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetEvent {
    /// A device was registered.
    DeviceAdded {
        /// ID of the new device.
        device_id: DeviceId,
        /// Brand and model of the new device.
        full_name: String,
    },
    /// A device was removed.
    DeviceRemoved {
        /// ID of the removed device.
        device_id: DeviceId,
    },
}

type EventCallback = Arc<dyn Fn(&FleetEvent) + Send + Sync>;

/// Registry coordinating a heterogeneous set of smartphones.
///
/// Devices are stored behind `dyn Smartphone`, so every fleet-wide
/// operation dispatches to the concrete variant's behavior.
///
/// # Examples
///
/// ```
/// use devsim_lib::device::{CameraPhone, DeviceCore, GamingPhone};
/// use devsim_lib::fleet::Fleet;
///
/// let fleet = Fleet::new();
/// let plain = fleet.register(Box::new(DeviceCore::new("Nokia", "3310", 1, 1, "Series 30")));
/// fleet.register(Box::new(GamingPhone::new("Asus", "ROG 8", "Adreno 750", 165)));
/// fleet.register(Box::new(CameraPhone::new("Google", "Pixel 9", 50, 1.7)));
///
/// assert_eq!(fleet.len(), 3);
/// let status = fleet.status(plain).unwrap();
/// assert_eq!(status.full_name, "Nokia 3310");
/// ```
pub struct Fleet {
    devices: Arc<RwLock<HashMap<DeviceId, Box<dyn Smartphone + Send + Sync>>>>,
    next_subscription: AtomicU64,
    subscribers: RwLock<HashMap<SubscriptionId, EventCallback>>,
}

impl Fleet {
    /// Creates an empty fleet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            devices: Arc::new(RwLock::new(HashMap::new())),
            next_subscription: AtomicU64::new(1),
            subscribers: RwLock::new(HashMap::new()),
        }
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Registers a callback for fleet lifecycle events.
    ///
    /// Callbacks are invoked synchronously, in arbitrary order, on the
    /// thread that triggered the event.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&FleetEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers.write().insert(id, Arc::new(callback));
        id
    }

    /// Unregisters a callback.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.write().remove(&id).is_some()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    fn publish(&self, event: &FleetEvent) {
        let subscribers = self.subscribers.read();
        for callback in subscribers.values() {
            callback(event);
        }
    }

    // =========================================================================
    // Device Management
    // =========================================================================

    /// Registers a device and returns its ID.
    pub fn register(&self, device: Box<dyn Smartphone + Send + Sync>) -> DeviceId {
        let device_id = device.core().id();
        let full_name = device.core().full_name();

        self.devices.write().insert(device_id, device);
        tracing::info!(%device_id, %full_name, "device registered");

        self.publish(&FleetEvent::DeviceAdded {
            device_id,
            full_name,
        });
        device_id
    }

    /// Removes a device from the fleet.
    ///
    /// Returns `true` if the device was found and removed.
    pub fn remove(&self, device_id: DeviceId) -> bool {
        let removed = self.devices.write().remove(&device_id).is_some();

        if removed {
            tracing::info!(%device_id, "device removed");
            self.publish(&FleetEvent::DeviceRemoved { device_id });
        }
        removed
    }

    /// Returns the IDs of all registered devices.
    #[must_use]
    pub fn device_ids(&self) -> Vec<DeviceId> {
        self.devices.read().keys().copied().collect()
    }

    /// Returns the number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    /// Returns `true` if no devices are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }

    // =========================================================================
    // Device Access
    // =========================================================================

    /// Runs `f` against a device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if the ID is unknown.
    pub fn with_device<T, F>(&self, device_id: DeviceId, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut (dyn Smartphone + Send + Sync)) -> T,
    {
        let mut devices = self.devices.write();
        let device = devices.get_mut(&device_id).ok_or(Error::DeviceNotFound)?;
        Ok(f(device.as_mut()))
    }

    /// Returns a device's status report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if the ID is unknown.
    pub fn status(&self, device_id: DeviceId) -> Result<StatusReport, Error> {
        let devices = self.devices.read();
        let device = devices.get(&device_id).ok_or(Error::DeviceNotFound)?;
        Ok(device.status())
    }

    /// Returns status reports for every registered device.
    #[must_use]
    pub fn statuses(&self) -> Vec<StatusReport> {
        self.devices.read().values().map(|d| d.status()).collect()
    }

    /// Powers off every device in the fleet. Devices that are already
    /// off refuse and are left as they were.
    pub fn power_off_all(&self) {
        let mut devices = self.devices.write();
        for device in devices.values_mut() {
            let outcome = device.power_off();
            tracing::debug!(
                device_id = %device.core().id(),
                outcome = %outcome,
                "fleet power off"
            );
        }
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Fleet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fleet")
            .field("device_count", &self.len())
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    use crate::device::{CameraPhone, DeviceCore, GamingPhone};

    fn plain_phone() -> Box<dyn Smartphone + Send + Sync> {
        Box::new(DeviceCore::new("Nokia", "3310", 1, 1, "Series 30"))
    }

    #[test]
    fn new_fleet_is_empty() {
        let fleet = Fleet::new();
        assert!(fleet.is_empty());
        assert!(fleet.device_ids().is_empty());
    }

    #[test]
    fn register_returns_device_id() {
        let fleet = Fleet::new();
        let id = fleet.register(plain_phone());

        assert_eq!(fleet.len(), 1);
        assert!(fleet.device_ids().contains(&id));
    }

    #[test]
    fn register_publishes_event() {
        let fleet = Fleet::new();
        let seen = Arc::new(RwLock::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);

        fleet.subscribe(move |event| seen_clone.write().push(event.clone()));

        let id = fleet.register(plain_phone());

        let events = seen.read();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            FleetEvent::DeviceAdded { device_id, full_name }
                if *device_id == id && full_name == "Nokia 3310"
        ));
    }

    #[test]
    fn remove_publishes_event() {
        let fleet = Fleet::new();
        let id = fleet.register(plain_phone());

        let count = Arc::new(AtomicU32::new(0));
        let count_clone = Arc::clone(&count);
        fleet.subscribe(move |event| {
            if matches!(event, FleetEvent::DeviceRemoved { .. }) {
                count_clone.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert!(fleet.remove(id));
        assert!(fleet.is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn remove_nonexistent_returns_false() {
        let fleet = Fleet::new();
        assert!(!fleet.remove(DeviceId::new()));
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let fleet = Fleet::new();
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = Arc::clone(&count);

        let sub = fleet.subscribe(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(fleet.subscriber_count(), 1);

        fleet.register(plain_phone());
        assert_eq!(count.load(Ordering::SeqCst), 1);

        assert!(fleet.unsubscribe(sub));
        assert!(!fleet.unsubscribe(sub));

        fleet.register(plain_phone());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn with_device_dispatches_to_variant() {
        let fleet = Fleet::new();
        let gaming = fleet.register(Box::new(GamingPhone::new(
            "Asus",
            "ROG 8",
            "Adreno 750",
            165,
        )));
        let camera = fleet.register(Box::new(CameraPhone::new("Google", "Pixel 9", 50, 1.7)));

        fleet
            .with_device(gaming, |phone| {
                phone.power_on();
                assert_eq!(phone.current_activity(), "ready for gaming");
            })
            .unwrap();

        fleet
            .with_device(camera, |phone| {
                phone.power_on();
                phone.unlock();
                let outcome = phone.take_photo();
                assert!(outcome.message().contains("high-quality photo"));
            })
            .unwrap();
    }

    #[test]
    fn with_device_unknown_id_is_an_error() {
        let fleet = Fleet::new();
        let result = fleet.with_device(DeviceId::new(), |_| ());
        assert!(matches!(result, Err(Error::DeviceNotFound)));
    }

    #[test]
    fn statuses_cover_all_devices() {
        let fleet = Fleet::new();
        fleet.register(plain_phone());
        fleet.register(Box::new(CameraPhone::new("Google", "Pixel 9", 50, 1.7)));

        let statuses = fleet.statuses();
        assert_eq!(statuses.len(), 2);
    }

    #[test]
    fn power_off_all_is_idempotent() {
        let fleet = Fleet::new();
        let id = fleet.register(plain_phone());
        fleet.with_device(id, |phone| assert!(phone.power_on().is_completed()))
            .unwrap();

        fleet.power_off_all();
        // Second pass hits already-off devices without panicking.
        fleet.power_off_all();

        let status = fleet.status(id).unwrap();
        assert!(!status.power.is_on());
    }

    #[test]
    fn debug_reports_counts() {
        let fleet = Fleet::new();
        fleet.register(plain_phone());
        let debug = format!("{fleet:?}");
        assert!(debug.contains("device_count"));
    }
}
