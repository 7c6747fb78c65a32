// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `DevSim` Lib - A Rust library to model stateful smart devices and vehicles.
//!
//! Devices and vehicles are state machines with explicit preconditions: a
//! powered-off phone cannot make a call, an anchored boat cannot sail. Those
//! precondition failures are reported as values via
//! [`ActionOutcome`](outcome::ActionOutcome), never as errors or panics, so
//! driving a device through an arbitrary action sequence is always safe.
//!
//! # Supported Features
//!
//! - **Smartphones**: Power, lock, battery, calls, messages, apps, photos,
//!   with gaming and camera variants layered on a shared core
//! - **Vehicles**: Cars, motorcycles, airplanes, boats, bicycles, and
//!   helicopters behind one [`Vehicle`](vehicle::Vehicle) trait
//! - **Fleet registry**: Heterogeneous device management with lifecycle
//!   event callbacks
//! - **Utilities**: Four-op arithmetic, threshold discounts, and text-file
//!   annotation with encoding fallback
//!
//! # Quick Start
//!
//! ## Driving a Smartphone
//!
//! ```
//! use devsim_lib::device::{DeviceCore, Smartphone};
//!
//! let mut phone = DeviceCore::new("Samsung", "Galaxy S23", 256, 8, "Android 14");
//!
//! // Preconditions are reported, not thrown.
//! let refused = phone.make_call("555-0100");
//! assert!(refused.is_refused());
//!
//! phone.power_on();
//! phone.unlock();
//! assert!(phone.make_call("555-0100").is_completed());
//! ```
//!
//! ## Polymorphic Vehicles
//!
//! ```
//! use devsim_lib::vehicle::{Bicycle, Boat, Car, Vehicle};
//!
//! let mut garage: Vec<Box<dyn Vehicle>> = vec![
//!     Box::new(Car::new("Toyota", "Camry", 4)),
//!     Box::new(Boat::new("Yamaha", "242X", "Speedboat")),
//!     Box::new(Bicycle::new("Trek", "FX 3", 9)),
//! ];
//!
//! for vehicle in &mut garage {
//!     vehicle.start_engine();
//!     // The same call; each variant applies its own rules.
//!     let outcome = vehicle.travel();
//!     println!("{outcome}");
//! }
//! ```
//!
//! ## Fleet with Event Callbacks
//!
//! ```
//! use devsim_lib::device::GamingPhone;
//! use devsim_lib::fleet::{Fleet, FleetEvent};
//!
//! let fleet = Fleet::new();
//! fleet.subscribe(|event| {
//!     if let FleetEvent::DeviceAdded { full_name, .. } = event {
//!         println!("registered {full_name}");
//!     }
//! });
//!
//! let id = fleet.register(Box::new(GamingPhone::new("Asus", "ROG 8", "Adreno 750", 165)));
//! assert!(fleet.status(id).is_ok());
//! ```

pub mod calc;
pub mod device;
pub mod error;
pub mod fleet;
pub mod outcome;
pub mod pricing;
pub mod textfile;
pub mod types;
pub mod vehicle;

pub use calc::Operator;
pub use device::{CameraPhone, DeviceCore, GamingPhone, Smartphone, StatusReport};
pub use error::{CalcError, Error, FileError, Result, ValueError};
pub use fleet::{DeviceId, Fleet, FleetEvent, SubscriptionId};
pub use outcome::{ActionOutcome, Refusal};
pub use pricing::{DISCOUNT_THRESHOLD, DiscountQuote};
pub use textfile::{Document, TextEncoding, annotate, preview, read_text, write_text};
pub use types::{
    Altitude, BatteryLevel, CameraMode, FuelType, LockState, PowerState, Speed,
};
pub use vehicle::{
    Airplane, Bicycle, Boat, Car, Helicopter, Motorcycle, Vehicle, VehicleCore, VehicleKind,
    VehicleStatus,
};
