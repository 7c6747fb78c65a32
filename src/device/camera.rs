// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Camera-focused smartphone variant.

use serde::{Deserialize, Serialize};

use crate::outcome::{ActionOutcome, Refusal};
use crate::types::CameraMode;

use super::{DeviceCore, Smartphone};

/// Minimum battery level for a high-quality photo.
const HQ_PHOTO_MIN: u8 = 3;
/// Battery cost of a high-quality photo.
const HQ_PHOTO_COST: u8 = 2;

/// Smartphone specialized for photography.
///
/// Adds a high-resolution sensor, flash, and shooting modes. Overrides
/// [`Smartphone::take_photo`] with a higher battery cost and a success
/// message that carries the flash and mode context; everything else is
/// inherited from the base device.
///
/// # Examples
///
/// ```
/// use devsim_lib::device::{CameraPhone, Smartphone};
/// use devsim_lib::types::CameraMode;
///
/// let mut phone = CameraPhone::new("Google", "Pixel 8", 50, 1.7);
/// phone.power_on();
/// phone.enable_flash();
/// phone.set_mode(CameraMode::Portrait);
///
/// let outcome = phone.take_photo();
/// assert_eq!(
///     outcome.message(),
///     "high-quality photo taken with flash in Portrait mode"
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraPhone {
    core: DeviceCore,
    sensor_mp: u16,
    aperture: f32,
    mode: CameraMode,
    flash: bool,
}

impl CameraPhone {
    /// Creates a camera phone with a photography-tier configuration
    /// (256 GB storage, 8 GB RAM).
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        sensor_mp: u16,
        aperture: f32,
    ) -> Self {
        Self {
            core: DeviceCore::new(brand, model, 256, 8, "Android Camera"),
            sensor_mp,
            aperture,
            mode: CameraMode::default(),
            flash: false,
        }
    }

    /// Returns the sensor resolution and aperture as a summary string.
    #[must_use]
    pub fn camera_specs(&self) -> String {
        format!("{}MP, f/{}", self.sensor_mp, self.aperture)
    }

    /// Returns the current shooting mode.
    #[must_use]
    pub const fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Returns `true` if the flash is enabled.
    #[must_use]
    pub const fn flash(&self) -> bool {
        self.flash
    }

    /// Enables the flash.
    pub fn enable_flash(&mut self) -> ActionOutcome {
        self.flash = true;
        ActionOutcome::completed("flash enabled")
    }

    /// Disables the flash.
    pub fn disable_flash(&mut self) -> ActionOutcome {
        self.flash = false;
        ActionOutcome::completed("flash disabled")
    }

    /// Sets the shooting mode.
    pub fn set_mode(&mut self, mode: CameraMode) -> ActionOutcome {
        self.mode = mode;
        ActionOutcome::completed(format!("camera mode set to {mode}"))
    }
}

impl Smartphone for CameraPhone {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }

    /// Takes a high-quality photo.
    ///
    /// Same result-contract shape as the base action, different
    /// preconditions and cost.
    fn take_photo(&mut self) -> ActionOutcome {
        if !self.core.power().is_on() {
            return Refusal::PoweredOff.into();
        }
        if !self.core.battery().covers(HQ_PHOTO_MIN) {
            return Refusal::BatteryTooLow {
                required: HQ_PHOTO_MIN,
                level: self.core.battery(),
            }
            .into();
        }
        self.core.store_photo("hq_photo");
        self.core.consume_battery(HQ_PHOTO_COST);
        let flash = if self.flash { "with flash" } else { "without flash" };
        ActionOutcome::completed(format!(
            "high-quality photo taken {flash} in {} mode",
            self.mode
        ))
    }

    fn current_activity(&self) -> String {
        format!("camera ready: {}", self.camera_specs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BatteryLevel;

    fn phone() -> CameraPhone {
        CameraPhone::new("Google", "Pixel 8", 50, 1.7)
    }

    #[test]
    fn camera_specs() {
        assert_eq!(phone().camera_specs(), "50MP, f/1.7");
    }

    #[test]
    fn hq_photo_message_and_cost() {
        let mut p = phone();
        p.power_on();
        let outcome = p.take_photo();
        assert_eq!(
            outcome.message(),
            "high-quality photo taken without flash in Auto mode"
        );
        assert_eq!(p.core().battery().value(), 98);
        assert_eq!(p.core().photos()[0].file_name, "hq_photo_1.jpg");
    }

    #[test]
    fn flash_and_mode_reflected_in_message() {
        let mut p = phone();
        p.power_on();
        p.enable_flash();
        p.set_mode(CameraMode::Night);
        assert_eq!(
            p.take_photo().message(),
            "high-quality photo taken with flash in Night mode"
        );
    }

    #[test]
    fn hq_photo_needs_more_battery_than_base() {
        let mut p = phone();
        p.power_on();
        // 2% would be enough for a base photo, not for the override.
        p.core_mut().set_battery(BatteryLevel::clamped(2));
        assert!(matches!(
            p.take_photo().refusal(),
            Some(Refusal::BatteryTooLow { required: 3, .. })
        ));
    }

    #[test]
    fn refused_when_off() {
        let mut p = phone();
        assert_eq!(p.take_photo().refusal(), Some(&Refusal::PoweredOff));
    }

    #[test]
    fn activity_reports_specs() {
        assert_eq!(phone().current_activity(), "camera ready: 50MP, f/1.7");
    }

    #[test]
    fn inherits_base_photo_numbering() {
        let mut p = phone();
        p.power_on();
        p.take_photo();
        p.take_photo();
        assert_eq!(p.core().photos()[1].file_name, "hq_photo_2.jpg");
    }
}
