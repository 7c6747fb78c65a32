// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gaming-focused smartphone variant.

use serde::{Deserialize, Serialize};

use crate::outcome::{ActionOutcome, Refusal};

use super::{DeviceCore, Smartphone};

/// Battery cost of a gaming session in normal mode.
const PLAY_COST: u8 = 10;
/// Battery cost with game mode enabled.
const PLAY_COST_GAME_MODE: u8 = 15;

/// Smartphone specialized for gaming.
///
/// Adds a GPU, a high refresh rate display, and a game mode that trades
/// battery life for performance: playing costs 15% with game mode enabled,
/// 10% otherwise.
///
/// # Examples
///
/// ```
/// use devsim_lib::device::{GamingPhone, Smartphone};
///
/// let mut phone = GamingPhone::new("ASUS", "ROG Phone 6", "Adreno 730", 144);
/// phone.power_on();
/// phone.enable_game_mode();
///
/// let outcome = phone.play_game("Alien Swarm");
/// assert!(outcome.is_completed());
/// assert_eq!(phone.core().battery().value(), 85);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamingPhone {
    core: DeviceCore,
    gpu_model: String,
    refresh_rate_hz: u16,
    game_mode: bool,
    current_game: Option<String>,
}

impl GamingPhone {
    /// Creates a gaming phone with a gaming-tier configuration
    /// (512 GB storage, 16 GB RAM).
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        gpu_model: impl Into<String>,
        refresh_rate_hz: u16,
    ) -> Self {
        Self {
            core: DeviceCore::new(brand, model, 512, 16, "Android Gaming"),
            gpu_model: gpu_model.into(),
            refresh_rate_hz,
            game_mode: false,
            current_game: None,
        }
    }

    /// Returns the GPU model and refresh rate as a summary string.
    #[must_use]
    pub fn gaming_specs(&self) -> String {
        format!("{} GPU, {}Hz", self.gpu_model, self.refresh_rate_hz)
    }

    /// Returns `true` if game mode is enabled.
    #[must_use]
    pub const fn game_mode(&self) -> bool {
        self.game_mode
    }

    /// Returns the game currently being played, if any.
    #[must_use]
    pub fn current_game(&self) -> Option<&str> {
        self.current_game.as_deref()
    }

    /// Enables maximum-performance game mode.
    pub fn enable_game_mode(&mut self) -> ActionOutcome {
        self.game_mode = true;
        ActionOutcome::completed("game mode enabled, maximum performance")
    }

    /// Disables game mode.
    pub fn disable_game_mode(&mut self) -> ActionOutcome {
        self.game_mode = false;
        ActionOutcome::completed("game mode disabled")
    }

    /// Starts playing a game.
    ///
    /// The battery cost depends on the game mode flag. Refused while
    /// powered off or when the battery cannot cover the cost.
    pub fn play_game(&mut self, game: &str) -> ActionOutcome {
        if !self.core.power().is_on() {
            return Refusal::PoweredOff.into();
        }
        let cost = if self.game_mode {
            PLAY_COST_GAME_MODE
        } else {
            PLAY_COST
        };
        if !self.core.battery().covers(cost) {
            return Refusal::BatteryTooLow {
                required: cost,
                level: self.core.battery(),
            }
            .into();
        }
        self.current_game = Some(game.to_string());
        self.core.consume_battery(cost);
        ActionOutcome::completed(format!("playing {game} at {}Hz", self.refresh_rate_hz))
    }
}

impl Smartphone for GamingPhone {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }

    fn current_activity(&self) -> String {
        match &self.current_game {
            Some(game) => format!("gaming: {game}"),
            None => "ready for gaming".to_string(),
        }
    }
}
