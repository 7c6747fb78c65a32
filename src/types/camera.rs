// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Camera mode type for camera-focused phones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Shooting mode of a camera phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Automatic scene selection.
    #[default]
    Auto,
    /// Portrait mode with background blur.
    Portrait,
    /// Long-exposure night mode.
    Night,
    /// Close-up macro mode.
    Macro,
}

impl CameraMode {
    /// Returns the display string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Portrait => "Portrait",
            Self::Night => "Night",
            Self::Macro => "Macro",
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CameraMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "portrait" => Ok(Self::Portrait),
            "night" => Ok(Self::Night),
            "macro" => Ok(Self::Macro),
            _ => Err(ValueError::UnknownCameraMode(s.to_string())),
        }
    }
}
