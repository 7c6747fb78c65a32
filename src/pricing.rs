// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Threshold-gated percentage discounts.
//!
//! A discount only applies at or above [`DISCOUNT_THRESHOLD`] percent;
//! below it the price passes through untouched. The quote keeps the
//! inputs alongside the result so callers can render the whole story.

use serde::{Deserialize, Serialize};

/// Minimum discount percentage for a discount to apply, inclusive.
pub const DISCOUNT_THRESHOLD: f64 = 20.0;

/// Result of a discount calculation.
///
/// # Examples
///
/// ```
/// use devsim_lib::pricing::DiscountQuote;
///
/// let quote = DiscountQuote::calculate(100.0, 20.0);
/// assert_eq!(quote.final_price, 80.0);
/// assert!(quote.is_applied());
///
/// let quote = DiscountQuote::calculate(100.0, 19.0);
/// assert_eq!(quote.final_price, 100.0);
/// assert!(!quote.is_applied());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountQuote {
    /// Price before any discount.
    pub original_price: f64,
    /// Requested discount percentage.
    pub discount_percent: f64,
    /// Price after the discount, if one applied.
    pub final_price: f64,
}

impl DiscountQuote {
    /// Quotes `price` with `discount_percent` applied when it reaches
    /// [`DISCOUNT_THRESHOLD`].
    #[must_use]
    pub fn calculate(price: f64, discount_percent: f64) -> Self {
        let final_price = if discount_percent >= DISCOUNT_THRESHOLD {
            price * (1.0 - discount_percent / 100.0)
        } else {
            price
        };
        Self {
            original_price: price,
            discount_percent,
            final_price,
        }
    }

    /// Returns `true` if the discount was actually applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.discount_percent >= DISCOUNT_THRESHOLD
    }

    /// Returns the amount saved.
    #[must_use]
    pub fn savings(&self) -> f64 {
        self.original_price - self.final_price
    }
}
