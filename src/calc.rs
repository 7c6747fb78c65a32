// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Four-operation arithmetic.
//!
//! Parsing an operator symbol and evaluating it are separate failure
//! domains: an unknown symbol is a [`ValueError`], while division by
//! zero is a [`CalcError`] raised at evaluation time.
//!
//! # Examples
//!
//! ```
//! use devsim_lib::calc::Operator;
//!
//! let op: Operator = "/".parse()?;
//! assert_eq!(op.evaluate(6.0, 3.0)?, 2.0);
//! # Ok::<(), devsim_lib::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, ValueError};

/// One of the four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Subtract,
    /// Multiplication (`*`).
    Multiply,
    /// Division (`/`).
    Divide,
}

impl Operator {
    /// All operators, in display order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operation to `lhs` and `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when dividing by zero.
    pub fn evaluate(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            other => Err(ValueError::InvalidOperator(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_arithmetic() {
        assert_eq!(Operator::Add.evaluate(2.0, 3.0).unwrap(), 5.0);
        assert_eq!(Operator::Subtract.evaluate(2.0, 3.0).unwrap(), -1.0);
        assert_eq!(Operator::Multiply.evaluate(2.0, 3.0).unwrap(), 6.0);
        assert_eq!(Operator::Divide.evaluate(6.0, 3.0).unwrap(), 2.0);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let result = Operator::Divide.evaluate(5.0, 0.0);
        assert!(matches!(result, Err(CalcError::DivisionByZero)));
    }

    #[test]
    fn zero_divided_is_fine() {
        assert_eq!(Operator::Divide.evaluate(0.0, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn parse_symbols() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
        }
        // Whitespace is tolerated.
        assert_eq!(" / ".parse::<Operator>().unwrap(), Operator::Divide);
    }

    #[test]
    fn parse_unknown_symbol() {
        let err = "%".parse::<Operator>().unwrap_err();
        assert!(matches!(err, ValueError::InvalidOperator(s) if s == "%"));
    }

    #[test]
    fn fractional_division() {
        assert_eq!(Operator::Divide.evaluate(7.0, 2.0).unwrap(), 3.5);
    }
}
