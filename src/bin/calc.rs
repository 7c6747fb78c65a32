// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line four-operation calculator.
//!
//! ```bash
//! calc 6 / 3
//! calc 2.5 + 4
//! ```
//!
//! Invalid operators and division by zero are reported on stderr with a
//! non-zero exit status; the program never panics on bad input.

use std::process::ExitCode;

use clap::Parser;

use devsim_lib::calc::Operator;

/// Evaluate a single arithmetic expression.
#[derive(Parser)]
#[command(name = "calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Left-hand operand.
    lhs: f64,

    /// Operator: one of `+`, `-`, `*`, `/`.
    operator: String,

    /// Right-hand operand.
    rhs: f64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let operator: Operator = match cli.operator.parse() {
        Ok(op) => op,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match operator.evaluate(cli.lhs, cli.rhs) {
        Ok(result) => {
            println!("{} {} {} = {}", cli.lhs, operator, cli.rhs, result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
