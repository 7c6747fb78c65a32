// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interactive text-file annotator.
//!
//! Prompts for an input path, reads it (with Latin-1 fallback for
//! non-UTF-8 content), uppercases and line-numbers the content, and
//! writes the result to an output path. Read failures are reported by
//! kind and the prompt loops until a readable file is given or the user
//! gives up.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{Confirm, Input};

use devsim_lib::error::FileError;
use devsim_lib::textfile::{self, Document, TextEncoding};

/// Read a text file, annotate it, and write it back out.
#[derive(Parser)]
#[command(name = "refile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file. Prompted for when omitted.
    input: Option<PathBuf>,

    /// Output file. Defaults to `<input>_annotated.txt`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the annotated content before writing.
    #[arg(short, long)]
    preview: bool,
}

/// Lines shown by `--preview` before eliding.
const PREVIEW_LINES: usize = 10;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let Some((path, document)) = read_input(cli.input)? else {
        println!("nothing to do");
        return Ok(());
    };

    if document.encoding == TextEncoding::Latin1 {
        println!("note: {} is not valid UTF-8, decoded as Latin-1", path.display());
    }

    let annotated = textfile::annotate(&document.content);

    if cli.preview {
        print!("{}", textfile::preview(&annotated, PREVIEW_LINES));
    }

    let output = cli.output.unwrap_or_else(|| default_output(&path));
    if output.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists, overwrite?", output.display()))
            .default(false)
            .interact()
            .context("failed to read confirmation")?;
        if !overwrite {
            println!("aborted, nothing written");
            return Ok(());
        }
    }

    textfile::write_text(&output, &annotated)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "wrote {} annotated lines to {}",
        annotated.lines().count(),
        output.display()
    );
    Ok(())
}

/// Resolves an input file, prompting and retrying on read failures.
///
/// Returns `None` when the user declines to retry.
fn read_input(initial: Option<PathBuf>) -> Result<Option<(PathBuf, Document)>> {
    let mut next = initial;

    loop {
        let path = match next.take() {
            Some(path) => path,
            None => PathBuf::from(
                Input::<String>::new()
                    .with_prompt("input file")
                    .interact_text()
                    .context("failed to read input path")?,
            ),
        };

        match textfile::read_text(&path) {
            Ok(document) => return Ok(Some((path, document))),
            Err(err) => {
                report_read_error(&err);
                let retry = Confirm::new()
                    .with_prompt("try another file?")
                    .default(true)
                    .interact()
                    .context("failed to read confirmation")?;
                if !retry {
                    return Ok(None);
                }
            }
        }
    }
}

fn report_read_error(err: &FileError) {
    match err {
        FileError::NotFound(path) => {
            eprintln!("no such file: {}", path.display());
        }
        FileError::PermissionDenied(path) => {
            eprintln!("permission denied reading {}", path.display());
        }
        FileError::IsADirectory(path) => {
            eprintln!("{} is a directory, pick a file", path.display());
        }
        FileError::Io(io_err) => {
            eprintln!("read failed: {io_err}");
        }
    }
}

/// `notes.txt` becomes `notes_annotated.txt`.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_annotated.txt"))
}
