//! # greet-cli
//!
//! Prints a greeting to the name given as the first command-line argument,
//! defaulting to `world`.
//!
//! The binary only parses arguments and sets up logging; everything that
//! decides what ends up on stdout lives here so it can be driven from tests
//! with an in-memory writer.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::ffi::OsStr;
use std::io::{self, Write};
use tracing::debug;

/// Name greeted when no argument is given.
pub const DEFAULT_NAME: &str = "world";

/// Render the greeting line for `name`, without a line terminator.
pub fn greet(name: &str) -> String {
    format!("Hello {}!", name)
}

/// Pick the name to greet: the argument if one was given, else [`DEFAULT_NAME`].
///
/// Arguments that are not valid UTF-8 are decoded lossily.
pub fn resolve_name(arg: Option<&OsStr>) -> Cow<'_, str> {
    match arg {
        Some(arg) => arg.to_string_lossy(),
        None => Cow::Borrowed(DEFAULT_NAME),
    }
}

/// Write the greeting for `name` followed by a single `\n`, then flush.
///
/// A reader that went away before we wrote (`BrokenPipe`) ends output early
/// and is not reported as an error.
pub fn write_greeting<W: Write>(mut out: W, name: &str) -> Result<()> {
    let line = greet(name);
    let written = writeln!(out, "{line}").and_then(|()| out.flush());

    match written {
        Ok(()) => {
            debug!(bytes = line.len() + 1, "greeting written");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed before the greeting was written");
            Ok(())
        }
        Err(err) => Err(err).context("Failed to write greeting to stdout"),
    }
}

/// Resolve the name from `arg` and write its greeting to `out`.
pub fn run<W: Write>(arg: Option<&OsStr>, out: W) -> Result<()> {
    let name = resolve_name(arg);
    debug!(name = %name, defaulted = arg.is_none(), "resolved name");
    write_greeting(out, &name)
}
