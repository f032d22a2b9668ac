//! # greet
//!
//! Binary entry point: `greet [NAME]` prints `Hello <NAME>!`, or
//! `Hello world!` when no name is given.
//!
//! Logs go to stderr and are off below `warn` unless `RUST_LOG` says
//! otherwise, so stdout carries only the greeting.

use clap::Parser;
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Print a greeting to NAME, or to the world
#[derive(Parser, Debug)]
#[command(name = "greet", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Who to greet.
    #[arg(value_name = "NAME")]
    name: Option<OsString>,

    /// Ignored.
    #[arg(hide = true, num_args = 1..)]
    rest: Vec<OsString>,
}

/// Put an end-of-options marker right after the binary name, so every user
/// argument is a value. A user's own `--` is then just a name.
fn escape_args<I, T>(args: I) -> impl Iterator<Item = OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let bin = args.next().unwrap_or_else(|| OsString::from("greet"));

    std::iter::once(bin)
        .chain(std::iter::once(OsString::from("--")))
        .chain(args)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() {
    let cli = Cli::parse_from(escape_args(std::env::args_os()));

    init_logging();

    if !cli.rest.is_empty() {
        debug!(ignored = cli.rest.len(), "ignoring extra arguments");
    }

    // Exit status stays 0 even when stdout cannot take the greeting.
    if let Err(err) = greet_cli::run(cli.name.as_deref(), io::stdout().lock()) {
        warn!("{err:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(escape_args(std::iter::once("greet").chain(args.iter().copied())))
            .expect("arguments should always parse")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_yields_no_name() {
        assert_eq!(parse(&[]).name, None);
    }

    #[test]
    fn test_first_argument_is_the_name() {
        assert_eq!(parse(&["Alice"]).name.as_deref(), Some(OsStr::new("Alice")));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let cli = parse(&["Alice", "Bob", "--carol"]);
        assert_eq!(cli.name.as_deref(), Some(OsStr::new("Alice")));
        assert_eq!(cli.rest.len(), 2);
    }

    #[test]
    fn test_hyphen_arguments_are_names() {
        for arg in ["-", "-x", "-h", "-V", "--help", "--version"] {
            assert_eq!(parse(&[arg]).name.as_deref(), Some(OsStr::new(arg)));
        }
    }

    #[test]
    fn test_double_dash_is_a_name() {
        assert_eq!(parse(&["--"]).name.as_deref(), Some(OsStr::new("--")));

        let cli = parse(&["--", "Alice"]);
        assert_eq!(cli.name.as_deref(), Some(OsStr::new("--")));
        assert_eq!(cli.rest, vec![OsString::from("Alice")]);
    }

    #[test]
    fn test_empty_argument_is_a_name() {
        assert_eq!(parse(&[""]).name.as_deref(), Some(OsStr::new("")));
    }

    #[test]
    fn test_escape_args_without_binary_name() {
        let args: Vec<OsString> = escape_args(Vec::<OsString>::new()).collect();
        assert_eq!(args, vec![OsString::from("greet"), OsString::from("--")]);
    }
}
