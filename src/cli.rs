//! Plumbing shared by the model binaries
//!
//! Every binary has two modes. Invoked without any arguments it reads one
//! line of whitespace separated numbers from stdin and prints its answer on
//! a single line, which is what the automated course checker expects.
//! Otherwise it runs the exploratory version of the model, configured by
//! flags and an optional TOML file.
//!
//! Logs always go to stderr so that stdout only carries results.

use clap::{ArgAction, Args};
use gwm_core::config::load_parameters;
use gwm_core::{GwmError, GwmResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Flags accepted by every binary.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// TOML file overriding the default model parameters
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the results to FILE as JSON
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Increase logging (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommonArgs {
    pub fn init_logging(&self) {
        init_logging(self.verbose, self.quiet);
    }

    /// Parameters from `--config`, or the defaults.
    pub fn load_parameters<T>(&self) -> GwmResult<T>
    where
        T: DeserializeOwned + Default,
    {
        load_parameters(self.config.as_deref())
    }

    /// Write `value` to the `--json` file, if one was given.
    pub fn write_json<T: Serialize>(&self, value: &T) -> GwmResult<()> {
        match &self.json {
            Some(path) => write_json(path, value),
            None => Ok(()),
        }
    }
}

/// Log filter for the requested verbosity.
pub fn filter_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber; `RUST_LOG` takes precedence over the flags.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, quiet)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// True when the program was started without any arguments.
pub fn is_grader_invocation() -> bool {
    std::env::args_os().len() == 1
}

/// Whitespace separated fields from a single line of input.
#[derive(Debug, Clone)]
pub struct GraderInput {
    fields: Vec<String>,
    position: usize,
}

impl GraderInput {
    pub fn parse(line: &str) -> Self {
        Self {
            fields: line.split_whitespace().map(str::to_owned).collect(),
            position: 0,
        }
    }

    /// Read the first line from `reader`.
    pub fn from_reader<R: BufRead>(mut reader: R) -> GwmResult<Self> {
        let mut line = String::new();
        reader.read_line(&mut line).map_err(|source| GwmError::Io {
            path: "<stdin>".to_string(),
            source,
        })?;
        Ok(Self::parse(&line))
    }

    pub fn from_stdin() -> GwmResult<Self> {
        Self::from_reader(io::stdin().lock())
    }

    /// Parse the next field, `name` is used in error messages.
    pub fn next<T>(&mut self, name: &str) -> GwmResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let field = self.fields.get(self.position).ok_or_else(|| {
            GwmError::InvalidInput(format!(
                "expected {name} as input field {}, but the line only has {} fields",
                self.position + 1,
                self.fields.len()
            ))
        })?;
        self.position += 1;
        field
            .parse()
            .map_err(|e| GwmError::InvalidInput(format!("could not parse {name} from '{field}': {e}")))
    }
}

/// Numbers separated by single spaces.
pub fn format_numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:?}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Error for a failed write to stdout, such as a closed pipe.
pub fn stdout_error(source: io::Error) -> GwmError {
    GwmError::Io {
        path: "<stdout>".to_string(),
        source,
    }
}

/// Print `values` on one line of stdout.
pub fn print_numbers(values: &[f64]) -> GwmResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", format_numbers(values)).map_err(stdout_error)
}

/// Serialise `value` as pretty printed JSON into `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> GwmResult<()> {
    let file = File::create(path).map_err(|source| GwmError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| GwmError::Serialization(e.to_string()))?;
    writer.flush().map_err(|source| GwmError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), "Wrote results");
    Ok(())
}

/// Exit status for the outcome of a run, logging any error.
pub fn report(result: GwmResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
