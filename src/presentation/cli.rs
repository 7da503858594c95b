//! Command line surface.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};

/// Export every dashboard of a monitoring service to local JSON files
#[derive(Parser, Debug)]
#[command(name = "export", version)]
pub struct Cli {
    /// Base URL of the service, e.g. https://grafana.example.com
    #[arg(value_name = "rootURL")]
    pub root_url: String,

    /// API key sent as a bearer token
    #[arg(value_name = "apiKey")]
    pub api_key: String,

    /// Directory the dashboard files are written to [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Outcome of argument parsing that does not lead to an export.
#[derive(Debug)]
pub enum ArgumentError {
    /// Help or version was requested; print it and exit successfully.
    Info(clap::Error),
    /// Wrong arguments; print usage and exit with status 1.
    Usage { program: String, source: clap::Error },
}

pub fn parse_args<I, T>(args: I) -> Result<Cli, ArgumentError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let args: Vec<std::ffi::OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string());

    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgumentError::Info(err),
        _ => ArgumentError::Usage {
            program,
            source: err,
        },
    })
}

/// Usage line followed by the argument and option list.
pub fn usage(program: &str) -> String {
    let mut command = Cli::command()
        .bin_name(program.to_string())
        .override_usage(format!("{} <rootURL> <apiKey>", program))
        .help_template("{usage-heading} {usage}\n\n{all-args}\n");
    command.render_help().to_string()
}
