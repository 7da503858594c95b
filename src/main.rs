// Main entry point - Argument parsing, dependency injection and the export run
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::ffi::OsString;
use std::io::Write;
use std::{process::ExitCode, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::export_service::ExportService;
use crate::infrastructure::config::load_export_config;
use crate::infrastructure::file_writer::DashboardWriter;
use crate::infrastructure::grafana_client::GrafanaClient;
use crate::presentation::cli::{parse_args, usage, ArgumentError, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for progress lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let status = execute(
        std::env::args_os(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await;
    ExitCode::from(status)
}

/// Parse arguments and run the export, returning the process exit status.
async fn execute<I, T>(args: I, stdout: &mut impl Write, stderr: &mut impl Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match parse_args(args) {
        Ok(cli) => cli,
        Err(ArgumentError::Info(info)) => {
            let _ = write!(stdout, "{}", info);
            return 0;
        }
        Err(ArgumentError::Usage { program, source }) => {
            tracing::debug!("Invalid arguments: {}", source);
            let _ = write!(stdout, "{}", usage(&program));
            return 1;
        }
    };

    match run(cli).await {
        Ok(count) => {
            tracing::info!("Exported {} dashboards", count);
            0
        }
        Err(e) => {
            tracing::error!("Export aborted");
            let _ = writeln!(stderr, "{}", e);
            1
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<usize> {
    // Load configuration
    let config = load_export_config(&cli)?;

    // Create the API source (infrastructure layer)
    let source = Arc::new(GrafanaClient::new(config.root_url, config.api_key)?);
    let writer = DashboardWriter::new(&config.output_dir);

    // Run the export (application layer)
    let report = ExportService::new(source, writer).run().await?;

    Ok(report.written.len())
}
