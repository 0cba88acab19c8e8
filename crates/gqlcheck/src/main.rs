mod cli;
mod command;
mod command_result;
mod commands;
mod graphql_files;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level. Unrecognized values fall
/// back to the default level with a warning to log once logging is up.
fn parse_log_level(value: &str) -> (tracing::Level, Option<String>) {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => (tracing::Level::TRACE, None),
        "debug" | "verbose" => (tracing::Level::DEBUG, None),
        "info" => (tracing::Level::INFO, None),
        "warn" => (tracing::Level::WARN, None),
        "error" => (tracing::Level::ERROR, None),
        _ => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `LOG_LEVEL` environment variable value: `{value}`")),
        ),
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn setup_logger(cli: &Cli) {
    let (log_level, warning) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(value) => parse_log_level(&value),
                Err(_) => (DEFAULT_LOG_LEVEL, None),
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
