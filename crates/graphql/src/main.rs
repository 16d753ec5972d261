mod cli;
mod command;
mod command_result;
mod commands;
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

fn setup_logger(cli: &Cli) {
    let mut invalid_env_level = None;
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(env_val) => parse_log_level(&env_val).unwrap_or_else(|| {
                    invalid_env_level = Some(env_val);
                    DEFAULT_LOG_LEVEL
                }),
                Err(_) => DEFAULT_LOG_LEVEL,
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(env_val) = invalid_env_level {
        log::warn!("Invalid `LOG_LEVEL` environment variable value: `{env_val}`");
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level. `verbose` is accepted as an
/// alias for `debug`.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "error" => Some(tracing::Level::ERROR),
        "info" => Some(tracing::Level::INFO),
        "trace" => Some(tracing::Level::TRACE),
        "warn" => Some(tracing::Level::WARN),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_log_level;

    #[test]
    fn parse_log_level_is_case_insensitive() {
        assert_eq!(parse_log_level(" Trace\n"), Some(tracing::Level::TRACE));
        assert_eq!(parse_log_level("VERBOSE"), Some(tracing::Level::DEBUG));
        assert_eq!(parse_log_level("warn"), Some(tracing::Level::WARN));
    }

    #[test]
    fn parse_log_level_rejects_unknown_levels() {
        assert_eq!(parse_log_level("loud"), None);
        assert_eq!(parse_log_level(""), None);
    }
}
