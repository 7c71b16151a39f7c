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
            Err(e) => {
                eprintln!("{} {e:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, log_level_warning) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            match log_level_from_env(env_val.as_deref()) {
                Ok(level) => (level, None),
                Err(warning) => (DEFAULT_LOG_LEVEL, Some(warning)),
            }
        };

    // stdout is reserved for command output.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = log_level_warning {
        log::warn!("{warning}");
    }
}

/// Parses the `LOG_LEVEL` environment variable (`error`, `warn`, `info`,
/// `debug` or `trace`, in any case). Unset or blank means the default
/// level.
fn log_level_from_env(env_val: Option<&str>) -> Result<tracing::Level, String> {
    match env_val.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(other) => other.parse().map_err(|_| format!(
            "Invalid `LOG_LEVEL` environment variable value: `{other}`"
        )),
    }
}

#[cfg(test)]
mod tests;
