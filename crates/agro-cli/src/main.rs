use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

/// Shown in place of any error that escapes a command; details go to the log.
const FALLBACK_MESSAGE: &str = "something went wrong (re-run with --verbose for details)";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        tracing::error!(error = ?error, "command failed");
        eprintln!("agro: {}", user_message(&error));
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    match &cli.command {
        cli::Commands::Route(args) => return commands::route::handle(args, &flags),
        cli::Commands::Options(args) => return commands::options::handle(args, &flags),
        _ => {}
    }

    let config = agro_config::AgroConfig::load_with_dotenv()
        .context("failed to load agrodash configuration")?;
    let ctx = context::AppContext::init(config).context("failed to seed the agrodash store")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// Form validation errors are safe to show as-is; everything else is
/// replaced by the fallback message.
fn user_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<agro_app::AppError>() {
        Some(agro_app::AppError::Validation(message)) => message.clone(),
        _ => FALLBACK_MESSAGE.to_string(),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AGRO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{FALLBACK_MESSAGE, user_message};

    #[test]
    fn validation_errors_pass_through() {
        let error = anyhow::Error::new(agro_app::AppError::validation("Post title is required"));
        assert_eq!(user_message(&error), "Post title is required");
    }

    #[test]
    fn other_errors_are_replaced() {
        let error = anyhow::anyhow!("store exploded at row 7");
        assert_eq!(user_message(&error), FALLBACK_MESSAGE);

        let wrapped = anyhow::Error::new(agro_app::AppError::Route("x".into()))
            .context("while opening");
        assert_eq!(user_message(&wrapped), FALLBACK_MESSAGE);
    }
}
