use clap::Parser;
mod commands;
mod http;
mod logging;
use commands::cli;
use robotrun_core::{config, error};

#[tokio::main]
async fn main() -> Result<(), error::CliError> {
    let args = cli::Args::parse();
    let cfg = config::load_from(args.config.as_deref())?;
    let log_guard = logging::init(&cfg.logging);

    tracing::debug!(?cfg, "configuration loaded");

    let exit = dispatch(args.command, &cfg).await?;
    // process::exit skips destructors; flush the file writer first.
    drop(log_guard);
    if exit != 0 {
        std::process::exit(exit);
    }
    Ok(())
}

async fn dispatch(cmd: cli::Commands, cfg: &config::AppConfig) -> Result<i32, error::CliError> {
    match cmd {
        cli::Commands::Serve(serve_args) => {
            commands::serve::handle_serve(serve_args, cfg).await?;
            Ok(0)
        }
        cli::Commands::Execute(execute_args) => {
            commands::execute::handle_execute(execute_args, cfg).await
        }
        cli::Commands::Parse(parse_args) => commands::parse::handle_parse(parse_args),
    }
}
