use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Run Robot Framework suites and report a verdict")]
pub struct Args {
    /// Config file (defaults to ./config.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP service.
    Serve(ServeArgs),
    /// Run the suite once against a URL and print the verdict.
    Execute(ExecuteArgs),
    /// Extract a verdict from an existing report and/or console capture.
    Parse(ParseArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ServeArgs {
    /// Overrides `http_server.host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Overrides `http_server.port`.
    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long)]
    pub session_id: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ExecuteArgs {
    #[arg(long)]
    pub url: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ParseArgs {
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Captured console output of the same run.
    #[arg(long)]
    pub console: Option<PathBuf>,
}
