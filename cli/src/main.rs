use clap::Parser;
use colored::Colorize;
use infrastructure::config::Config;
use presentation::cli::{Cli, CliApp};
use shared::logging;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let config = Config::load().with_api_base(cli.api_base.as_deref());
    let mut app = CliApp::new(config);
    match app.run(cli.command).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
