mod archive;
mod cli;
mod config;
mod drive;
mod error;
mod kube;
mod pipeline;
mod retention;
mod ui;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;

use cli::Cli;
use config::Config;
use drive::DriveClient;
use kube::PodTarget;
use pipeline::DumpPipeline;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Argument errors go to stdout and exit 1, before anything
            // remote is contacted.
            println!("{}", err.render());
            std::process::exit(1);
        }
    };

    // Load environment variables from a local .env file, if present.
    dotenvy::dotenv().ok();
    let config = Config::load();

    if let Err(err) = run(cli, config).await {
        ui::print_failure(&err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let progress = ui::StepProgress::start("Authenticating to Google Drive");
    let drive = DriveClient::authenticate(Path::new(&config.service_account_file))
        .await
        .context("failed to authenticate with the service account")?;
    progress.done("Authenticated");

    let target = PodTarget::new(cli.namespace, cli.pod);
    let pipeline = DumpPipeline {
        config,
        drive,
        target,
    };

    let link = pipeline.run().await?;
    ui::print_link(&link);
    Ok(())
}
