use std::path::PathBuf;

use color_eyre::Result;
use hey_account::{config, domain, infra};

mod action;
mod app;
mod cli;
mod components;
mod errors;
mod logging;
mod tui;

#[tokio::main]
async fn main() -> Result<()> {
    errors::install_hooks()?;

    let args = cli::Args::parse_args();

    let data_dir = args
        .data_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(config::get_data_dir);

    logging::init(&data_dir)?;

    let mut app = app::App::new(&args, &data_dir)?;

    app.run().await?;

    Ok(())
}
