mod args;
mod cmd;
mod config;
mod controller;
mod error;
mod post;
mod render;
mod source;
mod view;

use crate::args::{Args, Command};
use crate::config::Config;
use crate::error::Result;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = Config::load_or_default(&args.config)?;
    log::debug!("{:?}", args);
    log::debug!("{:?}", config);

    match args.command {
        Command::Build(view) => cmd::build(&config, &view).await,
        Command::Show(view) => cmd::show(&config, &view).await,
        Command::Serve => cmd::serve(&config).await,
        Command::Clean => cmd::clean(&config).await,
    }
}
