mod app;
mod cli;
mod controllers;
mod domain;
mod infra;
mod nav;
mod ui;
mod usecases;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    app::run(cli)
}
