//! # Hand Skeleton Frontend
//!
//! Listens for landmark packets directly and draws the marker scene: every
//! point marker as a dot, every line marker between the two points it was
//! wired to. Uses exactly the same overlay as the headless backend, so what
//! you see here is what the backend publishes.
//!
use anyhow::anyhow;
use clap::Parser;

use env_logger::Env;
use log::debug;
use model::Model;

use crate::cli::Cli;

mod cli;
mod model;
mod ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level))
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("eframe", log::LevelFilter::Warn)
        .init();

    debug!("Started; args: {:?}", cli);

    let model = Model::new(&cli)?;

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1280.0, 800.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Tether Hand Skeleton",
        options,
        Box::new(move |_cc| Box::new(model)),
    )
    .map_err(|e| anyhow!("Frontend window failed: {}", e))
}
