use std::net::SocketAddr;
use std::path::Path;
use std::thread;
use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use log::{debug, error, info, warn};
use tether_agent::{TetherAgent, TetherAgentOptionsBuilder};

use tether_hand_skeleton::backend_config::load_config_from_file;
use tether_hand_skeleton::overlay::HandOverlay;
use tether_hand_skeleton::tether_interface::Outputs;
use tether_hand_skeleton::udp_interface::LandmarkReceiver;

use crate::cli::Cli;

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level))
        .filter_module("paho_mqtt", log::LevelFilter::Warn)
        .filter_module("tether_agent", log::LevelFilter::Warn)
        .init();

    debug!("Started; args: {:?}", cli);

    let config = load_config_from_file(&cli.config_path)?;
    if !Path::new(&cli.config_path).exists() {
        config.write_config_to_file(&cli.config_path)?;
    }

    let mut overlay = HandOverlay::new(&config)?;
    let mut receiver = LandmarkReceiver::bind(SocketAddr::new(cli.udp_host, cli.udp_port))?;

    let tether: Option<(TetherAgent, Outputs)> = if cli.tether_disable {
        warn!("Tether disabled; smoothed landmarks will only be logged");
        None
    } else {
        let mut tether_agent = TetherAgentOptionsBuilder::new(&cli.agent_role)
            .id(Some(&cli.agent_group))
            .host(Some(&cli.tether_host.to_string()))
            .build()?;
        let outputs = Outputs::new(&mut tether_agent)?;
        info!("Publish config with retain=true");
        outputs.publish_config(&tether_agent, &config)?;
        Some((tether_agent, outputs))
    };

    let update_interval = Duration::from_millis(config.smoothing_update_interval);
    let mut was_active = false;

    loop {
        let mut work_done = false;

        match receiver.check_messages() {
            Ok(Some(payload)) => {
                work_done = true;
                // Bad packets are already counted and logged by the overlay
                let _ = overlay.handle_packet(payload);
            }
            Ok(None) => {}
            Err(e) => error!("Failed to receive landmark packet: {}", e),
        }

        if overlay.systems().smoothing.get_elapsed() >= update_interval {
            work_done = true;
            let active = overlay.update_smoothing();

            if active != was_active {
                info!("Hand {}", if active { "found" } else { "lost" });
            }

            match &tether {
                Some((tether_agent, outputs)) => {
                    if active != was_active {
                        if let Err(e) = outputs.publish_presence(tether_agent, active) {
                            error!("Failed to publish hand presence: {}", e);
                        }
                    }
                    if let Some(landmarks) = overlay.active_landmarks() {
                        if let Err(e) = outputs.publish_landmarks(tether_agent, &landmarks) {
                            error!("Failed to publish landmarks: {}", e);
                        }
                        let bones = if active { overlay.bones() } else { Vec::new() };
                        if let Err(e) = outputs.publish_bones(tether_agent, &bones) {
                            error!("Failed to publish bones: {}", e);
                        }
                    }
                }
                None => {
                    if let Some(landmarks) = overlay.active_landmarks() {
                        debug!("Smoothed landmarks: {:?}", landmarks);
                    }
                }
            }

            was_active = active;
        }

        if !work_done {
            thread::sleep(Duration::from_millis(1));
        }
    }
}
