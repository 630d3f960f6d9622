use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use colorsys::Rgb;
use egui::Color32;
use log::{info, warn};
use tether_hand_skeleton::backend_config::{load_config_from_file, HandSkeletonConfig};
use tether_hand_skeleton::overlay::HandOverlay;
use tether_hand_skeleton::topology::Finger;
use tether_hand_skeleton::udp_interface::LandmarkReceiver;

use crate::cli::Cli;
use crate::ui::render_ui;

pub struct Model {
    pub config: HandSkeletonConfig,
    pub overlay: HandOverlay,
    pub receiver: LandmarkReceiver,
    /// One colour per line marker, in skeleton order
    pub line_colours: Vec<Color32>,
    pub finger_legend: Vec<(&'static str, Color32)>,
    pub line_width: f32,
    pub show_bones: bool,
    pub point_size: f32,
    pub show_graph_labels: bool,
}

impl Model {
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = load_config_from_file(&cli.config_path)?;
        let overlay = HandOverlay::new(&config)?;
        let receiver = LandmarkReceiver::bind(SocketAddr::new(cli.udp_host, cli.udp_port))?;

        let line_colours = overlay
            .skeleton()
            .lines()
            .iter()
            .map(|bound| hex_to_colour(config.finger_colour(bound.connection.finger())))
            .collect();

        let finger_legend = Finger::ALL
            .iter()
            .map(|f| (f.name(), hex_to_colour(config.finger_colour(Some(*f)))))
            .chain(std::iter::once(("palm", hex_to_colour(config.finger_colour(None)))))
            .collect();

        info!("Hand Skeleton Frontend started OK");

        Ok(Model {
            config,
            overlay,
            receiver,
            line_colours,
            finger_legend,
            line_width: 2.5,
            show_bones: true,
            point_size: 6.0,
            show_graph_labels: false,
        })
    }
}

fn hex_to_colour(hex: &str) -> Color32 {
    match Rgb::from_hex_str(hex) {
        Ok(rgb) => {
            let [r, g, b]: [u8; 3] = rgb.into();
            Color32::from_rgb(r, g, b)
        }
        Err(e) => {
            warn!("Invalid colour \"{}\" in config: {:?}", hex, e);
            Color32::WHITE
        }
    }
}

impl eframe::App for Model {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        loop {
            match self.receiver.check_messages() {
                Ok(Some(payload)) => {
                    // Bad packets are already counted and logged by the overlay
                    let _ = self.overlay.handle_packet(payload);
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to receive landmark packet: {}", e);
                    break;
                }
            }
        }

        let interval = Duration::from_millis(self.config.smoothing_update_interval);
        if self.overlay.systems().smoothing.get_elapsed() >= interval {
            self.overlay.update_smoothing();
        }

        render_ui(ctx, self);

        ctx.request_repaint();
    }
}
