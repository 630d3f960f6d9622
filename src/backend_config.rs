use std::{fs, io::ErrorKind};

use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    systems::{remapping::OriginLocation, smoothing::EmptyListSendMode},
    topology::{Finger, CONNECTION_COUNT, LANDMARK_COUNT},
};

/// Finger name -> hex colour, in drawing order
pub type FingerColours = IndexMap<String, String>;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct HandSkeletonConfig {
    // -------- SKELETON
    /// How many point markers to create; must cover every landmark the used connections reference
    pub point_count: usize,

    /// How many line markers to create, taken in order from the topology table
    pub line_count: usize,

    // -------- REMAPPING
    /// Camera frame size (pixels) the tracker reports landmarks in
    pub frame_width: f32,
    pub frame_height: f32,

    /// Mirror horizontally, so that the overlay moves like a mirror image of the user
    pub mirror_x: bool,

    /// Scene units per pixel
    pub scale: f32,

    /// Scene units per unit of tracker depth
    pub depth_scale: f32,

    pub origin_location: OriginLocation,

    // -------- SMOOTHING
    /// How much to interpolate (smooth) current position towards target position
    /// (1.0 is immediate, i.e. no smoothing, 0 is invalid)
    pub smoothing_lerp_factor: f32,

    /// Consider the hand lost if no landmark packet arrives for this long (ms)
    pub smoothing_expire_ms: u64,

    /// How often (ms) to update smoothed landmarks - regardless of packet rate
    pub smoothing_update_interval: u64,

    /// How to treat empty landmark lists - either send an empty
    /// list "once", "never" or "always"
    pub empty_send_mode: EmptyListSendMode,

    // -------- VISUALISATION
    pub finger_colours: FingerColours,

    /// Colour for the wrist and palm-arc lines
    pub palm_colour: String,
}

// TODO: some more imaginative colours, please?
const PALETTE: &[&str] = &["#ffff00", "#00ffff", "#ff00ff", "#00ff00", "#ff8800"];

fn default_finger_colours() -> FingerColours {
    Finger::ALL
        .iter()
        .enumerate()
        .map(|(i, f)| (String::from(f.name()), String::from(PALETTE[i % PALETTE.len()])))
        .collect()
}

impl Default for HandSkeletonConfig {
    fn default() -> Self {
        HandSkeletonConfig {
            point_count: LANDMARK_COUNT,
            line_count: CONNECTION_COUNT,
            frame_width: 1280.,
            frame_height: 720.,
            mirror_x: true,
            scale: 0.01,
            depth_scale: 0.01,
            origin_location: OriginLocation::Corner,
            smoothing_lerp_factor: 0.5,
            smoothing_expire_ms: 500,
            smoothing_update_interval: 16,
            empty_send_mode: EmptyListSendMode::Once,
            finger_colours: default_finger_colours(),
            palm_colour: String::from("#ffffff"),
        }
    }
}

impl HandSkeletonConfig {
    pub fn finger_colour(&self, finger: Option<Finger>) -> &str {
        match finger {
            Some(f) => self
                .finger_colours
                .get(f.name())
                .map(String::as_str)
                .unwrap_or(&self.palm_colour),
            None => &self.palm_colour,
        }
    }

    pub fn write_config_to_file(&self, config_file_path: &str) -> Result<()> {
        debug!("Current state of config: {:?}", self);
        let text = serde_json::to_string_pretty(self)?;
        fs::write(config_file_path, text)
            .with_context(|| format!("Error writing config to file {}", config_file_path))?;
        info!("Wrote config to file: {:?}", config_file_path);
        Ok(())
    }
}

pub fn load_config_from_file(config_file_path: &str) -> Result<HandSkeletonConfig> {
    match fs::read_to_string(config_file_path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "Hand Skeleton Config file not found at {}; using defaults",
                &config_file_path
            );
            Ok(HandSkeletonConfig::default())
        }
        Err(e) => Err(anyhow!(
            "Failed to load Hand Skeleton Config from disk; error: {:?}",
            e
        )),
        Ok(s) => {
            info!("Loaded Hand Skeleton config OK from \"{}\"", config_file_path);
            match serde_json::from_str::<HandSkeletonConfig>(&s) {
                Ok(loaded_config) => {
                    debug!("Config parsed data from file: {:?}", &loaded_config);
                    Ok(loaded_config)
                }
                Err(e) => Err(anyhow!("Failed to parse config data: {}", e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_hand() {
        let c = HandSkeletonConfig::default();
        assert_eq!(c.point_count, 21);
        assert_eq!(c.line_count, 20);
        assert_eq!(c.finger_colours.len(), 5);
        assert_eq!(c.finger_colours.get_index(0).unwrap().0, "thumb");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: HandSkeletonConfig =
            serde_json::from_str(r#"{ "lineCount": 3, "originLocation": "Centre" }"#).unwrap();
        assert_eq!(c.line_count, 3);
        assert_eq!(c.point_count, 21);
        assert_eq!(c.origin_location, OriginLocation::Centre);
        assert_eq!(c.empty_send_mode, EmptyListSendMode::Once);
    }

    #[test]
    fn test_finger_colour_fallback() {
        let mut c = HandSkeletonConfig::default();
        c.finger_colours.shift_remove("ring");
        assert_eq!(c.finger_colour(Some(Finger::Ring)), "#ffffff");
        assert_eq!(c.finger_colour(Some(Finger::Thumb)), "#ffff00");
        assert_eq!(c.finger_colour(None), "#ffffff");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let c = load_config_from_file("./definitely/not/here/handSkeleton.json").unwrap();
        assert_eq!(c.line_count, 20);
    }

    #[test]
    fn test_write_then_load() {
        let path = std::env::temp_dir().join(format!(
            "handSkeleton-test-{}.json",
            std::process::id()
        ));
        let path = path.to_str().unwrap();

        let mut c = HandSkeletonConfig::default();
        c.scale = 0.02;
        c.write_config_to_file(path).unwrap();

        let loaded = load_config_from_file(path).unwrap();
        assert_eq!(loaded.scale, 0.02);
        std::fs::remove_file(path).unwrap();
    }
}
