pub mod remapping;
pub mod smoothing;

use log::info;
use remapping::LandmarkRemapping;
use smoothing::{LandmarkSmoother, SmoothSettings};

use crate::{backend_config::HandSkeletonConfig, error::ConfigurationError};

pub struct Systems {
    pub remapping: LandmarkRemapping,
    pub smoothing: LandmarkSmoother,
}

impl Systems {
    pub fn new(config: &HandSkeletonConfig) -> Result<Systems, ConfigurationError> {
        let remapping = LandmarkRemapping::new(config)?;
        info!(
            "Remapping {}x{} camera frame to {:?} origin",
            config.frame_width,
            config.frame_height,
            remapping.origin_location()
        );

        let smoothing = LandmarkSmoother::new(SmoothSettings {
            lerp_factor: config.smoothing_lerp_factor,
            expire_ms: config.smoothing_expire_ms as u128,
            empty_list_send_mode: config.empty_send_mode,
        })?;

        Ok(Systems {
            remapping,
            smoothing,
        })
    }
}
