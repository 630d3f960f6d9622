use std::time::{Duration, SystemTime};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigurationError, geometry_utils::lerp_position, tracking::TrackedLandmark, Position,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyListSendMode {
    Never,
    Once,
    Always,
}

pub struct SmoothSettings {
    pub lerp_factor: f32,
    pub expire_ms: u128,
    pub empty_list_send_mode: EmptyListSendMode,
}

/// Interpolates every landmark of one hand towards its latest target,
/// and drops the hand entirely when frames stop arriving.
pub struct LandmarkSmoother {
    settings: SmoothSettings,
    current: Vec<Position>,
    target: Vec<Position>,
    last_frame: Option<SystemTime>,
    empty_lists_sent: u128,
    last_updated: SystemTime,
}

impl LandmarkSmoother {
    pub fn new(settings: SmoothSettings) -> Result<Self, ConfigurationError> {
        if !(settings.lerp_factor > 0. && settings.lerp_factor <= 1.) {
            return Err(ConfigurationError::InvalidSmoothing(settings.lerp_factor));
        }
        Ok(LandmarkSmoother {
            settings,
            current: Vec::new(),
            target: Vec::new(),
            last_frame: None,
            empty_lists_sent: 0,
            last_updated: SystemTime::now(),
        })
    }

    /// Set new target positions (already in scene units) from a received frame
    pub fn update_targets(&mut self, landmarks: &[Position]) {
        self.update_targets_at(landmarks, SystemTime::now());
    }

    fn update_targets_at(&mut self, landmarks: &[Position], now: SystemTime) {
        if self.current.len() != landmarks.len() {
            debug!("Hand (re)appeared with {} landmarks", landmarks.len());
            self.current = landmarks.to_vec();
        }
        self.target = landmarks.to_vec();
        self.last_frame = Some(now);
    }

    /// Lerp current positions towards their targets, and expire the hand if
    /// no frame has arrived recently. Returns whether a hand is present.
    pub fn update_smoothing(&mut self) -> bool {
        self.update_smoothing_at(SystemTime::now())
    }

    fn update_smoothing_at(&mut self, now: SystemTime) -> bool {
        self.last_updated = now;

        if let Some(last_frame) = self.last_frame {
            let elapsed = now.duration_since(last_frame).unwrap_or_default();
            if elapsed.as_millis() > self.settings.expire_ms {
                debug!(
                    "Hand expired; no frame for {}ms > {}ms",
                    elapsed.as_millis(),
                    self.settings.expire_ms
                );
                self.current.clear();
                self.target.clear();
                self.last_frame = None;
            }
        }

        let t = self.settings.lerp_factor;
        for (current, target) in self.current.iter_mut().zip(self.target.iter()) {
            *current = lerp_position(current, target, t);
        }

        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        !self.current.is_empty()
    }

    pub fn current_positions(&self) -> &[Position] {
        &self.current
    }

    /// Smoothed landmarks to publish, or None if this (empty) list should be skipped
    pub fn get_active_landmarks(&mut self) -> Option<Vec<TrackedLandmark>> {
        let landmarks: Vec<TrackedLandmark> = self
            .current
            .iter()
            .enumerate()
            .map(|(i, p)| TrackedLandmark::new(i, *p))
            .collect();

        let count = landmarks.len();

        let result = match self.settings.empty_list_send_mode {
            EmptyListSendMode::Always => Some(landmarks),
            EmptyListSendMode::Once => {
                if !landmarks.is_empty() || self.empty_lists_sent < 1 {
                    Some(landmarks)
                } else {
                    None
                }
            }
            EmptyListSendMode::Never => {
                if landmarks.is_empty() {
                    None
                } else {
                    Some(landmarks)
                }
            }
        };

        if count == 0 {
            self.empty_lists_sent += 1;
        } else {
            self.empty_lists_sent = 0;
        }

        result
    }

    pub fn get_elapsed(&self) -> Duration {
        self.last_updated.elapsed().unwrap_or_default()
    }
}
