use map_range::MapRange;
use serde::{Deserialize, Serialize};

use crate::{backend_config::HandSkeletonConfig, error::ConfigurationError, Position};

/// Which part of the camera frame becomes the origin [0,0] in scene units
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginLocation {
    /// Bottom-left of the frame, as sent by the tracker
    Corner,
    Centre,
}

/// Converts landmarks from camera pixels into scene units
#[derive(Debug, Clone)]
pub struct LandmarkRemapping {
    frame_width: f32,
    frame_height: f32,
    mirror_x: bool,
    scale: f32,
    depth_scale: f32,
    origin_location: OriginLocation,
}

impl LandmarkRemapping {
    pub fn new(config: &HandSkeletonConfig) -> Result<Self, ConfigurationError> {
        let valid = |side: f32| side.is_finite() && side > 0.;
        if !valid(config.frame_width) || !valid(config.frame_height) {
            return Err(ConfigurationError::InvalidFrame {
                width: config.frame_width,
                height: config.frame_height,
            });
        }
        Ok(LandmarkRemapping {
            frame_width: config.frame_width,
            frame_height: config.frame_height,
            mirror_x: config.mirror_x,
            scale: config.scale,
            depth_scale: config.depth_scale,
            origin_location: config.origin_location,
        })
    }

    pub fn remap(&self, p: &Position) -> Position {
        let x = if self.mirror_x {
            self.frame_width - p.x
        } else {
            p.x
        };
        let (x, y) = match self.origin_location {
            OriginLocation::Corner => (x, p.y),
            OriginLocation::Centre => {
                let mid_x = self.frame_width / 2.0;
                let mid_y = self.frame_height / 2.0;
                (
                    x.map_range(0. ..self.frame_width, -mid_x..mid_x),
                    p.y.map_range(0. ..self.frame_height, -mid_y..mid_y),
                )
            }
        };
        Position::new(x * self.scale, y * self.scale, p.z * self.depth_scale)
    }

    pub fn remap_all(&self, landmarks: &[Position]) -> Vec<Position> {
        landmarks.iter().map(|p| self.remap(p)).collect()
    }

    /// Scene-unit size of the whole camera frame
    pub fn scene_extent(&self) -> (f32, f32) {
        (
            self.frame_width * self.scale,
            self.frame_height * self.scale,
        )
    }

    pub fn origin_location(&self) -> OriginLocation {
        self.origin_location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(origin_location: OriginLocation, mirror_x: bool) -> HandSkeletonConfig {
        HandSkeletonConfig {
            frame_width: 1280.,
            frame_height: 720.,
            mirror_x,
            scale: 0.01,
            depth_scale: 0.1,
            origin_location,
            ..Default::default()
        }
    }

    fn assert_close(a: Position, b: Position) {
        assert!(
            crate::geometry_utils::distance(&a, &b) < 1e-4,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_corner_origin() {
        let r = LandmarkRemapping::new(&config(OriginLocation::Corner, false)).unwrap();
        assert_close(
            r.remap(&Position::new(640., 360., -20.)),
            Position::new(6.4, 3.6, -2.),
        );
    }

    #[test]
    fn test_corner_origin_mirrored() {
        let r = LandmarkRemapping::new(&config(OriginLocation::Corner, true)).unwrap();
        assert_close(
            r.remap(&Position::new(1280., 0., 0.)),
            Position::new(0., 0., 0.),
        );
        assert_close(
            r.remap(&Position::new(0., 720., 0.)),
            Position::new(12.8, 7.2, 0.),
        );
    }

    #[test]
    fn test_centre_origin() {
        let r = LandmarkRemapping::new(&config(OriginLocation::Centre, false)).unwrap();
        assert_close(
            r.remap(&Position::new(640., 360., 0.)),
            Position::new(0., 0., 0.),
        );
        assert_close(
            r.remap(&Position::new(0., 0., 0.)),
            Position::new(-6.4, -3.6, 0.),
        );
    }

    #[test]
    fn test_invalid_frame() {
        let mut c = config(OriginLocation::Corner, false);
        c.frame_height = 0.;
        assert!(matches!(
            LandmarkRemapping::new(&c),
            Err(ConfigurationError::InvalidFrame { .. })
        ));

        for bad in [f32::NAN, f32::INFINITY] {
            let mut c = config(OriginLocation::Corner, false);
            c.frame_width = bad;
            assert!(LandmarkRemapping::new(&c).is_err());
        }
    }
}
