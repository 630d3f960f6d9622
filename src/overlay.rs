use log::{debug, info, warn};

use crate::{
    backend_config::HandSkeletonConfig,
    error::{PacketError, SkeletonError},
    geometry_utils::{centroid, distance},
    landmark_packet::parse_landmark_packet,
    scene::MarkerScene,
    skeleton_builder::{HandSkeleton, SkeletonBuilder},
    systems::Systems,
    topology::{INDEX_MCP, LANDMARK_COUNT, MIDDLE_MCP, PINKY_MCP, RING_MCP, WRIST},
    tracking::{Bone, HandTracking, TrackedLandmark},
    Position,
};

/// One hand overlay: the marker scene, the tracking source that owns its
/// point registry, and the systems that turn landmark packets into positions.
pub struct HandOverlay {
    scene: MarkerScene,
    tracking: HandTracking,
    skeleton: HandSkeleton,
    systems: Systems,
    packets_received: usize,
    packets_dropped: usize,
}

impl HandOverlay {
    pub fn new(config: &HandSkeletonConfig) -> Result<Self, SkeletonError> {
        let systems = Systems::new(config)?;

        let mut scene = MarkerScene::new();
        let mut tracking = HandTracking::new();
        let skeleton = SkeletonBuilder::new()
            .point_count(config.point_count)
            .line_count(config.line_count)
            .registry(&mut tracking)
            .build(&mut scene)?;

        info!(
            "Hand overlay ready with {} points and {} lines",
            skeleton.points().len(),
            skeleton.lines().len()
        );

        Ok(HandOverlay {
            scene,
            tracking,
            skeleton,
            systems,
            packets_received: 0,
            packets_dropped: 0,
        })
    }

    /// Decode one landmark datagram and feed it to the smoother.
    /// A bad packet is counted and returned as an error; state is unchanged.
    ///
    /// Datagrams always carry one full hand, whatever the number of point
    /// markers; landmarks without a marker are smoothed but never drawn.
    pub fn handle_packet(&mut self, payload: &[u8]) -> Result<(), PacketError> {
        self.packets_received += 1;
        let frame = match parse_landmark_packet(payload, LANDMARK_COUNT) {
            Ok(frame) => frame,
            Err(e) => {
                self.packets_dropped += 1;
                warn!("Dropped landmark packet: {}", e);
                return Err(e);
            }
        };
        debug!("Received {} landmarks", frame.len());

        let positions = self.systems.remapping.remap_all(frame.landmarks());
        self.systems.smoothing.update_targets(&positions);
        Ok(())
    }

    /// Advance smoothing and move the point markers to the smoothed positions.
    /// Returns whether a hand is currently present.
    pub fn update_smoothing(&mut self) -> bool {
        let active = self.systems.smoothing.update_smoothing();
        if active {
            self.tracking.apply_positions(
                self.systems.smoothing.current_positions(),
                &mut self.scene,
            );
        }
        active
    }

    pub fn is_active(&self) -> bool {
        self.systems.smoothing.is_active()
    }

    pub fn active_landmarks(&mut self) -> Option<Vec<TrackedLandmark>> {
        self.systems.smoothing.get_active_landmarks()
    }

    /// Every wired line marker, resolved to its endpoints' current positions
    pub fn bones(&self) -> Vec<Bone> {
        self.skeleton
            .lines()
            .iter()
            .filter_map(|bound| {
                let (origin, destination) = self.scene.line_endpoints(bound.line)?;
                Some(Bone {
                    slot: bound.slot,
                    from: bound.connection.origin,
                    to: bound.connection.destination,
                    length: distance(&origin, &destination),
                    origin: (origin.x, origin.y, origin.z),
                    destination: (destination.x, destination.y, destination.z),
                })
            })
            .collect()
    }

    /// Centre of the wrist and the four finger bases, if those markers exist
    pub fn palm_centre(&self) -> Option<Position> {
        let palm: Vec<Position> = [WRIST, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP]
            .iter()
            .filter_map(|i| self.skeleton.points().get(*i))
            .filter_map(|handle| self.scene.point(*handle))
            .map(|p| p.position)
            .collect();
        if palm.len() < 5 {
            return None;
        }
        centroid(&palm)
    }

    pub fn scene(&self) -> &MarkerScene {
        &self.scene
    }

    pub fn skeleton(&self) -> &HandSkeleton {
        &self.skeleton
    }

    pub fn tracking(&self) -> &HandTracking {
        &self.tracking
    }

    pub fn systems(&self) -> &Systems {
        &self.systems
    }

    pub fn packets_received(&self) -> usize {
        self.packets_received
    }

    pub fn packets_dropped(&self) -> usize {
        self.packets_dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ConfigurationError, markers::PointRegistry};

    fn unsmoothed_config() -> HandSkeletonConfig {
        HandSkeletonConfig {
            mirror_x: false,
            smoothing_lerp_factor: 1.0,
            ..Default::default()
        }
    }

    fn flat_packet(count: usize) -> String {
        let values: Vec<String> = (0..count)
            .flat_map(|i| [i * 100, i * 10, 0])
            .map(|v| v.to_string())
            .collect();
        format!("[{}]", values.join(", "))
    }

    #[test]
    fn test_new_builds_skeleton() {
        let overlay = HandOverlay::new(&HandSkeletonConfig::default()).unwrap();
        assert_eq!(overlay.tracking().registered_count(), 21);
        assert_eq!(overlay.scene().lines().len(), 20);
        assert!(!overlay.is_active());
    }

    #[test]
    fn test_bad_counts_rejected() {
        let config = HandSkeletonConfig {
            point_count: 5,
            ..Default::default()
        };
        assert!(matches!(
            HandOverlay::new(&config),
            Err(SkeletonError::Configuration(
                ConfigurationError::LandmarkOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn test_packet_moves_markers() {
        let mut overlay = HandOverlay::new(&unsmoothed_config()).unwrap();
        overlay.handle_packet(flat_packet(21).as_bytes()).unwrap();
        assert!(overlay.update_smoothing());

        let wrist = overlay.scene().points()[0].position;
        let pinky_tip = overlay.scene().points()[20].position;
        assert_eq!(wrist, Position::new(0., 0., 0.));
        assert!(distance(&pinky_tip, &Position::new(20., 2., 0.)) < 1e-4);

        let bones = overlay.bones();
        assert_eq!(bones.len(), 20);
        assert_eq!((bones[19].from, bones[19].to), (19, 20));
        assert!((bones[19].length - distance(&Position::new(19., 1.9, 0.), &pinky_tip)).abs() < 1e-4);
    }

    #[test]
    fn test_extra_point_keeps_full_hand_packets() {
        let config = HandSkeletonConfig {
            point_count: 22,
            ..unsmoothed_config()
        };
        let mut overlay = HandOverlay::new(&config).unwrap();
        overlay.handle_packet(flat_packet(21).as_bytes()).unwrap();
        assert!(overlay.update_smoothing());

        assert_eq!(overlay.packets_dropped(), 0);
        assert_eq!(overlay.scene().points().len(), 22);
        assert!(distance(&overlay.scene().points()[20].position, &Position::new(20., 2., 0.)) < 1e-4);
        assert_eq!(overlay.scene().points()[21].position, Position::origin());
    }

    #[test]
    fn test_reduced_build_accepts_full_hand_packets() {
        let config = HandSkeletonConfig {
            point_count: 2,
            line_count: 1,
            ..unsmoothed_config()
        };
        let mut overlay = HandOverlay::new(&config).unwrap();
        overlay.handle_packet(flat_packet(21).as_bytes()).unwrap();
        assert!(overlay.update_smoothing());

        let bones = overlay.bones();
        assert_eq!(bones.len(), 1);
        assert_eq!(bones[0].origin, (0., 0., 0.));
        assert!((bones[0].destination.0 - 1.).abs() < 1e-4);
        assert!(overlay.palm_centre().is_none());
    }

    #[test]
    fn test_bad_packet_is_counted() {
        let mut overlay = HandOverlay::new(&unsmoothed_config()).unwrap();
        assert!(overlay.handle_packet(b"[1, 2, 3]").is_err());
        assert_eq!(overlay.packets_received(), 1);
        assert_eq!(overlay.packets_dropped(), 1);
        assert!(!overlay.update_smoothing());
    }

    #[test]
    fn test_palm_centre() {
        let mut overlay = HandOverlay::new(&unsmoothed_config()).unwrap();
        overlay.handle_packet(flat_packet(21).as_bytes()).unwrap();
        overlay.update_smoothing();
        // landmarks 0,5,9,13,17 -> x = 0,5,9,13,17 scene units
        let centre = overlay.palm_centre().unwrap();
        assert!((centre.x - 8.8).abs() < 1e-4);
    }
}
