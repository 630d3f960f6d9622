use serde::{Deserialize, Serialize};

use crate::{
    markers::{PointHandle, PointMarkerMover, PointRegistry},
    Position,
};

/// One smoothed landmark, in scene units
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackedLandmark {
    pub i: usize,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl TrackedLandmark {
    pub fn new(i: usize, position: Position) -> Self {
        TrackedLandmark {
            i,
            x: position.x,
            y: position.y,
            z: position.z,
        }
    }
}

/// One line marker, resolved to the current positions of its two points
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bone {
    pub slot: usize,
    pub from: usize,
    pub to: usize,
    pub length: f32,
    pub origin: (f32, f32, f32),
    pub destination: (f32, f32, f32),
}

/// Owns the ordered point registry and pushes live positions into it
#[derive(Debug, Default)]
pub struct HandTracking {
    hand_points: Vec<PointHandle>,
}

impl HandTracking {
    pub fn new() -> Self {
        HandTracking::default()
    }

    pub fn hand_points(&self) -> &[PointHandle] {
        &self.hand_points
    }

    /// Move each registered point marker to the position with the same index.
    /// Returns how many markers were updated.
    pub fn apply_positions(&self, positions: &[Position], mover: &mut dyn PointMarkerMover) -> usize {
        let mut updated = 0;
        for (point, position) in self.hand_points.iter().zip(positions.iter()) {
            mover.set_point_position(*point, *position);
            updated += 1;
        }
        updated
    }

    /// Forget every registered point, so that a fresh skeleton can be built
    pub fn clear(&mut self) {
        self.hand_points.clear();
    }
}

impl PointRegistry for HandTracking {
    fn register_point(&mut self, point: PointHandle) {
        self.hand_points.push(point);
    }

    fn registered_point(&self, index: usize) -> Option<PointHandle> {
        self.hand_points.get(index).copied()
    }

    fn registered_count(&self) -> usize {
        self.hand_points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{markers::PointMarkerFactory, scene::MarkerScene};

    #[test]
    fn test_apply_positions_moves_registered_points() {
        let mut scene = MarkerScene::new();
        let mut tracking = HandTracking::new();
        for _ in 0..3 {
            let p = scene.create_point_marker(Position::origin());
            tracking.register_point(p);
        }

        let positions = [
            Position::new(1., 1., 0.),
            Position::new(2., 2., 0.),
            Position::new(3., 3., 0.),
            Position::new(4., 4., 0.), // no marker for this one
        ];
        let updated = tracking.apply_positions(&positions, &mut scene);

        assert_eq!(updated, 3);
        assert_eq!(scene.points()[2].position, Position::new(3., 3., 0.));
    }

    #[test]
    fn test_apply_fewer_positions_than_points() {
        let mut scene = MarkerScene::new();
        let mut tracking = HandTracking::new();
        for _ in 0..3 {
            let p = scene.create_point_marker(Position::origin());
            tracking.register_point(p);
        }

        let updated = tracking.apply_positions(&[Position::new(5., 5., 5.)], &mut scene);
        assert_eq!(updated, 1);
        assert_eq!(scene.points()[1].position, Position::origin());
    }

    #[test]
    fn test_clear_registry() {
        let mut tracking = HandTracking::new();
        tracking.register_point(PointHandle(0));
        assert_eq!(tracking.registered_point(0), Some(PointHandle(0)));
        tracking.clear();
        assert_eq!(tracking.registered_count(), 0);
        assert_eq!(tracking.registered_point(0), None);
    }
}
