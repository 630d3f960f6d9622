use log::warn;

use crate::{
    markers::{LineHandle, LineMarkerFactory, PointHandle, PointMarkerFactory, PointMarkerMover},
    Position,
};

#[derive(Debug, Clone)]
pub struct PointMarker {
    pub position: Position,
}

#[derive(Debug, Clone, Default)]
pub struct LineMarker {
    pub origin: Option<PointHandle>,
    pub destination: Option<PointHandle>,
}

/// In-memory marker store used by the agent and the viewer.
/// Handles are indices into the two arenas; nothing is ever removed
/// except by `clear`, so a handle stays valid for the life of the scene.
#[derive(Debug, Default)]
pub struct MarkerScene {
    points: Vec<PointMarker>,
    lines: Vec<LineMarker>,
}

impl MarkerScene {
    pub fn new() -> Self {
        MarkerScene::default()
    }

    pub fn points(&self) -> &[PointMarker] {
        &self.points
    }

    pub fn lines(&self) -> &[LineMarker] {
        &self.lines
    }

    pub fn point(&self, handle: PointHandle) -> Option<&PointMarker> {
        self.points.get(handle.0)
    }

    pub fn line(&self, handle: LineHandle) -> Option<&LineMarker> {
        self.lines.get(handle.0)
    }

    /// Current (origin, destination) positions of a line marker, if both ends are wired
    pub fn line_endpoints(&self, handle: LineHandle) -> Option<(Position, Position)> {
        let line = self.line(handle)?;
        let origin = self.point(line.origin?)?;
        let destination = self.point(line.destination?)?;
        Some((origin.position, destination.position))
    }

    /// Endpoints of every wired line, in creation order
    pub fn segments(&self) -> Vec<(Position, Position)> {
        (0..self.lines.len())
            .filter_map(|i| self.line_endpoints(LineHandle(i)))
            .collect()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
    }
}

impl PointMarkerFactory for MarkerScene {
    fn create_point_marker(&mut self, initial_position: Position) -> PointHandle {
        self.points.push(PointMarker {
            position: initial_position,
        });
        PointHandle(self.points.len() - 1)
    }
}

impl LineMarkerFactory for MarkerScene {
    fn create_line_marker(&mut self) -> LineHandle {
        self.lines.push(LineMarker::default());
        LineHandle(self.lines.len() - 1)
    }

    fn set_origin(&mut self, line: LineHandle, point: PointHandle) {
        match self.lines.get_mut(line.0) {
            Some(l) => l.origin = Some(point),
            None => warn!("set_origin on unknown line marker {:?}", line),
        }
    }

    fn set_destination(&mut self, line: LineHandle, point: PointHandle) {
        match self.lines.get_mut(line.0) {
            Some(l) => l.destination = Some(point),
            None => warn!("set_destination on unknown line marker {:?}", line),
        }
    }
}

impl PointMarkerMover for MarkerScene {
    fn set_point_position(&mut self, point: PointHandle, position: Position) {
        match self.points.get_mut(point.0) {
            Some(p) => p.position = position,
            None => warn!("set_point_position on unknown point marker {:?}", point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_follows_its_points() {
        let mut scene = MarkerScene::new();
        let a = scene.create_point_marker(Position::origin());
        let b = scene.create_point_marker(Position::origin());
        let line = scene.create_line_marker();

        assert_eq!(scene.line_endpoints(line), None);

        scene.set_origin(line, a);
        scene.set_destination(line, b);
        scene.set_point_position(b, Position::new(1.0, 2.0, 3.0));

        let (origin, destination) = scene.line_endpoints(line).unwrap();
        assert_eq!(origin, Position::origin());
        assert_eq!(destination, Position::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_segments_skip_unwired_lines() {
        let mut scene = MarkerScene::new();
        let a = scene.create_point_marker(Position::origin());
        let wired = scene.create_line_marker();
        let _unwired = scene.create_line_marker();
        scene.set_origin(wired, a);
        scene.set_destination(wired, a);

        assert_eq!(scene.lines().len(), 2);
        assert_eq!(scene.segments().len(), 1);
    }
}
