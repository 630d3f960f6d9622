//! Handles and capabilities the skeleton builder needs from a host scene.
//!
//! The builder never sees a concrete engine: whatever owns the visual objects
//! implements these traits, and hands back small copyable handles. A line
//! marker only ever holds point handles, never the points themselves.

use serde::{Deserialize, Serialize};

use crate::Position;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointHandle(pub usize);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineHandle(pub usize);

pub trait PointMarkerFactory {
    fn create_point_marker(&mut self, initial_position: Position) -> PointHandle;
}

pub trait LineMarkerFactory {
    fn create_line_marker(&mut self) -> LineHandle;
    fn set_origin(&mut self, line: LineHandle, point: PointHandle);
    fn set_destination(&mut self, line: LineHandle, point: PointHandle);
}

/// Moves an existing point marker; used by the tracking source once live data arrives
pub trait PointMarkerMover {
    fn set_point_position(&mut self, point: PointHandle, position: Position);
}

/// Append-only sequence of point markers, index-aligned with landmark indices
pub trait PointRegistry {
    fn register_point(&mut self, point: PointHandle);
    fn registered_point(&self, index: usize) -> Option<PointHandle>;
    fn registered_count(&self) -> usize;
}
