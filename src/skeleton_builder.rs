use log::{debug, info};

use crate::{
    error::{ConfigurationError, SkeletonError},
    markers::{LineHandle, LineMarkerFactory, PointHandle, PointMarkerFactory, PointRegistry},
    topology::{Connection, CONNECTION_COUNT, HAND_CONNECTIONS, LANDMARK_COUNT},
    Position,
};

/// A line marker together with the connection it was wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundLine {
    pub slot: usize,
    pub line: LineHandle,
    pub connection: Connection,
}

/// Everything one build created, in creation order
#[derive(Debug, Default, Clone)]
pub struct HandSkeleton {
    points: Vec<PointHandle>,
    lines: Vec<BoundLine>,
}

impl HandSkeleton {
    pub fn points(&self) -> &[PointHandle] {
        &self.points
    }

    pub fn lines(&self) -> &[BoundLine] {
        &self.lines
    }
}

/// One-shot construction of the point and line markers for a hand.
///
/// ```ignore
/// let skeleton = SkeletonBuilder::new()
///     .point_count(21)
///     .line_count(20)
///     .registry(&mut tracking)
///     .build(&mut scene)?;
/// ```
///
/// Counts are checked against the topology before any marker is created, so
/// a rejected build leaves the scene and the registry untouched. Building
/// twice into the same registry appends a second, independent set of markers.
pub struct SkeletonBuilder<'a> {
    topology: &'a [Connection],
    point_count: usize,
    line_count: usize,
    registry: Option<&'a mut dyn PointRegistry>,
}

impl Default for SkeletonBuilder<'_> {
    fn default() -> Self {
        SkeletonBuilder::new()
    }
}

impl<'a> SkeletonBuilder<'a> {
    pub fn new() -> Self {
        SkeletonBuilder {
            topology: &HAND_CONNECTIONS,
            point_count: LANDMARK_COUNT,
            line_count: CONNECTION_COUNT,
            registry: None,
        }
    }

    pub fn topology(mut self, topology: &'a [Connection]) -> Self {
        self.topology = topology;
        self
    }

    pub fn point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    pub fn line_count(mut self, line_count: usize) -> Self {
        self.line_count = line_count;
        self
    }

    pub fn registry(mut self, registry: &'a mut dyn PointRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Check counts against the topology without creating anything
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_counts(self.topology, self.point_count, self.line_count)
    }

    pub fn build<S>(self, scene: &mut S) -> Result<HandSkeleton, SkeletonError>
    where
        S: PointMarkerFactory + LineMarkerFactory,
    {
        self.validate()?;
        let SkeletonBuilder {
            topology,
            point_count,
            line_count,
            registry,
        } = self;
        let registry = registry.ok_or(SkeletonError::MissingCollaborator("point registry"))?;

        let base = registry.registered_count();
        if base > 0 {
            debug!(
                "Registry already holds {} points; new markers start at index {}",
                base, base
            );
        }

        let mut skeleton = HandSkeleton::default();

        for _ in 0..point_count {
            let point = scene.create_point_marker(Position::origin());
            registry.register_point(point);
            skeleton.points.push(point);
        }

        for (slot, connection) in topology.iter().take(line_count).enumerate() {
            let line = scene.create_line_marker();
            let origin = registered(&*registry, base, slot, connection.origin, point_count)?;
            let destination =
                registered(&*registry, base, slot, connection.destination, point_count)?;
            scene.set_origin(line, origin);
            scene.set_destination(line, destination);
            skeleton.lines.push(BoundLine {
                slot,
                line,
                connection: *connection,
            });
        }

        info!(
            "Built hand skeleton: {} point markers, {} line markers",
            skeleton.points.len(),
            skeleton.lines.len()
        );

        Ok(skeleton)
    }
}

fn registered(
    registry: &dyn PointRegistry,
    base: usize,
    slot: usize,
    landmark: usize,
    point_count: usize,
) -> Result<PointHandle, ConfigurationError> {
    registry
        .registered_point(base + landmark)
        .ok_or(ConfigurationError::LandmarkOutOfRange {
            slot,
            landmark,
            point_count,
        })
}

pub fn validate_counts(
    topology: &[Connection],
    point_count: usize,
    line_count: usize,
) -> Result<(), ConfigurationError> {
    if line_count > topology.len() {
        return Err(ConfigurationError::TooManyLines {
            requested: line_count,
            available: topology.len(),
        });
    }
    for (slot, c) in topology.iter().take(line_count).enumerate() {
        let landmark = c.origin.max(c.destination);
        if landmark >= point_count {
            return Err(ConfigurationError::LandmarkOutOfRange {
                slot,
                landmark,
                point_count,
            });
        }
    }
    Ok(())
}
