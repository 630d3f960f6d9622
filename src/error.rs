use thiserror::Error;

/// Inconsistent counts or settings, detected before anything is created
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("requested {requested} line markers but the topology only has {available} connections")]
    TooManyLines { requested: usize, available: usize },

    #[error(
        "connection slot {slot} references landmark {landmark}, but only {point_count} point markers are created"
    )]
    LandmarkOutOfRange {
        slot: usize,
        landmark: usize,
        point_count: usize,
    },

    #[error("smoothing lerp factor must be in (0, 1], got {0}")]
    InvalidSmoothing(f32),

    #[error("invalid camera frame size {width}x{height}")]
    InvalidFrame { width: f32, height: f32 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkeletonError {
    #[error("connection slot {slot} is out of range (table has {len} connections)")]
    SlotOutOfRange { slot: usize, len: usize },

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),
}

#[derive(Error, Debug)]
pub enum PacketError {
    #[error("landmark packet is not valid UTF-8")]
    NotUtf8(#[from] std::str::Utf8Error),

    #[error("landmark packet is not a flat list of numbers: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("landmark packet has {got} values, expected {expected}")]
    WrongLength { expected: usize, got: usize },
}
