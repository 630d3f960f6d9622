pub mod backend_config;
pub mod error;
pub mod geometry_utils;
pub mod landmark_packet;
pub mod markers;
pub mod overlay;
pub mod scene;
pub mod skeleton_builder;
pub mod systems;
pub mod tether_interface;
pub mod topology;
pub mod tracking;
pub mod udp_interface;

/// Position of a marker or landmark; scene units unless stated otherwise
pub type Position = nalgebra::Point3<f32>;
