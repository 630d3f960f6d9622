//! Landmark datagrams as sent by the camera-side hand tracker.
//!
//! Each datagram is the text of one flat list, `[x1, y1, z1, x2, y2, z2, ...]`,
//! three numbers per landmark, in camera pixels with the y-axis already
//! flipped so that the origin is bottom-left. Only the first hand is sent.

use crate::{error::PacketError, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct HandFrame {
    landmarks: Vec<Position>,
}

impl HandFrame {
    pub fn new(landmarks: Vec<Position>) -> Self {
        HandFrame { landmarks }
    }

    pub fn landmarks(&self) -> &[Position] {
        &self.landmarks
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

pub fn parse_landmark_packet(
    payload: &[u8],
    expected_landmarks: usize,
) -> Result<HandFrame, PacketError> {
    let text = std::str::from_utf8(payload)?;
    let values: Vec<f32> = serde_json::from_str(text.trim())?;

    let expected = expected_landmarks * 3;
    if values.len() != expected {
        return Err(PacketError::WrongLength {
            expected,
            got: values.len(),
        });
    }

    let landmarks = values
        .chunks_exact(3)
        .map(|xyz| Position::new(xyz[0], xyz[1], xyz[2]))
        .collect();

    Ok(HandFrame { landmarks })
}

/// Produce the same textual form the tracker sends
pub fn encode_landmark_packet(frame: &HandFrame) -> String {
    let values: Vec<String> = frame
        .landmarks
        .iter()
        .flat_map(|p| [p.x, p.y, p.z])
        .map(|v| v.to_string())
        .collect();
    format!("[{}]", values.join(", "))
}
