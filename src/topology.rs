use serde::{Deserialize, Serialize};

use crate::error::SkeletonError;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks on one tracked hand
pub const LANDMARK_COUNT: usize = 21;

/// Number of connections in the standard hand skeleton
pub const CONNECTION_COUNT: usize = 20;

/// An edge in the hand skeleton, from `origin` landmark to `destination` landmark
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub origin: usize,
    pub destination: usize,
}

impl Connection {
    pub const fn new(origin: usize, destination: usize) -> Self {
        Connection {
            origin,
            destination,
        }
    }

    /// The finger this connection belongs to, or None for the wrist/palm edges
    pub fn finger(&self) -> Option<Finger> {
        if self.origin == WRIST {
            return None;
        }
        match (Finger::of(self.origin), Finger::of(self.destination)) {
            (Some(a), Some(b)) if a == b => Some(a),
            _ => None,
        }
    }
}

/// The standard 21-landmark hand skeleton. Order matters: slot `i` of this
/// table wires line marker `i`.
pub const HAND_CONNECTIONS: [Connection; CONNECTION_COUNT] = [
    // Wrist to palm base
    Connection::new(WRIST, THUMB_CMC),
    Connection::new(WRIST, INDEX_MCP),
    Connection::new(WRIST, PINKY_MCP),
    // Palm arc across the finger bases; the pinky base is closed off by the wrist edge
    Connection::new(INDEX_MCP, MIDDLE_MCP),
    Connection::new(MIDDLE_MCP, RING_MCP),
    // Thumb
    Connection::new(THUMB_CMC, THUMB_MCP),
    Connection::new(THUMB_MCP, THUMB_IP),
    Connection::new(THUMB_IP, THUMB_TIP),
    // Index
    Connection::new(INDEX_MCP, INDEX_PIP),
    Connection::new(INDEX_PIP, INDEX_DIP),
    Connection::new(INDEX_DIP, INDEX_TIP),
    // Middle
    Connection::new(MIDDLE_MCP, MIDDLE_PIP),
    Connection::new(MIDDLE_PIP, MIDDLE_DIP),
    Connection::new(MIDDLE_DIP, MIDDLE_TIP),
    // Ring
    Connection::new(RING_MCP, RING_PIP),
    Connection::new(RING_PIP, RING_DIP),
    Connection::new(RING_DIP, RING_TIP),
    // Pinky
    Connection::new(PINKY_MCP, PINKY_PIP),
    Connection::new(PINKY_PIP, PINKY_DIP),
    Connection::new(PINKY_DIP, PINKY_TIP),
];

/// Look up the connection for a line slot in the standard hand table
pub fn connection(slot: usize) -> Result<Connection, SkeletonError> {
    lookup(&HAND_CONNECTIONS, slot)
}

/// Look up a connection slot in any topology table
pub fn lookup(table: &[Connection], slot: usize) -> Result<Connection, SkeletonError> {
    table
        .get(slot)
        .copied()
        .ok_or(SkeletonError::SlotOutOfRange {
            slot,
            len: table.len(),
        })
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Which finger chain a landmark sits on; the wrist belongs to none
    pub fn of(landmark: usize) -> Option<Finger> {
        match landmark {
            THUMB_CMC..=THUMB_TIP => Some(Finger::Thumb),
            INDEX_MCP..=INDEX_TIP => Some(Finger::Index),
            MIDDLE_MCP..=MIDDLE_TIP => Some(Finger::Middle),
            RING_MCP..=RING_TIP => Some(Finger::Ring),
            PINKY_MCP..=PINKY_TIP => Some(Finger::Pinky),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_every_slot_in_landmark_range() {
        for slot in 0..CONNECTION_COUNT {
            let c = connection(slot).unwrap();
            assert!(c.origin < LANDMARK_COUNT);
            assert!(c.destination < LANDMARK_COUNT);
        }
    }

    #[test]
    fn test_no_orphan_landmarks() {
        let referenced: BTreeSet<usize> = HAND_CONNECTIONS
            .iter()
            .flat_map(|c| [c.origin, c.destination])
            .collect();
        let all: BTreeSet<usize> = (0..LANDMARK_COUNT).collect();
        assert_eq!(referenced, all);
    }

    #[test]
    fn test_known_slots() {
        assert_eq!(connection(0).unwrap(), Connection::new(0, 1));
        assert_eq!(connection(1).unwrap(), Connection::new(0, 5));
        assert_eq!(connection(2).unwrap(), Connection::new(0, 17));
        assert_eq!(connection(4).unwrap(), Connection::new(9, 13));
        assert_eq!(connection(5).unwrap(), Connection::new(1, 2));
        assert_eq!(connection(19).unwrap(), Connection::new(19, 20));
    }

    #[test]
    fn test_slot_out_of_range() {
        match connection(20) {
            Err(SkeletonError::SlotOutOfRange { slot, len }) => {
                assert_eq!(slot, 20);
                assert_eq!(len, 20);
            }
            other => panic!("expected out of range, got {:?}", other),
        }
    }

    #[test]
    fn test_fingers() {
        assert_eq!(HAND_CONNECTIONS[0].finger(), None);
        assert_eq!(HAND_CONNECTIONS[3].finger(), None); // palm arc
        assert_eq!(HAND_CONNECTIONS[6].finger(), Some(Finger::Thumb));
        assert_eq!(HAND_CONNECTIONS[19].finger(), Some(Finger::Pinky));
        assert_eq!(Finger::of(WRIST), None);
        assert_eq!(Finger::of(MIDDLE_TIP), Some(Finger::Middle));
    }
}
