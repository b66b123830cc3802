use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// One of the four unit moves along the grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit cell offset for this direction (+Y is up).
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::Y,
            Direction::Down => IVec2::NEG_Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

/// Piece kind placed for a path point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Start,
    End,
    Straight,
    Corner,
}

/// A placed level piece. Produced by the assembler, consumed by renderers.
///
/// `rotation` is in degrees around the axis facing the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileDescriptor {
    pub position: Vec2,
    pub rotation: f32,
    pub kind: TileKind,
}

impl TileDescriptor {
    pub fn new(position: Vec2, rotation: f32, kind: TileKind) -> Self {
        Self {
            position,
            rotation,
            kind,
        }
    }
}
