//! Corner layout and quad faces of an axis-aligned cube.
//!
//! Corner order is fixed; both the quad table here and the triangle table on
//! [`crate::FaceDirection`] index into it.
//!
//! ```text
//!        7 -------- 6
//!       /|         /|
//!      3 -------- 2 |      +Y
//!      | 4 -------|-5       |  +Z
//!      |/         |/        | /
//!      0 -------- 1         |/___ +X
//! ```

use glam::DVec3;

/// Vertices emitted per cube.
pub const CORNER_COUNT: usize = 8;

/// Corner offsets for a cube of edge 2, in emission order.
pub const CORNER_OFFSETS: [DVec3; CORNER_COUNT] = [
    DVec3::new(-1.0, -1.0, -1.0),
    DVec3::new(1.0, -1.0, -1.0),
    DVec3::new(1.0, 1.0, -1.0),
    DVec3::new(-1.0, 1.0, -1.0),
    DVec3::new(-1.0, -1.0, 1.0),
    DVec3::new(1.0, -1.0, 1.0),
    DVec3::new(1.0, 1.0, 1.0),
    DVec3::new(-1.0, 1.0, 1.0),
];

/// Returns the 8 corners of a cube with edge `size` centered at `center`.
pub fn cube_corners(center: DVec3, size: f64) -> [DVec3; CORNER_COUNT] {
    let half = size / 2.0;
    CORNER_OFFSETS.map(|offset| center + offset * half)
}

/// Quad faces used by the geometry-only export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QuadFace {
    /// Corners 0-1-2-3 (the −Z side).
    Bottom = 0,
    /// Corners 4-5-6-7 (the +Z side).
    Top = 1,
    /// Corners 0-1-5-4 (the −Y side).
    Front = 2,
    /// Corners 1-2-6-5 (the +X side).
    Right = 3,
    /// Corners 2-3-7-6 (the +Y side).
    Back = 4,
    /// Corners 3-0-4-7 (the −X side).
    Left = 5,
}

const QUADS: [[u8; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
];

impl QuadFace {
    /// All six faces in emission order.
    pub const ALL: [QuadFace; 6] = [
        Self::Bottom,
        Self::Top,
        Self::Front,
        Self::Right,
        Self::Back,
        Self::Left,
    ];

    /// Corner indices of this face, in emission order.
    pub fn corners(self) -> [u8; 4] {
        QUADS[self as usize]
    }
}
