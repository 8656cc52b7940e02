//! The six axis directions a cube face can point, in OBJ normal-table order.

use glam::DVec3;

/// One of the six outward face directions of a cube.
///
/// The `repr(u8)` discriminant is the zero-based position in the OBJ normal
/// table, so [`FaceDirection::normal_index`] is always `discriminant + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceDirection {
    /// −Z direction.
    NegZ = 0,
    /// +Z direction.
    PosZ = 1,
    /// −X direction.
    NegX = 2,
    /// +X direction.
    PosX = 3,
    /// −Y direction.
    NegY = 4,
    /// +Y direction.
    PosY = 5,
}

/// Two triangles per face, as corner indices into [`crate::cube_corners`].
///
/// Both triangles of a face start at the same corner and share the diagonal
/// through it. Indexed by [`FaceDirection::index`].
const TRIANGLES: [[[u8; 3]; 2]; 6] = [
    [[0, 1, 2], [0, 2, 3]], // −Z
    [[5, 4, 7], [5, 7, 6]], // +Z
    [[4, 0, 3], [4, 3, 7]], // −X
    [[1, 5, 6], [1, 6, 2]], // +X
    [[0, 4, 5], [0, 5, 1]], // −Y
    [[3, 2, 6], [3, 6, 7]], // +Y
];

impl FaceDirection {
    /// All six directions in normal-table order.
    pub const ALL: [FaceDirection; 6] = [
        Self::NegZ,
        Self::PosZ,
        Self::NegX,
        Self::PosX,
        Self::NegY,
        Self::PosY,
    ];

    /// Returns the outward unit normal.
    pub fn normal(self) -> DVec3 {
        match self {
            Self::NegZ => DVec3::NEG_Z,
            Self::PosZ => DVec3::Z,
            Self::NegX => DVec3::NEG_X,
            Self::PosX => DVec3::X,
            Self::NegY => DVec3::NEG_Y,
            Self::PosY => DVec3::Y,
        }
    }

    /// Returns the direction index (0–5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based index of this direction's `vn` record.
    pub fn normal_index(self) -> u32 {
        self as u32 + 1
    }

    /// The two triangles covering this face.
    pub fn triangles(self) -> [[u8; 3]; 2] {
        TRIANGLES[self.index()]
    }
}
