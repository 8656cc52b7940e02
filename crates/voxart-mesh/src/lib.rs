//! Fixed cube topology shared by the OBJ exporters: corner order, quad faces,
//! triangulated faces and the OBJ normal table.

pub mod cube;
pub mod face_direction;

pub use cube::{CORNER_COUNT, CORNER_OFFSETS, QuadFace, cube_corners};
pub use face_direction::FaceDirection;
