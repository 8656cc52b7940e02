//! Geometry-only OBJ export: one independent quad cube per voxel.

use std::fmt::Write;

use glam::DVec3;
use voxart_mesh::{CORNER_COUNT, QuadFace, cube_corners};
use voxart_voxel::Voxel;

use crate::error::ExportError;
use crate::format::Coord;

/// Writes every voxel as 8 `v` records followed by 6 quad `f` records.
///
/// The k-th voxel (zero-based) owns vertex indices `8k+1 ..= 8k+8`. No
/// materials are referenced. An empty slice yields an empty document.
pub fn export_simple(voxels: &[Voxel], voxel_size: f64) -> Result<String, ExportError> {
    let mut obj = String::new();
    let mut offset: u32 = 1;

    for voxel in voxels {
        for corner in cube_corners(DVec3::from_array(voxel.position()), voxel_size) {
            writeln!(
                obj,
                "v {} {} {}",
                Coord(corner.x),
                Coord(corner.y),
                Coord(corner.z)
            )?;
        }

        for face in QuadFace::ALL {
            let [a, b, c, d] = face.corners().map(|i| offset + u32::from(i));
            writeln!(obj, "f {a} {b} {c} {d}")?;
        }

        offset += CORNER_COUNT as u32;
    }

    Ok(obj)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_records(obj: &str, tag: &str) -> usize {
        obj.lines()
            .filter(|l| l.split_whitespace().next() == Some(tag))
            .count()
    }

    #[test]
    fn test_empty_input_is_empty_document() {
        let obj = export_simple(&[], 1.0).unwrap();
        assert_eq!(count_records(&obj, "v"), 0);
        assert_eq!(count_records(&obj, "f"), 0);
    }

    #[test]
    fn test_single_voxel_exact_output() {
        let obj = export_simple(&[Voxel::new(0.0, 0.0, 0.0, "#ff0000")], 1.0).unwrap();
        let expected = "\
v -0.5 -0.5 -0.5
v 0.5 -0.5 -0.5
v 0.5 0.5 -0.5
v -0.5 0.5 -0.5
v -0.5 -0.5 0.5
v 0.5 -0.5 0.5
v 0.5 0.5 0.5
v -0.5 0.5 0.5
f 1 2 3 4
f 5 6 7 8
f 1 2 6 5
f 2 3 7 6
f 3 4 8 7
f 4 1 5 8
";
        assert_eq!(obj, expected);
    }

    #[test]
    fn test_counts_scale_with_voxels() {
        let voxels: Vec<Voxel> = (0..5)
            .map(|i| Voxel::new(i as f64, 0.0, 0.0, "#000000"))
            .collect();
        let obj = export_simple(&voxels, 1.0).unwrap();
        assert_eq!(count_records(&obj, "v"), 40);
        assert_eq!(count_records(&obj, "f"), 30);
        assert!(!obj.contains("usemtl"));
        assert!(!obj.contains("mtllib"));
    }

    #[test]
    fn test_face_indices_stay_in_voxel_range() {
        let voxels: Vec<Voxel> = (0..4)
            .map(|i| Voxel::new(0.0, i as f64, 0.0, "#000000"))
            .collect();
        let obj = export_simple(&voxels, 1.0).unwrap();
        let faces: Vec<Vec<u32>> = obj
            .lines()
            .filter(|l| l.starts_with("f "))
            .map(|l| l[2..].split(' ').map(|n| n.parse().unwrap()).collect())
            .collect();

        for (k, chunk) in faces.chunks(6).enumerate() {
            let lo = 8 * k as u32 + 1;
            let hi = 8 * k as u32 + 8;
            let mut used: Vec<u32> = chunk.iter().flatten().copied().collect();
            assert!(used.iter().all(|&i| (lo..=hi).contains(&i)), "voxel {k}");
            used.sort_unstable();
            used.dedup();
            assert_eq!(used, (lo..=hi).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_voxel_size_scales_corners() {
        let obj = export_simple(&[Voxel::new(1.0, 2.0, 3.0, "#000000")], 2.0).unwrap();
        let first = obj.lines().next().unwrap();
        assert_eq!(first, "v 0 1 2");
    }
}
