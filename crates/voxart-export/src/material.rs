//! Material-aware OBJ + MTL export.
//!
//! The pipeline runs in fixed passes over the input:
//!
//! 1. normalize every color and intern one material per distinct [`Rgb8`]
//! 2. group voxels by material (first-seen order)
//! 3. write the shared normal table
//! 4. write all vertices in input order, remembering each voxel's first index
//! 5. write faces group by group, one `usemtl` per group
//!
//! Vertex order never follows grouping: a voxel's vertices sit at the same
//! indices no matter which group it lands in.
//!
//! [`Rgb8`]: voxart_voxel::Rgb8

use std::fmt::Write;

use glam::DVec3;
use rustc_hash::FxHashMap;
use voxart_materials::{MaterialGroup, MaterialId, MaterialLibrary, group_by_material};
use voxart_mesh::{CORNER_COUNT, FaceDirection, cube_corners};
use voxart_voxel::{CoordKey, Voxel};

use crate::bundle::ExportNames;
use crate::error::ExportError;
use crate::exporter::ExportStats;
use crate::format::{Coord, Fixed6};
use crate::instructions::import_instructions;

/// Triangles emitted per voxel (2 per face).
const TRIANGLES_PER_VOXEL: usize = 12;

/// The three text buffers of a material-aware export.
#[derive(Clone, Debug)]
pub struct MaterialExport {
    /// OBJ document referencing the MTL by name.
    pub obj: String,
    /// MTL document, one block per distinct color.
    pub mtl: String,
    /// Plain-text import guidance.
    pub instructions: String,
    /// File names the buffers were written against.
    pub names: ExportNames,
    /// Record counts.
    pub stats: ExportStats,
}

/// Exports `voxels` as an OBJ with a companion MTL and instructions text.
///
/// `base_name` determines the file names (`<base>.obj`, `<base>.mtl`,
/// `<base>_import_instructions.txt`); the OBJ's `mtllib` line references the
/// MTL by that name.
///
/// # Errors
///
/// - [`ExportError::EmptyInput`] if `voxels` is empty.
/// - [`ExportError::DuplicateCoordinate`] if two voxels share a position.
/// - [`ExportError::Format`] if text assembly fails.
pub fn export_with_materials(
    voxels: &[Voxel],
    voxel_size: f64,
    base_name: &str,
) -> Result<MaterialExport, ExportError> {
    if voxels.is_empty() {
        return Err(ExportError::EmptyInput);
    }

    let names = ExportNames::new(base_name);

    // One normalization per voxel, one material per distinct color.
    let mut library = MaterialLibrary::new();
    let assignments: Vec<MaterialId> = voxels
        .iter()
        .map(|voxel| library.intern(voxel.color.normalize()))
        .collect();
    tracing::debug!(materials = library.len(), "collected unique materials");

    let mut mtl = String::new();
    library.write_mtl(&mut mtl)?;

    let groups = group_by_material(&assignments);

    let mut obj = String::new();
    write_header(&mut obj, &names.mtl)?;
    write_normals(&mut obj)?;

    let first_vertex = write_vertices(&mut obj, voxels, voxel_size)?;
    write_faces(&mut obj, voxels, &library, &groups, &first_vertex)?;

    let instructions = import_instructions(&names.obj, &names.mtl);
    let stats = ExportStats {
        vertices: voxels.len() * CORNER_COUNT,
        faces: voxels.len() * TRIANGLES_PER_VOXEL,
        materials: library.len(),
        groups: groups.len(),
    };

    Ok(MaterialExport {
        obj,
        mtl,
        instructions,
        names,
        stats,
    })
}

fn write_header(obj: &mut String, mtl_name: &str) -> Result<(), ExportError> {
    writeln!(obj, "# Voxel Art export - optimized for Rhino")?;
    writeln!(obj, "o VoxelModel")?;
    writeln!(obj, "mtllib {mtl_name}")?;
    writeln!(obj, "# Created with Voxel Drawing Tool")?;
    writeln!(obj)?;
    Ok(())
}

fn write_normals(obj: &mut String) -> Result<(), ExportError> {
    writeln!(obj, "# Normal vectors")?;
    for dir in FaceDirection::ALL {
        let n = dir.normal();
        writeln!(obj, "vn {} {} {}", Fixed6(n.x), Fixed6(n.y), Fixed6(n.z))?;
    }
    writeln!(obj)?;
    Ok(())
}

/// Writes 8 vertices per voxel in input order.
///
/// Returns the one-based index of each voxel's first vertex, parallel to
/// `voxels`. Positions must be unique: a repeated position is rejected before
/// anything about it is written.
fn write_vertices(
    obj: &mut String,
    voxels: &[Voxel],
    voxel_size: f64,
) -> Result<Vec<u32>, ExportError> {
    let mut seen: FxHashMap<CoordKey, usize> = FxHashMap::default();
    seen.reserve(voxels.len());
    let mut first_vertex = Vec::with_capacity(voxels.len());

    let mut next: u32 = 1;
    for (index, voxel) in voxels.iter().enumerate() {
        if let Some(first) = seen.insert(voxel.coord_key(), index) {
            return Err(ExportError::DuplicateCoordinate {
                first,
                second: index,
                x: voxel.x,
                y: voxel.y,
                z: voxel.z,
            });
        }

        for corner in cube_corners(DVec3::from_array(voxel.position()), voxel_size) {
            writeln!(
                obj,
                "v {} {} {}",
                Fixed6(corner.x),
                Fixed6(corner.y),
                Fixed6(corner.z)
            )?;
        }
        first_vertex.push(next);
        next += CORNER_COUNT as u32;
    }
    writeln!(obj)?;

    Ok(first_vertex)
}

fn write_faces(
    obj: &mut String,
    voxels: &[Voxel],
    library: &MaterialLibrary,
    groups: &[MaterialGroup],
    first_vertex: &[u32],
) -> Result<(), ExportError> {
    for group in groups {
        let name = &library.get(group.material).name;
        writeln!(obj, "g material_group_{name}")?;
        writeln!(obj, "usemtl {name}")?;

        for &index in &group.voxels {
            let voxel = &voxels[index];
            let start = first_vertex[index];

            writeln!(
                obj,
                "g voxel_{}_{}_{}",
                Coord(voxel.x),
                Coord(voxel.y),
                Coord(voxel.z)
            )?;

            for dir in FaceDirection::ALL {
                let n = dir.normal_index();
                for tri in dir.triangles() {
                    let [a, b, c] = tri.map(|corner| start + u32::from(corner));
                    writeln!(obj, "f {a}//{n} {b}//{n} {c}//{n}")?;
                }
            }
        }

        writeln!(obj)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxart_voxel::VoxelColor;

    fn red_origin() -> Vec<Voxel> {
        vec![Voxel::new(0.0, 0.0, 0.0, "#FF0000")]
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = export_with_materials(&[], 1.0, "voxel_art");
        assert!(matches!(result, Err(ExportError::EmptyInput)));
    }

    #[test]
    fn test_single_red_voxel() {
        let export = export_with_materials(&red_origin(), 1.0, "voxel_art").unwrap();

        assert_eq!(
            export.mtl,
            "newmtl mat_255_0_0\n\
             Ka 0.800000 0.000000 0.000000\n\
             Kd 1.000000 0.000000 0.000000\n\
             Ks 0.7 0.7 0.7\n\
             Ns 50.0\n\
             d 1.0\n\
             illum 2\n\n"
        );

        let expected_obj = "\
# Voxel Art export - optimized for Rhino
o VoxelModel
mtllib voxel_art.mtl
# Created with Voxel Drawing Tool

# Normal vectors
vn 0.000000 0.000000 -1.000000
vn 0.000000 0.000000 1.000000
vn -1.000000 0.000000 0.000000
vn 1.000000 0.000000 0.000000
vn 0.000000 -1.000000 0.000000
vn 0.000000 1.000000 0.000000

v -0.500000 -0.500000 -0.500000
v 0.500000 -0.500000 -0.500000
v 0.500000 0.500000 -0.500000
v -0.500000 0.500000 -0.500000
v -0.500000 -0.500000 0.500000
v 0.500000 -0.500000 0.500000
v 0.500000 0.500000 0.500000
v -0.500000 0.500000 0.500000

g material_group_mat_255_0_0
usemtl mat_255_0_0
g voxel_0_0_0
f 1//1 2//1 3//1
f 1//1 3//1 4//1
f 6//2 5//2 8//2
f 6//2 8//2 7//2
f 5//3 1//3 4//3
f 5//3 4//3 8//3
f 2//4 6//4 7//4
f 2//4 7//4 3//4
f 1//5 5//5 6//5
f 1//5 6//5 2//5
f 4//6 3//6 7//6
f 4//6 7//6 8//6

";
        assert_eq!(export.obj, expected_obj);
        assert_eq!(export.stats.vertices, 8);
        assert_eq!(export.stats.faces, 12);
        assert_eq!(export.stats.materials, 1);
    }

    #[test]
    fn test_vertices_follow_input_order_not_groups() {
        let voxels = vec![
            Voxel::new(0.0, 0.0, 0.0, "#ff0000"),
            Voxel::new(5.0, 0.0, 0.0, "#0000ff"),
            Voxel::new(9.0, 0.0, 0.0, "#ff0000"),
        ];
        let export = export_with_materials(&voxels, 1.0, "voxel_art").unwrap();

        // Vertex block: voxel 0, then 1, then 2.
        let xs: Vec<&str> = export
            .obj
            .lines()
            .filter(|l| l.starts_with("v "))
            .step_by(8)
            .map(|l| l.split(' ').nth(1).unwrap())
            .collect();
        assert_eq!(xs, vec!["-0.500000", "4.500000", "8.500000"]);

        // Face block: red group (voxels 0 and 2) first, then blue.
        let labels: Vec<&str> = export
            .obj
            .lines()
            .filter(|l| l.starts_with("g "))
            .collect();
        assert_eq!(
            labels,
            vec![
                "g material_group_mat_255_0_0",
                "g voxel_0_0_0",
                "g voxel_9_0_0",
                "g material_group_mat_0_0_255",
                "g voxel_5_0_0",
            ]
        );

        // Voxel 2 still references vertices 17..=24.
        let after_label = export
            .obj
            .lines()
            .skip_while(|l| *l != "g voxel_9_0_0")
            .nth(1)
            .unwrap();
        assert_eq!(after_label, "f 17//1 18//1 19//1");
    }

    #[test]
    fn test_shared_color_shares_material() {
        let voxels = vec![
            Voxel::new(0.0, 0.0, 0.0, "#102030"),
            Voxel::new(1.0, 0.0, 0.0, "rgb(16, 32, 48)"),
            Voxel::new(2.0, 0.0, 0.0, VoxelColor::Levels(vec![16.0, 32.0, 48.0])),
        ];
        let export = export_with_materials(&voxels, 1.0, "voxel_art").unwrap();
        assert_eq!(export.mtl.matches("newmtl ").count(), 1);
        assert_eq!(export.obj.matches("usemtl ").count(), 1);
        assert_eq!(export.stats.groups, 1);
    }

    #[test]
    fn test_duplicate_coordinates_rejected() {
        let voxels = vec![
            Voxel::new(1.0, 2.0, 3.0, "#ff0000"),
            Voxel::new(0.0, 0.0, 0.0, "#00ff00"),
            Voxel::new(1.0, 2.0, 3.0, "#0000ff"),
        ];
        let err = export_with_materials(&voxels, 1.0, "voxel_art").unwrap_err();
        match err {
            ExportError::DuplicateCoordinate { first, second, x, y, z } => {
                assert_eq!((first, second), (0, 2));
                assert_eq!((x, y, z), (1.0, 2.0, 3.0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_color_uses_default_material() {
        let voxels = vec![Voxel::new(0.0, 0.0, 0.0, VoxelColor::Unknown)];
        let export = export_with_materials(&voxels, 1.0, "voxel_art").unwrap();
        assert!(export.mtl.starts_with("newmtl mat_200_200_200\n"));
        assert!(export.obj.contains("usemtl mat_200_200_200\n"));
    }

    #[test]
    fn test_base_name_drives_mtllib() {
        let export = export_with_materials(&red_origin(), 1.0, "castle").unwrap();
        assert!(export.obj.contains("\nmtllib castle.mtl\n"));
        assert_eq!(export.names.obj, "castle.obj");
        assert!(export.instructions.contains("castle.mtl"));
    }

    #[test]
    fn test_fractional_coordinates_in_labels() {
        let voxels = vec![Voxel::new(0.5, -1.25, 2.0, "#000000")];
        let export = export_with_materials(&voxels, 0.5, "voxel_art").unwrap();
        assert!(export.obj.contains("g voxel_0.5_-1.25_2\n"));
        assert!(export.obj.contains("v 0.250000 -1.500000 1.750000\n"));
    }
}
