//! Grouping of voxels by material so faces can be emitted one material at a
//! time.

use rustc_hash::FxHashMap;

use crate::material::MaterialId;

/// Voxels sharing one material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialGroup {
    /// The shared material.
    pub material: MaterialId,
    /// Indices into the original voxel sequence, ascending.
    pub voxels: Vec<usize>,
}

/// Groups voxel indices by their assigned material.
///
/// `assignments[i]` is the material of voxel `i`. Groups appear in the order
/// their material is first seen; inside a group voxels keep input order.
pub fn group_by_material(assignments: &[MaterialId]) -> Vec<MaterialGroup> {
    let mut groups: Vec<MaterialGroup> = Vec::new();
    let mut slot: FxHashMap<MaterialId, usize> = FxHashMap::default();

    for (voxel, &material) in assignments.iter().enumerate() {
        let index = *slot.entry(material).or_insert_with(|| {
            groups.push(MaterialGroup {
                material,
                voxels: Vec::new(),
            });
            groups.len() - 1
        });
        groups[index].voxels.push(voxel);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_assignments() {
        assert!(group_by_material(&[]).is_empty());
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let ids = [MaterialId(2), MaterialId(0), MaterialId(2), MaterialId(1), MaterialId(0)];
        let groups = group_by_material(&ids);
        let order: Vec<MaterialId> = groups.iter().map(|g| g.material).collect();
        assert_eq!(order, vec![MaterialId(2), MaterialId(0), MaterialId(1)]);
    }

    #[test]
    fn test_group_members_keep_input_order() {
        let ids = [MaterialId(0), MaterialId(1), MaterialId(0), MaterialId(1), MaterialId(0)];
        let groups = group_by_material(&ids);
        assert_eq!(groups[0].voxels, vec![0, 2, 4]);
        assert_eq!(groups[1].voxels, vec![1, 3]);
    }

    #[test]
    fn test_every_voxel_in_exactly_one_group() {
        let ids: Vec<MaterialId> = (0..100).map(|i| MaterialId(i % 7)).collect();
        let groups = group_by_material(&ids);
        assert_eq!(groups.len(), 7);
        let mut seen: Vec<usize> = groups.iter().flat_map(|g| g.voxels.iter().copied()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..100).collect::<Vec<_>>());
    }
}
