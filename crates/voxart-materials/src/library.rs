//! Material library: deduplicates materials by normalized color.
//!
//! Built fresh for every export. Materials keep the order in which their
//! colors were first seen, which is also the order of the MTL output.

use std::fmt;

use rustc_hash::FxHashMap;
use voxart_voxel::Rgb8;

use crate::material::{MaterialDef, MaterialId};

/// Ordered set of materials, one per distinct [`Rgb8`].
#[derive(Debug, Default)]
pub struct MaterialLibrary {
    /// Dense array: index == `MaterialId.0`.
    materials: Vec<MaterialDef>,
    /// Reverse lookup: color → `MaterialId`.
    by_color: FxHashMap<Rgb8, MaterialId>,
}

impl MaterialLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the material for `color`, creating it on first sight.
    pub fn intern(&mut self, color: Rgb8) -> MaterialId {
        if let Some(&id) = self.by_color.get(&color) {
            return id;
        }

        let id = MaterialId(self.materials.len() as u32);
        let def = MaterialDef::for_color(color);
        tracing::trace!(material = %def.name, "new material");
        self.materials.push(def);
        self.by_color.insert(color, id);
        id
    }

    /// Returns the ID for `color` if a material exists for it.
    pub fn lookup(&self, color: Rgb8) -> Option<MaterialId> {
        self.by_color.get(&color).copied()
    }

    /// Returns the definition for a given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this library.
    pub fn get(&self, id: MaterialId) -> &MaterialDef {
        &self.materials[id.0 as usize]
    }

    /// Number of distinct materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns `true` if no material has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Materials in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &MaterialDef> {
        self.materials.iter()
    }

    /// Writes every material block, each followed by a blank line.
    pub fn write_mtl<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for def in &self.materials {
            def.write_mtl(out)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_assigns_sequential_ids() {
        let mut lib = MaterialLibrary::new();
        assert_eq!(lib.intern(Rgb8::new(1, 0, 0)), MaterialId(0));
        assert_eq!(lib.intern(Rgb8::new(0, 1, 0)), MaterialId(1));
        assert_eq!(lib.intern(Rgb8::new(0, 0, 1)), MaterialId(2));
        assert_eq!(lib.len(), 3);
    }

    #[test]
    fn test_intern_deduplicates() {
        let mut lib = MaterialLibrary::new();
        let a = lib.intern(Rgb8::new(10, 20, 30));
        let b = lib.intern(Rgb8::new(40, 50, 60));
        assert_eq!(lib.intern(Rgb8::new(10, 20, 30)), a);
        assert_eq!(lib.intern(Rgb8::new(40, 50, 60)), b);
        assert_eq!(lib.len(), 2);
    }

    #[test]
    fn test_lookup_and_get() {
        let mut lib = MaterialLibrary::new();
        let id = lib.intern(Rgb8::new(255, 0, 0));
        assert_eq!(lib.lookup(Rgb8::new(255, 0, 0)), Some(id));
        assert_eq!(lib.lookup(Rgb8::new(0, 0, 0)), None);
        assert_eq!(lib.get(id).name, "mat_255_0_0");
    }

    #[test]
    fn test_iter_preserves_first_seen_order() {
        let mut lib = MaterialLibrary::new();
        for rgb in [Rgb8::new(9, 9, 9), Rgb8::new(1, 1, 1), Rgb8::new(9, 9, 9), Rgb8::new(5, 5, 5)] {
            lib.intern(rgb);
        }
        let names: Vec<&str> = lib.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["mat_9_9_9", "mat_1_1_1", "mat_5_5_5"]);
    }

    #[test]
    fn test_write_mtl_separates_blocks() {
        let mut lib = MaterialLibrary::new();
        lib.intern(Rgb8::new(255, 0, 0));
        lib.intern(Rgb8::new(0, 0, 255));

        let mut out = String::new();
        lib.write_mtl(&mut out).unwrap();
        assert_eq!(out.matches("newmtl ").count(), 2);
        assert!(out.contains("illum 2\n\nnewmtl mat_0_0_255\n"));
        assert!(out.ends_with("illum 2\n\n"));
    }

    #[test]
    fn test_empty_library_writes_nothing() {
        let lib = MaterialLibrary::new();
        let mut out = String::new();
        lib.write_mtl(&mut out).unwrap();
        assert!(lib.is_empty());
        assert!(out.is_empty());
    }
}
