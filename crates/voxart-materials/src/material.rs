//! Core material types: [`MaterialId`] and [`MaterialDef`].

use std::fmt;

use voxart_voxel::Rgb8;

// ---------------------------------------------------------------------------
// MaterialId
// ---------------------------------------------------------------------------

/// Dense identifier of a material inside one [`crate::MaterialLibrary`].
///
/// IDs are assigned in first-seen order starting at 0 and are only meaningful
/// for the library that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u32);

// ---------------------------------------------------------------------------
// MaterialDef
// ---------------------------------------------------------------------------

/// Ambient color as a fraction of the diffuse color.
pub const AMBIENT_FACTOR: f64 = 0.8;
/// Specular color, identical on every channel.
pub const SPECULAR: f64 = 0.7;
/// Specular exponent.
pub const SHININESS: f64 = 50.0;
/// Dissolve (1.0 = fully opaque).
pub const OPACITY: f64 = 1.0;
/// Illumination model 2: color, ambient and specular highlights.
pub const ILLUMINATION_MODEL: u8 = 2;

/// A flat-colored MTL material derived from one [`Rgb8`].
///
/// Everything except the color follows a fixed recipe, so two definitions
/// with the same color are always identical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialDef {
    /// Material name, `mat_r_g_b`.
    pub name: String,
    /// Source color.
    pub color: Rgb8,
}

impl MaterialDef {
    /// Builds the material for `color`.
    pub fn for_color(color: Rgb8) -> Self {
        Self {
            name: format!("mat_{color}"),
            color,
        }
    }

    /// Diffuse color (`Kd`) on a `[0.0, 1.0]` scale.
    pub fn diffuse(&self) -> [f64; 3] {
        self.color.to_unit()
    }

    /// Ambient color (`Ka`), [`AMBIENT_FACTOR`] times the diffuse color.
    pub fn ambient(&self) -> [f64; 3] {
        self.diffuse().map(|c| c * AMBIENT_FACTOR)
    }

    /// Writes this material's `newmtl` block, without a trailing blank line.
    pub fn write_mtl<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let [ka_r, ka_g, ka_b] = self.ambient();
        let [kd_r, kd_g, kd_b] = self.diffuse();

        writeln!(out, "newmtl {}", self.name)?;
        writeln!(out, "Ka {ka_r:.6} {ka_g:.6} {ka_b:.6}")?;
        writeln!(out, "Kd {kd_r:.6} {kd_g:.6} {kd_b:.6}")?;
        writeln!(out, "Ks {SPECULAR} {SPECULAR} {SPECULAR}")?;
        writeln!(out, "Ns {SHININESS:.1}")?;
        writeln!(out, "d {OPACITY:.1}")?;
        writeln!(out, "illum {ILLUMINATION_MODEL}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
