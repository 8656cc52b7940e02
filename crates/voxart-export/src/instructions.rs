//! Import guidance shipped next to a material-aware export.

/// Builds the instructions text for an OBJ/MTL pair.
///
/// The content is fixed apart from the two file names.
pub fn import_instructions(obj_name: &str, mtl_name: &str) -> String {
    format!(
        "# Visibility helper for Rhino\n\
         # This file helps ensure materials are visible in Rhino\n\
         # Place both {obj_name} and {mtl_name} in the same directory\n\
         # Then import {obj_name} with \"Import Materials\" checked\n"
    )
}
