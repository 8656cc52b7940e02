//! Named export buffers and their hand-off to the filesystem.

use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::exporter::ExportStats;

/// File names derived from one export base name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportNames {
    /// `<base>.obj`
    pub obj: String,
    /// `<base>.mtl`
    pub mtl: String,
    /// `<base>_import_instructions.txt`
    pub instructions: String,
}

impl ExportNames {
    /// Derives all file names from `base`.
    pub fn new(base: &str) -> Self {
        Self {
            obj: format!("{base}.obj"),
            mtl: format!("{base}.mtl"),
            instructions: format!("{base}_import_instructions.txt"),
        }
    }
}

/// One finished text buffer and the file name it should be saved under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    /// Bare file name, no directory.
    pub name: String,
    /// Full text content.
    pub contents: String,
}

/// Every buffer produced by one export call.
///
/// A bundle only exists once all of its buffers are complete, so handing it
/// off is all-or-nothing from the exporter's side.
#[derive(Clone, Debug)]
pub struct ExportBundle {
    /// Files in hand-off order.
    pub files: Vec<ExportFile>,
    /// Record counts of the export.
    pub stats: ExportStats,
}

impl ExportBundle {
    /// Looks up a file by name.
    pub fn file(&self, name: &str) -> Option<&ExportFile> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Writes every file into `dir`, creating the directory if needed.
    ///
    /// Files are first staged under temporary names and only renamed into
    /// place once all of them were written. If staging fails, the staged
    /// files are removed and no target file is touched. If a rename fails,
    /// the remaining staged files and the targets already renamed by this
    /// call are removed.
    ///
    /// Returns the final paths in hand-off order.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let target = dir.join(&file.name);
            let temp = dir.join(format!(".{}.partial", file.name));
            if let Err(source) = std::fs::write(&temp, &file.contents) {
                discard(&staged);
                let _ = std::fs::remove_file(&temp);
                return Err(ExportError::Io { path: temp, source });
            }
            staged.push((temp, target));
        }

        let mut written: Vec<PathBuf> = Vec::with_capacity(staged.len());
        for (i, (temp, target)) in staged.iter().enumerate() {
            if let Err(source) = std::fs::rename(temp, target) {
                discard(&staged[i..]);
                retract(&written);
                return Err(ExportError::Io {
                    path: target.clone(),
                    source,
                });
            }
            tracing::debug!(path = %target.display(), "wrote export file");
            written.push(target.clone());
        }
        Ok(written)
    }
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (temp, _) in staged {
        if let Err(e) = std::fs::remove_file(temp) {
            tracing::warn!(path = %temp.display(), "failed to remove staged file: {e}");
        }
    }
}

/// Removes targets already renamed into place by a failed write.
fn retract(written: &[PathBuf]) {
    for target in written {
        if let Err(e) = std::fs::remove_file(target) {
            tracing::warn!(path = %target.display(), "failed to remove committed file: {e}");
        }
    }
}
