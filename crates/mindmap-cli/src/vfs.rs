use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::RenderError;

/// File access used when reading inputs and vaults.
pub trait FileSystem {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// List all files with the given extension under the root directory,
    /// recursively and in file-name order.
    fn list_files(&self, root: &Path, extension: &str) -> Vec<PathBuf>;
}

/// Standard implementation of FileSystem using std::fs and walkdir.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn list_files(&self, root: &Path, extension: &str) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext == extension {
                        files.push(path.to_path_buf());
                    }
                }
            }
        }

        files
    }
}

/// Reads a text input, treating undecodable bytes as a fatal encoding error.
pub fn read_utf8(fs: &dyn FileSystem, path: &Path) -> Result<String, RenderError> {
    fs.read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::InvalidData {
            RenderError::Encoding {
                path: path.to_path_buf(),
            }
        } else {
            RenderError::Io(err)
        }
    })
}
