use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::EmitError;

/// Maps a route to its file: `/` to `index.html`, `/a/b` to `a/b/index.html`, under `output_dir`.
///
/// Routes with `.` or `..` segments or backslashes are rejected, so a route can never point outside of
/// `output_dir`.
pub fn route_file_path(route: &str, output_dir: &Path) -> Result<PathBuf, EmitError> {
    let mut file_path = output_dir.to_path_buf();

    for segment in route.split('/').filter(|segment| !segment.is_empty()) {
        if segment == "." || segment == ".." || segment.contains('\\') {
            return Err(EmitError::UnsafeRoute {
                route: route.to_string(),
            });
        }
        file_path.push(segment);
    }

    file_path.push("index.html");
    Ok(file_path)
}

/// Writes a page, creating its parent directories and replacing any previous file.
pub fn write_route_file(content: &str, file_path: &Path) -> Result<(), EmitError> {
    let io_error = |source| EmitError::Io {
        path: file_path.to_path_buf(),
        source,
    };

    if let Some(parent_dir) = file_path.parent() {
        fs::create_dir_all(parent_dir).map_err(io_error)?;
    }

    fs::write(file_path, content).map_err(io_error)
}
