//! Error helper functions for creating actionable error messages

use std::io;
use std::path::Path;

/// Check if an IO error is a permission denied error
pub fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

/// Check if an IO error is a "not found" error
pub fn is_not_found(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

/// Create an enhanced error message for file permission issues
pub fn permission_error(path: &Path, operation: &str) -> String {
    format!(
        "Permission denied when {} '{}'\n\n\
         Possible fixes:\n\
         1. Check file permissions: ls -l '{}'\n\
         2. The maze file must be both readable and writable: chmod u+rw '{}'",
        operation,
        path.display(),
        path.display(),
        path.display()
    )
}

/// Create an enhanced error message for file not found issues
pub fn not_found_error(path: &Path) -> String {
    format!(
        "File not found: '{}'\n\n\
         Possible fixes:\n\
         1. Check the file path is correct\n\
         2. Use an absolute path if the relative path is ambiguous\n\
         3. Generate the maze first; mazecut never creates files",
        path.display()
    )
}

/// Describe a failure to open the target file
pub fn open_error(path: &Path, err: &io::Error) -> String {
    if is_not_found(err) {
        not_found_error(path)
    } else if is_permission_denied(err) {
        permission_error(path, "opening")
    } else {
        format!("Failed to open file: '{}'", path.display())
    }
}
