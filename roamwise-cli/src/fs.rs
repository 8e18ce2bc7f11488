//! Capability-based file access for catalogue input and result output.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open `path` for reading.
pub(crate) fn open_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Report whether `path` names a regular file.
///
/// A missing path surfaces as an [`io::ErrorKind::NotFound`] error.
pub(crate) fn is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_and_name(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create or truncate `path`, creating missing parent directories first.
pub(crate) fn create_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
        let (root, relative) = anchor(parent);
        if !relative.as_str().is_empty() {
            fs_utf8::Dir::open_ambient_dir(root, ambient_authority())?
                .create_dir_all(&relative)?;
        }
    }
    let (dir, name) = parent_and_name(path)?;
    dir.create(name.as_str())
}

fn parent_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} has no file name")))?
        .to_owned();
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split `path` into the directory it is anchored at and the remainder.
///
/// Absolute paths anchor at their root, relative paths at `.`.
fn anchor(path: &Utf8Path) -> (&Utf8Path, Utf8PathBuf) {
    let root = path
        .ancestors()
        .last()
        .filter(|root| !root.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let relative = path
        .strip_prefix(root)
        .map_or_else(|_| path.to_path_buf(), Utf8Path::to_path_buf);
    (root, relative)
}
