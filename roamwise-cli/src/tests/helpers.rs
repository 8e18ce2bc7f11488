//! Test helpers for writing catalogues into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use roamwise_core::test_support::sample_catalog;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directory");
    }
    std::fs::write(path, contents).expect("write file");
}

/// Temporary directory holding `catalog.json` with the sample catalogue.
pub(super) struct CatalogWorkspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) catalog: Utf8PathBuf,
}

impl CatalogWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let catalog = root.join("catalog.json");
        let payload = serde_json::to_vec_pretty(&sample_catalog()).expect("serialise catalogue");
        write_utf8(&catalog, &payload);
        Self {
            _dir: dir,
            root,
            catalog,
        }
    }
}
