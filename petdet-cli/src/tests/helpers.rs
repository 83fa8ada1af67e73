//! Test helpers for writing puzzle files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// The single-pet puzzle in file form.
pub(super) const SINGLE_PET_PUZZLE: &str = "10\ncar dog 3\ndog dog_home 2\ncar dog_home 100\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory that is removed when dropped.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` to `name` and return the full path.
    pub(super) fn puzzle(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}
