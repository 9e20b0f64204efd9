//! Output directory handling.

use std::path::{Path, PathBuf};

use fs_err as fs;

use crate::Error;

/// The directory the rendered book is written into.
///
/// Reset at startup, before any query runs, so every run starts from a clean
/// slate and stale pages from a previous run never survive.
#[derive(Debug)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Destroy and recreate `<base>/<database>`.
    pub fn reset(base: impl AsRef<Path>, database: &str) -> Result<Self, Error> {
        let root = base.as_ref().join(database);
        if root.exists() {
            fs::remove_dir_all(&root)?;
        }
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Write `content` to `<root>/<filename>`, overwriting. The content is
    /// written byte-exact, with no trailing newline appended.
    pub fn write(&self, filename: &str, content: &str) -> Result<(), Error> {
        fs::write(self.root.join(filename), content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}
