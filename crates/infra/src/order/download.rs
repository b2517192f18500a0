//! Text downloads written into a directory

use std::path::{Path, PathBuf};

use freehold_core::order::ports::{DownloadFile, DownloadSink};
use freehold_core::ExportError;
use tracing::info;

/// Writes each delivered file into `dir`, creating it on demand.
///
/// An existing file with the same name is replaced, matching a browser that
/// saves repeated downloads of the same summary over each other.
#[derive(Debug, Clone)]
pub struct FileDownloadSink {
    dir: PathBuf,
}

impl FileDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for FileDownloadSink {
    fn deliver(&self, file: DownloadFile) -> Result<(), ExportError> {
        let name = Path::new(&file.filename)
            .file_name()
            .ok_or_else(|| {
                ExportError::Delivery(format!("invalid file name '{}'", file.filename))
            })?;
        let target = self.dir.join(name);

        std::fs::create_dir_all(&self.dir)
            .and_then(|()| std::fs::write(&target, &file.bytes))
            .map_err(|err| ExportError::Delivery(format!("{}: {err}", target.display())))?;

        info!(path = %target.display(), bytes = file.bytes.len(), "download written");
        Ok(())
    }
}
