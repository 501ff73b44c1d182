use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::usecase::ports::file_sink::{FileSink, SaveError};

/// Saves exports into a directory, normally the user's downloads folder.
///
/// Payloads are written to `<name>.part` first and renamed into place, so a
/// failed write never leaves a truncated `<name>` behind. An existing file
/// with the same name is replaced.
pub struct DownloadDirSink {
    dir: PathBuf,
}

impl DownloadDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSink for DownloadDirSink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SaveError> {
        fs::create_dir_all(&self.dir).map_err(|source| SaveError {
            path: self.dir.clone(),
            source,
        })?;

        let target = self.dir.join(file_name);
        let partial = self.dir.join(format!("{file_name}.part"));

        let written = fs::write(&partial, bytes).and_then(|_| fs::rename(&partial, &target));
        if let Err(source) = written {
            let _ = fs::remove_file(&partial);
            return Err(SaveError {
                path: target,
                source,
            });
        }

        debug!(path = %target.display(), bytes = bytes.len(), "payload saved");
        Ok(target)
    }
}
