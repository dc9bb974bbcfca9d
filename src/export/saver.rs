use crate::errors::ExportError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Capability interface for the final "save as file" step.
///
/// The exporter hands over a file name, the finished bytes and a MIME tag;
/// where those bytes end up (a directory, a save dialog, an object store) is
/// the implementor's concern.
pub trait FileSaver {
    /// Persist `bytes` under `name` and return the path written.
    ///
    /// # Errors
    /// Returns an error when the destination cannot be created or written.
    fn save(&self, name: &str, bytes: &[u8], mime: &str) -> Result<PathBuf, ExportError>;
}

/// Saves into a fixed directory with atomic replace semantics: the bytes go
/// to a temp file in the same directory first, then replace the destination.
#[derive(Debug, Clone)]
pub struct DirSaver {
    dir: PathBuf,
}

impl DirSaver {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSaver for DirSaver {
    fn save(&self, name: &str, bytes: &[u8], mime: &str) -> Result<PathBuf, ExportError> {
        log::debug!("save: name={name}, mime={mime}, len={}", bytes.len());
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| ExportError::Io(e.to_string()))?;
        }
        let dest = self.dir.join(name);
        let mut tmp =
            NamedTempFile::new_in(&self.dir).map_err(|e| ExportError::Io(e.to_string()))?;
        tmp.write_all(bytes).map_err(|e| ExportError::Io(e.to_string()))?;
        tmp.flush().map_err(|e| ExportError::Io(e.to_string()))?;
        // Persist atomically with Windows-friendly retries
        let mut last_err: Option<std::io::Error> = None;
        for attempt in 0u64..5 {
            if dest.exists()
                && let Err(e) = fs::remove_file(&dest)
            {
                last_err = Some(e);
                std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
                continue;
            }
            match tmp.persist(&dest) {
                Ok(_f) => return Ok(dest),
                Err(pe) => {
                    last_err = Some(pe.error);
                    tmp = pe.file; // recover temp file and retry
                    std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
                }
            }
        }
        Err(ExportError::Io(
            last_err.map_or_else(|| "failed to persist export file".to_string(), |e| e.to_string()),
        ))
    }
}
