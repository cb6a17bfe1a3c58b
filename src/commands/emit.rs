//! Where generated documents go.
use crate::commands::generate::{GenError, GenResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SOURCE_EXTENSION: &str = "cs";

pub trait EmissionSink {
    fn emit(&mut self, artifact: &str, text: &str) -> GenResult<()>;
}

/// Writes `<dir>/<artifact>.cs`, creating `dir` if needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn path_for(&self, artifact: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", artifact, SOURCE_EXTENSION))
    }
}

impl EmissionSink for FileSink {
    fn emit(&mut self, artifact: &str, text: &str) -> GenResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| GenError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let out_path = self.path_for(artifact);
        fs::write(&out_path, text).map_err(|source| GenError::Io {
            path: out_path.clone(),
            source,
        })?;
        info!("Wrote {}", out_path.display());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StdoutSink;

impl EmissionSink for StdoutSink {
    fn emit(&mut self, _artifact: &str, text: &str) -> GenResult<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(text.as_bytes())
            .and_then(|_| lock.flush())
            .map_err(|source| GenError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sink_writes_named_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("Generated");
        let mut sink = FileSink::new(&nested);
        sink.emit("AttributeTest", "// body\n").unwrap();
        let written = fs::read_to_string(nested.join("AttributeTest.cs")).unwrap();
        assert_eq!(written, "// body\n");
    }
}
