use super::{decode_lines, encode_all, report, DataStore};
use crate::config::DEFAULT_DATA_FILE;
use crate::diagnostics::{Diagnostic, DiagnosticSink, StdoutSink};
use crate::error::Result;
use crate::model::Product;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Catalog kept in a single plain text file, one record per line.
///
/// Every operation opens the file, does its work and drops the handle before
/// returning. The file is never held open between calls.
pub struct FileStore {
    path: PathBuf,
    sink: Box<dyn DiagnosticSink>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sink: Box::new(StdoutSink),
        }
    }

    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Splits on `\n` without requiring UTF-8. Undecodable bytes become U+FFFD, so a
/// bad byte spoils one name instead of ending the read; only real I/O errors are
/// yielded as `Err`.
fn raw_lines<R: BufRead>(mut reader: R) -> impl Iterator<Item = io::Result<String>> {
    let mut buf = Vec::new();
    std::iter::from_fn(move || {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                while matches!(buf.last(), Some(b'\n' | b'\r')) {
                    buf.pop();
                }
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    })
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl DataStore for FileStore {
    fn ensure_exists(&mut self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => {
                report(self.sink.as_ref(), Diagnostic::FileCreated(self.path.clone()));
                Ok(())
            }
            // Someone else created it in between; that is all we wanted.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn load_all(&self) -> Vec<Product> {
        debug!(path = %self.path.display(), "loading catalog");
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                report(self.sink.as_ref(), Diagnostic::FileMissing(self.path.clone()));
                return Vec::new();
            }
            Err(e) => {
                report(self.sink.as_ref(), Diagnostic::ReadFailed(e.to_string()));
                return Vec::new();
            }
        };
        decode_lines(raw_lines(BufReader::new(file)), self.sink.as_ref())
    }

    fn save_all(&mut self, products: &[Product]) -> Result<()> {
        let contents = encode_all(products)?;
        let mut writer = BufWriter::new(File::create(&self.path)?);
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
        debug!(path = %self.path.display(), count = products.len(), "saved catalog");
        Ok(())
    }
}
