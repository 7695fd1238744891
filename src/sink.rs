//! Wordlist export targets

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PassForgeError, Result};

/// Destination for a finished, ordered wordlist
pub trait Sink {
    /// Human-readable identifier of the destination
    fn target(&self) -> &str;

    /// Write one candidate per line, replacing whatever was there before
    fn write(&mut self, words: &[String]) -> Result<()>;
}

fn write_lines<W: Write>(mut out: W, words: &[String]) -> std::io::Result<()> {
    for word in words {
        out.write_all(word.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Plain-text file, newline-terminated lines, truncated on open
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    display: String,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.to_string_lossy().to_string();
        Self { path, display }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn target(&self) -> &str {
        &self.display
    }

    fn write(&mut self, words: &[String]) -> Result<()> {
        let file = File::create(&self.path)
            .map_err(|e| PassForgeError::sink_write(&self.display, e.to_string()))?;

        write_lines(BufWriter::new(file), words)
            .map_err(|e| PassForgeError::sink_write(&self.display, e.to_string()))
    }
}

/// Standard output, for piping into other tools
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn target(&self) -> &str {
        "<stdout>"
    }

    fn write(&mut self, words: &[String]) -> Result<()> {
        let stdout = std::io::stdout();
        write_lines(stdout.lock(), words).map_err(|e| PassForgeError::sink_write("<stdout>", e.to_string()))
    }
}

/// In-memory sink, mostly for tests and embedding
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    name: String,
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Sink for MemorySink {
    fn target(&self) -> &str {
        &self.name
    }

    fn write(&mut self, words: &[String]) -> Result<()> {
        self.lines = words.to_vec();
        Ok(())
    }
}
