use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

///
/// Free-text record of how each exon and residue of a transcript was handled.
///
#[derive(Debug, Default, Clone)]
pub struct MappingLog {
    lines: Vec<String>,
}

impl MappingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record<S: Into<String>>(&mut self, line: S) {
        let line = line.into();
        debug!("{}", line);
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}
