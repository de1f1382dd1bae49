use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Append-only status log. The file is opened and closed per write,
/// created on demand and never read back; there is no rotation.
pub struct StatusLog {
    path: PathBuf,
}

impl StatusLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn append(&self, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{entry}")
    }
}
