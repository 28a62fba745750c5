use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only target file. Every call to [`AppendFile::append`] opens the
/// file, writes one line and closes it again, so nothing is held open between
/// entries and other readers always see complete lines.
pub struct AppendFile {
    path: PathBuf,
}

impl AppendFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AppendFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{}", line)?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = AppendFile::new(dir.path().join("app.txt"));

        sink.append("first").unwrap();

        assert_eq!(std::fs::read_to_string(sink.path()).unwrap(), "first\n");
    }

    #[test]
    fn test_preserves_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.txt");
        std::fs::write(&path, "already here\n").unwrap();

        let sink = AppendFile::new(&path);
        sink.append("one").unwrap();
        sink.append("two").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "already here\none\ntwo\n"
        );
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let sink = AppendFile::new(dir.path().join("nope").join("app.txt"));
        assert!(sink.append("line").is_err());
    }
}
