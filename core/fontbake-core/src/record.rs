//! In-memory font records (made by FontLab https://www.fontlab.com/)

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// One discovered font file, held fully in memory until it is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRecord {
    /// Original file name, extension included.
    pub name: String,
    /// File name truncated at its first `.`.
    pub base_name: String,
    pub data: Vec<u8>,
}

impl FontRecord {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        let name = name.into();
        let base_name = base_name(&name).to_string();
        Self {
            name,
            base_name,
            data,
        }
    }

    /// Read a font file from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let data =
            fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(name, data))
    }

    pub fn length(&self) -> usize {
        self.data.len()
    }
}

/// Everything before the first `.`; `a.b.ttf` yields `a`.
pub fn base_name(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn base_name_truncates_at_first_dot() {
        assert_eq!(base_name("Arial.ttf"), "Arial");
        assert_eq!(base_name("Noto.Sans.Bold.ttf"), "Noto");
        assert_eq!(base_name("README"), "README");
        assert_eq!(base_name(".ttf"), "");
    }

    #[test]
    fn length_tracks_data() {
        let record = FontRecord::new("A.ttf", vec![1, 2, 3]);
        assert_eq!(record.length(), 3);
        assert_eq!(record.base_name, "A");
        assert_eq!(record.name, "A.ttf");
    }

    #[test]
    fn reads_file_name_and_bytes() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("Mono.Regular.TTF");
        fs::write(&path, [0x00, 0x01, 0x00, 0x00]).expect("write font");

        let record = FontRecord::read(&path).expect("read");

        assert_eq!(record.name, "Mono.Regular.TTF");
        assert_eq!(record.base_name, "Mono");
        assert_eq!(record.data, vec![0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn missing_file_reports_path() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("gone.ttf");

        let err = FontRecord::read(&path).expect_err("missing file");
        assert!(format!("{err}").contains("gone.ttf"));
    }
}
