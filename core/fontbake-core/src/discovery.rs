//! Font discovery helpers for fontbake-core (made by FontLab https://www.fontlab.com/)

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::record::FontRecord;

/// Path to a candidate TrueType file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSourceRef {
    pub path: PathBuf,
}

/// Trait for enumerating fonts from some backing store.
pub trait FontDiscovery {
    fn discover(&self) -> Result<Vec<FontSourceRef>>;
}

/// Recursive filesystem walker that collects `.ttf` files in walk order.
///
/// Linked directories are listed but not descended into; linked files are
/// collected like regular ones.
#[derive(Debug, Clone)]
pub struct PathDiscovery {
    root: PathBuf,
}

impl PathDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FontDiscovery for PathDiscovery {
    fn discover(&self) -> Result<Vec<FontSourceRef>> {
        let root = &self.root;
        if !root.exists() {
            return Err(anyhow!("root path does not exist: {}", root.display()));
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.with_context(|| format!("walking {}", root.display()))?;
            if is_file_like(&entry) && is_ttf(entry.path()) {
                debug!("found font {}", entry.path().display());
                found.push(FontSourceRef {
                    path: entry.into_path(),
                });
            }
        }

        Ok(found)
    }
}

/// Read every discovered font into memory, keeping discovery order.
///
/// The first unreadable file aborts the whole collection.
pub fn collect_fonts(discovery: &impl FontDiscovery) -> Result<Vec<FontRecord>> {
    let mut records = Vec::new();

    for source in discovery.discover()? {
        let record = FontRecord::read(&source.path)?;
        debug!(
            "read {} ({} bytes) as {:?}",
            source.path.display(),
            record.length(),
            record.base_name
        );
        records.push(record);
    }

    Ok(records)
}

fn is_ttf(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(".ttf"))
}

// Dangling links are kept; reading them fails.
fn is_file_like(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir())
}
