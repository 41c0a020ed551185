//! Collect-then-emit pipeline (made by FontLab https://www.fontlab.com/)

use std::path::Path;

use anyhow::Result;
use log::info;

use crate::discovery::{collect_fonts, PathDiscovery};
use crate::output::write_header_file;

/// Directory scanned for fonts, relative to the invocation directory.
pub const FONT_DIR: &str = "./resources/";

/// Generated file, overwritten on every run.
pub const HEADER_FILE: &str = "./resources/precompiled_fonts.h";

/// What a successful run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BakeReport {
    pub fonts: usize,
    pub bytes: usize,
}

/// Collect every `.ttf` under `font_dir`, then write them all to `header_path`.
///
/// Nothing is written unless collection succeeds in full.
pub fn bake(font_dir: impl AsRef<Path>, header_path: impl AsRef<Path>) -> Result<BakeReport> {
    let font_dir = font_dir.as_ref();
    let header_path = header_path.as_ref();

    let records = collect_fonts(&PathDiscovery::new(font_dir))?;
    write_header_file(header_path, &records)?;

    let report = BakeReport {
        fonts: records.len(),
        bytes: records.iter().map(|r| r.length()).sum(),
    };
    info!(
        "wrote {} fonts ({} bytes) to {}",
        report.fonts,
        report.bytes,
        header_path.display()
    );

    Ok(report)
}
