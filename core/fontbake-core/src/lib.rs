//! fontbake-core: fonts in, byte-array initializers out
//!
//! Walks a directory of TrueType fonts and turns every `.ttf` file it finds
//! into one structured-initializer entry, so the whole set can be compiled
//! straight into a binary that never touches the filesystem at runtime.
//!
//! ## Two Steps, One Direction
//!
//! **Collecting**: [`discovery::PathDiscovery`] walks the tree and
//! [`discovery::collect_fonts`] reads every match into a [`record::FontRecord`].
//!
//! **Emitting**: [`output::write_header_file`] renders each record as
//! `{ .name = "...", .length = N, .data = (const uint8_t[]) {0x.., } },`.
//!
//! ```rust,no_run
//! use fontbake_core::bake::{bake, FONT_DIR, HEADER_FILE};
//!
//! let report = bake(FONT_DIR, HEADER_FILE)?;
//! println!("baked {} fonts ({} bytes)", report.fonts, report.bytes);
//! #
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! The generated file is a sequence of entries, meant to be included as the
//! body of an array definition, not a standalone compilation unit.
//!
//! ---
//!
//! Crafted with care at FontLab https://www.fontlab.com/

pub mod bake;
pub mod discovery;
pub mod output;
pub mod record;
