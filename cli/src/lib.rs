//! fontbake CLI (made by FontLab https://www.fontlab.com/)

use anyhow::Result;
use clap::Parser;
use log::debug;

use fontbake_core::bake::{bake, FONT_DIR, HEADER_FILE};

/// Printed once every font has been written.
pub const SUCCESS_MESSAGE: &str = "Fonts compiled successfully!";

/// CLI entrypoint for fontbake.
///
/// Reads every `.ttf` under `./resources/` and writes
/// `./resources/precompiled_fonts.h`; paths are fixed.
#[derive(Debug, Parser)]
#[command(
    name = "fontbake",
    version,
    about = "Bake ./resources/*.ttf into byte-array initializers (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {}

/// Parse CLI args and run the bake.
pub fn run() -> Result<()> {
    let _cli = Cli::parse();
    init_logging();

    debug!("baking {FONT_DIR} into {HEADER_FILE}");
    bake(FONT_DIR, HEADER_FILE)?;
    println!("{SUCCESS_MESSAGE}");

    Ok(())
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}
