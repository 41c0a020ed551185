//! Binary entrypoint for fontbake-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = fontbake_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
