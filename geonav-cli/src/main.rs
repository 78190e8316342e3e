//! Entry point for the GeoNav command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = geonav_cli::run() {
        eprintln!("geonav: {err}");
        std::process::exit(1);
    }
}
