//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = fleetroute_cli::run() {
        eprintln!("fleetroute: {err}");
        std::process::exit(1);
    }
}
