use camera_lister::cli::{self, Args};
use camera_lister::logging::init_logger;
use clap::Parser;

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
