use asciify::cli::{self, Args};
use clap::Parser;

fn main() {
    // Logs go to stderr so they never interleave with art on stdout.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = cli::dispatch(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
