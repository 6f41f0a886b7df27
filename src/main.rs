//! Language guesser entry point.
//!
//! A thin wrapper around [`guesslang::guesser::Guesser`]: loads the model
//! repository from the configured directory, reads the sample from the
//! command line (arguments joined by spaces) or from stdin, and prints the
//! guessed language code — or `No match`.

use std::io::Read;

use guesslang::config::load_config;
use guesslang::guesser::Guesser;
use guesslang::repository::ModelRepository;

fn main() {
    // Initialise structured logging — default level WARN to keep output clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Load configuration from .env / system environment.
    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Model loading is the only fatal path: without reference models the
    // router's delegation branches cannot resolve anything.
    let repository = match ModelRepository::load_dir(&config.model_dir) {
        Ok(r) => r,
        Err(e) => {
            eprintln!(
                "Failed to load trigram models from {}: {}",
                config.model_dir.display(),
                e
            );
            eprintln!("Set GUESSLANG_MODEL_DIR to a directory of per-language model files.");
            std::process::exit(1);
        }
    };

    let guesser = Guesser::new(repository);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("Read error: {}", e);
            std::process::exit(1);
        }
        buf
    } else {
        args.join(" ")
    };

    println!("{}", guesser.guess(&text));
}
