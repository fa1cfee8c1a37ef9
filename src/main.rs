//! PCM Audio CLI
//!
//! Command-line interface for converting raw audio/L16 payloads.

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use pcm_audio::cli::{parse_policy, Cli, Commands};
use pcm_audio::Result;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("PCM Audio v{}", env!("CARGO_PKG_VERSION"));

    let outcome = match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("PCM Audio v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = outcome {
        error!("[{}] {}", e.error_code(), e);
        for suggestion in e.recovery_suggestions() {
            eprintln!("  hint: {}", suggestion);
        }
        std::process::exit(1);
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::ParseFormat {
            content_type,
            strict,
        } => pcm_audio::cli::commands::parse_format(&content_type, parse_policy(strict))
            .map(|_| ()),
        Commands::Encode {
            input,
            content_type,
            strict,
            output,
        } => pcm_audio::cli::commands::encode(
            &input,
            &content_type,
            parse_policy(strict),
            output.as_deref(),
        )
        .map(|_| ()),
        Commands::Decode { input, output } => {
            pcm_audio::cli::commands::decode(&input, &output).map(|_| ())
        }
        Commands::Info { input } => pcm_audio::cli::commands::info(&input).map(|_| ()),
    }
}
