mod cli;
mod commands;
mod completions;
mod exit_codes;

use clap::Parser;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let code = match cli.command {
        cli::Commands::List { format } => commands::run_list(format),
        cli::Commands::Encode { name } => commands::run_encode(&name),
        cli::Commands::Decode { value } => commands::run_decode(value),
        cli::Commands::DecodeBytes { hex, little_endian } => {
            commands::run_decode_bytes(&hex, little_endian)
        }
        cli::Commands::Completions { shell } => completions::run_completions(shell),
    };
    std::process::exit(code);
}
