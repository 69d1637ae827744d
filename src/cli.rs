use clap::{Parser, Subcommand};
use replystatus::format::OutputFormat;

#[derive(Parser)]
#[command(
    name = "replystatus",
    version,
    about = "Inspect Portable Interceptor reply status codes",
    long_about = "replystatus encodes, decodes and lists the reply status codes that tag\n\
                  the outcome of a remote invocation.\n\n\
                  Set RUST_LOG=debug to trace decoding decisions on stderr."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every known reply status
    List {
        /// Output format: text or yaml
        #[arg(
            long,
            value_name = "FORMAT",
            env = "REPLYSTATUS_FORMAT",
            default_value_t = OutputFormat::Text
        )]
        format: OutputFormat,
    },

    /// Print the integer value of a reply status name (e.g. SUCCESSFUL)
    Encode {
        /// Reply status name, case-insensitive
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Print the reply status name of an integer value
    Decode {
        /// 16-bit signed value
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        value: i16,
    },

    /// Decode a reply status from its two wire octets given as hex (e.g. 0003)
    DecodeBytes {
        /// Four hex digits
        #[arg(value_name = "HEX")]
        hex: String,

        /// Read the octets as little endian (default: big endian)
        #[arg(long)]
        little_endian: bool,
    },

    #[command(
        about = "Generate shell completion script (bash, zsh, fish, powershell, elvish)",
        long_about = "Generates a completion script for your shell to enable tab-completion of replystatus commands.\n\n\
                      EXAMPLES:\n\
                      \n\
                      # Generate bash completions and install system-wide\n\
                      replystatus completions bash | sudo tee /etc/bash_completion.d/replystatus\n\
                      \n\
                      # Generate fish completions and install in user directory\n\
                      replystatus completions fish | tee ~/.config/fish/completions/replystatus.fish"
    )]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
