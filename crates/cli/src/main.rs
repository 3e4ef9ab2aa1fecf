use clap::{Parser, Subcommand};
use hexid_core::{generate_uuid, hex_to_uuid, is_valid_uuid, uuid_to_hex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hexid")]
#[command(about = "Convert raw 16-byte hex identifiers to and from UUID text form")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a hex string to hyphenated UUID form
    ToUuid {
        /// Hex value, for example a RAW(16) column copied from a database
        hex: String,
    },
    /// Strip the hyphens from a UUID
    ToHex {
        /// Hyphenated UUID text
        uuid: String,
    },
    /// Check whether a string is a well-formed hyphenated UUID
    Validate {
        /// Candidate UUID text
        uuid: String,
    },
    /// Generate random version-4 UUIDs
    Generate {
        /// How many UUIDs to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hexid_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ToUuid { hex } => {
            // Hyphens are stripped first so a pasted UUID converts too, and
            // raw input is truncated to the nominal 32 characters
            let stripped = uuid_to_hex(&hex);
            let truncated: String = stripped.chars().take(32).collect();
            println!("{}", hex_to_uuid(&truncated));
        }
        Commands::ToHex { uuid } => {
            println!("{}", uuid_to_hex(&uuid));
        }
        Commands::Validate { uuid } => {
            if is_valid_uuid(&uuid) {
                println!("valid");
            } else {
                println!("invalid");
                std::process::exit(1);
            }
        }
        Commands::Generate { count } => {
            for _ in 0..count {
                println!("{}", generate_uuid());
            }
        }
    }

    Ok(())
}
