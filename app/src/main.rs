#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    ChatInput, ChatStrategy, CommandStrategy, ExtractInput, ExtractStrategy, InfoStrategy,
    InitStrategy, ReplyInput, ReplyStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "bitebot")]
#[command(about = "Restaurant recommendation chat client", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/bitebot/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract restaurants from a bot reply text
    Extract {
        /// Reply text file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Decode a webhook JSON payload and extract restaurants from its messages
    Reply {
        /// Payload file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print JSON instead of messages and cards
        #[arg(long)]
        json: bool,
    },
    /// Chat with the recommendation bot
    Chat {
        /// Single message to send
        #[arg(short = 'm', long)]
        message: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

/// `RUST_LOG` wins, then the configured level, then `info`.
fn init_tracing(config_path: Option<&std::path::Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = command::load_config(config_path)
            .map_or_else(|_| "info".to_string(), |config| config.log_level);
        EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.config.as_deref())?;

    match cli.command {
        Commands::Extract { file, json } => {
            ExtractStrategy
                .execute(ExtractInput {
                    file,
                    json,
                    config: cli.config,
                })
                .await
        }
        Commands::Reply { file, json } => {
            ReplyStrategy
                .execute(ReplyInput {
                    file,
                    json,
                    config: cli.config,
                })
                .await
        }
        Commands::Chat { message } => {
            ChatStrategy
                .execute(ChatInput {
                    message,
                    config: cli.config,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(cli.config).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
