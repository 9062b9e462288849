//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use bitebot_config::Config;
use bitebot_core::{Markers, Restaurant};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod chat;
mod extract;
mod info;
mod init;
mod reply;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use extract::{ExtractInput, ExtractStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use reply::{ReplyInput, ReplyStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Extraction markers from the config file when one is available.
///
/// Offline commands work without a config file, so a missing or broken one
/// falls back to the default markers.
fn markers_or_default(config_path: Option<&Path>) -> Markers {
    match load_config(config_path) {
        Ok(config) => config.extraction,
        Err(e) => {
            debug!("Using default extraction markers: {e}");
            Markers::default()
        }
    }
}

/// Read a whole file, or stdin when no file is given.
fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        info!("Reading {}", path.display());
        return std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()));
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn print_restaurants(restaurants: Option<&[Restaurant]>, json: bool) -> anyhow::Result<()> {
    if json {
        let list = restaurants.unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(list)?);
        return Ok(());
    }

    match restaurants {
        Some(list) => {
            println!("Found {} restaurant(s):", list.len());
            for restaurant in list {
                println!("\n{restaurant}");
            }
        }
        None => println!("No restaurant recommendations found."),
    }
    Ok(())
}
