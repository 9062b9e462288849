use bitebot_core::ResponseExtractor;
use std::path::PathBuf;

use super::{markers_or_default, print_restaurants, read_input};

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    /// Reply text file (stdin when not provided)
    pub file: Option<PathBuf>,
    /// Print JSON instead of cards
    pub json: bool,
    /// Config file overriding the default location
    pub config: Option<PathBuf>,
}

/// Strategy for extracting restaurants from a saved bot reply.
///
/// Runs offline; the config file is only consulted for extraction markers.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let extractor = ResponseExtractor::new(markers_or_default(input.config.as_deref()));
        let text = read_input(input.file.as_ref())?;

        let restaurants = extractor.extract(&text);
        print_restaurants(restaurants.as_deref(), input.json)
    }
}
