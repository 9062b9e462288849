//! Restaurant extraction from bot replies.
//!
//! Bot replies are free text. When a reply contains the sentinel phrase, it
//! is scanned line by line: a bold line with a bracketed name opens a new
//! record, and the address, rating and price lines that follow fill it in.
//! Records missing a name or a rating are dropped without error.

pub mod buffer;
pub mod markers;
pub mod scan;

pub use buffer::FieldBuffer;
pub use markers::{DEFAULT_ADDRESS_PLACEHOLDER, DEFAULT_SENTINEL, Markers};
pub use scan::{LineKind, ScanState};

use tracing::debug;

use crate::restaurant::Restaurant;

/// Extracts restaurant records from bot reply text.
///
/// The extractor holds no per-call state and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct ResponseExtractor {
    markers: Markers,
}

impl ResponseExtractor {
    #[must_use]
    pub const fn new(markers: Markers) -> Self {
        Self { markers }
    }

    #[must_use]
    pub const fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Whether `text` announces a restaurant list at all.
    #[must_use]
    pub fn has_structured_content(&self, text: &str) -> bool {
        text.contains(self.markers.sentinel.as_str())
    }

    /// Extract restaurants from one reply.
    ///
    /// Returns `None` when the sentinel is absent or when no record survives
    /// validation; otherwise the records in reply order.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<Vec<Restaurant>> {
        if !self.has_structured_content(text) {
            return None;
        }

        let mut state = ScanState::new(&self.markers);
        for line in text.split('\n') {
            state.feed_line(line.strip_suffix('\r').unwrap_or(line));
        }

        let restaurants = state.finish();
        debug!("Extracted {} restaurant(s) from reply", restaurants.len());

        if restaurants.is_empty() {
            None
        } else {
            Some(restaurants)
        }
    }
}

/// Extract restaurants using the default markers.
#[must_use]
pub fn extract_restaurants(text: &str) -> Option<Vec<Restaurant>> {
    ResponseExtractor::default().extract(text)
}
