//! Marker texts of the bot's restaurant list format.
//!
//! The bot renders recommendations as a markdown-ish list:
//!
//! ```text
//! **Here are some great restaurant options:**
//!
//! **[Pasta Place](http://example.com/pasta)**
//! 📍 Address: 123 Main St
//! ⭐ Rating: 4.5
//! 💰 Price: $$
//! ```
//!
//! These values are a contract with the bot, not a grammar. If the bot
//! changes its wording, extraction yields nothing rather than failing.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SENTINEL: &str = "**Here are some great restaurant options:**";
pub const DEFAULT_ADDRESS_PLACEHOLDER: &str = "Address not available";

/// Set of literal markers recognised by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Phrase that must appear somewhere in a reply before any scanning.
    pub sentinel: String,

    /// Bold markup that, with `[` and `]`, marks the first line of a record.
    pub bold: String,

    pub address_label: String,
    pub rating_label: String,
    pub price_label: String,

    /// Character counted on the price line.
    pub currency_symbol: char,

    /// Address used when a record has no address line.
    pub address_placeholder: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            bold: "**".to_string(),
            address_label: "Address:".to_string(),
            rating_label: "Rating:".to_string(),
            price_label: "Price:".to_string(),
            currency_symbol: '$',
            address_placeholder: DEFAULT_ADDRESS_PLACEHOLDER.to_string(),
        }
    }
}

impl Markers {
    /// Reject marker sets that would match every line or disable a check.
    pub fn validate(&self) -> anyhow::Result<()> {
        let required = [
            ("sentinel", &self.sentinel),
            ("bold", &self.bold),
            ("address_label", &self.address_label),
            ("rating_label", &self.rating_label),
            ("price_label", &self.price_label),
        ];

        for (field, value) in required {
            if value.is_empty() {
                anyhow::bail!("Marker `{field}` must not be empty");
            }
        }
        Ok(())
    }

    /// Text following the first occurrence of `label` in `line`.
    pub(crate) fn after_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
        line.find(label).map(|pos| &line[pos + label.len()..])
    }
}
