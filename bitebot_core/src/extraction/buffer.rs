//! In-progress record accumulated between boundary lines.

use crate::restaurant::{PriceLevel, Restaurant};

/// Fields seen so far for the record being scanned.
///
/// Every field stays `None` until a line supplies it. A later line for the
/// same field replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldBuffer {
    pub name: Option<String>,
    pub link: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    /// Number of currency symbols on the price line.
    pub price_count: Option<usize>,
}

impl FieldBuffer {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.link.is_none()
            && self.address.is_none()
            && self.rating.is_none()
            && self.price_count.is_none()
    }

    /// Validate the buffer and apply defaults.
    ///
    /// Returns `None` when the name or rating is missing.
    #[must_use]
    pub fn finalize(self, address_placeholder: &str) -> Option<Restaurant> {
        let name = self.name.filter(|n| !n.is_empty())?;
        let rating = self.rating.filter(|r| r.is_finite())?;

        Some(Restaurant {
            name,
            rating,
            address: self
                .address
                .unwrap_or_else(|| address_placeholder.to_string()),
            link: self.link.unwrap_or_default(),
            price_level: self
                .price_count
                .map_or(PriceLevel::Moderate, PriceLevel::from_count),
        })
    }
}
