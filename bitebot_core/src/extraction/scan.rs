//! Line classification and the scan state machine.

use tracing::{debug, trace};

use super::buffer::FieldBuffer;
use super::markers::Markers;
use crate::restaurant::Restaurant;

/// What a single reply line contributes to the scan.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    /// First line of a new record, with the name and link it carries.
    Boundary {
        name: Option<&'a str>,
        link: Option<&'a str>,
    },
    /// Address line with the trimmed text after the label, possibly empty.
    Address(&'a str),
    /// Rating line; `None` when the value is not a number.
    Rating(Option<f64>),
    /// Price line with its currency symbol count.
    Price(usize),
    Other,
}

impl<'a> LineKind<'a> {
    /// Classify one line. The first matching rule wins, so a boundary line
    /// is never also read as a field line.
    #[must_use]
    pub fn classify(line: &'a str, markers: &Markers) -> Self {
        if line.contains(markers.bold.as_str()) && line.contains('[') && line.contains(']') {
            let (name, link) = bracketed_name_and_link(line);
            return Self::Boundary { name, link };
        }

        if let Some(rest) = Markers::after_label(line, &markers.address_label) {
            return Self::Address(rest.trim());
        }

        if let Some(rest) = Markers::after_label(line, &markers.rating_label) {
            let rating = rest
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|r| r.is_finite());
            return Self::Rating(rating);
        }

        if let Some(rest) = Markers::after_label(line, &markers.price_label) {
            let count = rest
                .chars()
                .filter(|c| *c == markers.currency_symbol)
                .count();
            return Self::Price(count);
        }

        Self::Other
    }
}

/// Name between the first `[` and the following `]`, and link between the
/// next `(` after that and the following `)`.
fn bracketed_name_and_link(line: &str) -> (Option<&str>, Option<&str>) {
    let Some(open) = line.find('[') else {
        return (None, None);
    };
    let after_open = &line[open + 1..];
    let Some(close) = after_open.find(']') else {
        return (None, None);
    };

    let name = &after_open[..close];
    let name = (!name.is_empty()).then_some(name);

    let after_name = &after_open[close + 1..];
    let link = after_name.find('(').and_then(|paren| {
        let inner = &after_name[paren + 1..];
        inner.find(')').map(|end| &inner[..end])
    });

    (name, link)
}

/// Scan state: the record being built and the records already completed.
///
/// `buffer` empty corresponds to "no active record"; a boundary line always
/// starts a fresh buffer.
#[derive(Debug)]
pub struct ScanState<'m> {
    markers: &'m Markers,
    buffer: FieldBuffer,
    restaurants: Vec<Restaurant>,
    line_no: usize,
}

impl<'m> ScanState<'m> {
    #[must_use]
    pub fn new(markers: &'m Markers) -> Self {
        Self {
            markers,
            buffer: FieldBuffer::default(),
            restaurants: Vec::new(),
            line_no: 0,
        }
    }

    pub fn feed_line(&mut self, line: &str) {
        self.line_no += 1;

        match LineKind::classify(line, self.markers) {
            LineKind::Boundary { name, link } => {
                self.flush();
                if let Some(name) = name {
                    self.buffer.name = Some(name.to_string());
                    if let Some(link) = link {
                        self.buffer.link = Some(link.to_string());
                    }
                }
            }
            LineKind::Address(address) => {
                self.buffer.address = Some(address.to_string());
            }
            LineKind::Rating(Some(rating)) => {
                self.buffer.rating = Some(rating);
            }
            LineKind::Price(count) => {
                self.buffer.price_count = Some(count);
            }
            LineKind::Rating(None) => {
                trace!("Skipping unparseable field on line {}", self.line_no);
            }
            LineKind::Other => {}
        }
    }

    /// Flush the last record and return everything collected.
    #[must_use]
    pub fn finish(mut self) -> Vec<Restaurant> {
        self.flush();
        self.restaurants
    }

    fn flush(&mut self) {
        let buffer = std::mem::take(&mut self.buffer);
        if buffer.is_empty() {
            return;
        }

        match buffer.finalize(&self.markers.address_placeholder) {
            Some(restaurant) => self.restaurants.push(restaurant),
            None => debug!(
                "Dropping incomplete restaurant record before line {}",
                self.line_no
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundary_with_link() {
        let markers = Markers::default();
        assert_eq!(
            LineKind::classify("**[Pasta Place](http://x)**", &markers),
            LineKind::Boundary {
                name: Some("Pasta Place"),
                link: Some("http://x"),
            }
        );
    }

    #[test]
    fn test_classify_boundary_without_link() {
        let markers = Markers::default();
        assert_eq!(
            LineKind::classify("1. **[Biryani Bowl]**", &markers),
            LineKind::Boundary {
                name: Some("Biryani Bowl"),
                link: None,
            }
        );
    }

    #[test]
    fn test_classify_boundary_needs_bold() {
        let markers = Markers::default();
        assert_eq!(
            LineKind::classify("[Pasta Place](http://x)", &markers),
            LineKind::Other
        );
    }

    #[test]
    fn test_classify_empty_or_reversed_brackets() {
        let markers = Markers::default();
        assert_eq!(
            LineKind::classify("**[](http://x)**", &markers),
            LineKind::Boundary {
                name: None,
                link: Some("http://x"),
            }
        );
        assert_eq!(
            LineKind::classify("**] odd [**", &markers),
            LineKind::Boundary {
                name: None,
                link: None,
            }
        );
    }

    #[test]
    fn test_classify_link_before_name_is_ignored() {
        let markers = Markers::default();
        assert_eq!(
            LineKind::classify("(note) **[Chai Spot]**", &markers),
            LineKind::Boundary {
                name: Some("Chai Spot"),
                link: None,
            }
        );
    }

    #[test]
    fn test_classify_fields() {
        let markers = Markers::default();
        assert_eq!(
            LineKind::classify("📍 Address: 123 Main St ", &markers),
            LineKind::Address("123 Main St")
        );
        assert_eq!(
            LineKind::classify("📍 Address:   ", &markers),
            LineKind::Address("")
        );
        assert_eq!(
            LineKind::classify("⭐ Rating: 4.5", &markers),
            LineKind::Rating(Some(4.5))
        );
        assert_eq!(
            LineKind::classify("⭐ Rating: great", &markers),
            LineKind::Rating(None)
        );
        assert_eq!(
            LineKind::classify("💰 Price: $$$", &markers),
            LineKind::Price(3)
        );
        assert_eq!(
            LineKind::classify("Enjoy your meal!", &markers),
            LineKind::Other
        );
    }

    #[test]
    fn test_classify_label_anywhere_in_line() {
        let markers = Markers::default();
        assert_eq!(
            LineKind::classify("Google Rating: 4.5", &markers),
            LineKind::Rating(Some(4.5))
        );
        assert_eq!(
            LineKind::classify("Address: 5 Oak Ave", &markers),
            LineKind::Address("5 Oak Ave")
        );
        assert_eq!(
            LineKind::classify("- Price range: $$", &markers),
            LineKind::Other
        );
    }

    #[test]
    fn test_classify_rejects_non_finite_rating() {
        let markers = Markers::default();
        assert_eq!(
            LineKind::classify("⭐ Rating: NaN", &markers),
            LineKind::Rating(None)
        );
        assert_eq!(
            LineKind::classify("⭐ Rating: inf", &markers),
            LineKind::Rating(None)
        );
    }

    #[test]
    fn test_scan_state_flushes_on_boundary_and_finish() {
        let markers = Markers::default();
        let mut state = ScanState::new(&markers);

        for line in [
            "**[First](http://1)**",
            "⭐ Rating: 4.0",
            "**[Second]**",
            "⭐ Rating: 3.5",
            "💰 Price: $",
        ] {
            state.feed_line(line);
        }

        let restaurants = state.finish();
        assert_eq!(restaurants.len(), 2);
        assert_eq!(restaurants[0].name, "First");
        assert_eq!(restaurants[0].link, "http://1");
        assert_eq!(restaurants[1].name, "Second");
        assert_eq!(restaurants[1].link, "");
    }
}
