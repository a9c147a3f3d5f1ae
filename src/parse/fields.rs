//! Field extraction for a single country block.
//!
//! Every field except the name is introduced by a `<strong>` label whose
//! text contains a known phrase (`total:`, `note:`, `border countries`, ...).
//! The value is the first non-empty text node after the label.
//!
//! Sample block:
//!
//! ```html
//! <div class="pb30">
//!   <h3 class="mt10"><a href="/the-world-factbook/countries/tajikistan/">Tajikistan</a></h3>
//!   <strong>total:</strong> 4,130 km<br/><br/>
//!   <strong>border countries (4):</strong>
//!   Afghanistan 1,357 km; China 477 km; Kyrgyzstan 984 km; Uzbekistan 1,312 km
//! </div>
//! ```

use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

use crate::config::{NEIGHBOR_LABELS, NOTE_LABEL, TOTAL_LABEL};
use crate::models::{BorderPair, CountryRecord};
use crate::normalize::parse_neighbor_pairs;
use crate::utils::collapse_whitespace;

// CSS selector strings
const LABEL_SELECTOR_STR: &str = "strong";
const LINK_SELECTOR_STR: &str = "a";

static LABEL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(LABEL_SELECTOR_STR, "LABEL_SELECTOR"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(LINK_SELECTOR_STR, "LINK_SELECTOR"));

/// Raw field text of one country block, before numeric conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryBlock {
    /// Text of the block's first link, trimmed.
    pub name: String,
    /// Text after the `total:` label.
    pub total: Option<String>,
    /// Text after the `note:` label.
    pub note: Option<String>,
    /// Text after the first neighbor-list label.
    pub neighbors: Option<String>,
}

impl CountryBlock {
    /// Builds the country row, defaulting a missing or unreadable total to 0.
    pub fn country_record(&self) -> CountryRecord {
        let border_total_km = match self.total.as_deref() {
            Some(text) => parse_length_km(text).unwrap_or_else(|| {
                log::warn!(
                    "Unreadable border total '{}' for {}, using 0",
                    text,
                    self.name
                );
                0.0
            }),
            None => 0.0,
        };

        CountryRecord {
            country_name: self.name.clone(),
            border_total_km,
            note: self.note.clone().unwrap_or_default(),
        }
    }

    /// Builds one border pair per neighbor segment. Empty without a neighbor list.
    pub fn border_pairs(&self) -> Vec<BorderPair> {
        let Some(text) = self.neighbors.as_deref() else {
            return Vec::new();
        };

        parse_neighbor_pairs(text)
            .into_iter()
            .filter_map(|(neighbor, length)| match length.parse::<f64>() {
                Ok(border_length_km) => Some(BorderPair {
                    country_name: self.name.clone(),
                    neighbor_country: neighbor,
                    border_length_km,
                }),
                Err(e) => {
                    log::warn!(
                        "Skipping border {} -> {}: bad length '{}': {}",
                        self.name,
                        neighbor,
                        length,
                        e
                    );
                    None
                }
            })
            .collect()
    }
}

/// Extracts all fields of a country block.
pub fn extract_country_block(block: ElementRef<'_>) -> CountryBlock {
    let name = extract_country_name(block).unwrap_or_else(|| {
        log::warn!("Country block without a name link");
        String::new()
    });

    let total = find_label(block, |text| text.contains(TOTAL_LABEL))
        .and_then(|label| text_after_label(block, label));
    let note = find_label(block, |text| text.contains(NOTE_LABEL))
        .and_then(|label| text_after_label(block, label));
    let neighbors = find_label(block, |text| {
        NEIGHBOR_LABELS.iter().any(|phrase| text.contains(phrase))
    })
    .and_then(|label| text_after_label(block, label));

    if total.is_none() {
        log::debug!("No '{}' label for {}", TOTAL_LABEL, name);
    }

    CountryBlock {
        name,
        total,
        note,
        neighbors,
    }
}

/// Text of the first link in the block, whitespace-collapsed.
pub fn extract_country_name(block: ElementRef<'_>) -> Option<String> {
    block
        .select(&LINK_SELECTOR)
        .next()
        .map(|link| collapse_whitespace(&link.text().collect::<String>()))
}

/// First `<strong>` label in the block whose text satisfies `matches`.
pub fn find_label<'a, F>(block: ElementRef<'a>, matches: F) -> Option<ElementRef<'a>>
where
    F: Fn(&str) -> bool,
{
    block
        .select(&LABEL_SELECTOR)
        .find(|label| matches(&label.text().collect::<String>()))
}

/// Next non-empty text node after `label` in document order, within `block`.
///
/// Walks the block's descendants in pre-order, starts after the label and
/// skips the label's own subtree. Returned text is whitespace-collapsed.
pub fn text_after_label(block: ElementRef<'_>, label: ElementRef<'_>) -> Option<String> {
    let label_id = label.id();

    block
        .descendants()
        .skip_while(|node| node.id() != label_id)
        .filter(|node| node.id() != label_id && !node.ancestors().any(|a| a.id() == label_id))
        .find_map(|node| {
            let text = collapse_whitespace(node.value().as_text()?);
            (!text.is_empty()).then_some(text)
        })
}

/// Parses a length such as `4,130 km` into kilometers.
pub fn parse_length_km(text: &str) -> Option<f64> {
    text.replace(',', "")
        .replace("km", "")
        .trim()
        .parse::<f64>()
        .ok()
}
