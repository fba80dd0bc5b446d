pub mod bullets;
pub mod cloze;
pub mod code;
pub mod sections;

use tracing::debug;

use super::{Card, CardFormat};

/// Run the single extractor matching `format` over the whole document.
pub fn extract_cards(markdown: &str, format: CardFormat) -> Vec<Card> {
    let cards = match format {
        CardFormat::Sections => sections::extract(markdown),
        CardFormat::Bullets => bullets::extract(markdown),
        CardFormat::Code => code::extract(markdown),
        CardFormat::Cloze => cloze::extract(markdown),
    };
    debug!(%format, cards = cards.len(), "extracted cards");
    cards
}

// ── Tests ──
