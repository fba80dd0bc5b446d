pub mod detect;
pub mod extract;

use std::fmt;

use serde::Serialize;

/// One flashcard. Cloze cards carry their deletions inline in `front` and
/// leave `back` empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// Note-writing style detected for a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFormat {
    Sections,
    Bullets,
    Code,
    Cloze,
}

impl CardFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sections => "sections",
            Self::Bullets => "bullets",
            Self::Code => "code",
            Self::Cloze => "cloze",
        }
    }

    /// Note type the output rows must be imported as.
    pub fn card_type(self) -> CardType {
        match self {
            Self::Cloze => CardType::Cloze,
            _ => CardType::Basic,
        }
    }
}

impl fmt::Display for CardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardType {
    Basic,
    Cloze,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("Basic"),
            Self::Cloze => f.write_str("Cloze"),
        }
    }
}

/// Two-pass pipeline: markdown → format tag → cards.
pub fn process_document(markdown: &str, force_cloze: bool) -> (CardFormat, Vec<Card>) {
    let format = if force_cloze {
        CardFormat::Cloze
    } else {
        detect::detect_format(markdown)
    };
    let cards = extract::extract_cards(markdown, format);
    (format, cards)
}
