use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ConvertError;
use crate::parser::{self, CardFormat, CardType};
use crate::writer;

/// Everything one conversion run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub delimiter: u8,
    pub tags: String,
    pub force_cloze: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub card_count: usize,
    pub format: CardFormat,
    pub card_type: CardType,
}

impl ConversionReport {
    pub fn print(&self) {
        println!(
            "Converted {} cards from {} to {}",
            self.card_count,
            self.input.display(),
            self.output.display()
        );
        println!("Detected format: {}", self.format);
        println!("Card type: {}", self.card_type);
        println!("Note: Import this file with the {} note type in Anki", self.card_type);
    }
}

/// Read → detect → extract → write.
pub fn run(opts: &ConvertOptions) -> Result<ConversionReport, ConvertError> {
    let markdown = read_input(&opts.input)?;

    let (format, cards) = parser::process_document(&markdown, opts.force_cloze);
    debug!(%format, forced = opts.force_cloze, "selected format");
    if cards.is_empty() {
        warn!(%format, input = %opts.input.display(), "no cards extracted");
    }

    let card_type = format.card_type();
    writer::write_cards(&opts.output, &cards, card_type, opts.delimiter, &opts.tags).map_err(
        |source| ConvertError::OutputWrite {
            path: opts.output.clone(),
            source,
        },
    )?;
    info!(cards = cards.len(), output = %opts.output.display(), "wrote output");

    Ok(ConversionReport {
        input: opts.input.clone(),
        output: opts.output.clone(),
        card_count: cards.len(),
        format,
        card_type,
    })
}

fn read_input(path: &Path) -> Result<String, ConvertError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConvertError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => ConvertError::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })
}
