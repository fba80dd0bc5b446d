use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::WriteError;
use crate::parser::{Card, CardType};

#[derive(Serialize)]
struct BasicRow<'a> {
    front: &'a str,
    back: &'a str,
    tags: &'a str,
}

#[derive(Serialize)]
struct ClozeRow<'a> {
    text: &'a str,
    tags: &'a str,
}

/// Write cards as delimited rows to `path`.
///
/// Rows go to a temp file next to `path` which is renamed over it once
/// everything is flushed, so a failed write leaves the target untouched.
/// An existing target keeps its mode; a new one gets `0644`.
pub fn write_cards(
    path: &Path,
    cards: &[Card],
    card_type: CardType,
    delimiter: u8,
    tags: &str,
) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    write_rows(tmp.as_file_mut(), cards, card_type, delimiter, tags)?;
    if let Some(perms) = output_permissions(path) {
        tmp.as_file().set_permissions(perms)?;
    }
    tmp.persist(path)?;
    Ok(())
}

fn output_permissions(path: &Path) -> Option<Permissions> {
    if let Ok(meta) = fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

/// One row per card, no header, CRLF-terminated. Basic: front, back, tags.
/// Cloze: text, tags.
pub fn write_rows<W: Write>(
    out: W,
    cards: &[Card],
    card_type: CardType,
    delimiter: u8,
    tags: &str,
) -> Result<(), WriteError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    for card in cards {
        match card_type {
            CardType::Basic => wtr.serialize(BasicRow {
                front: &card.front,
                back: &card.back,
                tags,
            })?,
            CardType::Cloze => wtr.serialize(ClozeRow {
                text: &card.front,
                tags,
            })?,
        }
    }

    wtr.flush()?;
    Ok(())
}
