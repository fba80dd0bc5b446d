use std::sync::LazyLock;

use regex::Regex;

use crate::parser::Card;

static PARAGRAPH_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());
static HIGHLIGHT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*|`(.*?)`").unwrap());

const MIN_PARAGRAPH_CHARS: usize = 20;

/// Turn every paragraph with bold or inline-code spans into a cloze card.
pub fn extract(markdown: &str) -> Vec<Card> {
    PARAGRAPH_SPLIT_RE
        .split(markdown)
        .filter(|p| !p.starts_with('#') && p.chars().count() >= MIN_PARAGRAPH_CHARS)
        .filter_map(clozify)
        .map(|front| Card::new(front, ""))
        .collect()
}

/// Rewrite highlighted spans as `{{cN::text}}`, numbered in order of appearance.
///
/// Spans are collected from the original paragraph but replaced one at a time
/// in the rewritten text, first trying the bold form and then the backtick
/// form. With repeated span text the two forms can swap places, e.g.
/// "`git` and **git**" yields "{{c2::git}} and {{c1::git}}".
///
/// The rewritten paragraph is returned trimmed of surrounding whitespace.
fn clozify(paragraph: &str) -> Option<String> {
    let spans: Vec<&str> = HIGHLIGHT_RE
        .captures_iter(paragraph)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .filter(|text| !text.is_empty())
        .collect();
    if spans.is_empty() {
        return None;
    }

    let mut text = paragraph.to_string();
    let mut inserted = 0;
    for (i, span) in spans.iter().enumerate() {
        let marker = format!("{{{{c{}::{}}}}}", i + 1, span);
        let bold = format!("**{span}**");
        let code = format!("`{span}`");

        let target = if text.contains(&bold) {
            bold
        } else if text.contains(&code) {
            code
        } else {
            continue;
        };
        text = text.replacen(&target, &marker, 1);
        inserted += 1;
    }

    if inserted == 0 {
        return None;
    }
    Some(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bold_spans_numbered_in_order() {
        let cards = extract("The **mitochondria** is the **powerhouse** of the cell.");
        assert_eq!(cards.len(), 1);
        assert_eq!(
            cards[0].front,
            "The {{c1::mitochondria}} is the {{c2::powerhouse}} of the cell."
        );
        assert!(cards[0].back.is_empty());
    }

    #[test]
    fn short_paragraph_skipped() {
        assert!(extract("A **short** one").is_empty());
    }

    #[test]
    fn header_paragraph_skipped() {
        assert!(extract("# The **mitochondria** is the powerhouse").is_empty());
    }

    #[test]
    fn backtick_spans() {
        let cards = extract("Run `cargo build` before `cargo test` every time.");
        assert_eq!(
            cards[0].front,
            "Run {{c1::cargo build}} before {{c2::cargo test}} every time."
        );
    }

    #[test]
    fn repeated_text_each_occurrence_counts() {
        let cards = extract("The **cell** divides and each **cell** grows again.");
        assert_eq!(
            cards[0].front,
            "The {{c1::cell}} divides and each {{c2::cell}} grows again."
        );
    }

    #[test]
    fn mixed_delimiters_with_same_text() {
        let cards = extract("Use `git` and **git** together for version control.");
        assert_eq!(
            cards[0].front,
            "Use {{c2::git}} and {{c1::git}} together for version control."
        );
    }

    #[test]
    fn paragraphs_are_independent() {
        let md = "First paragraph has **one** highlight.\n\nSecond has none at all here.\n  \nThird has `two` and **three** spans.";
        let cards = extract(md);
        assert_eq!(cards.len(), 2);
        assert!(cards[0].front.contains("{{c1::one}}"));
        assert!(cards[1].front.contains("{{c1::two}}"));
        assert!(cards[1].front.contains("{{c2::three}}"));
    }

    #[test]
    fn front_is_trimmed() {
        let cards = extract("\nThe **cell** divides into two.\n");
        assert_eq!(cards[0].front, "The {{c1::cell}} divides into two.");
    }

    #[test]
    fn empty_spans_ignored() {
        assert!(extract("Nothing between these: **** and `` here.").is_empty());
    }

    #[test]
    fn highlights_do_not_cross_lines() {
        assert!(extract("Bold starts **here\nand ends** on the next line.").is_empty());
    }
}
