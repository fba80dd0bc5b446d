use std::sync::LazyLock;

use regex::Regex;

use crate::parser::Card;

static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^##\s+(.*?)$").unwrap());

/// Split on level-2 headers: header text → front, text up to the next header → back.
/// Anything before the first header is dropped.
pub fn extract(markdown: &str) -> Vec<Card> {
    let headers: Vec<_> = H2_RE.captures_iter(markdown).collect();
    let mut cards = Vec::with_capacity(headers.len());

    for (i, caps) in headers.iter().enumerate() {
        let body_start = caps.get(0).map_or(0, |m| m.end());
        let body_end = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(markdown.len(), |m| m.start());

        let title = caps.get(1).map_or("", |m| m.as_str()).trim();
        if title.is_empty() {
            continue;
        }
        cards.push(Card::new(title, markdown[body_start..body_end].trim()));
    }

    cards
}
