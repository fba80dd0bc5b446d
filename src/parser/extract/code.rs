use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::parser::Card;

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(\w+)\n(.*?)```").unwrap());

/// One card per fenced block that has an explanatory paragraph right above it.
///
/// The context is whatever sits between the nearest preceding blank line and
/// the fence. Blocks at the top of the document, or directly after a blank
/// line, produce nothing.
///
/// The block is located by searching for its text, so when the same block
/// appears twice every copy resolves to the first one's context.
pub fn extract(markdown: &str) -> Vec<Card> {
    let mut cards = Vec::new();

    for caps in FENCE_RE.captures_iter(markdown) {
        let lang = &caps[1];
        let code = &caps[2];
        let question = format!("What does this {lang} code do?\n```{lang}\n{}\n```", code.trim());

        let needle = format!("```{lang}\n{code}");
        let Some(block_start) = markdown.find(&needle) else {
            continue;
        };

        match context_before(markdown, block_start) {
            Some(context) => cards.push(Card::new(question, context)),
            None => debug!(lang, offset = block_start, "code block has no context, skipped"),
        }
    }

    cards
}

fn context_before(markdown: &str, block_start: usize) -> Option<&str> {
    let boundary = markdown[..block_start].rfind("\n\n")?;
    let context = markdown[boundary..block_start].trim();
    if context.is_empty() || context.starts_with("```") {
        return None;
    }
    Some(context)
}
