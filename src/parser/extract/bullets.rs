use crate::parser::Card;

const TOP_MARKERS: &[&str] = &["- ", "* "];
const NESTED_MARKERS: &[&str] = &["  - ", "  * "];

/// Top-level bullets are questions, two-space nested bullets are answer lines.
/// A question with no answer lines is dropped.
pub fn extract(markdown: &str) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut question: Option<String> = None;
    let mut answer: Vec<String> = Vec::new();

    for line in markdown.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(rest) = strip_marker(line, TOP_MARKERS) {
            flush(&mut cards, question.take(), &mut answer);
            let text = rest.trim();
            if !text.is_empty() {
                question = Some(text.to_string());
            }
        } else if let Some(rest) = strip_marker(line, NESTED_MARKERS) {
            if question.is_some() {
                answer.push(rest.trim().to_string());
            }
        }
    }

    flush(&mut cards, question, &mut answer);
    cards
}

fn strip_marker<'a>(line: &'a str, markers: &[&str]) -> Option<&'a str> {
    markers.iter().find_map(|m| line.strip_prefix(m))
}

fn flush(cards: &mut Vec<Card>, question: Option<String>, answer: &mut Vec<String>) {
    let lines = std::mem::take(answer);
    if let Some(q) = question {
        if !lines.is_empty() {
            cards.push(Card::new(q, lines.join("\n")));
        }
    }
}
