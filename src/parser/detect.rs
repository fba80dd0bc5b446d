use std::sync::LazyLock;

use regex::Regex;

use super::CardFormat;

static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^##\s+").unwrap());
static TOP_BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[-*] ").unwrap());
static NESTED_BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^  [-*] ").unwrap());
static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```\w+\n").unwrap());

/// Pick exactly one extraction strategy. First match wins:
/// sections > bullets > code > cloze.
pub fn detect_format(markdown: &str) -> CardFormat {
    if H2_RE.is_match(markdown) {
        CardFormat::Sections
    } else if TOP_BULLET_RE.is_match(markdown) && NESTED_BULLET_RE.is_match(markdown) {
        CardFormat::Bullets
    } else if CODE_FENCE_RE.is_match(markdown) {
        CardFormat::Code
    } else {
        CardFormat::Cloze
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h2_wins_over_everything() {
        let md = "- Q\n  - A\n\n```rust\nfn main() {}\n```\n\n## Title\nbody";
        assert_eq!(detect_format(md), CardFormat::Sections);
    }

    #[test]
    fn h3_is_not_a_section() {
        assert_eq!(detect_format("### Deep\nThe **thing** matters here."), CardFormat::Cloze);
    }

    #[test]
    fn h2_must_start_the_line() {
        assert_eq!(detect_format("text ## not a header"), CardFormat::Cloze);
    }

    #[test]
    fn bullets_need_both_levels() {
        assert_eq!(detect_format("- Q1\n  - A1\n- Q2"), CardFormat::Bullets);
        assert_eq!(detect_format("* Q1\n  * A1"), CardFormat::Bullets);
        assert_eq!(detect_format("- Q1\n- Q2"), CardFormat::Cloze);
        assert_eq!(detect_format("  - A1\n  - A2"), CardFormat::Cloze);
    }

    #[test]
    fn bullets_beat_code() {
        let md = "- Q\n  - A\n\n```python\nprint(1)\n```";
        assert_eq!(detect_format(md), CardFormat::Bullets);
    }

    #[test]
    fn code_needs_language_tag() {
        assert_eq!(detect_format("Intro\n\n```rust\nlet x = 1;\n```"), CardFormat::Code);
        assert_eq!(detect_format("Intro\n\n```\nlet x = 1;\n```"), CardFormat::Cloze);
    }

    #[test]
    fn fixtures() {
        let cases = [
            ("sections", CardFormat::Sections),
            ("bullets", CardFormat::Bullets),
            ("code", CardFormat::Code),
            ("cloze", CardFormat::Cloze),
        ];
        for (fixture, expected) in cases {
            let md = std::fs::read_to_string(format!("tests/fixtures/{}.md", fixture)).unwrap();
            assert_eq!(detect_format(&md), expected, "fixture {}", fixture);
        }
    }
}
