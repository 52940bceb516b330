use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NEWLINES_REGEX: Regex = Regex::new("\n+").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
    static ref CLOSING_TAGS_REGEX: Regex =
        Regex::new("</variant>|</variantright>|</question>").unwrap();
}

/// Flattens extracted document text into a single line and drops the closing
/// tags, which carry no structure.
pub fn normalize(raw: &str) -> String {
    let text = NEWLINES_REGEX.replace_all(raw, " ");
    let text = WHITESPACE_REGEX.replace_all(&text, " ");
    let text = CLOSING_TAGS_REGEX.replace_all(&text, "");
    text.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_lines() {
        assert_eq!(
            normalize("<question>Capital\n\n\nof France?\n<variant>Paris"),
            "<question>Capital of France? <variant>Paris"
        );
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  a \t\t b \r\n c  "), "a b c");
    }

    #[test]
    fn strips_closing_tags() {
        assert_eq!(
            normalize("<question>Q</question><variant>A</variant><variantright>B</variantright>"),
            "<question>Q<variant>A<variantright>B"
        );
    }

    #[test]
    fn keeps_opening_tags_verbatim() {
        assert_eq!(normalize("<Variant>x <variant >y"), "<Variant>x <variant >y");
    }

    #[test]
    fn empty_for_noise_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t \n"), "");
        assert_eq!(normalize("</variant>\n </question> </variantright>"), "");
    }
}
