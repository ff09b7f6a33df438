//! Splits long replies into pieces that fit in a single Discord message.

use crate::utils::format::{REVEAL_LABEL, SPOILER};

/// Blank line separating the sections of a formatted reply.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Number of characters in `text`, the unit Discord counts its limit in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Splits `text` into chunks of at most `limit` characters.
///
/// Paragraphs (separated by a blank line) are kept whole when they fit. A
/// paragraph longer than `limit` is cut into consecutive slices; each slice is
/// trimmed and stripped of spoiler tags and their reveal label, since a tag
/// pair cut in half would show up as stray markup.
///
/// A paragraph of exactly `limit` characters fits and is left as it is.
pub fn split_for_limit(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();

    for segment in text.split(PARAGRAPH_BREAK) {
        if char_len(segment) <= limit {
            chunks.push(segment.to_string());
            continue;
        }

        chunks.extend(
            slices(segment, limit)
                .into_iter()
                .map(|slice| strip_spoilers(slice.trim()).trim().to_string()),
        );
    }

    chunks
}

/// Cuts `text` into consecutive slices of at most `limit` characters, never
/// inside a UTF-8 sequence. The final slice may be shorter.
fn slices(text: &str, limit: usize) -> Vec<&str> {
    let mut result = Vec::new();
    let mut iter = text.chars();
    let mut pos = 0;

    while pos < text.len() {
        let mut len = 0;
        for ch in iter.by_ref().take(limit) {
            len += ch.len_utf8();
        }
        result.push(&text[pos..pos + len]);
        pos += len;
    }

    result
}

fn strip_spoilers(text: &str) -> String {
    text.replace(SPOILER, "").replace(REVEAL_LABEL, "")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_short_text_untouched() {
        let text = "**Plot (Click to Reveal)**: ||A thief...||";
        assert_eq!(split_for_limit(text, 2000), vec![text.to_string()]);
    }

    #[test]
    fn test_paragraphs_become_chunks() {
        let text = "first\nsection\n\nsecond section\n\nthird";
        assert_eq!(
            split_for_limit(text, 20),
            vec!["first\nsection", "second section", "third"]
        );
    }

    #[test]
    fn test_exact_limit_not_split() {
        let text = format!("||{}||", "a".repeat(16));
        assert_eq!(char_len(&text), 20);

        assert_eq!(split_for_limit(&text, 20), vec![text.clone()]);
    }

    #[test]
    fn test_one_over_limit_is_split() {
        let text = "a".repeat(21);
        assert_eq!(
            split_for_limit(&text, 20),
            vec!["a".repeat(20), "a".to_string()]
        );
    }

    #[test]
    fn test_long_paragraph_sliced() {
        let text = "x".repeat(5000);

        let chunks = split_for_limit(&text, 2000);

        assert_eq!(chunks.len(), 3);
        assert_eq!(
            chunks.iter().map(|c| char_len(c)).collect::<Vec<_>>(),
            vec![2000, 2000, 1000]
        );
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_sliced_paragraph_loses_spoiler_markup() {
        let plot = "word ".repeat(30);
        let text = format!("**Plot (Click to Reveal)**: ||{}||", plot.trim_end());

        let chunks = split_for_limit(&text, 50);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(!chunk.contains("||"), "{chunk:?}");
            assert!(!chunk.contains("(Click to Reveal)"), "{chunk:?}");
            assert!(char_len(chunk) <= 50);
        }
        assert!(chunks[0].starts_with("**Plot **: word"));
    }

    #[test]
    fn test_slices_trimmed() {
        let text = format!("{}   {}", "a".repeat(9), "b".repeat(10));

        assert_eq!(
            split_for_limit(&text, 10),
            vec!["a".repeat(9), "b".repeat(8), "bb".to_string()]
        );
    }

    #[test]
    fn test_slices_trimmed_after_markup_removed() {
        let text = format!("{}|| plot", "a".repeat(10));

        assert_eq!(
            split_for_limit(&text, 10),
            vec!["a".repeat(10), "plot".to_string()]
        );
    }

    #[test]
    fn test_multibyte_characters_counted_as_one() {
        let text = "é".repeat(25);

        let chunks = split_for_limit(&text, 10);

        assert_eq!(chunks, vec!["é".repeat(10), "é".repeat(10), "é".repeat(5)]);
    }

    #[test]
    fn test_order_preserved_across_segments() {
        let text = format!("{}\n\nshort\n\n{}", "a".repeat(15), "b".repeat(12));

        assert_eq!(
            split_for_limit(&text, 10),
            vec![
                "a".repeat(10),
                "a".repeat(5),
                "short".to_string(),
                "b".repeat(10),
                "bb".to_string(),
            ]
        );
    }

    #[test_case(1 ; "single character")]
    #[test_case(7 ; "odd limit")]
    #[test_case(64 ; "larger than most segments")]
    fn test_no_chunk_exceeds_limit(limit: usize) {
        let text = "=====**GENRE AND PLOT**=====\n**Genre**: Action, Sci-Fi\n**Plot (Click to Reveal)**: ||A thief who steals corporate secrets through dream-sharing technology.||\n\n=====**OTHER INFORMATION**=====\n**Rated**: PG-13\n";

        for chunk in split_for_limit(text, limit) {
            assert!(char_len(&chunk) <= limit, "{chunk:?} exceeds {limit}");
        }
    }

    #[rstest]
    #[case("", vec![""])]
    #[case("\n\n", vec!["", ""])]
    #[case("a\n\n\nb", vec!["a", "\nb"])]
    fn test_degenerate_input(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_for_limit(text, 5), expected);
    }
}
