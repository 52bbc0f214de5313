//! Word wrapping for transcript text.
//!
//! Transcript lines are wrapped up front and rendered without ratatui's own
//! wrapping, so the renderer knows the exact row count when it scrolls to the
//! newest message.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` to at most `width` columns. Explicit newlines are kept, words
/// wider than the line are split by character, and a width of zero disables
/// wrapping.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for paragraph in text.split('\n') {
        if width == 0 {
            rows.push(paragraph.to_string());
            continue;
        }
        wrap_paragraph(paragraph, width, &mut rows);
    }
    rows
}

fn wrap_paragraph(paragraph: &str, width: usize, rows: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split(' ') {
        let word_width = UnicodeWidthStr::width(word);
        let gap = usize::from(!current.is_empty());

        if current_width + gap + word_width <= width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += gap + word_width;
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    rows.push(current);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_row() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn keeps_explicit_newlines_and_blank_rows() {
        assert_eq!(wrap_text("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn splits_words_longer_than_the_width() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn measures_wide_characters_by_display_width() {
        assert_eq!(wrap_text("日本語です", 4), vec!["日本", "語で", "す"]);
    }

    #[test]
    fn zero_width_disables_wrapping() {
        assert_eq!(wrap_text("a b c", 0), vec!["a b c"]);
    }
}
