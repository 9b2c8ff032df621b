//! Estimated reading time. The word count comes from walking the entry's
//! markdown events rather than the raw source, so link targets, tag syntax,
//! and frontmatter fences don't inflate the estimate.

use crate::timediff::round_div;
use pulldown_cmark::{Event, Parser};

/// Counts the words in a markdown document. Only text and inline-code
/// events contribute; markup does not.
pub fn word_count(markdown: &str) -> u64 {
    let mut words = 0;
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => {
                words += text.split_whitespace().count() as u64
            }
            _ => {}
        }
    }
    words
}

/// Estimates the reading time of a markdown document in whole minutes,
/// rounding half up. Returns zero for documents short enough to round down
/// to nothing; callers are expected to skip rendering in that case.
pub fn estimated_reading_time(markdown: &str, words_per_minute: u64) -> u64 {
    if words_per_minute == 0 {
        return 0;
    }
    round_div(word_count(markdown), words_per_minute)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_word_count_ignores_markup() {
        assert_eq!(
            6,
            word_count("# One *two* [three](https://example.org/) `four five` six"),
        );
    }

    #[test]
    fn test_word_count_empty() {
        assert_eq!(0, word_count(""));
    }

    #[test]
    fn test_reading_time_rounds_half_up() {
        let words = |n: usize| vec!["word"; n].join(" ");
        assert_eq!(0, estimated_reading_time(&words(124), 250));
        assert_eq!(1, estimated_reading_time(&words(125), 250));
        assert_eq!(1, estimated_reading_time(&words(374), 250));
        assert_eq!(2, estimated_reading_time(&words(375), 250));
    }

    #[test]
    fn test_reading_time_zero_speed() {
        assert_eq!(0, estimated_reading_time("some words here", 0));
    }
}
