//! # Line Normalization
//!
//! Pure string transforms applied to every training line. No I/O happens here.
//!
//! A line goes through three steps, always in this order:
//!
//! 1. [`strip_punctuation`]: every char that is not a word char, whitespace,
//!    or an apostrophe becomes a single space.
//! 2. Unicode lowercasing.
//! 3. [`spell_numbers`]: every standalone run of ASCII digits becomes its
//!    English cardinal phrase.
//!
//! A word char is a letter (`\p{L}`), any numeric (`\p{N}`, so `½` and `Ⅻ`
//! count), or `_`. Combining marks are not word chars and become spaces.
//! Whitespace is Unicode `White_Space` plus the separators `\x1C`-`\x1F`.
//!
//! "Standalone" means the digit run touches no word char on either side.
//! Because step 1 has already turned punctuation into spaces, `3,000`
//! reaches step 3 as `3 000` and is spelled as two numbers. `3rd` and
//! `room3` are left alone.

use crate::error::{CleanError, Result};
use num2words::Num2Words;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static NON_LABEL_CHAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{L}\p{N}_\s\x{1C}-\x{1F}']").expect("punctuation pattern is valid")
});

static WORD_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}_]$").expect("word char pattern is valid"));

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"));

/// Short-scale names for each group of three digits, lowest first.
const SCALES: [&str; 12] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

/// Longest digit run (after leading zeros) that has a scale name.
pub const MAX_SPELLED_DIGITS: usize = SCALES.len() * 3;

/// The normalized form of one line plus how many digit runs were spelled out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine {
    pub text: String,
    pub numbers_spelled: usize,
}

fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR.is_match(c.encode_utf8(&mut buf))
}

/// Replace each char that is not a word char, whitespace, or `'` with one space.
pub fn strip_punctuation(line: &str) -> Cow<'_, str> {
    NON_LABEL_CHAR.replace_all(line, " ")
}

fn conversion_error(digits: &str, reason: impl Into<String>) -> CleanError {
    CleanError::Conversion {
        digits: digits.to_string(),
        reason: reason.into(),
    }
}

fn spell_group(digits: &str, group: &str) -> Result<String> {
    let value: i64 = group
        .parse()
        .map_err(|e: std::num::ParseIntError| conversion_error(digits, e.to_string()))?;
    Num2Words::new(value)
        .to_words()
        .map_err(|e| conversion_error(digits, format!("{:?}", e)))
}

/// Spell a run of ASCII digits as English words.
///
/// The run is split into groups of three from the right; each non-zero group
/// is spelled and followed by its scale name. Leading zeros are dropped, so
/// `"007"` is `"seven"`. Runs longer than [`MAX_SPELLED_DIGITS`] significant
/// digits are a conversion error.
pub fn number_to_words(digits: &str) -> Result<String> {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return spell_group(digits, "0");
    }
    if significant.len() > MAX_SPELLED_DIGITS {
        return Err(conversion_error(
            digits,
            format!("more than {} significant digits", MAX_SPELLED_DIGITS),
        ));
    }

    let group_count = significant.len().div_ceil(3);
    let mut start = 0;
    let mut end = significant.len() - (group_count - 1) * 3;
    let mut parts = Vec::with_capacity(group_count);

    for scale in SCALES[..group_count].iter().rev() {
        let group = &significant[start..end];
        if group.trim_start_matches('0').is_empty() {
            start = end;
            end += 3;
            continue;
        }
        let words = spell_group(digits, group)?;
        if scale.is_empty() {
            parts.push(words);
        } else {
            parts.push(format!("{} {}", words, scale));
        }
        start = end;
        end += 3;
    }

    Ok(parts.join(" "))
}

/// Replace every standalone digit run in `line` with its spelled-out form.
///
/// Returns the rewritten line and the number of runs replaced.
pub fn spell_numbers(line: &str) -> Result<(String, usize)> {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    let mut spelled = 0;

    for m in DIGIT_RUN.find_iter(line) {
        let before = line[..m.start()].chars().next_back();
        let after = line[m.end()..].chars().next();
        if before.is_some_and(is_word_char) || after.is_some_and(is_word_char) {
            continue;
        }
        out.push_str(&line[last..m.start()]);
        out.push_str(&number_to_words(m.as_str())?);
        last = m.end();
        spelled += 1;
    }
    out.push_str(&line[last..]);

    Ok((out, spelled))
}

/// Run the full strip → lowercase → spell sequence on one line.
pub fn normalize_line(line: &str) -> Result<NormalizedLine> {
    let lowered = strip_punctuation(line).to_lowercase();
    let (text, numbers_spelled) = spell_numbers(&lowered)?;
    Ok(NormalizedLine {
        text,
        numbers_spelled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(line: &str) -> String {
        normalize_line(line).unwrap().text
    }

    #[test]
    fn punctuation_becomes_single_spaces() {
        assert_eq!(norm("Hello, World!"), "hello  world ");
    }

    #[test]
    fn apostrophes_and_underscores_survive() {
        assert_eq!(norm("It's snake_case."), "it's snake_case ");
    }

    #[test]
    fn each_symbol_is_one_space_even_multibyte() {
        assert_eq!(strip_punctuation("a—b…c"), "a b c");
    }

    #[test]
    fn line_terminator_is_preserved() {
        assert_eq!(norm("Yes!\n"), "yes \n");
    }

    #[test]
    fn clean_input_is_unchanged() {
        let line = "already clean text with no digits\n";
        assert_eq!(norm(line), line);
    }

    #[test]
    fn empty_and_blank_lines_pass_through() {
        assert_eq!(norm(""), "");
        assert_eq!(norm("   \t\n"), "   \t\n");
    }

    #[test]
    fn lowercases_unicode() {
        assert_eq!(norm("ÉCOLE Straße"), "école straße");
    }

    #[test]
    fn standalone_numbers_are_spelled() {
        let result = normalize_line("I have 2 cats and 10 dogs").unwrap();
        assert_eq!(result.text, "i have two cats and ten dogs");
        assert_eq!(result.numbers_spelled, 2);
    }

    #[test]
    fn single_digit_and_leading_zero() {
        assert_eq!(norm("7"), "seven");
        assert_eq!(norm("agent 007"), "agent seven");
        assert_eq!(norm("0"), "zero");
    }

    #[test]
    fn multi_word_numbers_use_hyphenated_tens() {
        assert!(norm("23 skidoo").starts_with("twenty-three"));
    }

    #[test]
    fn digits_touching_letters_are_kept() {
        assert_eq!(norm("Room 3b"), "room 3b");
        assert_eq!(norm("the 3rd time"), "the 3rd time");
        assert_eq!(norm("mp3 player"), "mp3 player");
    }

    #[test]
    fn digits_touching_underscore_are_kept() {
        assert_eq!(norm("var_1"), "var_1");
    }

    #[test]
    fn punctuation_next_to_digits_makes_them_standalone() {
        assert_eq!(norm("#42."), " forty-two ");
    }

    #[test]
    fn thousands_separator_splits_the_number() {
        assert_eq!(norm("3,000"), "three zero");
    }

    #[test]
    fn non_ascii_digits_are_left_alone() {
        assert_eq!(norm("٣ apples"), "٣ apples");
    }

    #[test]
    fn numbers_past_i64_are_spelled() {
        let text = norm("id 12345678901234567890");
        assert!(text.starts_with("id twelve quintillion "));
        assert!(text.contains(" quadrillion "));
        assert!(text.contains(" thousand "));
        assert!(!text.chars().any(|c| c.is_ascii_digit()));

        assert!(norm("99999999999999999999999").starts_with("ninety-nine sextillion"));
    }

    #[test]
    fn zero_groups_are_skipped() {
        assert_eq!(number_to_words("1000000").unwrap(), "one million");
        assert_eq!(number_to_words("2000003").unwrap(), "two million three");
        assert_eq!(number_to_words("000").unwrap(), "zero");
    }

    #[test]
    fn decillion_is_the_largest_scale() {
        let digits = format!("1{}", "0".repeat(MAX_SPELLED_DIGITS - 1));
        assert_eq!(number_to_words(&digits).unwrap(), "one decillion");

        let leading_zeros = format!("000{}", digits);
        assert_eq!(number_to_words(&leading_zeros).unwrap(), "one decillion");
    }

    #[test]
    fn digits_past_decillion_are_a_conversion_error() {
        let digits = format!("1{}", "0".repeat(MAX_SPELLED_DIGITS));
        let err = normalize_line(&digits).unwrap_err();
        assert!(matches!(err, CleanError::Conversion { .. }));
    }

    #[test]
    fn combining_marks_become_spaces() {
        assert_eq!(norm("a\u{301}b"), "a b");
    }

    #[test]
    fn other_numerics_are_word_chars() {
        assert_eq!(norm("½ cup"), "½ cup");
        assert_eq!(norm("3½"), "3½");
    }

    #[test]
    fn information_separators_are_whitespace() {
        assert_eq!(norm("a\x1fb\x1cc"), "a\x1fb\x1cc");
    }

    #[test]
    fn spell_numbers_counts_replacements() {
        let (text, count) = spell_numbers("1 2 x3 4").unwrap();
        assert_eq!(text, "one two x3 four");
        assert_eq!(count, 3);
    }
}
