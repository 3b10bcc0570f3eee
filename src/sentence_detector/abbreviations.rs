// WHY: abbreviation lookup that keeps "Mrs. Person" and "e.g. this" inside one sentence

use std::collections::HashSet;

/// Title abbreviations that usually precede a proper noun
pub const TITLE_ABBREVIATIONS: &[&str] = &[
    "Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "Sr.", "Jr.", "St.", "Rev.", "Capt.", "Col.", "Gen.",
    "Lt.", "Sgt.", "Hon.",
];

/// Other abbreviations whose trailing period is not a sentence end
pub const ABBREVIATIONS: &[&str] = &[
    "U.S.A.", "U.S.", "U.K.", "N.Y.C.", "L.A.", "D.C.", "ft.", "in.", "lbs.", "oz.", "mi.", "km.",
    "a.m.", "p.m.", "etc.", "vs.", "ea.", "deg.", "al.", "e.g.", "i.e.", "cf.", "approx.", "No.",
    "Vol.", "Jan.", "Feb.", "Mar.", "Apr.", "Jun.", "Jul.", "Aug.", "Sep.", "Sept.", "Oct.",
    "Nov.", "Dec.",
];

/// Abbreviation lookup using HashSet for O(1) performance
#[derive(Debug, Clone)]
pub struct AbbreviationChecker {
    abbreviations: HashSet<&'static str>,
    title_abbreviations: HashSet<&'static str>,
}

impl AbbreviationChecker {
    /// Create new abbreviation checker with default abbreviation sets
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
            title_abbreviations: TITLE_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Check if a word is a title abbreviation
    pub fn is_title_abbreviation(&self, word: &str) -> bool {
        self.title_abbreviations.contains(word)
    }

    /// Check if a word is any known abbreviation, titles included
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.is_title_abbreviation(word) || self.abbreviations.contains(word)
    }

    /// Check if text ends with an abbreviation or a single-letter initial such as "J."
    /// Surrounding quotes and opening brackets are stripped from the last word first
    pub fn ends_with_abbreviation(&self, text: &str) -> bool {
        let Some(last_word) = text.split_whitespace().last() else {
            return false;
        };
        let clean_word = last_word.trim_start_matches(|c: char| matches!(c, '"' | '\'' | '(' | '['));
        self.is_abbreviation(clean_word) || is_initial(clean_word)
    }
}

impl Default for AbbreviationChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Single uppercase letter followed by a period
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some('.'), None) if letter.is_uppercase()
    )
}
