// WHY: word tokenization for chunk sizing; only alphabetic tokens count toward a word limit

/// Splits a sentence into word tokens
pub trait WordTokenizer {
    /// Tokens in sentence order, punctuation included as separate tokens
    fn tokenize<'a>(&self, sentence: &'a str) -> Vec<&'a str>;

    /// Number of purely alphabetic tokens in the sentence
    fn count_words(&self, sentence: &str) -> usize {
        self.tokenize(sentence)
            .into_iter()
            .filter(|token| is_alphabetic_token(token))
            .count()
    }
}

/// True for non-empty tokens made only of alphabetic characters
pub fn is_alphabetic_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Contraction suffixes split off the end of a word, "don't" -> "do" + "n't"
const CONTRACTION_SUFFIXES: &[&str] = &[
    "n't", "'s", "'re", "'ve", "'ll", "'d", "'m",
    "n\u{2019}t", "\u{2019}s", "\u{2019}re", "\u{2019}ve", "\u{2019}ll", "\u{2019}d", "\u{2019}m",
];

/// Whitespace tokenizer that peels punctuation and contraction suffixes off each word
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctWordTokenizer;

impl PunctWordTokenizer {
    fn push_piece<'a>(piece: &'a str, tokens: &mut Vec<&'a str>) {
        let core_start = piece
            .find(char::is_alphanumeric)
            .unwrap_or(piece.len());
        let core_end = piece
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_alphanumeric())
            .map_or(core_start, |(i, c)| i + c.len_utf8());

        push_each_char(&piece[..core_start], tokens);

        if core_start < core_end {
            let core = &piece[core_start..core_end];
            match split_contraction(core) {
                Some((stem, suffix)) => {
                    tokens.push(stem);
                    tokens.push(suffix);
                }
                None => tokens.push(core),
            }
        }

        push_each_char(&piece[core_end.max(core_start)..], tokens);
    }
}

impl WordTokenizer for PunctWordTokenizer {
    fn tokenize<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        for piece in sentence.split_whitespace() {
            Self::push_piece(piece, &mut tokens);
        }
        tokens
    }
}

fn push_each_char<'a>(text: &'a str, tokens: &mut Vec<&'a str>) {
    for (i, c) in text.char_indices() {
        tokens.push(&text[i..i + c.len_utf8()]);
    }
}

fn split_contraction(word: &str) -> Option<(&str, &str)> {
    CONTRACTION_SUFFIXES.iter().find_map(|suffix| {
        let stem_len = word.len().checked_sub(suffix.len())?;
        if stem_len == 0 || !word.is_char_boundary(stem_len) {
            return None;
        }
        let (stem, tail) = word.split_at(stem_len);
        tail.eq_ignore_ascii_case(suffix).then_some((stem, tail))
    })
}
