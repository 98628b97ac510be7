//! User answers: one line of whitespace-separated note names.

use std::fmt;

use crate::theory::NUM_STRINGS;

/// Normalise one typed note name.
///
/// The letter is upper-cased. A `b` directly after it is a flat and is kept
/// lower-case (`bb` becomes `Bb`, `EB` becomes `Eb`); everything else is
/// upper-cased, so `f#` becomes `F#`.
pub fn normalize_token(token: &str) -> String {
    let mut chars = token.chars();
    let Some(letter) = chars.next() else {
        return String::new();
    };

    let mut out: String = letter.to_uppercase().collect();
    let mut rest = chars.peekable();
    if rest.next_if(|c| c.eq_ignore_ascii_case(&'b')).is_some() {
        out.push('b');
    }
    out.extend(rest.flat_map(char::to_uppercase));
    out
}

/// An ordered list of normalised note names, at most one per string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    tokens: Vec<String>,
}

impl Answer {
    /// Split a raw input line into at most [`NUM_STRINGS`] normalised tokens.
    ///
    /// Tokens past the sixth are dropped.
    pub fn parse(line: &str) -> Self {
        let all: Vec<&str> = line.split_whitespace().collect();
        if all.len() > NUM_STRINGS {
            tracing::warn!(
                extra = all.len() - NUM_STRINGS,
                "ignoring note names past the sixth string"
            );
        }
        let tokens = all
            .into_iter()
            .take(NUM_STRINGS)
            .map(normalize_token)
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case() {
        assert_eq!(normalize_token("g"), "G");
        assert_eq!(normalize_token("f#"), "F#");
        assert_eq!(normalize_token("bb"), "Bb");
        assert_eq!(normalize_token("EB"), "Eb");
        assert_eq!(normalize_token("b"), "B");
        assert_eq!(normalize_token("Gb"), "Gb");
        assert_eq!(normalize_token(""), "");
    }

    #[test]
    fn parse_truncates_to_six() {
        let answer = Answer::parse("a b c d e f g a");
        assert_eq!(answer.len(), 6);
        assert_eq!(answer.tokens(), ["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn parse_tolerates_extra_whitespace() {
        let answer = Answer::parse("  g   e d\tb a f\n");
        assert_eq!(answer.to_string(), "G E D B A F");
    }

    #[test]
    fn short_answers_are_kept_short() {
        let answer = Answer::parse("C D");
        assert_eq!(answer.len(), 2);
        assert_eq!(answer.get(1), Some("D"));
        assert_eq!(answer.get(2), None);
        assert!(Answer::parse("   ").is_empty());
    }
}
