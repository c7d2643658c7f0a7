//! Feature columns written next to each token in the training files.
//!
//! The column values are a fixed contract with the existing training data:
//! `I<position>`, `L<length group>`, `YesCAP`/`NoCAP`, `YesPAREN`/`NoPAREN`.

use std::fmt;

/// Upper bounds of the phrase length groups.
const LENGTH_GROUPS: &[(usize, &str)] = &[(4, "4"), (8, "8"), (12, "12"), (16, "16"), (20, "20")];

/// Features of one token within its phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenFeatures {
    /// 1-based position of the token in the phrase.
    pub index: usize,
    /// Bucketed phrase length ("4", "8", ..., "X").
    pub length_group: &'static str,
    /// Token starts with an ASCII capital letter.
    pub capitalized: bool,
    /// Token sits inside a parenthesised part of the phrase.
    pub in_parens: bool,
}

impl TokenFeatures {
    /// Extract the features of every token of a phrase.
    pub fn extract(tokens: &[String]) -> Vec<TokenFeatures> {
        let length_group = length_group(tokens.len());
        let line = tokens.join(" ");
        let parenthesised = paren_interior(&line);

        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| TokenFeatures {
                index: i + 1,
                length_group,
                capitalized: is_capitalized(token),
                in_parens: token == "("
                    || token == ")"
                    || parenthesised.is_some_and(|inner| inner.contains(token.as_str())),
            })
            .collect()
    }
}

impl fmt::Display for TokenFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |b: bool| if b { "Yes" } else { "No" };
        write!(
            f,
            "I{}\tL{}\t{}CAP\t{}PAREN",
            self.index,
            self.length_group,
            yes_no(self.capitalized),
            yes_no(self.in_parens)
        )
    }
}

/// Smallest length bound strictly greater than `len`, or "X".
pub fn length_group(len: usize) -> &'static str {
    LENGTH_GROUPS
        .iter()
        .find(|(bound, _)| len < *bound)
        .map_or("X", |&(_, group)| group)
}

fn is_capitalized(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Text between the first "(" and the last ")" of the joined phrase.
fn paren_interior(line: &str) -> Option<&str> {
    let open = line.find('(')?;
    let close = line.rfind(')')?;
    (open < close).then(|| &line[open + 1..close])
}
