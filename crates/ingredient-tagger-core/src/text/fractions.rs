//! Fraction handling shared by the tokenizer and the quantity matcher.

/// Joins the whole and fractional part of a mixed number inside one token,
/// e.g. `"2$1/2"`.
pub const CLUMP_MARKER: char = '$';

/// Vulgar fraction characters and their ASCII spelling.
const UNICODE_FRACTIONS: &[(char, &str)] = &[
    ('\u{215b}', "1/8"),
    ('\u{215c}', "3/8"),
    ('\u{215d}', "5/8"),
    ('\u{215e}', "7/8"),
    ('\u{2159}', "1/6"),
    ('\u{215a}', "5/6"),
    ('\u{2155}', "1/5"),
    ('\u{2156}', "2/5"),
    ('\u{2157}', "3/5"),
    ('\u{2158}', "4/5"),
    ('\u{bc}', "1/4"),
    ('\u{be}', "3/4"),
    ('\u{2153}', "1/3"),
    ('\u{2154}', "2/3"),
    ('\u{bd}', "1/2"),
];

/// Replaces vulgar fraction characters with a space and their ASCII form,
/// so "1½ cups" becomes "1 1/2 cups" and can be clumped like any other
/// mixed number.
pub fn clean_unicode_fractions(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match UNICODE_FRACTIONS.iter().find(|(f, _)| *f == c) {
            Some((_, ascii)) => {
                out.push(' ');
                out.push_str(ascii);
            }
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_unicode_fractions() {
        assert_eq!(clean_unicode_fractions("1½ cups sugar"), "1 1/2 cups sugar");
        assert_eq!(clean_unicode_fractions("⅓ cup"), " 1/3 cup");
        assert_eq!(clean_unicode_fractions("2¾"), "2 3/4");
    }

    #[test]
    fn test_clean_leaves_plain_text_alone() {
        let s = "2 jalapeños, seeded";
        assert_eq!(clean_unicode_fractions(s), s);
    }
}
