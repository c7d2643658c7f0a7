//! Token normalization used when comparing phrase tokens with field values.

/// Plural unit words and their singular form.
///
/// Annotators record units in the singular ("clove") while phrases use
/// whatever reads naturally ("4 cloves").
const SINGULAR_UNITS: &[(&str, &str)] = &[
    ("cups", "cup"),
    ("tablespoons", "tablespoon"),
    ("teaspoons", "teaspoon"),
    ("pounds", "pound"),
    ("ounces", "ounce"),
    ("cloves", "clove"),
    ("sprigs", "sprig"),
    ("pinches", "pinch"),
    ("bunches", "bunch"),
    ("slices", "slice"),
    ("grams", "gram"),
    ("heads", "head"),
    ("quarts", "quart"),
    ("stalks", "stalk"),
    ("pints", "pint"),
    ("pieces", "piece"),
    ("sticks", "stick"),
    ("dashes", "dash"),
    ("fillets", "fillet"),
    ("cans", "can"),
    ("ears", "ear"),
    ("packages", "package"),
    ("strips", "strip"),
    ("bulbs", "bulb"),
    ("bottles", "bottle"),
    ("milliliters", "milliliter"),
];

/// Characters stripped from the edges of a word token.
const EDGE_PUNCTUATION: &[char] = &['.', ';', ':', '!', '?', '"', '\''];

/// Normalizes a token for matching: lowercase, surrounding punctuation
/// trimmed, common plural units singularized.
///
/// Tokens made only of punctuation (`"("`, `","`) are returned unchanged so
/// they can still match the punctuation of a comment.
pub fn normalize_token(token: &str) -> String {
    let lower = token.to_lowercase();
    let trimmed = lower.trim_matches(EDGE_PUNCTUATION);
    if trimmed.is_empty() {
        return lower;
    }
    singularize(trimmed).to_string()
}

/// Maps a plural unit word to its singular form. Other words pass through.
pub fn singularize(word: &str) -> &str {
    SINGULAR_UNITS
        .iter()
        .find(|(plural, _)| *plural == word)
        .map_or(word, |&(_, singular)| singular)
}
