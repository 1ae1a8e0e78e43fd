//! Word tokenizer for attraction names.

use crate::VectorizerOptions;
use crate::stop_words::is_stop_word;

/// Split `text` into index terms.
///
/// Words are maximal runs of alphanumeric characters or underscores. Words
/// shorter than [`VectorizerOptions::min_token_len`] characters are dropped,
/// then stop words are removed. Tokens keep their order and repeats so the
/// caller can count term frequencies.
///
/// # Examples
///
/// ```
/// use wanderlust_similarity::{VectorizerOptions, tokenize};
///
/// let tokens = tokenize("The Tower of London", &VectorizerOptions::default());
/// assert_eq!(tokens, vec!["tower", "london"]);
/// ```
#[must_use]
pub fn tokenize(text: &str, options: &VectorizerOptions) -> Vec<String> {
    let normalised = if options.lowercase {
        text.to_lowercase()
    } else {
        text.to_owned()
    };
    normalised
        .split(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
        .filter(|word| word.chars().count() >= options.min_token_len)
        .filter(|word| !(options.remove_stop_words && is_stop_word(word)))
        .map(str::to_owned)
        .collect()
}
