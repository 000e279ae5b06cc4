//! Token scanners shared by both payload formats.
//!
//! A token is a maximal run of same-class characters. Only ASCII digits and
//! ASCII uppercase letters form tokens, so every run boundary is also a char
//! boundary of the payload.

/// Shortest digit run accepted as a document number
pub const MIN_NUMBER_DIGITS: usize = 10;

/// Shortest letter run accepted as a name word
pub const MIN_WORD_LEN: usize = 3;

/// Letter runs emitted by the card's data block that are never names
pub const NOISE_WORDS: &[&str] = &["DSK", "PUB", "PUBDSK"];

/// Ordered token sequence with positional access
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Tokens<'a>(Vec<&'a str>);

impl<'a> Tokens<'a> {
    /// Token at `n`, or the empty string when there are fewer tokens
    pub fn nth_or_empty(&self, n: usize) -> &'a str {
        self.0.get(n).copied().unwrap_or_default()
    }

    pub fn last(&self) -> Option<&'a str> {
        self.0.last().copied()
    }
}

impl<'a> FromIterator<&'a str> for Tokens<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Maximal runs of bytes accepted by `class`. `class` must only accept ASCII.
fn runs<F>(text: &str, class: F) -> Vec<&str>
where
    F: Fn(&u8) -> bool,
{
    let mut found = Vec::new();
    let mut run_start = None;

    for (i, byte) in text.as_bytes().iter().enumerate() {
        match (class(byte), run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                found.push(&text[start..i]);
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        found.push(&text[start..]);
    }

    found
}

/// Digit runs long enough to be a document number, in payload order
pub(crate) fn number_candidates(text: &str) -> Tokens<'_> {
    runs(text, u8::is_ascii_digit)
        .into_iter()
        .filter(|run| run.len() >= MIN_NUMBER_DIGITS)
        .collect()
}

/// Uppercase letter runs that can be name words, in payload order
pub(crate) fn name_words(text: &str) -> Tokens<'_> {
    runs(text, u8::is_ascii_uppercase)
        .into_iter()
        .filter(|run| run.len() >= MIN_WORD_LEN && !NOISE_WORDS.contains(run))
        .collect()
}

/// Join the non-empty words with a single space
pub(crate) fn join_words(words: &[&str]) -> String {
    words
        .iter()
        .filter(|word| !word.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first letter of every word and lowercase the rest.
///
/// A word starts at any letter that does not follow another letter.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
