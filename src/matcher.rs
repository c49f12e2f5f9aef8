mod tests;

/// Tests whether the first `len` bytes of `lexeme` are one whole word of
/// `catalog`, a list of words separated by single spaces.
///
/// Bytes of `lexeme` past `len` are never looked at, so a tokenizer can pass
/// the rest of its input buffer along with the lexeme length. A `len` of zero
/// or one larger than `lexeme` never matches.
#[must_use]
pub fn member<S: AsRef<[u8]> + ?Sized>(catalog: &str, lexeme: &S, len: usize) -> bool {
    match lexeme.as_ref().get(..len) {
        Some(word) if !word.is_empty() => in_space_string(catalog.as_bytes(), word),
        _ => false,
    }
}

#[inline]
fn in_space_string(catalog: &[u8], word: &[u8]) -> bool {
    catalog.split(|ch| *ch == b' ').any(|entry| entry == word)
}
