#![cfg(test)]

use super::member;
use crate::catalog::{Category, CONTROL_KEYWORDS};

fn probe(catalog: &str, word: &str) -> bool {
    member(catalog, word, word.len())
}

#[test]
fn matches_every_catalog_word() {
    for strict in [false, true] {
        for cat in Category::ALL {
            for word in cat.words(strict) {
                assert!(probe(cat.catalog(strict), word), "{word} not found in {cat}");
            }
        }
    }
}

#[test]
fn rejects_prefixes_and_extensions() {
    for strict in [false, true] {
        for cat in Category::ALL {
            let catalog = cat.catalog(strict);
            for word in cat.words(strict) {
                let longer = format!("{word}x");
                let leading = format!("x{word}");
                assert!(!probe(catalog, &longer), "{longer} matched {cat}");
                assert!(!probe(catalog, &leading), "{leading} matched {cat}");

                let shorter = &word[..word.len() - 1];
                if !cat.words(strict).any(|w| w == shorter) {
                    assert!(!probe(catalog, shorter), "{shorter} matched {cat}");
                }
            }
        }
    }
}

#[test]
fn whole_word_only() {
    assert!(probe(CONTROL_KEYWORDS, "for"));
    assert!(!probe(CONTROL_KEYWORDS, "form"));
    assert!(!probe(CONTROL_KEYWORDS, "fo"));
    assert!(!probe(CONTROL_KEYWORDS, "iffy"));
    assert!(!probe(CONTROL_KEYWORDS, "lse"));
    assert!(!probe(CONTROL_KEYWORDS, "if else"));
    assert!(!probe(CONTROL_KEYWORDS, " "));
    assert!(!probe(CONTROL_KEYWORDS, "e f"));
}

#[test]
fn first_and_last_entries() {
    assert!(probe("alpha beta gamma", "alpha"));
    assert!(probe("alpha beta gamma", "gamma"));
    assert!(probe("solo", "solo"));
    assert!(!probe("solo", "sol"));
}

#[test]
fn length_is_authoritative() {
    assert!(member(CONTROL_KEYWORDS, "form", 3));
    assert!(member(CONTROL_KEYWORDS, b"while(x)", 5));
    assert!(!member(CONTROL_KEYWORDS, b"while(x)", 6));
    assert!(!member(CONTROL_KEYWORDS, "for", 0));
    assert!(!member(CONTROL_KEYWORDS, "", 0));
}

#[test]
fn oversized_length_is_false() {
    assert!(!member(CONTROL_KEYWORDS, "for", 4));
    assert!(!member(CONTROL_KEYWORDS, "for", usize::MAX));
}

#[test]
fn accepts_any_byte_view() {
    let owned = String::from("catch");
    let bytes: Vec<u8> = owned.clone().into_bytes();
    assert!(member(CONTROL_KEYWORDS, &owned, 5));
    assert!(member(CONTROL_KEYWORDS, &bytes, 5));
    assert!(member(CONTROL_KEYWORDS, &bytes[..], 5));
    assert!(member(CONTROL_KEYWORDS, b"catch", 5));
}

#[test]
fn non_ascii_never_matches() {
    assert!(!probe(CONTROL_KEYWORDS, "fór"));
    assert!(!member(CONTROL_KEYWORDS, "ifé", 3));
}
