//! Keyword predicates queried by the tokenizer on every identifier-like
//! lexeme. Each one binds [`member`] to a fixed catalog.


use crate::catalog::{
    Category, ALWAYS_KEYWORDS, ALWAYS_KEYWORDS_STRICT, CONTROL_KEYWORDS, CONTROL_PAREN_KEYWORDS,
    DECL_KEYWORDS, DOUBLE_ADDSUB, GETSET, LABEL_KEYWORDS, OP_KEYWORDS, RESERVED_WORDS,
    RESERVED_WORDS_STRICT,
};
use crate::matcher::member;

/// Words that are keywords wherever they appear, such as `this`, `null` or
/// `true`. Strict code adds the strict-only reserved words.
#[inline]
#[must_use]
pub fn is_always_keyword<S: AsRef<[u8]> + ?Sized>(s: &S, len: usize, strict: bool) -> bool {
    member(if strict { ALWAYS_KEYWORDS_STRICT } else { ALWAYS_KEYWORDS }, s, len)
}

/// Words that can't be used as a binding name.
#[inline]
#[must_use]
pub fn is_reserved_word<S: AsRef<[u8]> + ?Sized>(s: &S, len: usize, strict: bool) -> bool {
    member(if strict { RESERVED_WORDS_STRICT } else { RESERVED_WORDS }, s, len)
}

#[inline]
#[must_use]
pub fn is_control_keyword<S: AsRef<[u8]> + ?Sized>(s: &S, len: usize) -> bool {
    member(CONTROL_KEYWORDS, s, len)
}

/// Control keywords whose header is parenthesized, e.g. `while (`.
#[inline]
#[must_use]
pub fn is_control_paren<S: AsRef<[u8]> + ?Sized>(s: &S, len: usize) -> bool {
    member(CONTROL_PAREN_KEYWORDS, s, len)
}

#[inline]
#[must_use]
pub fn is_decl_keyword<S: AsRef<[u8]> + ?Sized>(s: &S, len: usize) -> bool {
    member(DECL_KEYWORDS, s, len)
}

/// Keywords used as operators. A `/` after one of these starts a regex.
#[inline]
#[must_use]
pub fn is_op_keyword<S: AsRef<[u8]> + ?Sized>(s: &S, len: usize) -> bool {
    member(OP_KEYWORDS, s, len)
}

/// `break` and `continue`, which may be followed by a label.
#[inline]
#[must_use]
pub fn is_label_keyword<S: AsRef<[u8]> + ?Sized>(s: &S, len: usize) -> bool {
    member(LABEL_KEYWORDS, s, len)
}

#[inline]
#[must_use]
pub fn is_double_addsub<S: AsRef<[u8]> + ?Sized>(s: &S, len: usize) -> bool {
    member(DOUBLE_ADDSUB, s, len)
}

#[inline]
#[must_use]
pub fn is_getset<S: AsRef<[u8]> + ?Sized>(s: &S, len: usize) -> bool {
    member(GETSET, s, len)
}

impl Category {
    /// Runs the predicate for this category. `strict` only matters for
    /// [`Category::AlwaysKeyword`] and [`Category::ReservedWord`].
    #[must_use]
    pub fn matches<S: AsRef<[u8]> + ?Sized>(self, s: &S, len: usize, strict: bool) -> bool {
        match self {
            Self::AlwaysKeyword => is_always_keyword(s, len, strict),
            Self::ReservedWord => is_reserved_word(s, len, strict),
            Self::ControlKeyword => is_control_keyword(s, len),
            Self::ControlParen => is_control_paren(s, len),
            Self::DeclKeyword => is_decl_keyword(s, len),
            Self::OpKeyword => is_op_keyword(s, len),
            Self::LabelKeyword => is_label_keyword(s, len),
            Self::DoubleAddSub => is_double_addsub(s, len),
            Self::GetSet => is_getset(s, len),
        }
    }
}
