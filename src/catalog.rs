//! Word catalogs for every lexical category, pinned to ECMAScript 2017
//! (script goal).
//!
//! Each catalog is a single space-separated `&'static str`. Entries are
//! distinct, non-empty and separated by exactly one space.

use std::str::FromStr;

use thiserror::Error;

pub const ALWAYS_KEYWORDS: &str = "break case catch class const continue debugger default \
    delete do else enum export extends false finally for function if import in instanceof new \
    null return super switch this throw true try typeof var void while with";

pub const ALWAYS_KEYWORDS_STRICT: &str = "break case catch class const continue debugger default \
    delete do else enum export extends false finally for function if import in instanceof new \
    null return super switch this throw true try typeof var void while with \
    implements interface let package private protected public static yield";

pub const RESERVED_WORDS: &str = ALWAYS_KEYWORDS;

pub const RESERVED_WORDS_STRICT: &str = "break case catch class const continue debugger default \
    delete do else enum export extends false finally for function if import in instanceof new \
    null return super switch this throw true try typeof var void while with \
    implements interface let package private protected public static yield \
    arguments eval";

pub const CONTROL_KEYWORDS: &str = "if else for while do switch try catch finally return throw";

pub const CONTROL_PAREN_KEYWORDS: &str = "if for while switch catch";

pub const DECL_KEYWORDS: &str = "var let const function class";

pub const OP_KEYWORDS: &str = "in instanceof typeof new delete void yield";

pub const LABEL_KEYWORDS: &str = "break continue";

pub const DOUBLE_ADDSUB: &str = "++ --";

pub const GETSET: &str = "get set";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    AlwaysKeyword,
    ReservedWord,
    ControlKeyword,
    ControlParen,
    DeclKeyword,
    OpKeyword,
    LabelKeyword,
    DoubleAddSub,
    GetSet,
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub Box<str>);

impl Category {
    pub const ALL: [Self; 9] = [
        Self::AlwaysKeyword,
        Self::ReservedWord,
        Self::ControlKeyword,
        Self::ControlParen,
        Self::DeclKeyword,
        Self::OpKeyword,
        Self::LabelKeyword,
        Self::DoubleAddSub,
        Self::GetSet,
    ];

    /// Catalog backing this category. `strict` is ignored by categories
    /// that do not depend on it.
    #[must_use]
    pub const fn catalog(self, strict: bool) -> &'static str {
        match (self, strict) {
            (Self::AlwaysKeyword, false) => ALWAYS_KEYWORDS,
            (Self::AlwaysKeyword, true) => ALWAYS_KEYWORDS_STRICT,
            (Self::ReservedWord, false) => RESERVED_WORDS,
            (Self::ReservedWord, true) => RESERVED_WORDS_STRICT,
            (Self::ControlKeyword, _) => CONTROL_KEYWORDS,
            (Self::ControlParen, _) => CONTROL_PAREN_KEYWORDS,
            (Self::DeclKeyword, _) => DECL_KEYWORDS,
            (Self::OpKeyword, _) => OP_KEYWORDS,
            (Self::LabelKeyword, _) => LABEL_KEYWORDS,
            (Self::DoubleAddSub, _) => DOUBLE_ADDSUB,
            (Self::GetSet, _) => GETSET,
        }
    }

    #[must_use]
    pub const fn is_strict_sensitive(self) -> bool {
        matches!(self, Self::AlwaysKeyword | Self::ReservedWord)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AlwaysKeyword => "always-keyword",
            Self::ReservedWord => "reserved-word",
            Self::ControlKeyword => "control-keyword",
            Self::ControlParen => "control-paren",
            Self::DeclKeyword => "decl-keyword",
            Self::OpKeyword => "op-keyword",
            Self::LabelKeyword => "label-keyword",
            Self::DoubleAddSub => "double-addsub",
            Self::GetSet => "getset",
        }
    }

    pub fn words(self, strict: bool) -> impl Iterator<Item = &'static str> + Clone {
        self.catalog(strict).split(' ')
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|c| c.name() == s).ok_or_else(|| UnknownCategory(s.into()))
    }
}
