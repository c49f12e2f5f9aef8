//! One-pass classification of a lexeme into every category it belongs to.
//!
//! Where the predicates in [`crate::keywords`] each scan one catalog, this
//! walks a trie built from all catalogs once and answers all of them at
//! the same time.


use bitflags::bitflags;
use jskw_trie::Trie;
use once_cell::sync::Lazy;

use crate::catalog::Category;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Keywords: u16 {
        const ALWAYS_KEYWORD = 1 << 0;
        const RESERVED_WORD = 1 << 1;
        const CONTROL_KEYWORD = 1 << 2;
        const CONTROL_PAREN = 1 << 3;
        const DECL_KEYWORD = 1 << 4;
        const OP_KEYWORD = 1 << 5;
        const LABEL_KEYWORD = 1 << 6;
        const DOUBLE_ADDSUB = 1 << 7;
        const GETSET = 1 << 8;
    }
}

/// Categories per word, indexed by `strict as usize`.
type ByMode = [Keywords; 2];

static KEYWORD_TRIE: Lazy<Trie<ByMode>> = Lazy::new(build_trie);

static_assertions::assert_impl_all!(Trie<ByMode>: Send, Sync);

fn build_trie() -> Trie<ByMode> {
    let mut trie = Trie::new();
    for cat in Category::ALL {
        for strict in [false, true] {
            let mut val = [Keywords::empty(); 2];
            val[usize::from(strict)] = cat.into();
            for word in cat.words(strict) {
                trie.insert_with(word.as_bytes(), val, |old: &mut ByMode, new| {
                    old[0] |= new[0];
                    old[1] |= new[1];
                });
            }
        }
    }
    debug_assert!(!trie.is_empty());
    debug_assert_eq!(trie.len(), distinct_words().len());
    trie
}

/// Every word of every catalog in both modes, sorted and deduplicated.
fn distinct_words() -> Vec<&'static str> {
    let mut words: Vec<_> = Category::ALL
        .into_iter()
        .flat_map(|c| c.words(false).chain(c.words(true)))
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}

/// Number of distinct words across all catalogs.
#[must_use]
pub fn keyword_count() -> usize {
    KEYWORD_TRIE.len()
}

/// Every category the first `len` bytes of `s` belong to. Agrees with the
/// individual `is_*` predicates for every input.
#[must_use]
pub fn classify<S: AsRef<[u8]> + ?Sized>(s: &S, len: usize, strict: bool) -> Keywords {
    let Some(word) = s.as_ref().get(..len) else {
        return Keywords::empty();
    };
    KEYWORD_TRIE.get(word).map_or(Keywords::empty(), |modes| modes[usize::from(strict)])
}

impl From<Category> for Keywords {
    fn from(cat: Category) -> Self {
        match cat {
            Category::AlwaysKeyword => Self::ALWAYS_KEYWORD,
            Category::ReservedWord => Self::RESERVED_WORD,
            Category::ControlKeyword => Self::CONTROL_KEYWORD,
            Category::ControlParen => Self::CONTROL_PAREN,
            Category::DeclKeyword => Self::DECL_KEYWORD,
            Category::OpKeyword => Self::OP_KEYWORD,
            Category::LabelKeyword => Self::LABEL_KEYWORD,
            Category::DoubleAddSub => Self::DOUBLE_ADDSUB,
            Category::GetSet => Self::GETSET,
        }
    }
}

impl Keywords {
    /// Contained categories, in [`Category::ALL`] order.
    pub fn categories(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains((*c).into()))
    }
}
