#![warn(clippy::pedantic, clippy::nursery, clippy::unwrap_used, clippy::perf)]
#![deny(unused_must_use)]

//! Lexical classification of JavaScript identifier-like lexemes.
//!
//! Answers the yes/no questions a tokenizer or minifier asks about a word:
//! is it reserved, does it start a control statement, does it take a
//! parenthesized header, does it declare something, is it an operator, and
//! so on. Every query is pure, allocation-free and safe to call from any
//! thread.

pub mod catalog;
pub mod classify;
pub mod keywords;
pub mod matcher;

pub use catalog::{Category, UnknownCategory};
pub use classify::{classify, keyword_count, Keywords};
pub use keywords::{
    is_always_keyword, is_control_keyword, is_control_paren, is_decl_keyword, is_double_addsub,
    is_getset, is_label_keyword, is_op_keyword, is_reserved_word,
};
pub use matcher::member;
