//! Minimal lexeme extraction for the CLI: identifier-like runs and `++`/`--`.
//! Strings, regex literals and comments are skipped so their contents are
//! not classified. Template substitutions (`${...}`) are lexed as code.

use unicode_ident::{is_xid_continue, is_xid_start};

use jskw::{is_control_keyword, is_op_keyword};

const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';
const BOM: char = '\u{FEFF}';

#[inline]
fn is_ident_start(ch: char) -> bool {
    matches!(ch, 'A'..='Z' | 'a'..='z' | '_' | '$') || (!ch.is_ascii() && is_xid_start(ch))
}

#[inline]
fn is_ident_part(ch: char) -> bool {
    is_ident_start(ch)
        || ch.is_ascii_digit()
        || (!ch.is_ascii() && (is_xid_continue(ch) || ch == ZWNJ || ch == ZWJ))
}

/// `/` after one of these words starts a regex, e.g. `return /x/`.
fn word_allows_regex(word: &str) -> bool {
    is_op_keyword(word, word.len()) || is_control_keyword(word, word.len()) || word == "case"
}

/// Yields `(start, len)` byte spans into the source.
pub struct Lexemes<'src> {
    src: &'src str,
    read_pos: usize,
    regex_allowed: bool,
    // Unclosed `{` count inside each open `${` substitution.
    templates: Vec<usize>,
}

impl<'src> Lexemes<'src> {
    pub const fn new(src: &'src str) -> Self {
        Self { src, read_pos: 0, regex_allowed: true, templates: Vec::new() }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.read_pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.src[self.read_pos..].chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.read_pos += ch.len_utf8();
        Some(ch)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    fn skip_string(&mut self, delimiter: char) {
        self.bump();
        while let Some(ch) = self.bump() {
            match ch {
                '\\' => {
                    self.bump();
                }
                c if c == delimiter => return,
                _ => {}
            }
        }
    }

    /// Skips template text up to the closing backtick or the next `${`.
    fn skip_template(&mut self) {
        while let Some(ch) = self.bump() {
            match ch {
                '\\' => {
                    self.bump();
                }
                '`' => {
                    self.regex_allowed = false;
                    return;
                }
                '$' if self.peek() == Some('{') => {
                    self.bump();
                    self.templates.push(0);
                    self.regex_allowed = true;
                    return;
                }
                _ => {}
            }
        }
    }

    fn skip_regex(&mut self) {
        self.bump();
        let mut in_class = false;
        while let Some(ch) = self.bump() {
            match ch {
                '\\' => {
                    self.bump();
                }
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => {
                    self.eat_while(is_ident_part);
                    break;
                }
                '\n' => break,
                _ => {}
            }
        }
        self.regex_allowed = false;
    }

    fn skip_block_comment(&mut self) {
        self.read_pos += 2;
        while let Some(ch) = self.bump() {
            if ch == '*' && self.peek() == Some('/') {
                self.bump();
                return;
            }
        }
    }

    fn close_brace(&mut self) {
        self.bump();
        match self.templates.last().copied() {
            Some(0) => {
                self.templates.pop();
                self.skip_template();
            }
            Some(depth) => {
                self.templates.pop();
                self.templates.push(depth - 1);
                self.regex_allowed = false;
            }
            None => self.regex_allowed = false,
        }
    }
}

impl<'src> Iterator for Lexemes<'src> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ch) = self.peek() {
            let start = self.read_pos;
            match ch {
                '+' | '-' if self.peek_second() == Some(ch) => {
                    self.read_pos += 2;
                    self.regex_allowed = false;
                    return Some((start, 2));
                }
                '\'' | '"' => {
                    self.skip_string(ch);
                    self.regex_allowed = false;
                }
                '`' => {
                    self.bump();
                    self.skip_template();
                }
                '/' if self.peek_second() == Some('/') => self.eat_while(|c| c != '\n'),
                '/' if self.peek_second() == Some('*') => self.skip_block_comment(),
                '/' if self.regex_allowed => self.skip_regex(),
                '{' => {
                    self.bump();
                    if let Some(depth) = self.templates.last_mut() {
                        *depth += 1;
                    }
                    self.regex_allowed = true;
                }
                '}' => self.close_brace(),
                a if is_ident_start(a) => {
                    self.eat_while(is_ident_part);
                    let src = self.src;
                    let word = &src[start..self.read_pos];
                    self.regex_allowed = word_allows_regex(word);
                    return Some((start, word.len()));
                }
                n if n.is_ascii_digit() => {
                    self.eat_while(is_ident_part);
                    self.regex_allowed = false;
                }
                ')' | ']' => {
                    self.bump();
                    self.regex_allowed = false;
                }
                s if s.is_whitespace() || s == BOM => {
                    self.bump();
                }
                _ => {
                    self.bump();
                    self.regex_allowed = true;
                }
            }
        }
        None
    }
}
