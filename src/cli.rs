use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};

use jskw::{classify, Category, Keywords};

use crate::lexemes::Lexemes;

/// Classify JavaScript words into keyword categories
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Words to classify
    #[arg()]
    pub(super) words: Vec<String>,

    /// Classify every identifier-like lexeme in a JavaScript file
    #[arg(short, long)]
    pub(super) file: Option<PathBuf>,

    /// Use the strict mode catalogs
    #[arg(short, long, default_value_t = false)]
    pub(super) strict: bool,

    /// Only report these categories (e.g. reserved-word, control-paren)
    #[arg(short, long)]
    pub(super) only: Vec<Category>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Could not read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Nothing to classify, pass some words or --file")]
    NoInput,
    #[error("Could not write output: {0}")]
    Write(#[from] io::Error),
}

pub fn parse_args() -> Args {
    Args::parse()
}

pub fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    if args.words.is_empty() && args.file.is_none() {
        return Err(CliError::NoInput);
    }

    for word in &args.words {
        report(args, out, word.as_bytes(), word.len())?;
    }

    if let Some(path) = &args.file {
        let bytes = std::fs::read(path)
            .map_err(|source| CliError::Read { path: path.clone(), source })?;
        let src = String::from_utf8_lossy(&bytes);
        let mut count = 0usize;
        for (start, len) in Lexemes::new(&src) {
            report(args, out, &src.as_bytes()[start..], len)?;
            count += 1;
        }
        info!(file = %path.display(), lexemes = count, strict = args.strict, "classified file");
    }

    Ok(())
}

fn categories_of(args: &Args, s: &[u8], len: usize) -> Keywords {
    if args.only.is_empty() {
        classify(s, len, args.strict)
    } else {
        args.only
            .iter()
            .filter(|c| c.matches(s, len, args.strict))
            .map(|c| Keywords::from(*c))
            .collect()
    }
}

fn report(args: &Args, out: &mut impl Write, s: &[u8], len: usize) -> io::Result<()> {
    let kw = categories_of(args, s, len);
    let lexeme = String::from_utf8_lossy(&s[..len]);
    debug!(%lexeme, ?kw, "classified");

    let names: Vec<&str> = kw.categories().map(Category::name).collect();
    let cats = if names.is_empty() { "-".to_owned() } else { names.join(",") };
    writeln!(out, "{lexeme}\t{cats}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run_to_string(argv: &[&str]) -> Result<String, CliError> {
        let args = Args::try_parse_from(std::iter::once("jskw").chain(argv.iter().copied()))
            .expect("valid arguments");
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn classifies_words() {
        let out = run_to_string(&["for", "foo", "get", "++"]).expect("runs");
        assert_eq!(
            out,
            "for\talways-keyword,reserved-word,control-keyword,control-paren\n\
             foo\t-\n\
             get\tgetset\n\
             ++\tdouble-addsub\n"
        );
    }

    #[test]
    fn strict_flag() {
        assert_eq!(run_to_string(&["static"]).expect("runs"), "static\t-\n");
        assert_eq!(
            run_to_string(&["--strict", "static"]).expect("runs"),
            "static\talways-keyword,reserved-word\n"
        );
    }

    #[test]
    fn only_filter() {
        let argv = ["--only", "control-paren", "--only", "decl-keyword", "for", "let", "do"];
        let out = run_to_string(&argv).expect("runs");
        assert_eq!(out, "for\tcontrol-paren\nlet\tdecl-keyword\ndo\t-\n");
    }

    #[test]
    fn unknown_category_is_rejected() {
        let res = Args::try_parse_from(["jskw", "--only", "keyword", "for"]);
        assert!(res.is_err());
    }

    #[test]
    fn file_input() {
        let path = std::env::temp_dir().join(format!("jskw-cli-{}.js", std::process::id()));
        std::fs::write(&path, "for(let i=0;i++;){}").expect("write temp file");
        let out = run_to_string(&["--file", path.to_str().expect("utf-8 path")]);
        let _ = std::fs::remove_file(&path);

        assert_eq!(
            out.expect("runs"),
            "for\talways-keyword,reserved-word,control-keyword,control-paren\n\
             let\tdecl-keyword\n\
             i\t-\n\
             i\t-\n\
             ++\tdouble-addsub\n"
        );
    }

    #[test]
    fn file_input_regex_and_template() {
        let path = std::env::temp_dir().join(format!("jskw-cli-tpl-{}.js", std::process::id()));
        std::fs::write(&path, "x = /if/g;\u{a0}`${typeof y}`").expect("write temp file");
        let out = run_to_string(&["--file", path.to_str().expect("utf-8 path")]);
        let _ = std::fs::remove_file(&path);

        assert_eq!(
            out.expect("runs"),
            "x\t-\n\
             typeof\talways-keyword,reserved-word,op-keyword\n\
             y\t-\n"
        );
    }

    #[test]
    fn missing_file() {
        let res = run_to_string(&["--file", "/nonexistent/jskw/input.js"]);
        assert!(matches!(res, Err(CliError::Read { .. })));
    }

    #[test]
    fn no_input() {
        assert!(matches!(run_to_string(&[]), Err(CliError::NoInput)));
        assert_eq!(
            CliError::NoInput.to_string(),
            "Nothing to classify, pass some words or --file"
        );
    }
}
