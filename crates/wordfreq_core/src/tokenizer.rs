use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// A lowercased word; never empty.
pub type Token = String;

static NON_ASCII_ALPHA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-Z]+").expect("static pattern")
});

pub trait Tokenizer {
    fn tokenize(&self, line: &str) -> Vec<Token>;
}

/// Which characters form words. Everything is lowercased first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPolicy {
    /// Letters and digits; any other character separates.
    Alnum,
    /// Like `Alnum`, but hyphens split words while other punctuation is
    /// dropped in place (`don't` becomes `dont`). U+FFFD from undecodable
    /// input splits like a hyphen.
    AlnumHyphen,
    /// ASCII letters only.
    #[default]
    Alpha,
    /// ASCII letters only, via a single `[^a-zA-Z]+` substitution.
    RegexAlpha,
}

impl TokenPolicy {
    pub const ALL: [TokenPolicy; 4] = [
        TokenPolicy::Alnum,
        TokenPolicy::AlnumHyphen,
        TokenPolicy::Alpha,
        TokenPolicy::RegexAlpha,
    ];
}

impl Tokenizer for TokenPolicy {
    fn tokenize(&self, line: &str) -> Vec<Token> {
        let lower = line.to_lowercase();
        match self {
            TokenPolicy::Alnum => split_on(&lower, char::is_alphanumeric),
            TokenPolicy::AlnumHyphen => {
                let kept: String = lower
                    .chars()
                    .map(|c| match c {
                        '-' | char::REPLACEMENT_CHARACTER => ' ',
                        _ => c,
                    })
                    .filter(|c| c.is_alphanumeric() || c.is_whitespace())
                    .collect();
                kept.split_whitespace().map(ToOwned::to_owned).collect()
            }
            TokenPolicy::Alpha => split_on(&lower, |c| c.is_ascii_alphabetic()),
            TokenPolicy::RegexAlpha => NON_ASCII_ALPHA
                .replace_all(&lower, " ")
                .split_whitespace()
                .map(ToOwned::to_owned)
                .collect(),
        }
    }
}

impl fmt::Display for TokenPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPolicy::Alnum => write!(f, "alnum"),
            TokenPolicy::AlnumHyphen => write!(f, "alnum-hyphen"),
            TokenPolicy::Alpha => write!(f, "alpha"),
            TokenPolicy::RegexAlpha => write!(f, "regex-alpha"),
        }
    }
}

fn split_on(text: &str, is_word_char: impl Fn(char) -> bool) -> Vec<Token> {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
