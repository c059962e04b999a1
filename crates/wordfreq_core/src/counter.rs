use std::collections::hash_map;
use std::collections::HashMap;

use wordfreq_logging::wf_trace;

use crate::tokenizer::{Token, Tokenizer};

/// Occurrence count per distinct token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Token, u64>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, token: Token) {
        *self.counts.entry(token).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn record_all(&mut self, tokens: impl IntoIterator<Item = Token>) {
        for token in tokens {
            self.record(token);
        }
    }

    /// Count for `token`, 0 when never seen.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total_tokens(&self) -> u64 {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }
}

impl Extend<Token> for FrequencyTable {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.record_all(iter);
    }
}

impl FromIterator<Token> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut table = Self::new();
        table.record_all(iter);
        table
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (Token, u64);
    type IntoIter = hash_map::IntoIter<Token, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Tokenize every line and count the tokens. Stops at the first line error.
pub fn count_lines<I, E, T>(lines: I, tokenizer: &T) -> Result<FrequencyTable, E>
where
    I: IntoIterator<Item = Result<String, E>>,
    T: Tokenizer + ?Sized,
{
    let mut table = FrequencyTable::new();
    for line in lines {
        let tokens = tokenizer.tokenize(&line?);
        wf_trace!("Line yielded {} tokens", tokens.len());
        table.record_all(tokens);
    }
    Ok(table)
}
