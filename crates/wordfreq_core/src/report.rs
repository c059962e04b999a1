use std::cmp::Reverse;
use std::fmt;
use std::io::{self, Write};

use crate::counter::FrequencyTable;
use crate::tokenizer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub count: u64,
    pub token: Token,
}

impl ReportLine {
    pub fn new(count: u64, token: impl Into<Token>) -> Self {
        Self {
            count,
            token: token.into(),
        }
    }
}

/// `   <count> <token>`
impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   {} {}", self.count, self.token)
    }
}

/// Order every entry by descending count, then ascending token.
pub fn build_report(table: FrequencyTable) -> Vec<ReportLine> {
    let mut lines: Vec<ReportLine> = table
        .into_iter()
        .map(|(token, count)| ReportLine { count, token })
        .collect();
    // Tokens are unique keys, so an unstable sort is still deterministic.
    lines.sort_unstable_by(|a, b| {
        (Reverse(a.count), &a.token).cmp(&(Reverse(b.count), &b.token))
    });
    lines
}

pub fn write_report<W: Write + ?Sized>(lines: &[ReportLine], out: &mut W) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
