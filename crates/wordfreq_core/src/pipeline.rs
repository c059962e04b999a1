use std::io::Write;

use wordfreq_logging::wf_info;

use crate::counter::count_lines;
use crate::error::WordFreqError;
use crate::input::{InputSource, LineReader};
use crate::report::{build_report, write_report};
use crate::settings::WordFreqSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total_tokens: u64,
    pub distinct_tokens: usize,
}

/// Read every source, count words, then write the full report to `out`.
///
/// Nothing is written unless all input was read successfully.
pub fn run<W: Write + ?Sized>(
    settings: &WordFreqSettings,
    sources: Vec<InputSource>,
    out: &mut W,
) -> Result<RunSummary, WordFreqError> {
    report_lines(settings, LineReader::new(sources), out)
}

/// Like [`run`], over any line iterator.
pub fn report_lines<I, W>(
    settings: &WordFreqSettings,
    lines: I,
    out: &mut W,
) -> Result<RunSummary, WordFreqError>
where
    I: IntoIterator<Item = Result<String, WordFreqError>>,
    W: Write + ?Sized,
{
    let table = count_lines(lines, &settings.policy)?;
    let summary = RunSummary {
        total_tokens: table.total_tokens(),
        distinct_tokens: table.len(),
    };
    wf_info!(
        "Counted {} tokens, {} distinct (policy {})",
        summary.total_tokens,
        summary.distinct_tokens,
        settings.policy
    );

    write_report(&build_report(table), out)?;
    Ok(summary)
}
