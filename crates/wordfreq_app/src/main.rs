//! Print a word-frequency table for stdin or the files given as arguments.
mod logging;

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use wordfreq_core::{run, InputSource, WordFreqSettings};
use wordfreq_logging::wf_debug;

fn main() -> anyhow::Result<()> {
    logging::initialize(wordfreq_logging::default_level());

    let sources = InputSource::from_args(std::env::args_os().skip(1));
    let settings = WordFreqSettings::default();
    wf_debug!("Reading {} source(s) with policy {}", sources.len(), settings.policy);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&settings, sources, &mut out).context("word count failed")?;
    out.flush().context("failed to flush report")?;
    Ok(())
}
