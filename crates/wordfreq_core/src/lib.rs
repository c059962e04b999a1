//! Wordfreq core: tokenize lines, count words, report by frequency.
mod counter;
mod error;
mod input;
mod pipeline;
mod report;
mod settings;
mod tokenizer;

pub use counter::{count_lines, FrequencyTable};
pub use error::WordFreqError;
pub use input::{InputSource, LineReader};
pub use pipeline::{report_lines, run, RunSummary};
pub use report::{build_report, write_report, ReportLine};
pub use settings::WordFreqSettings;
pub use tokenizer::{Token, TokenPolicy, Tokenizer};
