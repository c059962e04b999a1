use std::borrow::Cow;
use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use wordfreq_logging::{wf_debug, wf_warn};

use crate::error::WordFreqError;

/// Where input lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Map command-line arguments to sources. No arguments means stdin, and
    /// `-` stands for stdin at its position.
    pub fn from_args<I, S>(args: I) -> Vec<InputSource>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut sources: Vec<InputSource> = args
            .into_iter()
            .map(|arg| {
                let arg: OsString = arg.into();
                if arg == "-" {
                    InputSource::Stdin
                } else {
                    InputSource::File(PathBuf::from(arg))
                }
            })
            .collect();
        if sources.is_empty() {
            sources.push(InputSource::Stdin);
        }
        sources
    }

    fn open(&self) -> Result<Box<dyn BufRead>, WordFreqError> {
        wf_debug!("Opening input {}", self);
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => File::open(path)
                .map(|file| Box::new(BufReader::new(file)) as Box<dyn BufRead>)
                .map_err(|source| WordFreqError::Open {
                    origin: self.clone(),
                    source,
                }),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Yields the lines of each source in turn, opening sources lazily.
///
/// After the first error the iterator is exhausted.
pub struct LineReader {
    pending: std::vec::IntoIter<InputSource>,
    current: Option<(InputSource, Box<dyn BufRead>)>,
    buf: Vec<u8>,
    warned_lossy: bool,
    failed: bool,
}

impl LineReader {
    pub fn new(sources: Vec<InputSource>) -> Self {
        Self {
            pending: sources.into_iter(),
            current: None,
            buf: Vec::new(),
            warned_lossy: false,
            failed: false,
        }
    }

    /// Read from an already open reader, reported as `origin` in errors.
    pub fn from_reader(origin: InputSource, reader: impl BufRead + 'static) -> Self {
        Self {
            pending: Vec::new().into_iter(),
            current: Some((origin, Box::new(reader))),
            buf: Vec::new(),
            warned_lossy: false,
            failed: false,
        }
    }
}

impl Iterator for LineReader {
    type Item = Result<String, WordFreqError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let Some((origin, reader)) = self.current.as_mut() else {
                let source = self.pending.next()?;
                match source.open() {
                    Ok(reader) => {
                        self.current = Some((source, reader));
                        self.warned_lossy = false;
                        continue;
                    }
                    Err(err) => {
                        self.failed = true;
                        return Some(Err(err));
                    }
                }
            };

            self.buf.clear();
            match reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.current = None,
                Ok(_) => {
                    let (line, lossy) = decode_line(&self.buf);
                    if lossy && !self.warned_lossy {
                        wf_warn!("{} is not valid UTF-8; invalid bytes were replaced", origin);
                        self.warned_lossy = true;
                    }
                    return Some(Ok(line));
                }
                Err(source) => {
                    let origin = origin.clone();
                    self.failed = true;
                    return Some(Err(WordFreqError::Read { origin, source }));
                }
            }
        }
    }
}

/// Strip the line terminator and decode. The flag is set when invalid UTF-8
/// had to be replaced.
fn decode_line(raw: &[u8]) -> (String, bool) {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    match String::from_utf8_lossy(raw) {
        Cow::Borrowed(text) => (text.to_owned(), false),
        Cow::Owned(text) => (text, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_line_strips_line_endings() {
        assert_eq!(decode_line(b"abc\n"), ("abc".to_string(), false));
        assert_eq!(decode_line(b"abc\r\n"), ("abc".to_string(), false));
        assert_eq!(decode_line(b"abc"), ("abc".to_string(), false));
        assert_eq!(decode_line(b"\n"), (String::new(), false));
    }

    #[test]
    fn decode_line_replaces_invalid_utf8() {
        assert_eq!(decode_line(b"ab\xffcd\n"), ("ab\u{FFFD}cd".to_string(), true));
    }
}
