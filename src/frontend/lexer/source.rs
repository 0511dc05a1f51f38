//! Character input
//!
//! The scanner pulls characters one at a time from a [`CharSource`]. End of
//! input is `None`, and it is sticky: once a source has returned `None` it
//! returns `None` forever.

use std::io::{self, BufRead, BufReader, Read};
use std::ops::RangeInclusive;

use super::queue::Source;

/// Pull-based character producer
pub trait CharSource {
    fn next_char(&mut self) -> Option<char>;

    /// Error that ended the input early, if any
    fn take_error(&mut self) -> Option<io::Error> {
        None
    }
}

impl<C: CharSource + ?Sized> CharSource for Box<C> {
    fn next_char(&mut self) -> Option<char> {
        (**self).next_char()
    }

    fn take_error(&mut self) -> Option<io::Error> {
        (**self).take_error()
    }
}

/// Characters of an owned string
#[derive(Debug, Clone)]
pub struct StrSource {
    text: String,
    offset: usize,
}

impl StrSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            offset: 0,
        }
    }
}

impl CharSource for StrSource {
    fn next_char(&mut self) -> Option<char> {
        let ch = self.text[self.offset..].chars().next()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }
}

/// Incrementally decodes UTF-8 from any reader.
///
/// Malformed sequences decode to U+FFFD, which the scanner then reports as an
/// unrecognized character. A read error ends the input; it can be retrieved
/// afterwards with [`CharSource::take_error`].
#[derive(Debug)]
pub struct ReaderSource<R: Read> {
    reader: BufReader<R>,
    error: Option<io::Error>,
    finished: bool,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            error: None,
            finished: false,
        }
    }

    /// Next byte without consuming it; `None` at end of input or on error
    fn peek_byte(&mut self) -> Option<u8> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.error = Some(e);
                    self.finished = true;
                    return None;
                }
            }
        }
    }
}

/// Encoded length announced by a UTF-8 lead byte, 0 if it cannot start a
/// sequence
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Bytes allowed at position `index` of the sequence started by `lead`.
/// The narrowed second-byte ranges exclude overlongs, surrogates and code
/// points past U+10FFFF.
fn continuation_range(
    lead: u8,
    index: usize,
) -> RangeInclusive<u8> {
    match (lead, index) {
        (0xE0, 1) => 0xA0..=0xBF,
        (0xED, 1) => 0x80..=0x9F,
        (0xF0, 1) => 0x90..=0xBF,
        (0xF4, 1) => 0x80..=0x8F,
        _ => 0x80..=0xBF,
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// A malformed sequence yields one U+FFFD for its longest valid prefix.
    /// The byte that broke the sequence is left for the next call.
    fn next_char(&mut self) -> Option<char> {
        if self.finished {
            return None;
        }
        let Some(lead) = self.peek_byte() else {
            self.finished = true;
            return None;
        };
        self.reader.consume(1);
        let width = utf8_width(lead);
        match width {
            0 => return Some(char::REPLACEMENT_CHARACTER),
            1 => return Some(char::from(lead)),
            _ => {}
        }
        let mut buf = [lead, 0, 0, 0];
        for index in 1..width {
            match self.peek_byte() {
                Some(byte) if continuation_range(lead, index).contains(&byte) => {
                    buf[index] = byte;
                    self.reader.consume(1);
                }
                _ => return Some(char::REPLACEMENT_CHARACTER),
            }
        }
        let decoded = std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next());
        Some(decoded.unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

/// Adapts a [`CharSource`] into a [`Source`] of `Option<char>` so it can feed
/// a `BufferedQueue`
#[derive(Debug)]
pub struct CharInput<C>(C);

impl<C: CharSource> CharInput<C> {
    pub fn new(chars: C) -> Self {
        Self(chars)
    }

    pub fn get_mut(&mut self) -> &mut C {
        &mut self.0
    }

    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<C: CharSource> Source for CharInput<C> {
    type Item = Option<char>;

    fn next_item(&mut self) -> Option<char> {
        self.0.next_char()
    }
}
