// ============================================================
// SHIFT_JIS CSV READER
// ============================================================
// Stream Shift_JIS bytes into UTF-8 and split them into raw rows

use std::io::{self, Read};

use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::{Decoder, DecoderResult, SHIFT_JIS};

use crate::domain::error::{AppError, Result};

const INPUT_CHUNK: usize = 8 * 1024;
// A half-width kana byte is the worst case: one byte in, three bytes out.
const OUTPUT_CHUNK: usize = INPUT_CHUNK * 3 + 16;

/// `Read` adapter that transcodes Shift_JIS to UTF-8 on the fly.
///
/// Replacement is disabled: the first invalid byte sequence fails the read
/// with `io::ErrorKind::InvalidData`.
pub struct ShiftJisDecodeReader<R> {
    inner: R,
    decoder: Decoder,
    input: Vec<u8>,
    input_start: usize,
    input_end: usize,
    output: Vec<u8>,
    output_start: usize,
    /// Bytes handed to the decoder so far
    consumed: u64,
    eof: bool,
    finished: bool,
}

impl<R: Read> ShiftJisDecodeReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            decoder: SHIFT_JIS.new_decoder_without_bom_handling(),
            input: vec![0; INPUT_CHUNK],
            input_start: 0,
            input_end: 0,
            output: Vec::with_capacity(OUTPUT_CHUNK),
            output_start: 0,
            consumed: 0,
            eof: false,
            finished: false,
        }
    }

    fn decode_chunk(&mut self) -> io::Result<()> {
        if self.input_start == self.input_end && !self.eof {
            let n = self.inner.read(&mut self.input)?;
            self.input_start = 0;
            self.input_end = n;
            self.eof = n == 0;
        }

        let last = self.eof;
        self.output.clear();
        self.output.resize(OUTPUT_CHUNK, 0);
        self.output_start = 0;

        let (result, read, written) = self.decoder.decode_to_utf8_without_replacement(
            &self.input[self.input_start..self.input_end],
            &mut self.output,
            last,
        );
        self.input_start += read;
        self.consumed += read as u64;
        self.output.truncate(written);

        match result {
            DecoderResult::InputEmpty => {
                if last {
                    self.finished = true;
                }
                Ok(())
            }
            DecoderResult::OutputFull => Ok(()),
            DecoderResult::Malformed(bad_len, unread_len) => {
                let offset = self
                    .consumed
                    .saturating_sub(bad_len as u64 + unread_len as u64);
                Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid Shift_JIS byte sequence at byte offset {}", offset),
                ))
            }
        }
    }
}

impl<R: Read> Read for ShiftJisDecodeReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            if self.output_start < self.output.len() {
                let pending = &self.output[self.output_start..];
                let n = pending.len().min(buf.len());
                buf[..n].copy_from_slice(&pending[..n]);
                self.output_start += n;
                return Ok(n);
            }
            if self.finished || buf.is_empty() {
                return Ok(0);
            }
            self.decode_chunk()?;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    /// A quote seen inside a quoted field: either an escape or the close
    QuoteInQuoted,
}

/// `Read` adapter that rejects quoting the `csv` crate would tolerate.
///
/// A quote may only open a field, close it, or be doubled inside it. A field
/// still open at end of input is unterminated. Failures are an
/// `AppError::ParseError` carried inside the `io::Error`.
pub struct QuoteCheckReader<R> {
    inner: R,
    state: QuoteState,
    line: u64,
}

impl<R: Read> QuoteCheckReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            state: QuoteState::FieldStart,
            line: 1,
        }
    }

    fn scan(&mut self, bytes: &[u8]) -> io::Result<()> {
        use QuoteState::*;

        for &b in bytes {
            self.state = match (self.state, b) {
                (Quoted, b'"') => QuoteInQuoted,
                (Quoted, _) => Quoted,
                (QuoteInQuoted, b'"') => Quoted,
                (_, b',' | b'\r' | b'\n') => FieldStart,
                (FieldStart, b'"') => Quoted,
                (Unquoted, b'"') => return Err(self.error("bare \" in unquoted field")),
                (QuoteInQuoted, _) => {
                    return Err(self.error("extraneous \" after closing quote"))
                }
                _ => Unquoted,
            };
            if b == b'\n' {
                self.line += 1;
            }
        }
        Ok(())
    }

    fn error(&self, message: &str) -> io::Error {
        io::Error::new(
            io::ErrorKind::InvalidData,
            AppError::ParseError(format!("line {}: {}", self.line, message)),
        )
    }
}

impl<R: Read> Read for QuoteCheckReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 && !buf.is_empty() && self.state == QuoteState::Quoted {
            return Err(self.error("unterminated quoted field"));
        }
        self.scan(&buf[..n])?;
        Ok(n)
    }
}

/// One decoded source row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based row number; rows never span lines
    pub line: u64,
    pub fields: Vec<String>,
}

/// Headerless CSV reader over a Shift_JIS byte stream
pub struct ShiftJisCsvReader<R> {
    reader: csv::Reader<QuoteCheckReader<ShiftJisDecodeReader<R>>>,
    record: StringRecord,
    rows_read: u64,
}

impl<R: Read> ShiftJisCsvReader<R> {
    pub fn new(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::None)
            .flexible(true) // column counts are checked per schema
            .from_reader(QuoteCheckReader::new(ShiftJisDecodeReader::new(source)));

        Self {
            reader,
            record: StringRecord::new(),
            rows_read: 0,
        }
    }

    /// Read the next row, or `None` at end of input
    pub fn next_row(&mut self) -> Result<Option<RawRow>> {
        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }

        // csv positions lag by one line on CRLF input, so count rows here.
        self.rows_read += 1;
        let line = self.rows_read;

        // No field of these datasets spans lines, so an embedded line break
        // means a quote was left open.
        if self.record.iter().any(|f| f.contains(['\n', '\r'])) {
            return Err(AppError::ParseError(format!(
                "line {}: unterminated quoted field",
                line
            )));
        }

        Ok(Some(RawRow {
            line,
            fields: self.record.iter().map(|f| f.to_string()).collect(),
        }))
    }
}

impl<R: Read> Iterator for ShiftJisCsvReader<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row().transpose()
    }
}
