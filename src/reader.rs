use crate::buffer::Buffer;
use crate::error::ParseError;
use std::io::{self, ErrorKind, Read};
use std::sync::Arc;

const REFILL_LEN: usize = 256;

/// Byte reader that can unread as many bytes as necessary.
///
/// Wraps any [`io::Read`] source. Reads drain the pushback buffer first and
/// refill from the source in fixed-size windows. Once the source signals end
/// of stream or fails, that terminal state is remembered and the source is
/// never consulted again; unread bytes remain readable.
pub struct Reader<'a> {
    src: Box<dyn io::Read + 'a>,
    buf: Buffer,
    window: [u8; REFILL_LEN],
    exhausted: Option<ParseError>,
}

impl<'a> Reader<'a> {
    /// Creates a new reader over an arbitrary byte source.
    pub fn new<R: io::Read + 'a>(src: R) -> Reader<'a> {
        Reader {
            src: Box::new(src),
            buf: Buffer::new(),
            window: [0; REFILL_LEN],
            exhausted: None,
        }
    }

    /// Reads into `out`, pushback first.
    ///
    /// Returns `Ok(n)` with `n >= 1` whenever at least one byte could be
    /// delivered; `n < out.len()` means the source is exhausted and the
    /// next call will return the terminal error. Returns `Err` only when no
    /// byte was available: [`ParseError::EndOfInput`] at end of stream or
    /// [`ParseError::Read`] after a source failure.
    pub fn read(&mut self, out: &mut [u8]) -> Result<usize, ParseError> {
        if out.is_empty() {
            return Ok(0);
        }
        if self.buf.is_empty() {
            if let Some(err) = &self.exhausted {
                return Err(err.clone());
            }
        }

        let mut n = self.buf.read(out);
        while n < out.len() && self.exhausted.is_none() {
            self.refill();
            n += self.buf.read(&mut out[n..]);
        }

        if n == 0 {
            // The loop only stops short once the terminal error is recorded.
            match &self.exhausted {
                Some(err) => Err(err.clone()),
                None => Ok(0),
            }
        } else {
            Ok(n)
        }
    }

    /// Unreads a slice of bytes so that they will be read again, first and
    /// in the given order.
    ///
    /// The reader does not check that `bytes` were actually the last bytes
    /// read; parsers hand back exactly what they consumed.
    pub fn unread(&mut self, bytes: &[u8]) {
        self.buf.unread(bytes);
    }

    fn refill(&mut self) {
        loop {
            match self.src.read(&mut self.window) {
                Ok(0) => {
                    self.exhausted = Some(ParseError::EndOfInput);
                    return;
                }
                Ok(n) => {
                    self.buf.reload(&self.window[..n]);
                    return;
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.exhausted = Some(ParseError::Read(Arc::new(err)));
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source that hands out one byte per read call.
    struct DripSource<'a> {
        data: &'a [u8],
    }

    impl io::Read for DripSource<'_> {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            match self.data.split_first() {
                Some((first, rest)) if !out.is_empty() => {
                    out[0] = *first;
                    self.data = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    /// Source that fails after yielding a prefix.
    struct FailingSource {
        prefix: Vec<u8>,
        given: usize,
    }

    impl io::Read for FailingSource {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            if self.given < self.prefix.len() {
                out[0] = self.prefix[self.given];
                self.given += 1;
                Ok(1)
            } else {
                Err(io::Error::new(ErrorKind::BrokenPipe, "source broke"))
            }
        }
    }

    #[test]
    fn test_read_from_string_source() {
        let mut reader = Reader::new("hello".as_bytes());
        let mut out = [0u8; 5];
        assert_eq!(reader.read(&mut out).unwrap(), 5);
        assert_eq!(&out, b"hello");
        assert!(matches!(
            reader.read(&mut out),
            Err(ParseError::EndOfInput)
        ));
    }

    #[test]
    fn test_unread_is_read_next() {
        let mut reader = Reader::new("world".as_bytes());
        let mut out = [0u8; 3];
        assert_eq!(reader.read(&mut out).unwrap(), 3);
        assert_eq!(&out, b"wor");

        reader.unread(b"wor");
        let mut out = [0u8; 5];
        assert_eq!(reader.read(&mut out).unwrap(), 5);
        assert_eq!(&out, b"world");
    }

    #[test]
    fn test_unread_after_eof_still_readable() {
        let mut reader = Reader::new("ab".as_bytes());
        let mut out = [0u8; 2];
        assert_eq!(reader.read(&mut out).unwrap(), 2);
        assert!(matches!(
            reader.read(&mut [0u8; 1]),
            Err(ParseError::EndOfInput)
        ));

        reader.unread(b"ab");
        let mut out = [0u8; 2];
        assert_eq!(reader.read(&mut out).unwrap(), 2);
        assert_eq!(&out, b"ab");
        assert!(matches!(
            reader.read(&mut [0u8; 1]),
            Err(ParseError::EndOfInput)
        ));
    }

    #[test]
    fn test_drip_source_fills_whole_request() {
        let mut reader = Reader::new(DripSource { data: b"stream" });
        let mut out = [0u8; 6];
        assert_eq!(reader.read(&mut out).unwrap(), 6);
        assert_eq!(&out, b"stream");
    }

    #[test]
    fn test_short_read_then_terminal_error() {
        let mut reader = Reader::new("abc".as_bytes());
        let mut out = [0u8; 8];
        assert_eq!(reader.read(&mut out).unwrap(), 3);
        assert!(matches!(
            reader.read(&mut out),
            Err(ParseError::EndOfInput)
        ));
    }

    #[test]
    fn test_source_error_is_sticky() {
        let mut reader = Reader::new(FailingSource {
            prefix: b"ok".to_vec(),
            given: 0,
        });
        let mut out = [0u8; 4];
        assert_eq!(reader.read(&mut out).unwrap(), 2);
        assert!(matches!(reader.read(&mut out), Err(ParseError::Read(_))));
        // Still the same error on the next call, without touching the source.
        assert!(matches!(reader.read(&mut out), Err(ParseError::Read(_))));
    }

    #[test]
    fn test_reads_across_refill_window() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
        let mut reader = Reader::new(&data[..]);

        let mut collected = Vec::new();
        let mut out = [0u8; 7];
        loop {
            match reader.read(&mut out) {
                Ok(n) => collected.extend_from_slice(&out[..n]),
                Err(ParseError::EndOfInput) => break,
                Err(err) => panic!("unexpected error: {}", err),
            }
        }
        assert_eq!(collected, data);
    }

    #[test]
    fn test_empty_request_reads_nothing() {
        let mut reader = Reader::new("x".as_bytes());
        assert_eq!(reader.read(&mut []).unwrap(), 0);
    }
}
