#![cfg(test)]

use std::io::{self, BufReader, Cursor, Read};
use std::num::NonZeroUsize;

use super::*;
use crate::io::ReadError;

fn limit(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("limit should be non-zero")
}

fn drain<S: CharSource>(source: &mut S) -> String {
    let mut out = String::new();
    while let Some(c) = source.read_char().expect("read should succeed") {
        out.push(c);
    }
    out
}

#[test]
fn test_str_source_mark_reset() {
    let mut source = StrSource::new("abcdef");
    assert_eq!(source.read_char().ok(), Some(Some('a')));

    source.mark(limit(3));
    assert_eq!(drain_n(&mut source, 3), "bcd");
    assert!(source.reset().is_ok(), "Reading up to the limit should keep the mark valid.");
    assert_eq!(source.remaining(), "bcdef", "Reset should return to the marked position.");

    assert!(source.reset().is_ok(), "The mark should survive a reset.");
    assert_eq!(drain(&mut source), "bcdef");
}

#[test]
fn test_str_source_mark_invalidated() {
    let mut source = StrSource::new("abcdef");
    assert!(source.reset().is_err(), "Reset without a mark should fail.");

    source.mark(limit(2));
    drain_n(&mut source, 3);
    assert!(source.reset().is_err(), "Reading past the limit should invalidate the mark.");
    assert_eq!(source.remaining(), "def", "A failed reset shouldn't move the position.");
}

#[test]
fn test_str_source_multibyte() {
    let mut source = StrSource::new("ü€😀");
    assert_eq!(drain(&mut source), "ü€😀");
    assert_eq!(source.read_char().ok(), Some(None), "EOF should be repeated.");
}

#[test]
fn test_reader_source_decodes_utf8() {
    let text = "plain ü € 😀\r\n";
    // A tiny buffer forces multi-byte sequences to straddle refills.
    let mut source = ReaderSource::new(BufReader::with_capacity(1, text.as_bytes()));
    assert_eq!(drain(&mut source), text);
}

#[test]
fn test_reader_source_malformed() {
    let mut invalid = ReaderSource::new(Cursor::new(vec![b'a', 0xFF]));
    assert_eq!(invalid.read_char().ok(), Some(Some('a')));
    assert!(
        invalid.read_char().is_err_and(|e| e.is_malformed_input()),
        "An invalid leading byte should be reported."
    );

    // First two bytes of a three byte sequence.
    let mut truncated = ReaderSource::new(Cursor::new(vec![0xE2, 0x82]));
    assert!(
        truncated.read_char().is_err_and(|e| e.is_malformed_input()),
        "A sequence cut short by EOF should be reported."
    );

    let mut bad_continuation = ReaderSource::new(Cursor::new(vec![0xC3, b'a']));
    assert!(
        bad_continuation.read_char().is_err_and(|e| e.is_malformed_input()),
        "A sequence with an invalid continuation byte should be reported."
    );
}

#[test]
fn test_reader_source_mark_reset() {
    let mut source = ReaderSource::new(Cursor::new("0123456789"));
    assert_eq!(drain_n(&mut source, 2), "01");

    source.mark(limit(4));
    assert_eq!(drain_n(&mut source, 4), "2345");
    assert!(source.reset().is_ok());
    assert_eq!(drain_n(&mut source, 2), "23", "Replayed characters should come first.");

    // Marking again partway through replayed characters.
    source.mark(limit(5));
    assert_eq!(drain_n(&mut source, 5), "45678");
    assert!(source.reset().is_ok());
    assert_eq!(drain(&mut source), "456789");

    source.mark(limit(1));
    assert!(source.reset().is_ok(), "Resetting at EOF without reading should succeed.");
}

#[test]
fn test_reader_source_mark_invalidated() {
    let mut source = ReaderSource::new(Cursor::new("abc"));
    assert!(source.reset().is_err(), "Reset without a mark should fail.");

    source.mark(limit(1));
    drain_n(&mut source, 2);
    assert!(source.reset().is_err(), "Reading past the limit should invalidate the mark.");
    assert_eq!(drain(&mut source), "c");
}

struct FailingReader {
    interrupted: bool,
}

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::ErrorKind::Interrupted.into());
        }
        Err(io::Error::other("broken"))
    }
}

#[test]
fn test_reader_source_io_error() {
    let reader = BufReader::new(FailingReader { interrupted: false });
    let mut source = ReaderSource::new(reader);
    let result = source.read_char();
    assert!(
        matches!(result, Err(ReadError::Stream(ref e)) if e.0.to_string() == "broken"),
        "Interrupts should be retried and other errors propagated, got {result:?}."
    );
    assert!(source.get_ref().get_ref().interrupted);
}

fn is_markable<S: CharSource>(mut source: S) -> bool {
    source.as_markable().is_some()
}

#[test]
fn test_capabilities() {
    let mut chars = "abc".chars();
    assert!(!is_markable(&mut chars), "Chars shouldn't be markable.");
    assert_eq!(chars.read_char().ok(), Some(Some('a')));

    let mut source = StrSource::new("abc");
    assert!(is_markable(&mut source), "Markability should forward through &mut.");
    assert_eq!((&mut source).read_char().ok(), Some(Some('a')));
    assert_eq!(source.remaining(), "bc");

    assert!(is_markable(ReaderSource::new(Cursor::new("abc"))));
}

fn drain_n<S: CharSource>(source: &mut S, n: usize) -> String {
    (0..n)
        .map_while(|_| source.read_char().expect("read should succeed"))
        .collect()
}
