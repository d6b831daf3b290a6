//! `strrev` implementation.

use crate::mem::memrev;
use crate::str::strlen;

/// Reverse a nul-terminated string in place
///
/// Scans for the terminator, then permutes the data bytes so the sequence
/// reads back to front. The terminator keeps its value and its offset, and
/// bytes at or after it are never touched. Returns the length of the
/// reversed data region.
///
/// The reversal is a true two-sided exchange over `[0, len)`; strings of
/// length 0 or 1 are fixed points, and applying the function twice restores
/// the original buffer.
///
/// A slice without a nul byte is reversed whole, mirroring the `strlen`
/// convention that the slice end bounds the string.
///
/// # Examples
/// ```
/// use flipstrings::strrev::strrev;
/// let mut buf = *b"foo\0";
/// assert_eq!(strrev(&mut buf), 3);
/// assert_eq!(&buf, b"oof\0");
///
/// let mut tail = *b"ab\0cd";
/// strrev(&mut tail);
/// assert_eq!(&tail, b"ba\0cd"); // bytes past the terminator stay put
/// ```
pub fn strrev(s: &mut [u8]) -> usize {
    let len = strlen(s);
    memrev(&mut s[..len]);
    len
}
