//! String length functions
//!
//! Safe Rust renditions of the C length scans. These operate on byte slices
//! and treat 0 (nul) as the string terminator; the slice end is a hard bound,
//! so a missing terminator is well-defined rather than an out-of-bounds walk.

/// Length of a nul-terminated string
///
/// Returns the number of bytes before the first nul byte. A slice without a
/// nul byte yields the slice length. The scan never reads past the slice and
/// never mutates it.
///
/// # Examples
/// ```
/// use flipstrings::str::strlen;
/// assert_eq!(strlen(b"foo\0"), 3);
/// assert_eq!(strlen(b"\0"), 0);
/// assert_eq!(strlen(b"foo\0bar"), 3);
/// assert_eq!(strlen(b"foo"), 3); // no terminator
/// ```
pub fn strlen(s: &[u8]) -> usize {
    // SAFETY: the pointer/length pair comes from a live slice.
    unsafe { crate::strlen::optimized_strlen_unified(s.as_ptr(), s.len()) }
}

/// Bounded length of a nul-terminated string
///
/// Returns the number of bytes before the first nul byte, but at most
/// `maxlen`.
///
/// # Examples
/// ```
/// use flipstrings::str::strnlen;
/// assert_eq!(strnlen(b"foo\0bar", 10), 3);
/// assert_eq!(strnlen(b"foo\0bar", 2), 2);
/// ```
pub fn strnlen(s: &[u8], maxlen: usize) -> usize {
    let limit = s.len().min(maxlen);
    // SAFETY: `limit <= s.len()` bytes are readable from the slice start.
    unsafe { crate::strlen::optimized_strlen_unified(s.as_ptr(), limit) }
}
