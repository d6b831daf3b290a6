//! Memory manipulation functions
//!
//! Safe Rust reversal primitive operating on whole byte slices, with no nul
//! semantics. The nul-aware variant lives in [`crate::strrev`].

/// Reverse a byte slice in place
///
/// Permutes the slice so the byte at index `i` moves to index
/// `len - 1 - i`. Returns the number of bytes reversed, which is the slice
/// length. Slices shorter than two bytes are left untouched.
///
/// # Examples
/// ```
/// use flipstrings::mem::memrev;
/// let mut buf = *b"abcde";
/// assert_eq!(memrev(&mut buf), 5);
/// assert_eq!(&buf, b"edcba");
/// ```
pub fn memrev(s: &mut [u8]) -> usize {
    // SAFETY: the pointer/length pair comes from a live mutable slice.
    unsafe {
        crate::memrev::optimized_memrev_unified(s.as_mut_ptr(), s.len());
    }
    s.len()
}
