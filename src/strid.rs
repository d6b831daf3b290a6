//! `strid` implementation.

use crate::str::strlen;

/// Rewrite a nul-terminated string onto itself in place
///
/// Scans for the terminator, then walks the data region front to back,
/// storing each byte back to its own position. The buffer is observably
/// unchanged; the terminator and anything after it are not touched. Returns
/// the length of the traversed region.
///
/// The walk uses volatile reads and writes so the per-byte pass is actually
/// performed rather than optimized away, which makes the function usable as
/// a forced touch of every data byte (for example to fault in or dirty the
/// backing pages).
///
/// # Examples
/// ```
/// use flipstrings::strid::strid;
/// let mut buf = *b"foo\0bar";
/// assert_eq!(strid(&mut buf), 3);
/// assert_eq!(&buf, b"foo\0bar");
/// ```
pub fn strid(s: &mut [u8]) -> usize {
    let len = strlen(s);
    let p = s.as_mut_ptr();
    for i in 0..len {
        // SAFETY: `i < len <= s.len()`, so the byte is inside the slice.
        unsafe {
            let q = p.add(i);
            q.write_volatile(q.read_volatile());
        }
    }
    len
}

#[cfg(test)]
mod tests {
    use super::strid;

    #[test]
    fn test_strid_leaves_buffer_unchanged() {
        let mut buf = *b"foo\0";
        assert_eq!(strid(&mut buf), 3);
        assert_eq!(&buf, b"foo\0");

        let mut with_tail = *b"data\0tail bytes";
        let before = with_tail;
        assert_eq!(strid(&mut with_tail), 4);
        assert_eq!(with_tail, before);
    }

    #[test]
    fn test_strid_empty() {
        let mut empty = *b"\0";
        assert_eq!(strid(&mut empty), 0);
        assert_eq!(&empty, b"\0");

        let mut zero: [u8; 0] = [];
        assert_eq!(strid(&mut zero), 0);
    }

    #[test]
    fn test_strid_without_terminator() {
        let mut buf = *b"abc";
        assert_eq!(strid(&mut buf), 3);
        assert_eq!(&buf, b"abc");
    }

    #[test]
    fn test_strid_large() {
        let mut buf = vec![0u8; 4097];
        for (i, b) in buf[..4096].iter_mut().enumerate() {
            *b = (i % 200) as u8 + 1;
        }
        let before = buf.clone();
        assert_eq!(strid(&mut buf), 4096);
        assert_eq!(buf, before);
    }
}
