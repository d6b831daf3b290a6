//! flipstrings: high-performance in-place transforms for C-style byte strings.

pub mod mem;
pub mod memrev;
pub mod str;
pub mod strid;
pub mod strlen;
pub mod strrev;
