//! Optimized in-place byte reversal.
//!
//! The converging paths swap fixed-width chunks from both ends, byte-reversing
//! each chunk as it crosses. The sub-chunk middle is finished with overlapping
//! pairs: all loads are issued before any store, and every store writes
//! position `i` with the original byte at `n - 1 - i`, so bytes covered by two
//! stores receive the same value from both.
#![allow(unsafe_code)]

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// High-performance in-place reversal of exactly `n` bytes.
///
/// # Safety
///
/// - `s` must be valid for reads and writes of `n` bytes.
/// - On x86_64, AVX2 must be supported (check with
///   `is_x86_feature_detected!("avx2")`).
#[inline(always)]
pub unsafe fn optimized_memrev_unified(s: *mut u8, n: usize) {
    if n < 2 {
        return;
    }

    #[cfg(target_arch = "x86_64")]
    if n >= 64 {
        unsafe { memrev_avx2(s, n) };
        return;
    }

    unsafe { memrev_swar(s, n) }
}

#[inline(always)]
unsafe fn memrev_swar(s: *mut u8, n: usize) {
    let mut lo = 0usize;
    let mut hi = n;

    // Disjoint 8-byte chunks from both ends.
    while hi - lo >= 16 {
        let head = unsafe { core::ptr::read_unaligned(s.add(lo) as *const u64) };
        let tail = unsafe { core::ptr::read_unaligned(s.add(hi - 8) as *const u64) };
        unsafe {
            core::ptr::write_unaligned(s.add(lo) as *mut u64, tail.swap_bytes());
            core::ptr::write_unaligned(s.add(hi - 8) as *mut u64, head.swap_bytes());
        }
        lo += 8;
        hi -= 8;
    }

    unsafe { memrev_tail(s.add(lo), hi - lo) };
}

#[inline(always)]
unsafe fn memrev_tail(s: *mut u8, n: usize) {
    debug_assert!(n < 16);

    if n >= 8 {
        let a = unsafe { core::ptr::read_unaligned(s as *const u64) };
        let b = unsafe { core::ptr::read_unaligned(s.add(n - 8) as *const u64) };
        unsafe {
            core::ptr::write_unaligned(s as *mut u64, b.swap_bytes());
            core::ptr::write_unaligned(s.add(n - 8) as *mut u64, a.swap_bytes());
        }
        return;
    }

    if n >= 4 {
        let a = unsafe { core::ptr::read_unaligned(s as *const u32) };
        let b = unsafe { core::ptr::read_unaligned(s.add(n - 4) as *const u32) };
        unsafe {
            core::ptr::write_unaligned(s as *mut u32, b.swap_bytes());
            core::ptr::write_unaligned(s.add(n - 4) as *mut u32, a.swap_bytes());
        }
        return;
    }

    if n >= 2 {
        let a = unsafe { core::ptr::read_unaligned(s as *const u16) };
        let b = unsafe { core::ptr::read_unaligned(s.add(n - 2) as *const u16) };
        unsafe {
            core::ptr::write_unaligned(s as *mut u16, b.swap_bytes());
            core::ptr::write_unaligned(s.add(n - 2) as *mut u16, a.swap_bytes());
        }
    }

    // n < 2: a single byte (or nothing) is its own reversal.
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[inline]
unsafe fn reverse32(v: __m256i) -> __m256i {
    // shuffle reverses within each 128-bit lane, permute swaps the lanes.
    let lane_rev = _mm256_set_epi8(
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10,
        11, 12, 13, 14, 15,
    );
    let lanes = _mm256_shuffle_epi8(v, lane_rev);
    _mm256_permute2x128_si256(lanes, lanes, 0x01)
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[inline]
unsafe fn reverse16(v: __m128i) -> __m128i {
    let lane_rev = _mm_set_epi8(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15);
    _mm_shuffle_epi8(v, lane_rev)
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn memrev_avx2(s: *mut u8, n: usize) {
    debug_assert!(n >= 64);

    let mut lo = 0usize;
    let mut hi = n;

    // Disjoint 32-byte chunks from both ends.
    while hi - lo >= 64 {
        let head = unsafe { _mm256_loadu_si256(s.add(lo) as *const __m256i) };
        let tail = unsafe { _mm256_loadu_si256(s.add(hi - 32) as *const __m256i) };
        unsafe {
            _mm256_storeu_si256(s.add(lo) as *mut __m256i, reverse32(tail));
            _mm256_storeu_si256(s.add(hi - 32) as *mut __m256i, reverse32(head));
        }
        lo += 32;
        hi -= 32;
    }

    let m = hi - lo;
    let mid = unsafe { s.add(lo) };

    if m >= 32 {
        // 32-63 bytes left: overlapping 32-byte halves.
        let a = unsafe { _mm256_loadu_si256(mid as *const __m256i) };
        let b = unsafe { _mm256_loadu_si256(mid.add(m - 32) as *const __m256i) };
        unsafe {
            _mm256_storeu_si256(mid as *mut __m256i, reverse32(b));
            _mm256_storeu_si256(mid.add(m - 32) as *mut __m256i, reverse32(a));
        }
        return;
    }

    if m >= 16 {
        // 16-31 bytes left: overlapping 16-byte halves.
        let a = unsafe { _mm_loadu_si128(mid as *const __m128i) };
        let b = unsafe { _mm_loadu_si128(mid.add(m - 16) as *const __m128i) };
        unsafe {
            _mm_storeu_si128(mid as *mut __m128i, reverse16(b));
            _mm_storeu_si128(mid.add(m - 16) as *mut __m128i, reverse16(a));
        }
        return;
    }

    unsafe { memrev_tail(mid, m) };
}
