//! Optimized nul-byte scanning behind `strlen`/`strnlen`.
#![allow(unsafe_code)]

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn first_set_bit(mask: i32) -> usize {
    (mask as u32).trailing_zeros() as usize
}

#[inline(always)]
fn has_zero_byte_u64(x: u64) -> bool {
    ((x.wrapping_sub(0x0101_0101_0101_0101)) & !x & 0x8080_8080_8080_8080) != 0
}

/// High-performance nul scan over at most `n` bytes.
///
/// Returns the number of bytes before the first nul byte, or `n` when no
/// nul occurs in the region.
///
/// # Safety
///
/// - `s` must be valid for reads of `n` bytes.
/// - On x86_64, AVX2 must be supported (check with
///   `is_x86_feature_detected!("avx2")`).
#[inline(always)]
pub unsafe fn optimized_strlen_unified(s: *const u8, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    if unsafe { *s } == 0 {
        return 0;
    }
    if n == 1 {
        return 1;
    }

    #[cfg(target_arch = "x86_64")]
    {
        return unsafe { strlen_avx2(s.add(1), n - 1) } + 1;
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        unsafe { strlen_swar(s.add(1), n - 1) + 1 }
    }
}

#[inline(always)]
unsafe fn strlen_scalar(s: *const u8, n: usize) -> usize {
    let mut i = 0usize;
    while i < n {
        let byte = unsafe { *s.add(i) };
        if byte == 0 {
            return i;
        }
        i += 1;
    }
    n
}

#[inline(always)]
unsafe fn strlen_swar(s: *const u8, n: usize) -> usize {
    let mut i = 0usize;

    while i + 8 <= n {
        let word = unsafe { core::ptr::read_unaligned(s.add(i) as *const u64) };
        if has_zero_byte_u64(word) {
            let mut j = 0usize;
            while j < 8 {
                if unsafe { *s.add(i + j) } == 0 {
                    return i + j;
                }
                j += 1;
            }
        }
        i += 8;
    }

    i + unsafe { strlen_scalar(s.add(i), n - i) }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn strlen_avx2(s: *const u8, n: usize) -> usize {
    if n < 64 {
        return unsafe { strlen_small_avx2(s, n) };
    }

    let zero = _mm256_setzero_si256();
    let mut i = 0usize;

    while i + 128 <= n {
        let p0 = unsafe { s.add(i) };
        let p1 = unsafe { s.add(i + 32) };
        let p2 = unsafe { s.add(i + 64) };
        let p3 = unsafe { s.add(i + 96) };

        let v0 = unsafe { _mm256_loadu_si256(p0 as *const __m256i) };
        let v1 = unsafe { _mm256_loadu_si256(p1 as *const __m256i) };
        let v2 = unsafe { _mm256_loadu_si256(p2 as *const __m256i) };
        let v3 = unsafe { _mm256_loadu_si256(p3 as *const __m256i) };
        let eq0 = _mm256_cmpeq_epi8(v0, zero);
        let eq1 = _mm256_cmpeq_epi8(v1, zero);
        let eq2 = _mm256_cmpeq_epi8(v2, zero);
        let eq3 = _mm256_cmpeq_epi8(v3, zero);
        let any = _mm256_or_si256(_mm256_or_si256(eq0, eq1), _mm256_or_si256(eq2, eq3));

        if _mm256_testz_si256(any, any) == 1 {
            i += 128;
            continue;
        }

        let m0 = _mm256_movemask_epi8(eq0);
        if m0 != 0 {
            return i + first_set_bit(m0);
        }

        let m1 = _mm256_movemask_epi8(eq1);
        if m1 != 0 {
            return i + 32 + first_set_bit(m1);
        }

        let m2 = _mm256_movemask_epi8(eq2);
        if m2 != 0 {
            return i + 64 + first_set_bit(m2);
        }

        let m3 = _mm256_movemask_epi8(eq3);
        if m3 != 0 {
            return i + 96 + first_set_bit(m3);
        }
    }

    while i + 32 <= n {
        let p = unsafe { s.add(i) };
        let v = unsafe { _mm256_loadu_si256(p as *const __m256i) };
        let eq = _mm256_cmpeq_epi8(v, zero);
        let m = _mm256_movemask_epi8(eq);
        if m != 0 {
            return i + first_set_bit(m);
        }
        i += 32;
    }

    i + unsafe { strlen_swar(s.add(i), n - i) }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn strlen_small_avx2(s: *const u8, n: usize) -> usize {
    debug_assert!(n > 0 && n < 64);

    if n >= 32 {
        let zero = _mm256_setzero_si256();
        let v0 = unsafe { _mm256_loadu_si256(s as *const __m256i) };
        let m0 = _mm256_movemask_epi8(_mm256_cmpeq_epi8(v0, zero));
        if m0 != 0 {
            return first_set_bit(m0);
        }
        if n == 32 {
            return n;
        }
        // Overlapping probe: bytes already known nul-free cannot set mask
        // bits, so the first set bit lands past the overlap.
        let off = n - 32;
        let v1 = unsafe { _mm256_loadu_si256(s.add(off) as *const __m256i) };
        let m1 = _mm256_movemask_epi8(_mm256_cmpeq_epi8(v1, zero));
        if m1 != 0 {
            return off + first_set_bit(m1);
        }
        return n;
    }

    if n >= 16 {
        let zero = _mm_setzero_si128();
        let v0 = unsafe { _mm_loadu_si128(s as *const __m128i) };
        let m0 = _mm_movemask_epi8(_mm_cmpeq_epi8(v0, zero));
        if m0 != 0 {
            return (m0 as u32).trailing_zeros() as usize;
        }
        if n == 16 {
            return n;
        }
        let off = n - 16;
        let v1 = unsafe { _mm_loadu_si128(s.add(off) as *const __m128i) };
        let m1 = _mm_movemask_epi8(_mm_cmpeq_epi8(v1, zero));
        if m1 != 0 {
            return off + (m1 as u32).trailing_zeros() as usize;
        }
        return n;
    }

    unsafe { strlen_scalar(s, n) }
}
