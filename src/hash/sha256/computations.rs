//! Bitwise functions of SHA-256 (FIPS 180-4, section 4.1.2).
//!
//! The lowercase sigmas feed the message schedule, the uppercase sigmas
//! together with `ch` and `maj` feed the compression rounds.

/// σ0, used by the message schedule on `W[t-15]`.
#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1, used by the message schedule on `W[t-2]`.
#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Σ0, applied to register `a` when computing T2.
#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1, applied to register `e` when computing T1.
#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Choose: each bit of `e` selects the bit of `f` (1) or `g` (0).
#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

/// Majority of the three inputs, bit by bit.
#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ch_selects_bits() {
        assert_eq!(ch(0xFFFF_FFFF, 0x1234_5678, 0x9ABC_DEF0), 0x1234_5678);
        assert_eq!(ch(0, 0x1234_5678, 0x9ABC_DEF0), 0x9ABC_DEF0);
        assert_eq!(ch(0xFFFF_0000, 0xAAAA_AAAA, 0x5555_5555), 0xAAAA_5555);
    }

    #[test]
    fn maj_takes_majority() {
        assert_eq!(maj(0xFFFF_FFFF, 0xFFFF_FFFF, 0), 0xFFFF_FFFF);
        assert_eq!(maj(0xFFFF_FFFF, 0, 0), 0);
        // `a` and `c` disagree on every bit, so `b` decides.
        assert_eq!(maj(0xF0F0_F0F0, 0xFF00_FF00, 0x0F0F_0F0F), 0xFF00_FF00);
    }

    #[test]
    fn sigmas_on_single_bit() {
        assert_eq!(small_sigma0(1), (1u32 << 25) | (1 << 14));
        assert_eq!(small_sigma1(1), (1u32 << 15) | (1 << 13));
        assert_eq!(big_sigma0(1), (1u32 << 30) | (1 << 19) | (1 << 10));
        assert_eq!(big_sigma1(1), (1u32 << 26) | (1 << 21) | (1 << 7));
    }

    #[test]
    fn small_sigmas_shift_out_low_bits() {
        // The plain shift drops bits that the rotations keep.
        assert_eq!(small_sigma0(0x8000_0000), (1u32 << 24) | (1 << 13) | (1 << 28));
        assert_eq!(small_sigma1(0x8000_0000), (1u32 << 14) | (1 << 12) | (1 << 21));
    }
}
