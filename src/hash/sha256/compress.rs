//! SHA-256 compression function.
//!
//! A round is a pure transition `(registers, k, w) -> registers`; the
//! compression of one block folds the 64 rounds over a copy of the prior
//! digest and adds the result back into it.

use super::computations::{big_sigma0, big_sigma1, ch, maj};
use super::schedule::expand;
use super::{Block, K256, Schedule, State};

/// Applies a single compression round.
///
/// `registers` holds `a..h` in order. Returns the shifted registers with
/// the new `a` (`T1 + T2`) and the new `e` (`d + T1`).
#[inline(always)]
pub fn round(registers: State, k: u32, w: u32) -> State {
    let [a, b, c, d, e, f, g, h] = registers;

    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);

    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g]
}

/// Adds the working registers into the prior digest, word by word.
#[inline(always)]
fn feed_forward(prior: State, registers: State) -> State {
    let mut out = prior;

    for (o, r) in out.iter_mut().zip(registers) {
        *o = o.wrapping_add(r);
    }

    out
}

/// Runs the 64 rounds over `schedule` starting from `prior` and returns
/// the updated digest.
#[cfg(not(feature = "speed"))]
pub fn compress(schedule: &Schedule, prior: State) -> State {
    let registers = K256
        .iter()
        .zip(schedule.iter())
        .fold(prior, |regs, (&k, &w)| round(regs, k, w));

    feed_forward(prior, registers)
}

/// Runs the 64 rounds over `schedule` starting from `prior` and returns
/// the updated digest (fully unrolled).
#[cfg(feature = "speed")]
pub fn compress(schedule: &Schedule, prior: State) -> State {
    let mut regs = prior;

    macro_rules! R {
        ($($i:expr),* $(,)?) => {
            $( regs = round(regs, K256[$i], schedule[$i]); )*
        };
    }

    R!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15);
    R!(16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31);
    R!(32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47);
    R!(48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63);

    feed_forward(prior, regs)
}

/// Expands `block` and compresses it into `prior`.
#[inline]
pub fn compress_block(block: &Block, prior: State) -> State {
    compress(&expand(block), prior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256::H256_INIT;
    use crate::hash::sha256::preprocess::preprocess;

    #[test]
    fn first_round_of_abc() {
        let block = preprocess(b"abc").unwrap().next().unwrap();
        let w = expand(&block);

        let regs = round(H256_INIT, K256[0], w[0]);

        assert_eq!(
            regs,
            [
                0x5d6aebcd, 0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xfa2a4622, 0x510e527f, 0x9b05688c,
                0x1f83d9ab,
            ]
        );
    }

    #[test]
    fn round_does_not_touch_input() {
        let regs = H256_INIT;
        let _ = round(regs, K256[5], 0xDEAD_BEEF);

        assert_eq!(regs, H256_INIT);
    }

    #[test]
    fn round_wraps_instead_of_overflowing() {
        let regs = [u32::MAX; 8];
        let out = round(regs, u32::MAX, u32::MAX);

        // Ch(MAX, MAX, MAX) = MAX, Σ1(MAX) = MAX, so
        // T1 = 5 * MAX = MAX - 4 (mod 2³²). T2 = MAX + MAX = MAX - 1.
        assert_eq!(out[0], (u32::MAX - 4).wrapping_add(u32::MAX - 1));
        assert_eq!(out[4], u32::MAX.wrapping_add(u32::MAX - 4));
        assert_eq!(&out[1..4], &[u32::MAX; 3]);
    }

    #[test]
    fn abc_block_compresses_to_known_digest() {
        let block = preprocess(b"abc").unwrap().next().unwrap();
        let digest = compress_block(&block, H256_INIT);

        assert_eq!(
            digest,
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad,
            ]
        );
    }

    #[test]
    fn compress_is_pure() {
        let schedule = expand(&[0x5Au8; 64]);

        let once = compress(&schedule, H256_INIT);
        let twice = compress(&schedule, H256_INIT);

        assert_eq!(once, twice);
        assert_ne!(once, H256_INIT);
    }
}
