//! Letter arithmetic over the 26-letter Latin alphabet.
//!
//! Letters are ASCII only. Positions are case-relative: `'A'` and `'a'` are
//! both position 0. Every helper leaves non-letters untouched so the ciphers
//! can pass punctuation, digits and whitespace straight through.

use crate::config::ALPHABET_LEN;

/// Returns the first letter of `c`'s case, or `None` for non-letters.
#[inline]
pub fn case_base(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(b'A')
    } else if c.is_ascii_lowercase() {
        Some(b'a')
    } else {
        None
    }
}

/// Zero-based position of `c` within its own case.
#[inline]
pub fn position(c: char) -> Option<u8> {
    case_base(c).map(|base| c as u8 - base)
}

/// Upper-case letter at `position` (taken modulo 26).
#[inline]
pub fn upper(position: u8) -> char {
    char::from(b'A' + position % ALPHABET_LEN)
}

/// Maps the position of a letter through `f`, keeping the letter's case.
///
/// The result of `f` is reduced modulo 26. Non-letters are returned as-is.
#[inline]
pub fn map_letter(c: char, f: impl FnOnce(u8) -> u8) -> char {
    match case_base(c) {
        Some(base) => char::from(base + f(c as u8 - base) % ALPHABET_LEN),
        None => c,
    }
}

/// Moves a letter forward by `by` positions, wrapping around the alphabet.
#[inline]
pub fn rotate(c: char, by: u8) -> char {
    let by = by % ALPHABET_LEN;
    map_letter(c, |p| p + by)
}

/// Reduces any integer into `0..26`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn reduce(value: i64) -> u8 {
    value.rem_euclid(i64::from(ALPHABET_LEN)) as u8
}

/// Additive inverse of a reduced offset, so that `rotate(rotate(c, k), negate(k)) == c`.
#[inline]
pub fn negate(offset: u8) -> u8 {
    (ALPHABET_LEN - offset % ALPHABET_LEN) % ALPHABET_LEN
}

/// Greatest common divisor of the magnitudes of `a` and `b`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Multiplicative inverse of `a` modulo `m`, if one exists.
///
/// An inverse exists only when `gcd(a, m) == 1`. It is found with the
/// extended Euclidean algorithm and lies in `0..m`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let a = a.rem_euclid(m.max(1));
    if m <= 1 || gcd(a, m) != 1 {
        return None;
    }

    let (mut old_r, mut r) = (a, m);
    let (mut old_s, mut s) = (1_i64, 0_i64);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }

    Some(old_s.rem_euclid(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_case_relative() {
        assert_eq!(position('A'), Some(0));
        assert_eq!(position('a'), Some(0));
        assert_eq!(position('z'), Some(25));
        assert_eq!(position('5'), None);
        assert_eq!(position('é'), None);
    }

    #[test]
    fn test_rotate_preserves_case_and_wraps() {
        assert_eq!(rotate('X', 3), 'A');
        assert_eq!(rotate('x', 3), 'a');
        assert_eq!(rotate('!', 3), '!');
        assert_eq!(rotate('m', 26), 'm');
    }

    #[test]
    fn test_reduce_handles_negative_and_large() {
        assert_eq!(reduce(-1), 25);
        assert_eq!(reduce(27), 1);
        assert_eq!(reduce(i64::MIN), 18);
        assert_eq!(reduce(i64::MAX), 7);
    }

    #[test]
    fn test_negate_round_trips() {
        for offset in 0..ALPHABET_LEN {
            assert_eq!(rotate(rotate('Q', offset), negate(offset)), 'Q');
        }
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(5, 26), 1);
        assert_eq!(gcd(13, 26), 13);
        assert_eq!(gcd(-4, 26), 2);
        assert_eq!(gcd(0, 26), 26);
        assert_eq!(gcd(i64::MIN, 26), 2);
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(5, 26), Some(21));
        assert_eq!(mod_inverse(7, 26), Some(15));
        assert_eq!(mod_inverse(-5, 26), Some(5));
        assert_eq!(mod_inverse(2, 26), None);
        assert_eq!(mod_inverse(13, 26), None);
        assert_eq!(mod_inverse(3, 1), None);
        assert_eq!(mod_inverse(3, 0), None);
        assert_eq!(mod_inverse(i64::MIN + 1, 26), Some(11));
    }
}
