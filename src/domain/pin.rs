//! PIN value rules.
//!
//! A PIN is a plain integer between [`PIN_MIN`] and [`PIN_MAX`]: four
//! decimal digits, no leading-zero semantics. Values whose digits are
//! all identical ("obvious" PINs such as 1111 or 7777) are never issued.

/// Smallest issuable PIN value.
pub const PIN_MIN: i32 = 1000;

/// Largest issuable PIN value.
pub const PIN_MAX: i32 = 9999;

/// Returns `true` when every decimal digit of `pin` is identical.
///
/// Only 9 of the 9000 values in range are obvious (1111, 2222, …, 9999),
/// so rejection sampling against this predicate terminates almost
/// immediately in practice.
#[must_use]
pub const fn is_obvious(pin: i32) -> bool {
    let first = pin % 10;
    let mut rest = pin / 10;
    while rest > 0 {
        if rest % 10 != first {
            return false;
        }
        rest /= 10;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_digit_values_are_obvious() {
        for d in 1..=9 {
            assert!(is_obvious(d * 1111), "{} should be obvious", d * 1111);
        }
    }

    #[test]
    fn mixed_digit_values_are_not_obvious() {
        assert!(!is_obvious(1000));
        assert!(!is_obvious(1234));
        assert!(!is_obvious(4321));
        assert!(!is_obvious(9998));
        assert!(!is_obvious(1112));
    }
}
