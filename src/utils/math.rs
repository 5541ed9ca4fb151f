//! Integer rounding shared by the summary aggregator and the number formatter.

/// Divide `numerator` by `denominator`, rounding half to even.
///
/// Exact integer arithmetic: a tie is a tie, not a float a hair above or below it.
///
/// # Panics
/// Panics if `denominator` is zero.
#[must_use]
pub fn div_round_half_even(numerator: u64, denominator: u64) -> u64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    // Compare 2r against d without overflowing for large remainders
    let upper_half = denominator - remainder;

    if remainder > upper_half || (remainder == upper_half && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// `round(100 * part / whole)` as a whole percentage, 0 when `whole` is 0.
#[must_use]
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let pct = div_round_half_even(100 * part as u64, whole as u64);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_even_ties() {
        assert_eq!(div_round_half_even(5, 10), 0);
        assert_eq!(div_round_half_even(15, 10), 2);
        assert_eq!(div_round_half_even(25, 10), 2);
        assert_eq!(div_round_half_even(35, 10), 4);
    }

    #[test]
    fn test_non_ties() {
        assert_eq!(div_round_half_even(14, 10), 1);
        assert_eq!(div_round_half_even(16, 10), 2);
        assert_eq!(div_round_half_even(0, 7), 0);
        assert_eq!(div_round_half_even(u64::MAX, 1), u64::MAX);
    }

    #[test]
    fn test_percentage() {
        // 12 of 52 states is 23.07...%
        assert_eq!(percentage(12, 52), 23);
        assert_eq!(percentage(1, 8), 12); // 12.5 rounds to even
        assert_eq!(percentage(3, 8), 38); // 37.5 rounds to even
        assert_eq!(percentage(52, 52), 100);
        assert_eq!(percentage(0, 52), 0);
        assert_eq!(percentage(3, 0), 0);
    }
}
