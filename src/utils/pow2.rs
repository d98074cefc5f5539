//! Power-of-two helpers used to size padded algorithms such as Strassen multiplication.

/// True iff `n` has exactly one set bit.
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Smallest power of two `>= n`; `n` itself when it already is one, and 1 for 0.
///
/// `None` when that power of two does not fit in a `usize`.
pub fn next_power_of_two(n: usize) -> Option<usize> {
    n.max(1).checked_next_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two_iff_single_bit() {
        for n in 0..1025usize {
            assert_eq!(is_power_of_two(n), n.count_ones() == 1, "n = {n}");
        }
    }

    #[test]
    fn next_power_of_two_is_tight() {
        assert_eq!(next_power_of_two(0), Some(1));
        assert_eq!(next_power_of_two(1), Some(1));
        assert_eq!(next_power_of_two(5), Some(8));
        assert_eq!(next_power_of_two(8), Some(8));
        assert_eq!(next_power_of_two(9), Some(16));
        for n in 1..600usize {
            let p = next_power_of_two(n).unwrap();
            assert!(is_power_of_two(p) && p >= n && p / 2 < n, "n = {n}");
        }
    }

    #[test]
    fn next_power_of_two_stops_at_usize_limit() {
        let top = 1usize << (usize::BITS - 1);
        assert_eq!(next_power_of_two(top), Some(top));
        assert_eq!(next_power_of_two(top + 1), None);
        assert_eq!(next_power_of_two(usize::MAX), None);
    }
}
