/// Concatenate `unit` with itself `count` times.
///
/// A zero or negative `count` yields an empty string.
pub fn repeat(unit: &str, count: i64) -> String {
    let times = usize::try_from(count).unwrap_or(0);
    unit.repeat(times)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_count_times() {
        assert_eq!(repeat("a", 5), "aaaaa");
        assert_eq!(repeat("ab", 3), "ababab");
    }

    #[test]
    fn single_repeat_is_the_unit() {
        assert_eq!(repeat("kata", 1), "kata");
    }

    #[test]
    fn zero_and_negative_counts_are_empty() {
        assert_eq!(repeat("a", 0), "");
        assert_eq!(repeat("a", -1), "");
        assert_eq!(repeat("a", i64::MIN), "");
    }

    #[test]
    fn empty_unit_is_empty() {
        assert_eq!(repeat("", 10), "");
    }

    #[test]
    fn empty_unit_with_huge_count_returns_immediately() {
        assert_eq!(repeat("", i64::MAX), "");
    }

    #[test]
    fn multibyte_units() {
        assert_eq!(repeat("é", 3), "ééé");
    }
}
