/// Width of the separator drawn between two table columns.
pub const COLUMN_GAP: usize = 3;

/// Returns the number of characters `s` occupies on a terminal line.
pub fn charlen(s: &str) -> usize {
    s.chars().count()
}

/// Pads `s` with spaces on both sides up to `width`, with any odd space on
/// the right.
pub fn center(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(charlen(s));
    let left = fill / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(fill - left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("abc", 3)]
    #[case("\u{2500}\u{2500}", 2)]
    fn test_charlen(#[case] s: &str, #[case] want: usize) {
        assert_eq!(charlen(s), want)
    }

    #[rstest]
    #[case("ab", 2, "ab")]
    #[case("ab", 1, "ab")]
    #[case("ab", 5, " ab  ")]
    #[case("ab", 6, "  ab  ")]
    #[case("", 3, "   ")]
    fn test_center(#[case] s: &str, #[case] width: usize, #[case] want: &str) {
        assert_eq!(center(s, width), want)
    }
}
