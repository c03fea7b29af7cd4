//! Formatting utilities for terminal output

/// Circled digits for lengths 1 through 20
const CIRCLED: [char; 20] = [
    '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', '⑪', '⑫', '⑬', '⑭', '⑮', '⑯', '⑰', '⑱', '⑲',
    '⑳',
];

/// Format a word's letter count as a circled number badge
///
/// Lengths without a circled glyph fall back to `(n)`.
#[must_use]
pub fn length_badge(len: usize) -> String {
    len.checked_sub(1)
        .and_then(|i| CIRCLED.get(i))
        .map_or_else(|| format!("({len})"), char::to_string)
}

/// Format the root word as a spaced-out uppercase title
#[must_use]
pub fn spaced_title(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// "point" or "points"
#[must_use]
pub const fn points_label(score: usize) -> &'static str {
    if score == 1 { "point" } else { "points" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_small_lengths() {
        assert_eq!(length_badge(1), "①");
        assert_eq!(length_badge(4), "④");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn badge_out_of_range() {
        assert_eq!(length_badge(0), "(0)");
        assert_eq!(length_badge(21), "(21)");
    }

    #[test]
    fn title_is_spaced() {
        assert_eq!(spaced_title("garden"), "G A R D E N");
        assert_eq!(spaced_title(""), "");
    }

    #[test]
    fn points_pluralized() {
        assert_eq!(points_label(0), "points");
        assert_eq!(points_label(1), "point");
        assert_eq!(points_label(12), "points");
    }
}
