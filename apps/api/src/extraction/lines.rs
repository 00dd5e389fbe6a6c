//! Line normalizer. Turns decoded PDF text into trimmed, non-empty lines.

/// A single normalized line. `index` is the position in the normalized
/// sequence, which is what look-ahead and look-behind address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub content: String,
    pub index: usize,
}

/// Splits raw text into trimmed, non-empty lines.
///
/// Any line containing "page" (case-insensitive) is treated as pagination
/// noise ("Page 1 of 3") and dropped.
pub fn normalize_lines(raw_text: &str) -> Vec<RawLine> {
    raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.to_lowercase().contains("page"))
        .enumerate()
        .map(|(index, content)| RawLine {
            content: content.to_string(),
            index,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("  \n\n\t\n").is_empty());
    }

    #[test]
    fn test_trims_and_drops_blank_lines() {
        let lines = normalize_lines("  Jane Doe \n\n  Staff Engineer\r\n");
        let contents: Vec<_> = lines.iter().map(|l| l.content.as_str()).collect();
        assert_eq!(contents, vec!["Jane Doe", "Staff Engineer"]);
    }

    #[test]
    fn test_drops_page_markers_case_insensitive() {
        let lines = normalize_lines("Summary\nPage 1 of 2\nBuilt things\n  PAGE 2  \n");
        let contents: Vec<_> = lines.iter().map(|l| l.content.as_str()).collect();
        assert_eq!(contents, vec!["Summary", "Built things"]);
    }

    #[test]
    fn test_indices_are_contiguous_after_filtering() {
        let lines = normalize_lines("a\n\nPage 1\nb\nc");
        let indices: Vec<_> = lines.iter().map(|l| l.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
