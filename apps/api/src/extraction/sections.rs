//! Section-header classification and scanner state transitions.

use crate::extraction::models::SectionKind;

/// What a header line announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// One of the sections that has a collector.
    Section(SectionKind),
    /// A known section the parser does not capture (Languages, Honors, ...).
    Ignored,
}

/// Headers that close the open section without opening a collected one.
const IGNORED_HEADERS: &[&str] = &[
    "contact",
    "languages",
    "honors",
    "honors-awards",
    "awards",
    "certifications",
    "publications",
    "patents",
    "projects",
];

/// Classifies a line as a section header.
///
/// "summary" and "experience" must match the whole line so prose that merely
/// mentions them is not mistaken for a header; "skills" and "education" match
/// by containment ("Top Skills", "Education & Training"). When a line matches
/// several, the winner is EDUCATION > EXPERIENCE > SKILLS > SUMMARY.
pub fn classify_header(line: &str) -> Option<Header> {
    let lower = line.trim().to_lowercase();

    if lower.contains("education") {
        return Some(Header::Section(SectionKind::Education));
    }
    if lower == "experience" {
        return Some(Header::Section(SectionKind::Experience));
    }
    if lower.contains("skills") {
        return Some(Header::Section(SectionKind::Skills));
    }
    if lower == "summary" {
        return Some(Header::Section(SectionKind::Summary));
    }
    if IGNORED_HEADERS.contains(&lower.as_str()) {
        return Some(Header::Ignored);
    }
    None
}

/// True when the line would be classified as any header.
pub fn is_header(line: &str) -> bool {
    classify_header(line).is_some()
}

/// The state the scanner enters after reading `header`.
pub fn next_section(header: Header) -> SectionKind {
    match header {
        Header::Section(kind) => kind,
        Header::Ignored => SectionKind::Preamble,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_requires_exact_match() {
        assert_eq!(
            classify_header("Summary"),
            Some(Header::Section(SectionKind::Summary))
        );
        assert_eq!(classify_header("Summary of my career so far"), None);
    }

    #[test]
    fn test_experience_requires_exact_match() {
        assert_eq!(
            classify_header("  EXPERIENCE "),
            Some(Header::Section(SectionKind::Experience))
        );
        assert_eq!(classify_header("10 years of experience in fintech"), None);
    }

    #[test]
    fn test_skills_matches_by_containment() {
        assert_eq!(
            classify_header("Top Skills"),
            Some(Header::Section(SectionKind::Skills))
        );
        assert_eq!(
            classify_header("Technical skills"),
            Some(Header::Section(SectionKind::Skills))
        );
    }

    #[test]
    fn test_education_wins_over_skills() {
        assert_eq!(
            classify_header("Education and Skills"),
            Some(Header::Section(SectionKind::Education))
        );
    }

    #[test]
    fn test_ignored_headers_return_to_preamble() {
        let header = classify_header("Languages").unwrap();
        assert_eq!(header, Header::Ignored);
        assert_eq!(next_section(header), SectionKind::Preamble);
        assert!(is_header("Honors-Awards"));
        assert!(is_header("Contact"));
    }

    #[test]
    fn test_plain_lines_are_not_headers() {
        assert!(!is_header("Jane Doe"));
        assert!(!is_header("Built a distributed cache"));
    }
}
