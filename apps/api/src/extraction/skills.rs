/// Lines that end a skills list even though they are not section headers.
const SKILL_TERMINATORS: &[&str] = &[
    "languages",
    "honors",
    "awards",
    "experience",
    "summary",
    "education",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLine {
    Collected,
    Terminated,
}

/// Accumulates one skill per line while the scanner is in the skills section.
#[derive(Debug, Default)]
pub struct SkillsCollector {
    skills: Vec<String>,
}

impl SkillsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `line` unless it terminates the list. A line containing the
    /// candidate's captured name also terminates, since exports repeat the
    /// name in headers and footers.
    pub fn accept(&mut self, line: &str, candidate_name: &str) -> SkillLine {
        let lower = line.to_lowercase();
        let hits_terminator = SKILL_TERMINATORS.iter().any(|t| lower.contains(t));
        let hits_name =
            !candidate_name.is_empty() && lower.contains(&candidate_name.to_lowercase());

        if hits_terminator || hits_name {
            return SkillLine::Terminated;
        }
        self.skills.push(line.to_string());
        SkillLine::Collected
    }

    /// Trimmed skills in document order; empty entries removed, duplicates kept.
    pub fn finish(self) -> Vec<String> {
        self.skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
