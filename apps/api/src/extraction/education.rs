use crate::extraction::experience::years_in;

/// Headers that close the education buffer.
const EDUCATION_TERMINATORS: &[&str] = &["skills", "experience", "languages"];

/// Accumulates education lines into one space-joined buffer and tracks the
/// latest year seen as the graduation year.
#[derive(Debug, Default)]
pub struct EducationCollector {
    buffer: String,
    graduation_year: Option<i32>,
    closed: bool,
}

impl EducationCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_terminator(line: &str) -> bool {
        let lower = line.to_lowercase();
        EDUCATION_TERMINATORS.iter().any(|t| lower.contains(t))
    }

    /// Appends `line` until a terminator closes the collector; the
    /// terminator itself is never buffered.
    pub fn accept(&mut self, line: &str) {
        if self.closed {
            return;
        }
        if Self::is_terminator(line) {
            self.closed = true;
            return;
        }

        if let Some(latest) = years_in(line).into_iter().max() {
            self.graduation_year = Some(self.graduation_year.map_or(latest, |y| y.max(latest)));
        }
        if !self.buffer.is_empty() {
            self.buffer.push(' ');
        }
        self.buffer.push_str(line.trim());
    }

    pub fn finish(self) -> (String, Option<i32>) {
        (self.buffer.trim().to_string(), self.graduation_year)
    }
}
