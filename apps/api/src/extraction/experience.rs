//! Experience segmentor. Splits the experience section into role blocks.
//!
//! A line carrying a year is a role's date line and the line right before it
//! is the role title. Everything else is description. The previous line is
//! held in a one-slot buffer so it can still become a title when the next
//! line turns out to be a date.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::models::{DateRange, RoleBlock};

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("static regex must compile"));
static PRESENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:present|current|now)\b").expect("static regex must compile")
});

pub fn contains_year(line: &str) -> bool {
    YEAR_RE.is_match(line)
}

/// Every year token in `text`, in order of appearance.
pub fn years_in(text: &str) -> Vec<i32> {
    YEAR_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Parses `2019`, `2019 - 2021`, `January 2019 - Present (5 years)`.
///
/// "Present" resolves to `current_year`. A single year is a one-year range.
/// Ranges that end before they start are dropped.
pub fn parse_date_range(text: &str, current_year: i32) -> Option<DateRange> {
    let years = years_in(text);
    let start_year = *years.first()?;

    let (end_year, is_current) = if PRESENT_RE.is_match(text) {
        (current_year, true)
    } else {
        (years.get(1).copied().unwrap_or(start_year), false)
    };

    if start_year > end_year {
        debug!("Dropping inverted date range '{}'", text);
        return None;
    }

    Some(DateRange {
        start_year,
        end_year,
        is_current,
    })
}

/// Career span: latest end year minus earliest start year across all roles.
pub fn years_of_experience(roles: &[RoleBlock]) -> u32 {
    let ranges: Vec<&DateRange> = roles.iter().filter_map(|r| r.date_range.as_ref()).collect();
    let Some(earliest) = ranges.iter().map(|r| r.start_year).min() else {
        return 0;
    };
    let latest = ranges.iter().map(|r| r.end_year).max().unwrap_or(earliest);
    (latest - earliest).max(0) as u32
}

#[derive(Debug)]
pub struct ExperienceSegmentor {
    current_year: i32,
    current: RoleBlock,
    previous_line: Option<String>,
    /// The last line read was the open block's date line.
    last_was_date: bool,
    roles: Vec<RoleBlock>,
}

impl ExperienceSegmentor {
    pub fn new(current_year: i32) -> Self {
        Self {
            current_year,
            current: RoleBlock::default(),
            previous_line: None,
            last_was_date: false,
            roles: Vec::new(),
        }
    }

    /// A year line directly after the block's date line belongs to its body
    /// rather than starting a role with no title.
    pub fn accept(&mut self, line: &str) {
        if contains_year(line) && !self.last_was_date {
            self.open_role(line);
            self.last_was_date = true;
            return;
        }
        self.last_was_date = false;
        if let Some(prev) = self.previous_line.replace(line.to_string()) {
            append_description(&mut self.current, &prev);
        }
    }

    /// Flushes the open block when a header ends the section. The segmentor
    /// can be re-entered if another experience header follows.
    pub fn close(&mut self) {
        self.last_was_date = false;
        if let Some(prev) = self.previous_line.take() {
            append_description(&mut self.current, &prev);
        }
        self.flush();
    }

    pub fn finish(mut self) -> Vec<RoleBlock> {
        self.close();
        self.roles
    }

    fn open_role(&mut self, date_line: &str) {
        let title = self.previous_line.take().unwrap_or_default();

        // Text seen before any date line (usually the employer) leads into
        // the first role instead of standing as a role of its own.
        let lead_in = if self.current.date_range_text.is_empty() {
            std::mem::take(&mut self.current.description)
        } else {
            self.flush();
            String::new()
        };

        self.current = RoleBlock {
            title,
            date_range_text: date_line.to_string(),
            description: lead_in,
            date_range: parse_date_range(date_line, self.current_year),
        };
    }

    fn flush(&mut self) {
        let block = std::mem::take(&mut self.current);
        if block.is_open() {
            debug!(
                "Flushed role '{}' ({})",
                block.title.trim(),
                block.date_range_text.trim()
            );
            self.roles.push(RoleBlock {
                title: block.title.trim().to_string(),
                date_range_text: block.date_range_text.trim().to_string(),
                description: block.description.trim().to_string(),
                date_range: block.date_range,
            });
        }
    }
}

fn append_description(block: &mut RoleBlock, line: &str) {
    if !block.description.is_empty() {
        block.description.push(' ');
    }
    block.description.push_str(line);
}
