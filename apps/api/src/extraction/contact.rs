//! Professional-profile URL capture.
//!
//! PDF exports wrap long URLs, so a profile link may arrive as
//! `www.linkedin.com/in/jane-doe-` followed by `1234 (LinkedIn)`. The
//! extractor glues the continuation back on, drops the platform label and
//! keeps the slug as the candidate's canonical identifier.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::lines::RawLine;
use crate::extraction::sections::is_header;

static PROFILE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:[a-z0-9-]+\.)*linkedin\.com/in/")
        .expect("static regex must compile")
});
static PROFILE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)linkedin\.com/in/([a-z0-9-]+)").expect("static regex must compile")
});
static ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\(linkedin\)\s*").expect("static regex must compile"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLink {
    pub url: String,
    pub id: String,
}

/// First-match-wins profile link extractor. Runs on every line regardless of
/// the active section.
#[derive(Debug, Default)]
pub struct ContactExtractor {
    found: Option<ProfileLink>,
}

impl ContactExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspects `lines[at]`, peeking at the following line when the URL was
    /// cut off.
    pub fn observe(&mut self, lines: &[RawLine], at: usize) {
        if self.found.is_some() {
            return;
        }
        let Some(line) = lines.get(at) else {
            return;
        };
        let Some(m) = PROFILE_URL_RE.find(&line.content) else {
            return;
        };

        let mut candidate = line.content[m.start()..].to_string();
        if !ends_cleanly(&candidate) {
            if let Some(next) = lines.get(at + 1) {
                if !PROFILE_URL_RE.is_match(&next.content) && !is_header(&next.content) {
                    candidate.push_str(&next.content);
                }
            }
        }

        if let Some(link) = parse_profile_link(&candidate) {
            debug!("Captured profile link on line {}: id={}", line.index, link.id);
            self.found = Some(link);
        }
    }

    pub fn finish(self) -> Option<ProfileLink> {
        self.found
    }
}

/// A URL fragment is complete when it ends in `/` or already carries its
/// trailing platform label.
fn ends_cleanly(fragment: &str) -> bool {
    let trimmed = fragment.trim_end();
    trimmed.ends_with('/') || ANNOTATION_RE.is_match(trimmed)
}

/// Strips the `(LinkedIn)` label and extracts the slug. Returns `None` when
/// there is no slug after `/in/`.
pub fn parse_profile_link(text: &str) -> Option<ProfileLink> {
    let cleaned = ANNOTATION_RE.replace_all(text, " ");
    let url = cleaned.split_whitespace().next()?.to_string();
    let id = PROFILE_ID_RE
        .captures(&url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())?;
    Some(ProfileLink { url, id })
}
