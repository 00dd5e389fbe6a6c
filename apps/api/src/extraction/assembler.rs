//! Record assembler. Merges collector output into the final profile and
//! applies the fallback rules.

use crate::extraction::contact::ProfileLink;
use crate::extraction::experience::years_of_experience;
use crate::extraction::lines::RawLine;
use crate::extraction::models::{
    CandidateProfile, Extraction, ExtractionStatus, ProfileField, RoleBlock,
};
use crate::extraction::sections::is_header;

/// Everything the single forward pass captured, before normalization.
#[derive(Debug, Default)]
pub struct Captured {
    pub name: String,
    pub title: Option<String>,
    pub summary: String,
    pub skills: Vec<String>,
    pub roles: Vec<RoleBlock>,
    pub education: String,
    pub graduation_year: Option<i32>,
    pub link: Option<ProfileLink>,
}

pub fn assemble(captured: Captured, lines: &[RawLine]) -> Extraction {
    let title = resolve_title(captured.title.as_deref(), lines);
    let experience = captured
        .roles
        .iter()
        .map(RoleBlock::to_text_block)
        .collect::<Vec<_>>()
        .join("\n\n");
    let (linkedin_url, linkedin_id) = captured
        .link
        .map(|l| (l.url.trim().to_string(), l.id))
        .unwrap_or_default();

    let profile = CandidateProfile {
        name: captured.name.trim().to_string(),
        title,
        summary: captured.summary.trim().to_string(),
        skills: captured
            .skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        experience: experience.trim().to_string(),
        years_of_experience: years_of_experience(&captured.roles),
        roles: captured.roles,
        education: captured.education.trim().to_string(),
        graduation_year: captured.graduation_year,
        linkedin_url,
        linkedin_id,
    };

    let missing_fields: Vec<ProfileField> = ProfileField::ALL
        .into_iter()
        .filter(|f| f.is_missing(&profile))
        .collect();
    let status = match missing_fields.len() {
        0 => ExtractionStatus::Complete,
        n if n == ProfileField::ALL.len() => ExtractionStatus::Empty,
        _ => ExtractionStatus::Partial,
    };

    Extraction {
        profile,
        missing_fields,
        status,
    }
}

/// The line after the name is usually the headline. When nothing was
/// captured, or the capture is the "Top Skills" header, the second
/// normalized line stands in; a header there yields an empty title.
fn resolve_title(captured: Option<&str>, lines: &[RawLine]) -> String {
    let captured = captured.map(str::trim).unwrap_or_default();
    if !captured.is_empty() && !captured.to_lowercase().contains("top skills") {
        return captured.to_string();
    }

    match lines.get(1) {
        Some(line) if !is_header(&line.content) => line.content.trim().to_string(),
        _ => String::new(),
    }
}
