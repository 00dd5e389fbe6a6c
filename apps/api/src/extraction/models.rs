use serde::{Deserialize, Serialize};

/// Extraction mode of the line scanner. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    #[default]
    Preamble,
    Summary,
    Skills,
    Experience,
    Education,
}

/// Resolved start/end years of a role. `end_year` is already resolved when
/// the text said "present".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_year: i32,
    pub end_year: i32,
    pub is_current: bool,
}

/// One employment entry: title, raw date text, and free-text description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBlock {
    pub title: String,
    pub date_range_text: String,
    pub description: String,
    pub date_range: Option<DateRange>,
}

impl RoleBlock {
    pub fn is_open(&self) -> bool {
        !self.title.is_empty() || !self.date_range_text.is_empty() || !self.description.is_empty()
    }

    /// Renders the block as `title\ndateRange\ndescription`.
    pub fn to_text_block(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.title.trim(),
            self.date_range_text.trim(),
            self.description.trim()
        )
    }
}

/// Structured candidate profile. Keys match the JSON the intake form consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub skills: Vec<String>,
    /// Role blocks rendered as text, separated by a blank line.
    pub experience: String,
    pub roles: Vec<RoleBlock>,
    pub education: String,
    pub graduation_year: Option<i32>,
    pub years_of_experience: u32,
    pub linkedin_url: String,
    pub linkedin_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Title,
    Summary,
    Skills,
    Experience,
    Education,
    Linkedin,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Name,
        ProfileField::Title,
        ProfileField::Summary,
        ProfileField::Skills,
        ProfileField::Experience,
        ProfileField::Education,
        ProfileField::Linkedin,
    ];

    pub fn is_missing(&self, profile: &CandidateProfile) -> bool {
        match self {
            ProfileField::Name => profile.name.is_empty(),
            ProfileField::Title => profile.title.is_empty(),
            ProfileField::Summary => profile.summary.is_empty(),
            ProfileField::Skills => profile.skills.is_empty(),
            ProfileField::Experience => profile.roles.is_empty(),
            ProfileField::Education => profile.education.is_empty(),
            ProfileField::Linkedin => profile.linkedin_id.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStatus {
    Complete,
    Partial,
    Empty,
}

/// Profile plus best-effort flags for the fields the parser could not fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    pub profile: CandidateProfile,
    pub missing_fields: Vec<ProfileField>,
    pub status: ExtractionStatus,
}
