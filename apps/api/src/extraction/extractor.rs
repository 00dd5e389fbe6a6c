//! Profile extractor: the single forward pass over normalized lines.
//!
//! Each line is offered to the contact extractor first (it runs in every
//! section), then checked for a section header, then for the candidate's
//! name, and finally dispatched to the collector of the active section.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use thiserror::Error;
use tracing::{debug, info};

use crate::extraction::assembler::{assemble, Captured};
use crate::extraction::contact::ContactExtractor;
use crate::extraction::education::EducationCollector;
use crate::extraction::experience::ExperienceSegmentor;
use crate::extraction::lines::normalize_lines;
use crate::extraction::models::{Extraction, SectionKind};
use crate::extraction::names::{NameEntityRecognizer, RecognizerError};
use crate::extraction::sections::{classify_header, next_section};
use crate::extraction::skills::{SkillLine, SkillsCollector};

/// Infrastructure failures. Poor extraction quality is never an error.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("name recognizer unavailable: {0}")]
    RecognizerUnavailable(String),
}

impl From<RecognizerError> for ExtractError {
    fn from(err: RecognizerError) -> Self {
        match err {
            RecognizerError::Unavailable(msg) => ExtractError::RecognizerUnavailable(msg),
        }
    }
}

/// Stateless between calls; safe to share across threads behind an `Arc`.
#[derive(Clone)]
pub struct ProfileExtractor {
    recognizer: Arc<dyn NameEntityRecognizer>,
}

impl ProfileExtractor {
    pub fn new(recognizer: Arc<dyn NameEntityRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Extracts a profile, resolving "present" to the current UTC year.
    pub fn extract(&self, raw_text: &str) -> Result<Extraction, ExtractError> {
        self.extract_at(raw_text, Utc::now().year())
    }

    /// Extracts a profile with "present" resolved to `current_year`.
    pub fn extract_at(&self, raw_text: &str, current_year: i32) -> Result<Extraction, ExtractError> {
        let lines = normalize_lines(raw_text);

        let mut section = SectionKind::Preamble;
        // The name sits in the header block; once a content section has been
        // entered, name detection is over.
        let mut past_header_block = false;

        let mut name = String::new();
        let mut title: Option<String> = None;
        let mut summary: Vec<&str> = Vec::new();
        let mut contact = ContactExtractor::new();
        let mut skills = SkillsCollector::new();
        let mut experience = ExperienceSegmentor::new(current_year);
        let mut education = EducationCollector::new();

        for line in &lines {
            contact.observe(&lines, line.index);
            let text = line.content.as_str();

            if let Some(header) = classify_header(text) {
                let next = next_section(header);
                if section == SectionKind::Experience && next != SectionKind::Experience {
                    experience.close();
                }
                if matches!(
                    next,
                    SectionKind::Summary | SectionKind::Experience | SectionKind::Education
                ) {
                    past_header_block = true;
                }
                debug!("Line {}: section {:?} -> {:?}", line.index, section, next);
                section = next;
                continue;
            }

            if name.is_empty() && !past_header_block {
                let detected = self.recognizer.detect_person_names(text)?;
                if let [only] = detected.as_slice() {
                    debug!("Line {}: captured candidate name", line.index);
                    name = only.clone();
                    title = lines.get(line.index + 1).map(|l| l.content.clone());
                    // A name line ends whatever list preceded it.
                    section = SectionKind::Preamble;
                    continue;
                }
            }

            match section {
                SectionKind::Preamble => {}
                SectionKind::Summary => summary.push(text),
                SectionKind::Skills => {
                    if skills.accept(text, &name) == SkillLine::Terminated {
                        debug!("Line {}: skills list terminated", line.index);
                        section = SectionKind::Preamble;
                    }
                }
                SectionKind::Experience => experience.accept(text),
                SectionKind::Education => education.accept(text),
            }
        }

        let (education_text, graduation_year) = education.finish();
        let captured = Captured {
            name,
            title,
            summary: summary.join(" "),
            skills: skills.finish(),
            roles: experience.finish(),
            education: education_text,
            graduation_year,
            link: contact.finish(),
        };

        let extraction = assemble(captured, &lines);
        info!(
            "Extracted profile from {} lines: {} roles, {} skills, status={:?}",
            lines.len(),
            extraction.profile.roles.len(),
            extraction.profile.skills.len(),
            extraction.status
        );
        Ok(extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::models::{CandidateProfile, ExtractionStatus, ProfileField};
    use crate::extraction::names::HeuristicNameRecognizer;

    const YEAR: i32 = 2026;

    /// A profile export in the usual layout: sidebar first, then the name
    /// block, then the main sections.
    const PROFILE_EXPORT: &str = r#"
        Contact
        jane.doe@example.com
        www.linkedin.com/in/jane-doe-
        4a1b2c (LinkedIn)
        Top Skills
        Distributed Systems
        Rust
        PostgreSQL
        Languages
        English (Native or Bilingual)
        Jane Doe
        Staff Software Engineer at Acme
        Berlin, Germany
        Summary
        I build storage engines and the teams that run them.
        Fifteen years across databases and infrastructure.
        Experience
        Acme
        Staff Software Engineer
        January 2021 - Present (5 years 10 months)
        Berlin, Germany
        Led the storage team.
        Page 1 of 2
        Globex
        Software Engineer
        June 2012 - December 2020 (8 years 7 months)
        Built the replication layer.
        Education
        Technical University of Munich
        Master of Science, Computer Science (2010 - 2012)
        University of Vienna
        Bachelor of Science, Mathematics (2007 - 2010)
    "#;

    fn extractor() -> ProfileExtractor {
        ProfileExtractor::new(Arc::new(HeuristicNameRecognizer::new()))
    }

    struct Unavailable;

    impl NameEntityRecognizer for Unavailable {
        fn detect_person_names(&self, _line: &str) -> Result<Vec<String>, RecognizerError> {
            Err(RecognizerError::Unavailable("model not loaded".to_string()))
        }
    }

    /// Recognizer that treats every line as one name.
    struct Everything;

    impl NameEntityRecognizer for Everything {
        fn detect_person_names(&self, line: &str) -> Result<Vec<String>, RecognizerError> {
            Ok(vec![line.to_string()])
        }
    }

    /// Recognizer that reports two names for every line.
    struct Ambiguous;

    impl NameEntityRecognizer for Ambiguous {
        fn detect_person_names(&self, line: &str) -> Result<Vec<String>, RecognizerError> {
            Ok(vec![line.to_string(), line.to_string()])
        }
    }

    #[test]
    fn test_full_export() {
        let extraction = extractor().extract_at(PROFILE_EXPORT, YEAR).unwrap();
        let p = &extraction.profile;

        assert_eq!(p.name, "Jane Doe");
        assert_eq!(p.title, "Staff Software Engineer at Acme");
        assert_eq!(p.linkedin_id, "jane-doe-4a1b2c");
        assert_eq!(p.linkedin_url, "www.linkedin.com/in/jane-doe-4a1b2c");
        assert_eq!(p.skills, vec!["Distributed Systems", "Rust", "PostgreSQL"]);
        assert_eq!(
            p.summary,
            "I build storage engines and the teams that run them. Fifteen years across databases and infrastructure."
        );

        assert_eq!(p.roles.len(), 2);
        assert_eq!(p.roles[0].title, "Staff Software Engineer");
        assert_eq!(p.roles[0].description, "Acme Berlin, Germany Led the storage team. Globex");
        assert_eq!(p.roles[1].title, "Software Engineer");
        assert_eq!(p.roles[1].description, "Built the replication layer.");
        assert_eq!(p.years_of_experience, 14);
        assert!(p.experience.contains("\n\nSoftware Engineer\nJune 2012"));

        assert!(p.education.starts_with("Technical University of Munich"));
        assert_eq!(p.graduation_year, Some(2012));
        assert_eq!(extraction.status, ExtractionStatus::Complete);
        assert!(extraction.missing_fields.is_empty());
    }

    #[test]
    fn test_empty_input_yields_default_profile() {
        let extraction = extractor().extract_at("", YEAR).unwrap();
        assert_eq!(extraction.profile, CandidateProfile::default());
        assert_eq!(extraction.status, ExtractionStatus::Empty);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let e = extractor();
        let first = e.extract_at(PROFILE_EXPORT, YEAR).unwrap();
        let second = e.extract_at(PROFILE_EXPORT, YEAR).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_name_followed_by_skills_header_triggers_title_fallback() {
        let text = "Jane Doe\nTop Skills\nRust\nGo";
        let p = extractor().extract_at(text, YEAR).unwrap().profile;
        assert_eq!(p.name, "Jane Doe");
        assert_ne!(p.title, "Top Skills");
        assert_eq!(p.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_two_role_blocks_and_present() {
        let text = "Experience\nEngineer\n2019\ndid X\nSenior Engineer\n2021 - Present\ndid Y";
        let p = extractor().extract_at(text, YEAR).unwrap().profile;
        assert_eq!(p.roles.len(), 2);
        assert_eq!(p.roles[0].title, "Engineer");
        assert_eq!(p.roles[1].title, "Senior Engineer");
        assert_eq!(p.years_of_experience, (YEAR - 2019) as u32);
        assert_eq!(
            p.experience,
            "Engineer\n2019\ndid X\n\nSenior Engineer\n2021 - Present\ndid Y"
        );
    }

    #[test]
    fn test_split_profile_url() {
        let text = "www.linkedin.com/in/jdoe\n(LinkedIn)\nSummary\nHello";
        let p = extractor().extract_at(text, YEAR).unwrap().profile;
        assert_eq!(p.linkedin_id, "jdoe");
        assert!(!p.linkedin_url.contains("(LinkedIn)"));
    }

    #[test]
    fn test_education_keeps_latest_year() {
        let text = "Education\nState University\nBSc 2008 - 2012\nMSc 2014";
        let p = extractor().extract_at(text, YEAR).unwrap().profile;
        assert_eq!(p.graduation_year, Some(2014));
        assert_eq!(p.education, "State University BSc 2008 - 2012 MSc 2014");
    }

    #[test]
    fn test_experience_header_closes_skills() {
        let text = "Skills\nRust\nExperience\nEngineer\n2020 - 2022\nShipped";
        let p = extractor().extract_at(text, YEAR).unwrap().profile;
        assert_eq!(p.skills, vec!["Rust"]);
        assert_eq!(p.roles.len(), 1);
        assert_eq!(p.years_of_experience, 2);
    }

    #[test]
    fn test_education_header_flushes_open_role() {
        let text = "Experience\nEngineer\n2020 - 2022\nShipped\nEducation\nMIT";
        let p = extractor().extract_at(text, YEAR).unwrap().profile;
        assert_eq!(p.roles.len(), 1);
        assert_eq!(p.roles[0].description, "Shipped");
        assert_eq!(p.education, "MIT");
    }

    #[test]
    fn test_name_detection_stops_after_first_capture() {
        let text = "Jane Doe\nEngineer\nJohn Roe\nSummary\nHi";
        let p = ProfileExtractor::new(Arc::new(Everything))
            .extract_at(text, YEAR)
            .unwrap()
            .profile;
        assert_eq!(p.name, "Jane Doe");
        assert_eq!(p.title, "Engineer");
        assert_eq!(p.summary, "Hi");
    }

    #[test]
    fn test_ambiguous_name_detection_is_ignored() {
        let p = ProfileExtractor::new(Arc::new(Ambiguous))
            .extract_at("Jane Doe\nEngineer", YEAR)
            .unwrap()
            .profile;
        assert_eq!(p.name, "");
        assert_eq!(p.title, "Engineer");
    }

    #[test]
    fn test_recognizer_failure_is_infrastructure_error() {
        let result = ProfileExtractor::new(Arc::new(Unavailable)).extract_at("Jane Doe", YEAR);
        assert!(matches!(result, Err(ExtractError::RecognizerUnavailable(_))));
    }

    #[test]
    fn test_missing_fields_are_flagged() {
        let extraction = extractor().extract_at("Skills\nRust", YEAR).unwrap();
        assert_eq!(extraction.status, ExtractionStatus::Partial);
        assert!(extraction.missing_fields.contains(&ProfileField::Name));
        assert!(extraction.missing_fields.contains(&ProfileField::Experience));
        assert!(!extraction.missing_fields.contains(&ProfileField::Skills));
    }

    #[test]
    fn test_extraction_is_thread_safe() {
        let e = extractor();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let e = e.clone();
                std::thread::spawn(move || e.extract_at(PROFILE_EXPORT, YEAR).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().profile.name, "Jane Doe");
        }
    }
}
