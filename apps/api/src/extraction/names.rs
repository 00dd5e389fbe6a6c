//! Name-entity and lexicon collaborators.
//!
//! Both are built once at startup and shared read-only through `Arc`, so
//! every implementation must be `Send + Sync` and free of interior mutation.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("name recognizer unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read word list '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("word list '{0}' contains no words")]
    Empty(String),
}

/// Detects human-name spans within a single line of text.
pub trait NameEntityRecognizer: Send + Sync {
    fn detect_person_names(&self, line: &str) -> Result<Vec<String>, RecognizerError>;
}

/// Case-insensitive dictionary membership.
pub trait Lexicon: Send + Sync {
    fn contains(&self, word: &str) -> bool;
}

/// A newline-separated word list held in memory.
#[derive(Debug, Clone, Default)]
pub struct WordListLexicon {
    words: HashSet<String>,
}

impl WordListLexicon {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: shown.clone(),
            source,
        })?;

        let lexicon = Self::from_words(contents.lines());
        if lexicon.is_empty() {
            return Err(LexiconError::Empty(shown));
        }

        info!("Loaded {} lexicon words from {}", lexicon.len(), shown);
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for WordListLexicon {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_lowercase())
    }
}

/// Words that show up capitalized on profile exports but never as part of a
/// person's name: section labels, job-title words, places, proficiencies.
const NON_NAME_WORDS: &[&str] = &[
    // section labels
    "summary", "experience", "education", "skills", "top", "languages", "honors", "awards",
    "contact", "certifications", "publications", "projects", "patents", "volunteer",
    // titles and seniority
    "engineer", "engineering", "senior", "junior", "lead", "manager", "director", "developer",
    "software", "data", "scientist", "analyst", "consultant", "founder", "co-founder",
    "president", "vice", "head", "chief", "officer", "intern", "product", "designer",
    "architect", "specialist", "associate", "principal", "staff", "student", "professor",
    "researcher", "partner", "owner", "ceo", "cto", "cfo", "coo", "vp", "executive",
    "assistant", "coordinator", "administrator", "technician", "advisor", "member",
    // domains and skills
    "machine", "learning", "management", "development", "design", "marketing", "sales",
    "strategy", "business", "cloud", "computing", "systems", "science", "web", "mobile",
    "security", "operations", "research", "finance", "analytics", "infrastructure",
    "leadership", "communication", "python", "java", "rust", "javascript", "typescript",
    "apache", "spark", "kafka", "spring", "boot", "amazon", "google", "microsoft", "azure",
    "react", "node", "docker", "kubernetes", "linux", "agile", "scrum", "excel", "office",
    "public", "speaking", "customer", "service", "relations", "building", "deep", "neural",
    "networks", "artificial", "intelligence", "natural", "language", "processing",
    "computer", "vision", "big", "user", "interface", "stack", "front", "end", "back",
    "ruby", "rails", "swift", "kotlin", "power", "financial", "modeling", "accounting",
    "consulting", "negotiation", "social", "media", "content", "digital", "brand",
    "venture", "capital", "investment", "banking", "private", "equity", "real", "estate",
    // organizations and places
    "university", "college", "school", "institute", "bachelor", "master", "degree", "inc",
    "llc", "ltd", "corp", "company", "group", "team", "united", "states", "kingdom", "new",
    "york", "san", "francisco", "area", "remote", "bay", "greater",
    // language proficiency lines
    "english", "spanish", "french", "german", "native", "professional", "working",
    "proficiency", "limited", "full", "elementary", "bilingual",
    // misc
    "email", "linkedin", "present", "and", "of", "at", "for", "the", "in",
];

/// Rule-based person-name detector for single-line profile headers.
///
/// A line is reported as one name when it is 2–4 capitalized alphabetic
/// tokens, none of which is resume vocabulary. With a lexicon attached, a
/// line made entirely of dictionary words is rejected as well.
#[derive(Clone, Default)]
pub struct HeuristicNameRecognizer {
    lexicon: Option<Arc<dyn Lexicon>>,
}

impl HeuristicNameRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Arc<dyn Lexicon>) -> Self {
        Self {
            lexicon: Some(lexicon),
        }
    }

    fn looks_like_name(&self, line: &str) -> bool {
        if line
            .chars()
            .any(|c| c.is_ascii_digit() || matches!(c, '@' | '/' | '|' | ',' | ':' | '(' | ')'))
        {
            return false;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if !(2..=4).contains(&tokens.len()) {
            return false;
        }
        if !tokens.iter().all(|t| is_name_token(t)) {
            return false;
        }
        // "AWS Lambda", "SQL Server": acronyms mixed with words are products.
        let shouting = tokens.iter().filter(|t| is_all_caps_word(t)).count();
        if shouting > 0 && shouting < tokens.len() {
            return false;
        }

        let lowered: Vec<String> = tokens
            .iter()
            .map(|t| t.trim_end_matches('.').to_lowercase())
            .collect();
        if lowered.iter().any(|t| NON_NAME_WORDS.contains(&t.as_str())) {
            return false;
        }

        if let Some(lexicon) = &self.lexicon {
            // Initials never count as dictionary words.
            let words: Vec<&String> = lowered.iter().filter(|t| t.chars().count() > 1).collect();
            if !words.is_empty() && words.iter().all(|w| lexicon.contains(w)) {
                return false;
            }
        }

        true
    }
}

impl NameEntityRecognizer for HeuristicNameRecognizer {
    fn detect_person_names(&self, line: &str) -> Result<Vec<String>, RecognizerError> {
        let line = line.trim();
        if self.looks_like_name(line) {
            Ok(vec![line.split_whitespace().collect::<Vec<_>>().join(" ")])
        } else {
            Ok(vec![])
        }
    }
}

/// `J.`, `Jane`, `Mary-Ann`, `O'Neil`, `McDonald`. Rejects camel-cased
/// product names such as `JavaScript` or `GitHub`.
fn is_name_token(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }

    let rest: Vec<char> = chars.collect();
    if rest == ['.'] {
        return true;
    }
    if rest.is_empty()
        || !rest
            .iter()
            .all(|c| c.is_alphabetic() || *c == '-' || *c == '\'')
    {
        return false;
    }

    let camel_cased = rest
        .windows(2)
        .any(|w| w[0].is_lowercase() && w[1].is_uppercase());
    !camel_cased || token.starts_with("Mc") || token.starts_with("Mac")
}

fn is_all_caps_word(token: &str) -> bool {
    let letters: Vec<char> = token.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 1 && letters.iter().all(|c| c.is_uppercase())
}
