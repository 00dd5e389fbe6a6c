// Resume information extraction.
// Pure line-oriented parsing lives in the collector modules and is driven by
// `extractor`; `pdf` and `handlers` are the only parts that touch uploads.

pub mod assembler;
pub mod contact;
pub mod education;
pub mod experience;
pub mod extractor;
pub mod handlers;
pub mod lines;
pub mod models;
pub mod names;
pub mod pdf;
pub mod sections;
pub mod skills;
