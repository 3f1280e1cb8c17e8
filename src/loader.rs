use crate::core::flow::QuestionFlow;
use crate::models::{Catalog, CatalogItem, ProductCategory};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that make a definition set unusable
///
/// All of these are fatal to the load step; nothing is defaulted
/// silently. Anything depending on the definitions must not start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("questionnaire has no questions")]
    NoQuestions,

    #[error("duplicate question id {0}")]
    DuplicateQuestionId(String),

    #[error("duplicate question order {0}")]
    DuplicateOrder(u32),

    #[error("question orders must be contiguous: expected {expected}, found {found}")]
    GappedOrder { expected: u32, found: u32 },

    #[error("question {0} has no options")]
    EmptyOptions(String),

    #[error("duplicate option id {option_id} in question {question_id}")]
    DuplicateOptionId {
        question_id: String,
        option_id: String,
    },

    #[error("question {0} has max_selections of 0")]
    InvalidMaxSelections(String),
}

#[derive(Debug, Deserialize)]
struct QuestionnaireFile {
    questionnaire: QuestionnaireSection,
}

#[derive(Debug, Deserialize)]
struct QuestionnaireSection {
    questions: Vec<crate::models::Question>,
}

/// Parse and validate a questionnaire document
///
/// The document shape is `{"questionnaire": {"questions": [...]}}`.
pub fn parse_questionnaire(json: &str) -> Result<QuestionFlow, ConfigError> {
    let file: QuestionnaireFile = serde_json::from_str(json)?;
    QuestionFlow::new(file.questionnaire.questions)
}

/// Load and validate the questionnaire from a JSON file
pub fn load_questionnaire<P: AsRef<Path>>(path: P) -> Result<QuestionFlow, ConfigError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let flow = parse_questionnaire(&raw)?;

    info!(
        "loaded {} question(s) ({} required) from {}",
        flow.question_count(),
        flow.required_count(),
        path.as_ref().display()
    );

    Ok(flow)
}

/// Parse one category's item list
pub fn parse_catalog_items(json: &str) -> Result<Vec<CatalogItem>, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Load the catalog from a directory of per-category JSON files
///
/// Each category is read from `<category>.json`. A missing file means
/// the category simply has no stock and is skipped with a warning; a
/// present but unreadable or malformed file fails the load.
pub fn load_catalog<P: AsRef<Path>>(dir: P) -> Result<Catalog, ConfigError> {
    let mut catalog = Catalog::new();

    for category in ProductCategory::ALL {
        let path = dir.as_ref().join(format!("{}.json", category));
        if !path.exists() {
            warn!("catalog file {} not found, skipping", path.display());
            continue;
        }

        let raw = fs::read_to_string(&path)?;
        let items = parse_catalog_items(&raw)?;

        info!(
            "loaded {} {} item(s) from {}",
            items.len(),
            category,
            path.display()
        );
        catalog.add_items(category, items);
    }

    Ok(catalog)
}
