//! BeautyMatch Algo - core engine for the BeautyMatch beauty assistant
//!
//! This library provides the pure matching and classification logic used
//! by the BeautyMatch assistant: a graduated-relaxation attribute matcher
//! over a product catalog, a weighted color-type classifier over survey
//! answers, and the question-flow sequencer that drives both surveys.
//! Transport, storage, and rendering live in external collaborators.

pub mod config;
pub mod core;
pub mod loader;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    dominant_color_type, score_answers, ColorTypeResult, FlowState, InvalidAnswer, Matcher,
    QuestionFlow, RecommendationResult, DEFAULT_RESULT_CAP,
};
pub use crate::loader::{load_catalog, load_questionnaire, parse_questionnaire, ConfigError};
pub use crate::models::{
    AnswerSet, Catalog, CatalogItem, ColorType, PreferenceQuery, ProductCategory, Question,
    QuestionKind, QuestionOption, QuizSession, ScoreVector,
};
