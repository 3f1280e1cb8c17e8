// Model exports
pub mod domain;

pub use domain::{
    AnswerSet, Catalog, CatalogItem, ColorType, PreferenceQuery, ProductCategory, Question,
    QuestionKind, QuestionOption, QuizSession, ScoreVector,
};
