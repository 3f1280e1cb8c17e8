// Core algorithm exports
pub mod filters;
pub mod flow;
pub mod matcher;
pub mod scoring;

pub use filters::{matches_dimensions, Dimension, RELAXATION_LEVELS};
pub use flow::{FlowState, InvalidAnswer, QuestionFlow};
pub use matcher::{Matcher, RecommendationResult, DEFAULT_RESULT_CAP};
pub use scoring::{dominant_color_type, score_answers, ColorTypeResult};
