use crate::core::flow::QuestionFlow;
use crate::models::{AnswerSet, ColorType, ScoreVector};
use std::fmt;
use tracing::debug;

/// Outcome of the color-type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTypeResult {
    /// One color type holds the strict maximum
    Dominant(ColorType),
    /// Two or more color types share the maximum, including all-zero
    Mixed,
}

impl fmt::Display for ColorTypeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorTypeResult::Dominant(color_type) => color_type.fmt(f),
            ColorTypeResult::Mixed => f.write_str("mixed"),
        }
    }
}

/// Accumulate per-color-type points from the selected options
///
/// Scoring is best-effort over possibly stale sessions: answers that
/// reference a question or option no longer in the questionnaire are
/// skipped, never failed. Options without declared points contribute
/// nothing.
pub fn score_answers(answers: &AnswerSet, flow: &QuestionFlow) -> ScoreVector {
    let mut scores = ScoreVector::new();

    for (question_id, selected) in answers.iter() {
        let question = match flow.question_by_id(question_id) {
            Some(question) => question,
            None => {
                debug!("skipping answer for unknown question {}", question_id);
                continue;
            }
        };

        for option_id in selected {
            let option = match question.option_by_id(option_id) {
                Some(option) => option,
                None => {
                    debug!(
                        "skipping unknown option {} of question {}",
                        option_id, question_id
                    );
                    continue;
                }
            };

            if let Some(points) = &option.points {
                for (&color_type, &value) in points {
                    scores.add(color_type, value);
                }
            }
        }
    }

    scores
}

/// Resolve the dominant color type of a score vector
///
/// Any shared maximum yields Mixed rather than an arbitrary pick.
pub fn dominant_color_type(scores: &ScoreVector) -> ColorTypeResult {
    match scores.leaders().as_slice() {
        [single] => ColorTypeResult::Dominant(*single),
        _ => ColorTypeResult::Mixed,
    }
}
