use crate::loader::ConfigError;
use crate::models::{AnswerSet, Question};
use std::collections::BTreeSet;
use thiserror::Error;

/// A proposed answer that violates the question's constraints
///
/// Surfaced synchronously so the transport can re-ask; the session's
/// recorded answers are never touched by a failed attempt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidAnswer {
    #[error("question {question_id} requires an answer")]
    EmptyAnswer { question_id: String },

    #[error("question {question_id} accepts a single option, got {got}")]
    MultipleForSingleSelect { question_id: String, got: usize },

    #[error("question {question_id} allows at most {max} selections, got {got}")]
    TooManySelections {
        question_id: String,
        max: usize,
        got: usize,
    },

    #[error("option {option_id} does not belong to question {question_id}")]
    UnknownOption {
        question_id: String,
        option_id: String,
    },
}

/// Where a session currently stands in the questionnaire
#[derive(Debug, Clone, Copy)]
pub enum FlowState<'a> {
    /// The next question to put to the user
    Ask(&'a Question),
    /// Every required question has a recorded answer
    Complete,
}

impl<'a> FlowState<'a> {
    pub fn is_complete(&self) -> bool {
        matches!(self, FlowState::Complete)
    }

    pub fn question(&self) -> Option<&'a Question> {
        match *self {
            FlowState::Ask(question) => Some(question),
            FlowState::Complete => None,
        }
    }
}

/// Ordered questionnaire sequencer
///
/// Holds the validated, order-sorted question list and answers the
/// "what next / is this answer acceptable / record it" queries. It owns
/// no session state; callers thread their `AnswerSet` through.
#[derive(Debug, Clone)]
pub struct QuestionFlow {
    questions: Vec<Question>,
}

impl QuestionFlow {
    /// Validate the definitions and build the sequencer
    ///
    /// Structural problems (duplicate ids, duplicate or gapped orders,
    /// empty option lists) are configuration errors and fail the load.
    pub fn new(mut questions: Vec<Question>) -> Result<Self, ConfigError> {
        if questions.is_empty() {
            return Err(ConfigError::NoQuestions);
        }

        questions.sort_by_key(|question| question.order);

        let mut question_ids = BTreeSet::new();
        for question in &questions {
            if !question_ids.insert(question.id.clone()) {
                return Err(ConfigError::DuplicateQuestionId(question.id.clone()));
            }

            if question.options.is_empty() {
                return Err(ConfigError::EmptyOptions(question.id.clone()));
            }

            let mut option_ids = BTreeSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(ConfigError::DuplicateOptionId {
                        question_id: question.id.clone(),
                        option_id: option.id.clone(),
                    });
                }
            }

            if question.max_selections == Some(0) {
                return Err(ConfigError::InvalidMaxSelections(question.id.clone()));
            }
        }

        // Orders must be total: contiguous ascending from 1.
        for (index, question) in questions.iter().enumerate() {
            let expected = index as u32 + 1;
            if question.order != expected {
                if index > 0 && question.order == questions[index - 1].order {
                    return Err(ConfigError::DuplicateOrder(question.order));
                }
                return Err(ConfigError::GappedOrder {
                    expected,
                    found: question.order,
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_by_id(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn required_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|question| question.required)
            .count()
    }

    /// Whether every required question has a recorded answer
    ///
    /// Optional questions do not hold completion back; skipping one is
    /// done by recording an empty answer.
    pub fn is_complete(&self, answers: &AnswerSet) -> bool {
        self.questions
            .iter()
            .filter(|question| question.required)
            .all(|question| answers.contains(&question.id))
    }

    /// The lowest-order question without a recorded answer, or Complete
    pub fn current_question(&self, answers: &AnswerSet) -> FlowState<'_> {
        if self.is_complete(answers) {
            return FlowState::Complete;
        }

        for question in &self.questions {
            if !answers.contains(&question.id) {
                return FlowState::Ask(question);
            }
        }

        FlowState::Complete
    }

    /// Check a proposed selection against the question's arity and
    /// membership rules
    pub fn validate(&self, question: &Question, selected: &[String]) -> Result<(), InvalidAnswer> {
        if selected.is_empty() {
            if question.required {
                return Err(InvalidAnswer::EmptyAnswer {
                    question_id: question.id.clone(),
                });
            }
            // An explicit empty answer is how optional questions are skipped.
            return Ok(());
        }

        if !question.kind.is_multi() && selected.len() > 1 {
            return Err(InvalidAnswer::MultipleForSingleSelect {
                question_id: question.id.clone(),
                got: selected.len(),
            });
        }

        if question.kind.is_multi() {
            if let Some(max) = question.max_selections {
                if selected.len() > max {
                    return Err(InvalidAnswer::TooManySelections {
                        question_id: question.id.clone(),
                        max,
                        got: selected.len(),
                    });
                }
            }
        }

        for option_id in selected {
            if question.option_by_id(option_id).is_none() {
                return Err(InvalidAnswer::UnknownOption {
                    question_id: question.id.clone(),
                    option_id: option_id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Validate and return a new answer set with the answer recorded
    pub fn record(
        &self,
        answers: &AnswerSet,
        question: &Question,
        selected: Vec<String>,
    ) -> Result<AnswerSet, InvalidAnswer> {
        self.validate(question, &selected)?;
        Ok(answers.with(question.id.clone(), selected))
    }
}
