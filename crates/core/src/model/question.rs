use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use super::{Language, LocalizedText};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("question bank is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question {index} has no answers")]
    NoAnswers { index: usize },
    #[error("question {index} has no question text")]
    MissingText { index: usize },
}

/// One selectable answer of a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    text: LocalizedText,
    correct: bool,
}

impl AnswerOption {
    #[must_use]
    pub fn new(text: LocalizedText, correct: bool) -> Self {
        Self { text, correct }
    }

    #[must_use]
    pub fn text(&self, language: Language) -> &str {
        self.text.get(language)
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }
}

/// A multiple-choice question with its answers in every supported language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    question: LocalizedText,
    answers: Vec<AnswerOption>,
    correct_answer: LocalizedText,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(
        question: LocalizedText,
        answers: Vec<AnswerOption>,
        correct_answer: LocalizedText,
    ) -> Self {
        Self {
            question,
            answers,
            correct_answer,
        }
    }

    #[must_use]
    pub fn question(&self, language: Language) -> &str {
        self.question.get(language)
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerOption] {
        &self.answers
    }

    #[must_use]
    pub fn correct_answer(&self, language: Language) -> &str {
        self.correct_answer.get(language)
    }

    /// Grades by display text in `language`.
    #[must_use]
    pub fn is_correct(&self, language: Language, answer_text: &str) -> bool {
        answer_text == self.correct_answer(language)
    }

    /// The option whose display text matches `answer_text`, if any.
    #[must_use]
    pub fn option_by_text(&self, language: Language, answer_text: &str) -> Option<&AnswerOption> {
        self.answers
            .iter()
            .find(|option| option.text(language) == answer_text)
    }
}

/// Read-only, shareable collection of quiz questions.
///
/// Cloning is cheap; every session works on its own shuffled copy of the
/// records, never on the bank itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionBank {
    records: Arc<[QuestionRecord]>,
}

impl QuestionBank {
    /// Build a bank from records, rejecting records a session could not render.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError` if a record has no answers or no question text.
    pub fn new(records: Vec<QuestionRecord>) -> Result<Self, QuestionBankError> {
        for (index, record) in records.iter().enumerate() {
            if record.answers.is_empty() {
                return Err(QuestionBankError::NoAnswers { index });
            }
            if record.question.is_empty() {
                return Err(QuestionBankError::MissingText { index });
            }
        }
        Ok(Self {
            records: records.into(),
        })
    }

    /// Parse the static JSON question format.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Parse` for malformed JSON and the
    /// validation errors of [`QuestionBank::new`].
    pub fn from_json(json: &str) -> Result<Self, QuestionBankError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    #[must_use]
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Indices of questions where two options share display text in `language`.
    ///
    /// Grading goes by display text, so such questions cannot be graded reliably.
    #[must_use]
    pub fn duplicate_answer_texts(&self, language: Language) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                let mut seen = HashSet::new();
                record
                    .answers
                    .iter()
                    .any(|option| !seen.insert(option.text(language)))
            })
            .map(|(index, _)| index)
            .collect()
    }
}
