//! Compiled-in quiz content.
//!
//! Every supported [`Language`] maps to exactly one string bundle through a
//! `match`, so adding a language without its data fails to compile.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Language, QuestionBank, QuestionBankError};

const QUESTIONS_JSON: &str = include_str!("../data/questions.json");
const STRINGS_SK_JSON: &str = include_str!("../data/locales/sk.json");
const STRINGS_PL_JSON: &str = include_str!("../data/locales/pl.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BundleError {
    #[error(transparent)]
    Questions(#[from] QuestionBankError),
    #[error("string bundle for {language} is invalid: {source}")]
    Strings {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
}

/// Localized labels of the quiz card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiStrings {
    pub quiz_title: String,
    pub quiz_end: String,
    pub score: String,
    pub out_of: String,
    pub start_again: String,
    pub show_results: String,
    pub next_question: String,
    pub empty: String,
}

/// The built-in question bank.
///
/// # Errors
///
/// Returns `BundleError::Questions` if the embedded JSON is malformed.
pub fn question_bank() -> Result<QuestionBank, BundleError> {
    Ok(QuestionBank::from_json(QUESTIONS_JSON)?)
}

/// UI strings for `language`.
///
/// # Errors
///
/// Returns `BundleError::Strings` if the embedded bundle is malformed.
pub fn strings(language: Language) -> Result<UiStrings, BundleError> {
    let raw = match language {
        Language::Sk => STRINGS_SK_JSON,
        Language::Pl => STRINGS_PL_JSON,
    };
    serde_json::from_str(raw).map_err(|source| BundleError::Strings { language, source })
}
