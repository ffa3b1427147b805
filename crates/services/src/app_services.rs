use std::sync::Arc;

use quiz_core::bundle::{self, UiStrings};
use quiz_core::model::{Language, QuestionBank};
use quiz_core::{Clock, RandomSource, SeededRandom, ThreadRandom};
use storage::repository::Storage;

use crate::app_settings_service::AppSettingsService;
use crate::error::{AppServicesError, QuizError};
use crate::quiz::QuizEngine;

/// Assembles app-facing services and resolves the active language.
///
/// The language is read from storage once, here; everything downstream gets
/// it passed explicitly.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    language: Language,
    seed: Option<u64>,
    question_bank: QuestionBank,
    app_settings: Arc<AppSettingsService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization, the language
    /// lookup, or loading the built-in content fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(storage, clock).await
    }

    /// Build services over an existing storage backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the language lookup or the built-in
    /// content fails.
    pub async fn from_storage(storage: Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let app_settings = Arc::new(AppSettingsService::new(Arc::clone(&storage.app_settings)));
        let language = match app_settings.load().await {
            Ok(settings) => settings.language(),
            Err(err) => {
                tracing::warn!(error = %err, "could not read language preference, using default");
                Language::default()
            }
        };
        let question_bank = bundle::question_bank()?;
        tracing::debug!(questions = question_bank.len(), %language, "app services ready");

        Ok(Self {
            clock,
            language,
            seed: None,
            question_bank,
            app_settings,
        })
    }

    /// Use a deterministic shuffle seed for every new session.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Override the stored language for this run.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn with_question_bank(mut self, question_bank: QuestionBank) -> Self {
        self.question_bank = question_bank;
        self
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn question_bank(&self) -> &QuestionBank {
        &self.question_bank
    }

    #[must_use]
    pub fn app_settings(&self) -> Arc<AppSettingsService> {
        Arc::clone(&self.app_settings)
    }

    /// Random source for a new session.
    #[must_use]
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom::new()),
        }
    }

    /// Start a quiz over the built-in bank in the active language.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the bank has no questions.
    pub fn start_quiz(&self, rng: &mut dyn RandomSource) -> Result<QuizEngine, QuizError> {
        QuizEngine::initialize(&self.question_bank, self.language, rng, self.clock)
    }

    /// UI strings for `language`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Bundle` if the embedded bundle is malformed.
    pub fn strings(&self, language: Language) -> Result<UiStrings, AppServicesError> {
        Ok(bundle::strings(language)?)
    }
}
