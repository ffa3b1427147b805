use quiz_core::RandomSource;
use quiz_core::bundle::UiStrings;
use quiz_core::model::{Language, QuestionBank};
use services::{AppServices, QuizEngine, QuizError, QuizView};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Advance,
    Restart,
    SwitchLanguage(Language),
}

/// What the quiz card shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    /// The bank had no questions; nothing to ask.
    Empty,
    Active(QuizView),
}

/// Owns the engine and the inputs needed to rebuild it.
pub struct QuizVm {
    engine: Option<QuizEngine>,
    bank: QuestionBank,
    language: Language,
    strings: UiStrings,
    rng: Box<dyn RandomSource>,
}

impl QuizVm {
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the string bundle cannot be loaded.
    pub fn start(services: &AppServices) -> Result<Self, ViewError> {
        let language = services.language();
        let strings = services.strings(language).map_err(|_| ViewError::Unknown)?;
        let mut rng = services.random_source();
        let engine = match services.start_quiz(rng.as_mut()) {
            Ok(engine) => Some(engine),
            Err(QuizError::Empty) => None,
            Err(_) => return Err(ViewError::Unknown),
        };

        Ok(Self {
            engine,
            bank: services.question_bank().clone(),
            language,
            strings,
            rng,
        })
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn strings(&self) -> &UiStrings {
        &self.strings
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        match &self.engine {
            Some(engine) => QuizScreen::Active(engine.view()),
            None => QuizScreen::Empty,
        }
    }

    /// Apply a user intent.
    ///
    /// Intents that do not fit the current state (a second click on an
    /// answer, "next" before answering) are ignored.
    pub fn apply(&mut self, intent: QuizIntent) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        let result = match intent {
            QuizIntent::Select(text) => engine.select_answer(&text).map(|_| ()),
            QuizIntent::Advance => engine.advance().map(|_| ()),
            QuizIntent::Restart => engine.restart(&self.bank, self.rng.as_mut()),
            QuizIntent::SwitchLanguage(language) => {
                match crate::vm::strings_for(language) {
                    Some(strings) => self.strings = strings,
                    None => tracing::warn!(%language, "missing strings, keeping current labels"),
                }
                self.language = language;
                engine.switch_language(&self.bank, language, self.rng.as_mut())
            }
        };

        if let Err(err) = result {
            tracing::debug!(error = %err, "quiz intent ignored");
        }
    }
}
