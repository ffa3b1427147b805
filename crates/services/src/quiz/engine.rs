use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{Language, QuestionBank, QuestionRecord};
use quiz_core::{Clock, RandomSource, shuffle};

use super::progress::{QuizProgress, QuizSummary};
use crate::error::QuizError;

/// Where the current session sits in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    /// Waiting for an answer to the current question.
    Answering,
    /// An answer is chosen; further selections are ignored until `advance`.
    AnswerLocked,
    /// The last question was passed. Terminal until `restart`.
    Completed,
}

/// Outcome of selecting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub score: u32,
}

/// Outcome of advancing past a locked answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next { index: usize },
    Completed(QuizSummary),
}

/// One run through a shuffled copy of the question bank.
///
/// Never partially reset: a restart builds a new session and swaps it in.
struct QuizSession {
    questions: Vec<QuestionRecord>,
    current: usize,
    selected: Option<String>,
    score: u32,
    language: Language,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    fn new(
        bank: &QuestionBank,
        language: Language,
        rng: &mut dyn RandomSource,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        if bank.is_empty() {
            return Err(QuizError::Empty);
        }

        let mut questions = bank.records().to_vec();
        shuffle(&mut questions, rng);

        Ok(Self {
            questions,
            current: 0,
            selected: None,
            score: 0,
            language,
            started_at,
            completed_at: None,
        })
    }
}

/// State machine for a multiple-choice quiz.
///
/// Holds exactly one session, always in a renderable state. Transitions
/// that violate a precondition return a `QuizError` and leave the session
/// untouched.
pub struct QuizEngine {
    session: QuizSession,
    clock: Clock,
}

impl QuizEngine {
    /// Start a session over a shuffled copy of `bank`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the bank has no questions.
    pub fn initialize(
        bank: &QuestionBank,
        language: Language,
        rng: &mut dyn RandomSource,
        clock: Clock,
    ) -> Result<Self, QuizError> {
        let session = QuizSession::new(bank, language, rng, clock.now())?;
        warn_on_ambiguous_answers(bank, language);
        tracing::info!(
            questions = session.questions.len(),
            %language,
            "quiz session started"
        );
        Ok(Self { session, clock })
    }

    /// Replace the session with a freshly shuffled one in the same language.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the bank has no questions; the previous
    /// session is kept in that case.
    pub fn restart(
        &mut self,
        bank: &QuestionBank,
        rng: &mut dyn RandomSource,
    ) -> Result<(), QuizError> {
        self.restart_in(bank, self.session.language, rng)
    }

    /// Restart the quiz in another language.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the bank has no questions.
    pub fn switch_language(
        &mut self,
        bank: &QuestionBank,
        language: Language,
        rng: &mut dyn RandomSource,
    ) -> Result<(), QuizError> {
        warn_on_ambiguous_answers(bank, language);
        self.restart_in(bank, language, rng)
    }

    fn restart_in(
        &mut self,
        bank: &QuestionBank,
        language: Language,
        rng: &mut dyn RandomSource,
    ) -> Result<(), QuizError> {
        let session = QuizSession::new(bank, language, rng, self.clock.now())?;
        tracing::info!(
            previous_score = self.session.score,
            questions = session.questions.len(),
            %language,
            "quiz restarted"
        );
        self.session = session;
        Ok(())
    }

    /// Lock in an answer for the current question and grade it.
    ///
    /// Grading compares `answer_text` with the correct answer's display text
    /// in the active language.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AnswerLocked` if an answer is already selected and
    /// `QuizError::Completed` once the quiz is over.
    pub fn select_answer(&mut self, answer_text: &str) -> Result<AnswerOutcome, QuizError> {
        match self.state() {
            QuizState::Completed => return Err(QuizError::Completed),
            QuizState::AnswerLocked => return Err(QuizError::AnswerLocked),
            QuizState::Answering => {}
        }

        let session = &mut self.session;
        let correct = session.questions[session.current].is_correct(session.language, answer_text);
        if correct {
            session.score += 1;
        }
        session.selected = Some(answer_text.to_owned());

        tracing::debug!(
            index = session.current,
            correct,
            score = session.score,
            "answer selected"
        );

        Ok(AnswerOutcome {
            correct,
            score: session.score,
        })
    }

    /// Move past the locked answer: next question, or completion after the last.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoAnswerSelected` if nothing is selected yet and
    /// `QuizError::Completed` once the quiz is over.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, QuizError> {
        match self.state() {
            QuizState::Completed => return Err(QuizError::Completed),
            QuizState::Answering => return Err(QuizError::NoAnswerSelected),
            QuizState::AnswerLocked => {}
        }

        if self.is_last() {
            let now = self.clock.now();
            self.session.completed_at = Some(now);
            let summary = self.summary();
            let elapsed_secs = (now - self.started_at()).num_seconds();
            tracing::info!(
                score = summary.score,
                total = summary.total,
                elapsed_secs,
                "quiz completed"
            );
            return Ok(AdvanceOutcome::Completed(summary));
        }

        self.session.current += 1;
        self.session.selected = None;
        Ok(AdvanceOutcome::Next {
            index: self.session.current,
        })
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        if self.session.completed_at.is_some() {
            QuizState::Completed
        } else if self.session.selected.is_some() {
            QuizState::AnswerLocked
        } else {
            QuizState::Answering
        }
    }

    /// The question being asked, or `None` once the quiz is completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        if self.is_complete() {
            return None;
        }
        self.session.questions.get(self.session.current)
    }

    /// Questions in session order.
    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.session.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.session.questions.len()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.session.current + 1 == self.session.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.session.selected.as_deref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.completed_at.is_some()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.session.language
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.session.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.session.completed_at
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: self.session.current + 1,
            total: self.total(),
            score: self.session.score,
            is_complete: self.is_complete(),
        }
    }

    /// Progress as a whole percentage for the progress bar.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.progress().percent()
    }

    #[must_use]
    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            score: self.session.score,
            total: self.total(),
        }
    }
}

impl fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("questions_len", &self.session.questions.len())
            .field("current", &self.session.current)
            .field("selected", &self.session.selected)
            .field("score", &self.session.score)
            .field("language", &self.session.language)
            .field("completed_at", &self.session.completed_at)
            .finish_non_exhaustive()
    }
}

fn warn_on_ambiguous_answers(bank: &QuestionBank, language: Language) {
    let ambiguous = bank.duplicate_answer_texts(language);
    if !ambiguous.is_empty() {
        tracing::warn!(
            ?ambiguous,
            %language,
            "questions have answers with identical text; grading is ambiguous"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::IdentityRandom;
    use quiz_core::model::{AnswerOption, LocalizedText};
    use quiz_core::time::{fixed_clock, fixed_now};

    fn text(value: &str) -> LocalizedText {
        LocalizedText::new()
            .with(Language::Sk, value)
            .with(Language::Pl, format!("{value}-pl"))
    }

    fn question(prompt: &str, correct: &str, wrong: &str) -> QuestionRecord {
        QuestionRecord::new(
            text(prompt),
            vec![
                AnswerOption::new(text(correct), true),
                AnswerOption::new(text(wrong), false),
            ],
            text(correct),
        )
    }

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![question("Q1", "A", "X"), question("Q2", "B", "X")]).unwrap()
    }

    fn engine() -> QuizEngine {
        QuizEngine::initialize(&bank(), Language::Sk, &mut IdentityRandom, fixed_clock()).unwrap()
    }

    #[test]
    fn initialize_starts_answering_at_first_question() {
        let engine = engine();
        assert_eq!(engine.state(), QuizState::Answering);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.selected_answer(), None);
        assert!(!engine.is_complete());
        assert_eq!(engine.current_question().unwrap().question(Language::Sk), "Q1");
    }

    #[test]
    fn initialize_rejects_empty_bank() {
        let err = QuizEngine::initialize(
            &QuestionBank::default(),
            Language::Sk,
            &mut IdentityRandom,
            fixed_clock(),
        )
        .unwrap_err();
        assert_eq!(err, QuizError::Empty);
    }

    #[test]
    fn second_selection_is_rejected_without_change() {
        let mut engine = engine();
        engine.select_answer("X").unwrap();
        let err = engine.select_answer("A").unwrap_err();
        assert_eq!(err, QuizError::AnswerLocked);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.selected_answer(), Some("X"));
    }

    #[test]
    fn advance_requires_selection() {
        let mut engine = engine();
        assert_eq!(engine.advance().unwrap_err(), QuizError::NoAnswerSelected);
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn grades_in_active_language() {
        let mut engine =
            QuizEngine::initialize(&bank(), Language::Pl, &mut IdentityRandom, fixed_clock())
                .unwrap();
        // Slovak text of the correct answer does not count in a Polish session.
        assert!(!engine.select_answer("A").unwrap().correct);
        engine.advance().unwrap();
        assert!(engine.select_answer("B-pl").unwrap().correct);
        assert_eq!(engine.score(), 1);
    }

    #[test]
    fn completed_is_terminal() {
        let mut engine = engine();
        engine.select_answer("A").unwrap();
        engine.advance().unwrap();
        engine.select_answer("B").unwrap();
        let outcome = engine.advance().unwrap();
        assert_eq!(
            outcome,
            AdvanceOutcome::Completed(QuizSummary { score: 2, total: 2 })
        );
        assert_eq!(engine.state(), QuizState::Completed);
        assert!(engine.current_question().is_none());
        assert_eq!(engine.select_answer("B").unwrap_err(), QuizError::Completed);
        assert_eq!(engine.advance().unwrap_err(), QuizError::Completed);
        assert_eq!(engine.score(), 2);
        assert_eq!(engine.started_at(), fixed_now());
        assert_eq!(engine.completed_at(), Some(fixed_now()));
    }

    #[test]
    fn restart_with_empty_bank_keeps_session() {
        let mut engine = engine();
        engine.select_answer("A").unwrap();
        let err = engine
            .restart(&QuestionBank::default(), &mut IdentityRandom)
            .unwrap_err();
        assert_eq!(err, QuizError::Empty);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.selected_answer(), Some("A"));
    }

    #[test]
    fn switch_language_restarts_session() {
        let mut engine = engine();
        engine.select_answer("A").unwrap();
        engine
            .switch_language(&bank(), Language::Pl, &mut IdentityRandom)
            .unwrap();
        assert_eq!(engine.language(), Language::Pl);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.state(), QuizState::Answering);
        assert_eq!(
            engine.current_question().unwrap().question(Language::Pl),
            "Q1-pl"
        );
    }

    #[test]
    fn progress_reports_position_over_total() {
        let mut engine = engine();
        assert_eq!(engine.progress_percent(), 50);
        engine.select_answer("A").unwrap();
        engine.advance().unwrap();
        assert_eq!(engine.progress_percent(), 100);
        assert_eq!(engine.progress().position, 2);
    }
}
