use super::engine::{QuizEngine, QuizState};
use super::progress::QuizSummary;

/// One answer button as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub text: String,
    /// `Some(correct)` for the selected option only; `None` everywhere else.
    pub reveal: Option<bool>,
}

/// Snapshot of everything the quiz card renders, taken after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizView {
    Question {
        question: String,
        options: Vec<OptionView>,
        locked: bool,
        is_last: bool,
        position: usize,
        total: usize,
        progress_percent: u8,
        score: u32,
    },
    Completed(QuizSummary),
}

impl QuizView {
    #[must_use]
    pub fn from_engine(engine: &QuizEngine) -> Self {
        let language = engine.language();
        let Some(record) = engine.current_question() else {
            return Self::Completed(engine.summary());
        };

        let selected = engine.selected_answer();
        let options = record
            .answers()
            .iter()
            .map(|option| {
                let text = option.text(language).to_owned();
                let reveal = (selected == Some(text.as_str())).then_some(option.is_correct());
                OptionView { text, reveal }
            })
            .collect();

        let progress = engine.progress();
        Self::Question {
            question: record.question(language).to_owned(),
            options,
            locked: engine.state() == QuizState::AnswerLocked,
            is_last: engine.is_last(),
            position: progress.position,
            total: progress.total,
            progress_percent: engine.progress_percent(),
            score: engine.score(),
        }
    }
}

impl QuizEngine {
    /// Render snapshot of the current state.
    #[must_use]
    pub fn view(&self) -> QuizView {
        QuizView::from_engine(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::IdentityRandom;
    use quiz_core::model::{AnswerOption, Language, LocalizedText, QuestionBank, QuestionRecord};
    use quiz_core::time::fixed_clock;

    fn text(value: &str) -> LocalizedText {
        LocalizedText::new().with(Language::Sk, value)
    }

    fn engine() -> QuizEngine {
        let record = QuestionRecord::new(
            text("Kto?"),
            vec![
                AnswerOption::new(text("Turing"), true),
                AnswerOption::new(text("Babbage"), false),
            ],
            text("Turing"),
        );
        let bank = QuestionBank::new(vec![record]).unwrap();
        QuizEngine::initialize(&bank, Language::Sk, &mut IdentityRandom, fixed_clock()).unwrap()
    }

    #[test]
    fn nothing_revealed_before_selection() {
        let QuizView::Question {
            options, locked, ..
        } = engine().view()
        else {
            panic!("expected question view");
        };
        assert!(!locked);
        assert!(options.iter().all(|option| option.reveal.is_none()));
    }

    #[test]
    fn only_selected_option_is_revealed() {
        let mut engine = engine();
        engine.select_answer("Babbage").unwrap();
        let QuizView::Question {
            options,
            locked,
            is_last,
            progress_percent,
            ..
        } = engine.view()
        else {
            panic!("expected question view");
        };
        assert!(locked);
        assert!(is_last);
        assert_eq!(progress_percent, 100);
        assert_eq!(options[0].reveal, None);
        assert_eq!(options[1].reveal, Some(false));
    }

    #[test]
    fn completed_view_carries_summary() {
        let mut engine = engine();
        engine.select_answer("Turing").unwrap();
        engine.advance().unwrap();
        assert_eq!(
            engine.view(),
            QuizView::Completed(QuizSummary { score: 1, total: 1 })
        );
    }
}
