mod engine;
mod progress;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use engine::{AdvanceOutcome, AnswerOutcome, QuizEngine, QuizState};
pub use progress::{QuizProgress, QuizSummary};
pub use view::{OptionView, QuizView};
