mod quiz_vm;

use quiz_core::bundle::{self, UiStrings};
use quiz_core::model::Language;

pub use quiz_vm::{QuizIntent, QuizScreen, QuizVm};

pub(crate) fn strings_for(language: Language) -> Option<UiStrings> {
    bundle::strings(language).ok()
}
