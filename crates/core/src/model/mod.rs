mod app_settings;
mod language;
mod question;
mod text;

pub use app_settings::{AppSettings, AppSettingsDraft};
pub use language::{Language, UnknownLanguage};
pub use question::{AnswerOption, QuestionBank, QuestionBankError, QuestionRecord};
pub use text::LocalizedText;
