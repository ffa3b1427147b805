#![forbid(unsafe_code)]

pub mod app_services;
pub mod app_settings_service;
pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use app_settings_service::AppSettingsService;
pub use error::{AppServicesError, AppSettingsServiceError, QuizError};

pub use quiz::{
    AdvanceOutcome, AnswerOutcome, OptionView, QuizEngine, QuizProgress, QuizState, QuizSummary,
    QuizView,
};
