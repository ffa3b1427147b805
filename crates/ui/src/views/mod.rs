mod language_switcher;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use language_switcher::LanguageSwitcher;
pub use quiz::QuizCard;
pub use state::ViewError;
