use super::Language;

/// User preferences persisted between launches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppSettings {
    language: Language,
}

/// Unvalidated settings as read from storage or user input.
#[derive(Clone, Debug, Default)]
pub struct AppSettingsDraft {
    pub language: Option<String>,
}

impl AppSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }

    /// Normalize the draft into settings.
    ///
    /// Missing or unsupported language codes resolve to the default language;
    /// a localization gap is never an error.
    #[must_use]
    pub fn validate(self) -> AppSettings {
        let language = normalize_optional(self.language);
        AppSettings {
            language: Language::resolve(language.as_deref()),
        }
    }
}

impl AppSettings {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub fn from_persisted(language: Option<String>) -> Self {
        AppSettingsDraft { language }.validate()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_ascii_lowercase())
        .filter(|val| !val.is_empty())
}
