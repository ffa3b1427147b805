use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Language;

type RawText = BTreeMap<String, String>;

/// Display text keyed by language.
///
/// Codes outside the supported set are dropped while parsing, so a record
/// authored with extra translations still loads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawText", into = "RawText")]
pub struct LocalizedText(BTreeMap<Language, String>);

impl LocalizedText {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        self.0.insert(language, text.into());
        self
    }

    /// Text for `language`, falling back to the default language.
    ///
    /// Returns an empty string when neither translation exists.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        self.0
            .get(&language)
            .or_else(|| self.0.get(&Language::default()))
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn has(&self, language: Language) -> bool {
        self.0.contains_key(&language)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|text| text.trim().is_empty())
    }
}

impl From<RawText> for LocalizedText {
    fn from(raw: RawText) -> Self {
        Self(
            raw.into_iter()
                .filter_map(|(code, text)| Language::from_code(&code).map(|lang| (lang, text)))
                .collect(),
        )
    }
}

impl From<LocalizedText> for RawText {
    fn from(text: LocalizedText) -> Self {
        text.0
            .into_iter()
            .map(|(lang, text)| (lang.code().to_string(), text))
            .collect()
    }
}
