//! Analyzer Configuration
//!
//! Language selection and the options shared by every analysis call.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::WordStatError;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "WORDSTAT_CONFIG";

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Number of ranked words kept in a report unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// Language whose built-in stop-word list is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Language {
    /// English (default)
    #[default]
    English,
    /// Arabic
    Arabic,
    /// No built-in stop words
    None,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
            Language::None => "none",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Arabic => "arabic",
            Language::None => "none",
        }
    }
}

impl FromStr for Language {
    type Err = WordStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ar" | "arabic" => Ok(Language::Arabic),
            "none" => Ok(Language::None),
            other => Err(WordStatError::InvalidConfiguration {
                field: "language",
                reason: format!("unknown language {other:?}"),
            }),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = WordStatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for a [`TextAnalyzer`](super::TextAnalyzer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAnalyzerConfig")]
pub struct AnalyzerConfig {
    /// Selects the built-in stop-word list.
    pub language: Language,
    /// Reading speed for the reading-time estimate. Must be positive.
    pub words_per_minute: u32,
    /// Drop stop words from frequency tables and similarity sets.
    pub filter_stop_words: bool,
    /// Ranked words kept in a report; `0` keeps all of them.
    pub top_n: usize,
    /// Replaces the built-in list when set.
    pub stop_words_file: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            filter_stop_words: true,
            top_n: DEFAULT_TOP_N,
            stop_words_file: None,
        }
    }
}

/// Config file shape before validation. Numbers are read signed so that
/// out-of-range values surface as `InvalidConfiguration`, not parse errors.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawAnalyzerConfig {
    language: String,
    words_per_minute: i64,
    filter_stop_words: bool,
    top_n: i64,
    stop_words_file: Option<PathBuf>,
}

impl Default for RawAnalyzerConfig {
    fn default() -> Self {
        Self {
            language: Language::default().name().to_string(),
            words_per_minute: i64::from(DEFAULT_WORDS_PER_MINUTE),
            filter_stop_words: true,
            top_n: DEFAULT_TOP_N as i64,
            stop_words_file: None,
        }
    }
}

impl TryFrom<RawAnalyzerConfig> for AnalyzerConfig {
    type Error = WordStatError;

    fn try_from(raw: RawAnalyzerConfig) -> Result<Self, Self::Error> {
        let words_per_minute = u32::try_from(raw.words_per_minute)
            .ok()
            .filter(|wpm| *wpm > 0)
            .ok_or_else(|| WordStatError::InvalidConfiguration {
                field: "words_per_minute",
                reason: format!("{} is not a positive number of words", raw.words_per_minute),
            })?;

        Ok(Self {
            language: raw.language.parse()?,
            words_per_minute,
            filter_stop_words: raw.filter_stop_words,
            // Zero or below means "all".
            top_n: usize::try_from(raw.top_n).unwrap_or(0),
            stop_words_file: raw.stop_words_file,
        })
    }
}

impl AnalyzerConfig {
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    pub fn with_stop_word_filtering(mut self, enabled: bool) -> Self {
        self.filter_stop_words = enabled;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_stop_words_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words_file = Some(path.into());
        self
    }

    /// Reject values that would make an analysis meaningless.
    pub fn validate(&self) -> Result<(), WordStatError> {
        validate_words_per_minute(self.words_per_minute)
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WordStatError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let raw: RawAnalyzerConfig = serde_json::from_str(&content)?;
        let config = Self::try_from(raw)?;
        info!(path = %path.display(), language = %config.language, "loaded analyzer config");
        Ok(config)
    }

    /// Persist the configuration as pretty JSON.
    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), WordStatError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn from_env_or_default() -> Result<Self, WordStatError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_path(path),
            Err(_) => Ok(Self::default()),
        }
    }
}

pub(crate) fn validate_words_per_minute(words_per_minute: u32) -> Result<(), WordStatError> {
    if words_per_minute == 0 {
        return Err(WordStatError::InvalidConfiguration {
            field: "words_per_minute",
            reason: "must be a positive number of words".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_names_and_codes() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("AR".parse::<Language>().unwrap(), Language::Arabic);
        assert_eq!(" none ".parse::<Language>().unwrap(), Language::None);
        assert_eq!(Language::default().code(), "en");
    }

    #[test]
    fn rejects_unknown_language() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(matches!(
            err,
            WordStatError::InvalidConfiguration { field: "language", .. }
        ));
    }

    #[test]
    fn default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.words_per_minute, 200);
        assert!(config.filter_stop_words);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_words_per_minute_is_rejected() {
        let config = AnalyzerConfig::default().with_words_per_minute(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            WordStatError::InvalidConfiguration { field: "words_per_minute", .. }
        ));
    }

    #[test]
    fn config_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordstat.json");
        let config = AnalyzerConfig::default()
            .with_language(Language::Arabic)
            .with_words_per_minute(250)
            .with_top_n(5);
        config.to_path(&path).unwrap();

        let loaded = AnalyzerConfig::from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "language": "none" }"#).unwrap();

        let loaded = AnalyzerConfig::from_path(&path).unwrap();
        assert_eq!(loaded.language, Language::None);
        assert_eq!(loaded.words_per_minute, DEFAULT_WORDS_PER_MINUTE);
    }

    #[test]
    fn invalid_file_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let zero = dir.path().join("zero.json");
        fs::write(&zero, r#"{ "words_per_minute": 0 }"#).unwrap();
        assert!(matches!(
            AnalyzerConfig::from_path(&zero),
            Err(WordStatError::InvalidConfiguration { .. })
        ));

        let negative = dir.path().join("negative.json");
        fs::write(&negative, r#"{ "words_per_minute": -5 }"#).unwrap();
        assert!(matches!(
            AnalyzerConfig::from_path(&negative),
            Err(WordStatError::InvalidConfiguration { field: "words_per_minute", .. })
        ));

        let huge = dir.path().join("huge.json");
        fs::write(&huge, r#"{ "words_per_minute": 5000000000 }"#).unwrap();
        assert!(matches!(
            AnalyzerConfig::from_path(&huge),
            Err(WordStatError::InvalidConfiguration { field: "words_per_minute", .. })
        ));

        let unknown = dir.path().join("unknown.json");
        fs::write(&unknown, r#"{ "language": "klingon" }"#).unwrap();
        assert!(matches!(
            AnalyzerConfig::from_path(&unknown),
            Err(WordStatError::InvalidConfiguration { field: "language", .. })
        ));
    }

    #[test]
    fn file_accepts_language_codes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.json");
        fs::write(&path, r#"{ "language": "ar" }"#).unwrap();
        assert_eq!(AnalyzerConfig::from_path(&path).unwrap().language, Language::Arabic);

        fs::write(&path, r#"{ "language": "EN" }"#).unwrap();
        assert_eq!(AnalyzerConfig::from_path(&path).unwrap().language, Language::English);
    }

    #[test]
    fn negative_top_n_means_all() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top.json");
        fs::write(&path, r#"{ "top_n": -3 }"#).unwrap();
        assert_eq!(AnalyzerConfig::from_path(&path).unwrap().top_n, 0);
    }

    #[test]
    fn direct_deserialization_validates() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{ "language": "en", "words_per_minute": 150 }"#).unwrap();
        assert_eq!(config.language, Language::English);
        assert_eq!(config.words_per_minute, 150);
        assert!(serde_json::from_str::<AnalyzerConfig>(r#"{ "words_per_minute": 0 }"#).is_err());
    }
}
