//! Locale tables for user-facing text
//!
//! A locale is a flat key-to-string JSON table. The English table is
//! compiled into the binary; other languages load from the locale directory
//! at runtime and fall back key-by-key to English, then to the key itself.

use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// Embedded English table, always available
const BUILTIN_EN: &str = include_str!("../locales/en.json");

/// Languages the backend can answer in (code, display name)
pub const SUPPORTED_LANGUAGES: [(&str, &str); 5] = [
    ("en", "English"),
    ("hi", "Hindi"),
    ("mr", "Marathi"),
    ("ta", "Tamil"),
    ("bn", "Bengali"),
];

/// Display name for a language code, defaulting to English
pub fn language_name(code: &str) -> &'static str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or("English")
}

/// True if `code` is a language the backend supports
pub fn is_supported_language(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Translation table for one active language
#[derive(Debug, Clone)]
pub struct Locale {
    lang: String,
    table: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Locale {
    /// Built-in English locale
    pub fn builtin() -> Self {
        let fallback = parse_table(BUILTIN_EN).expect("embedded en.json must parse");
        Self {
            lang: "en".to_string(),
            table: HashMap::new(),
            fallback,
        }
    }

    /// Load a locale table from `<dir>/<lang>.json`, falling back to the
    /// built-in English table when the file is missing
    pub fn load(lang: &str, dir: Option<&Path>) -> Result<Self> {
        let mut locale = Self::builtin();
        locale.lang = lang.to_string();

        if lang == "en" {
            return Ok(locale);
        }

        let Some(dir) = dir else {
            tracing::debug!(lang, "No locale directory; using English labels");
            return Ok(locale);
        };

        let path = dir.join(format!("{}.json", lang));
        if !path.exists() {
            tracing::debug!(lang, path = %path.display(), "Locale file not found; using English labels");
            return Ok(locale);
        }

        let content = std::fs::read_to_string(&path)?;
        locale.table = parse_table(&content)
            .map_err(|e| Error::Locale(format!("{}: {}", path.display(), e)))?;

        Ok(locale)
    }

    /// Active language code
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Translate a key: active table, then English, then the key itself
    pub fn tr<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(value) = self.table.get(key) {
            return value;
        }
        if let Some(value) = self.fallback.get(key) {
            return value;
        }
        key
    }
}

fn parse_table(json: &str) -> std::result::Result<HashMap<String, String>, serde_json::Error> {
    serde_json::from_str(json)
}
