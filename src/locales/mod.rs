//! Localization module for searx-pdbe
//!
//! Holds the translated user-facing strings engines put into results.

use std::collections::HashMap;

/// Supported languages
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("de", "Deutsch"),
    ("fr", "Français"),
];

/// Language used when a translation is missing
pub const FALLBACK_LANGUAGE: &str = "en";

/// Extract the base language code (e.g., "de" from "de-CH")
pub fn base_language(lang: &str) -> &str {
    lang.split('-').next().unwrap_or(lang)
}

/// Check if a language has translations
pub fn is_supported(lang: &str) -> bool {
    let base = base_language(lang);
    SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == base)
}

/// Translation store
pub struct Translations {
    translations: HashMap<String, HashMap<String, String>>,
}

impl Translations {
    pub fn new() -> Self {
        let mut translations = HashMap::new();

        // English (default)
        let mut en = HashMap::new();
        en.insert(
            "pdbe_obsolete_title".to_string(),
            "{title}&nbsp;(OBSOLETE)".to_string(),
        );
        en.insert(
            "pdbe_superseded_by".to_string(),
            "This entry has been superseded by".to_string(),
        );
        translations.insert("en".to_string(), en);

        // German
        let mut de = HashMap::new();
        de.insert(
            "pdbe_obsolete_title".to_string(),
            "{title}&nbsp;(VERALTET)".to_string(),
        );
        de.insert(
            "pdbe_superseded_by".to_string(),
            "Dieser Eintrag wurde ersetzt durch".to_string(),
        );
        translations.insert("de".to_string(), de);

        // French
        let mut fr = HashMap::new();
        fr.insert(
            "pdbe_obsolete_title".to_string(),
            "{title}&nbsp;(OBSOLÈTE)".to_string(),
        );
        fr.insert(
            "pdbe_superseded_by".to_string(),
            "Cette entrée a été remplacée par".to_string(),
        );
        translations.insert("fr".to_string(), fr);

        Self { translations }
    }

    /// Get a translation for a key in the specified language
    pub fn get(&self, lang: &str, key: &str) -> Option<&str> {
        self.translations
            .get(base_language(lang))
            .and_then(|t| t.get(key))
            .map(|s| s.as_str())
            .or_else(|| {
                // Fallback to English
                self.translations
                    .get(FALLBACK_LANGUAGE)
                    .and_then(|t| t.get(key))
                    .map(|s| s.as_str())
            })
    }

    /// Get a translation and substitute `{name}` placeholders.
    ///
    /// Unknown keys render as the key itself so a missing string is visible
    /// rather than silently empty.
    pub fn format(&self, lang: &str, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.get(lang, key).unwrap_or(key);

        args.iter().fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new()
    }
}
