//! Localized text and language fallback.
//!
//! Sheet columns such as `name_it` / `name_en` are folded into one [`Localized`] value
//! per field. Readers resolve it through a [`LanguageChain`], an explicit ordered list
//! of language codes, with the caller supplying the final default.
use chrono::Weekday;
use std::collections::BTreeMap;

/// Ordered list of language codes tried when resolving a [`Localized`] value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageChain {
    languages: Vec<String>,
}

impl LanguageChain {
    /// Builds a chain, dropping blank codes and duplicates while keeping first-seen order.
    pub fn new<'a, I>(languages: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut chain: Vec<String> = Vec::new();
        for language in languages {
            let language = language.trim().to_lowercase();
            if !language.is_empty() && !chain.contains(&language) {
                chain.push(language);
            }
        }
        LanguageChain { languages: chain }
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Preferred language, if any.
    pub fn primary(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }
}

/// Text available in several languages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Localized {
    values: BTreeMap<String, String>,
}

impl Localized {
    /// Stores `value` for `language`; blank values are ignored.
    pub fn insert(&mut self, language: &str, value: &str) {
        let value = value.trim();
        if !value.is_empty() {
            self.values.insert(language.to_lowercase(), value.to_owned());
        }
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.values.get(language).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First value found along the chain.
    pub fn resolve(&self, chain: &LanguageChain) -> Option<&str> {
        chain.languages().iter().find_map(|language| self.get(language))
    }

    /// First value found along the chain, or `default` when none matches.
    pub fn resolve_or<'a>(&'a self, chain: &LanguageChain, default: &'a str) -> &'a str {
        self.resolve(chain).unwrap_or(default)
    }
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for Localized {
    fn from(entries: [(&'a str, &'a str); N]) -> Self {
        let mut localized = Localized::default();
        for (language, value) in entries {
            localized.insert(language, value);
        }
        localized
    }
}

const DAY_NAMES_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const DAY_NAMES_IT: [&str; 7] = [
    "Lunedì",
    "Martedì",
    "Mercoledì",
    "Giovedì",
    "Venerdì",
    "Sabato",
    "Domenica",
];

/// Weekday name in a single language, if the language is known.
fn day_name_in(day: Weekday, language: &str) -> Option<&'static str> {
    let index = day.num_days_from_monday() as usize;
    match language {
        "en" => Some(DAY_NAMES_EN[index]),
        "it" => Some(DAY_NAMES_IT[index]),
        _ => None,
    }
}

/// Weekday name resolved along the chain, English when no language of the chain is known.
pub fn day_name(day: Weekday, chain: &LanguageChain) -> &'static str {
    chain
        .languages()
        .iter()
        .find_map(|language| day_name_in(day, language))
        .unwrap_or(DAY_NAMES_EN[day.num_days_from_monday() as usize])
}
