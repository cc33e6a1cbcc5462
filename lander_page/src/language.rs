// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page language selection and per-element translations.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use hashbrown::HashMap;
use thiserror::Error;

/// Languages the page ships translations for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// English, the markup's default.
    #[default]
    En,
    /// Thai.
    Th,
    /// Russian.
    Ru,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 3] = [Self::En, Self::Th, Self::Ru];

    /// The `data-lang` code, which is also the `dataset` key holding the
    /// element's text in this language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Th => "th",
            Self::Ru => "ru",
        }
    }

    /// The `dataset` key holding an input's placeholder in this language
    /// (`data-placeholder-th` is `placeholderTh`).
    #[must_use]
    pub const fn placeholder_key(self) -> &'static str {
        match self {
            Self::En => "placeholderEn",
            Self::Th => "placeholderTh",
            Self::Ru => "placeholderRu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A `data-lang` code that names no supported language.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown language code `{0}`")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLanguage(s.into()))
    }
}

/// The active page language.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageState {
    current: Language,
}

impl LanguageState {
    /// Starts in `initial`.
    #[must_use]
    pub const fn new(initial: Language) -> Self {
        Self { current: initial }
    }

    /// The active language.
    #[must_use]
    pub const fn current(&self) -> Language {
        self.current
    }

    /// Switches to `lang`. Returns `true` if the language changed.
    pub fn switch(&mut self, lang: Language) -> bool {
        if self.current == lang {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(from = %self.current, to = %lang, "language switched");
        self.current = lang;
        true
    }

    /// Whether a language button with `code` shows as `active`.
    #[must_use]
    pub fn is_active(&self, code: &str) -> bool {
        code.parse::<Language>().is_ok_and(|lang| lang == self.current)
    }
}

/// Text of one element in each language it provides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Translations {
    texts: HashMap<Language, String>,
}

impl Translations {
    /// Collects translations from `(dataset key, value)` pairs, keeping the
    /// keys that name a language.
    pub fn from_dataset<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let texts = entries
            .into_iter()
            .filter_map(|(key, value)| Some((key.parse().ok()?, String::from(value))))
            .collect();
        Self { texts }
    }

    /// Adds or replaces the text for `lang`.
    pub fn insert(&mut self, lang: Language, text: impl Into<String>) {
        self.texts.insert(lang, text.into());
    }

    /// Text for `lang`. Missing or empty translations yield `None`, leaving
    /// the element's current text in place.
    #[must_use]
    pub fn get(&self, lang: Language) -> Option<&str> {
        self.texts
            .get(&lang)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Number of languages with text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether no translation was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
