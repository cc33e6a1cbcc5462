// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page configuration, read from an inline JSON script tag.

use std::collections::BTreeMap;

use lander_carousel::CarouselConfig;
use lander_page::Language;
use lander_scroll::ScrollConfig;
use serde::Deserialize;
use web_sys::Document;

use crate::AttachError;

/// Id of the `<script type="application/json">` element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "lander-config";

/// Countdown target used when none is configured, in local time.
pub const DEFAULT_COUNTDOWN_TARGET: &str = "2026-01-23T15:00:00";

/// Everything the page reads at startup.
///
/// Missing keys take their defaults; a `carousels` map replaces the default
/// map as a whole.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    /// Carousel options keyed by container element id.
    pub carousels: BTreeMap<String, CarouselConfig>,
    /// Countdown target as a date string the browser's `Date` parses.
    pub countdown_target: String,
    /// Language active on load.
    pub language: Language,
    /// Scroll effect geometry.
    pub scroll: ScrollConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        let festival = CarouselConfig::responsive(3, 2, 1).with_loop(true);
        let carousels = ["hypeCarousel", "headlinersCarousel"]
            .into_iter()
            .map(|id| (id.to_owned(), festival.clone()))
            .collect();
        Self {
            carousels,
            countdown_target: DEFAULT_COUNTDOWN_TARGET.to_owned(),
            language: Language::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self, AttachError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the config element from `document`.
    ///
    /// An absent element yields the defaults. A malformed one is logged and
    /// also yields the defaults, so a typo never takes the page down.
    pub fn load(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return Self::default();
        };
        Self::from_json(&text).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring page config");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_the_festival_page() {
        let config = PageConfig::default();
        assert_eq!(config.carousels.len(), 2);
        let hype = &config.carousels["hypeCarousel"];
        assert_eq!(hype, &CarouselConfig::responsive(3, 2, 1));
        assert!(hype.looping);
        assert_eq!(config.countdown_target, "2026-01-23T15:00:00");
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn parses_partial_config() {
        let config = PageConfig::from_json(
            r#"{
                "carousels": {
                    "headlinersCarousel": {
                        "slidesVisibleDesktop": 4,
                        "loop": false,
                        "autoplay": true,
                        "autoplayIntervalMs": 3000
                    }
                },
                "language": "th",
                "scroll": { "wipeRange": 200 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.carousels.len(), 1);
        let headliners = &config.carousels["headlinersCarousel"];
        assert_eq!(headliners.slides_visible_desktop, 4);
        assert_eq!(headliners.slides_visible_tablet, None);
        assert_eq!(headliners.slides_visible_mobile, 1);
        assert!(!headliners.looping);
        assert!(headliners.autoplay);
        assert_eq!(headliners.autoplay_interval_ms, 3000);
        assert_eq!(config.language, Language::Th);
        assert_eq!(config.scroll.wipe_range, 200.0);
        assert_eq!(config.scroll.header_height, 70.0);
        assert_eq!(config.countdown_target, DEFAULT_COUNTDOWN_TARGET);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            PageConfig::from_json(r#"{"language": "de"}"#),
            Err(AttachError::Config(_))
        ));
        assert!(PageConfig::from_json("{").is_err());
    }
}
