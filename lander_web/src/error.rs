// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lander_carousel::ConfigError;
use wasm_bindgen::JsValue;

/// Failure to wire a page component to the DOM.
#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    /// A required element is missing.
    #[error("missing required element `{0}`")]
    MissingElement(&'static str),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
    /// Page or component configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<JsValue> for AttachError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<ConfigError> for AttachError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AttachError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<AttachError> for JsValue {
    fn from(err: AttachError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use lander_carousel::Breakpoint;

    use super::*;

    #[test]
    fn messages_name_the_cause() {
        assert_eq!(
            AttachError::MissingElement(".carousel__track").to_string(),
            "missing required element `.carousel__track`"
        );
        let err = AttachError::from(ConfigError::ZeroSlidesVisible(Breakpoint::Mobile));
        assert_eq!(
            err.to_string(),
            "invalid configuration: slides visible on Mobile must be at least 1"
        );
    }

    #[test]
    fn json_errors_are_config_errors() {
        let err = serde_json::from_str::<u32>("nope").map_err(AttachError::from);
        assert!(matches!(err, Err(AttachError::Config(_))));
    }
}
