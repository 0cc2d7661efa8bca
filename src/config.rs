//! Deserializable signal configuration.
//!
//! A config names an optional preset and overrides individual signals on
//! top of it. Conversion into [`Signals`] runs the usual validation.

use serde::{Deserialize, Serialize};

use crate::core::Signals;
use crate::error::SignalsError;

/// Named signal bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Csv,
    Tab,
    Pipe,
}

impl Preset {
    pub fn signals(self) -> Signals {
        match self {
            Preset::Csv => Signals::csv(),
            Preset::Tab => Signals::tab_delimited(),
            Preset::Pipe => Signals::pipe_delimited(),
        }
    }
}

/// Signal settings as read from a config file. Unset fields come from the
/// preset; an empty string leaves that signal unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignalsConfig {
    pub preset: Option<Preset>,
    pub delimiter: Option<String>,
    pub quote: Option<String>,
    pub new_row: Option<String>,
    pub escape: Option<String>,
}

impl TryFrom<SignalsConfig> for Signals {
    type Error = SignalsError;

    fn try_from(config: SignalsConfig) -> Result<Self, Self::Error> {
        let base = config.preset.unwrap_or_default().signals();
        let pick = |value: Option<String>, fallback: &str| value.unwrap_or_else(|| fallback.to_string());

        Signals::new(
            pick(config.delimiter, base.delimiter().as_str()),
            pick(config.quote, base.quote().as_str()),
            pick(config.new_row, base.new_row().as_str()),
            pick(config.escape, base.escape().as_str()),
        )
    }
}
