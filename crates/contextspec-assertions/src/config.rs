//! Rendering configuration for assertion messages.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::OnceLock;

/// Environment variable toggling pretty (`{:#?}`) rendering
pub const PRETTY_ENV: &str = "CONTEXTSPEC_PRETTY";

/// Environment variable capping the length of a rendered value
pub const MAX_VALUE_LEN_ENV: &str = "CONTEXTSPEC_MAX_VALUE_LEN";

const DEFAULT_MAX_VALUE_LEN: usize = 512;
const ELLIPSIS: &str = "...";

/// Controls how actual and expected values are rendered into failure messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Render values with `{:#?}` instead of `{:?}`
    pub pretty: bool,
    /// Maximum number of characters kept per value; 0 disables truncation
    pub max_value_len: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            max_value_len: DEFAULT_MAX_VALUE_LEN,
        }
    }
}

impl RenderConfig {
    pub fn new(pretty: bool, max_value_len: usize) -> Self {
        Self {
            pretty,
            max_value_len,
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PRETTY_ENV) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.pretty = true,
                "0" | "false" | "no" | "off" | "" => config.pretty = false,
                other => {
                    tracing::warn!(target: "contextspec", value = other, "ignoring invalid {}", PRETTY_ENV);
                }
            }
        }

        if let Some(raw) = lookup(MAX_VALUE_LEN_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(len) => config.max_value_len = len,
                Err(err) => {
                    tracing::warn!(
                        target: "contextspec",
                        value = %raw,
                        error = %err,
                        "ignoring invalid {}",
                        MAX_VALUE_LEN_ENV
                    );
                }
            }
        }

        config
    }

    /// The process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static RenderConfig {
        static CONFIG: OnceLock<RenderConfig> = OnceLock::new();
        CONFIG.get_or_init(Self::from_env)
    }

    /// Renders a value for a failure message.
    pub fn render<T: Debug + ?Sized>(&self, value: &T) -> String {
        let rendered = if self.pretty {
            format!("{:#?}", value)
        } else {
            format!("{:?}", value)
        };
        self.truncate(rendered)
    }

    fn truncate(&self, mut rendered: String) -> String {
        if self.max_value_len == 0 {
            return rendered;
        }
        if let Some((cut, _)) = rendered.char_indices().nth(self.max_value_len) {
            rendered.truncate(cut);
            rendered.push_str(ELLIPSIS);
        }
        rendered
    }
}

/// Renders a value with the global configuration.
pub(crate) fn render<T: Debug + ?Sized>(value: &T) -> String {
    RenderConfig::global().render(value)
}
