//! Page configuration.
//!
//! Every timing constant and threshold the reactors use lives here. Defaults
//! reproduce the stock portfolio page; on the web the host may pass a partial
//! object to `mountPortfolio` and missing fields fall back to these defaults.
//!
//! # Example
//!
//! ```
//! use portfolio_fx::config::PageConfig;
//!
//! let config = PageConfig::default();
//! assert_eq!(config.typing.start_delay_ms, 1000);
//! assert!(config.validate().is_ok());
//! ```

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

// =============================================================================
// Typing
// =============================================================================

/// Typing animator phrases and delays.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    /// Delay before the very first tick.
    pub start_delay_ms: u32,
    /// Delay between revealed characters.
    pub type_delay_ms: u32,
    /// Pause once the full phrase is shown.
    pub pause_at_end_ms: u32,
    /// Delay between hidden characters.
    pub delete_delay_ms: u32,
    /// Pause once the phrase is fully erased.
    pub pause_before_next_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "CSE Student".to_string(),
                "Web Developer".to_string(),
                "Arduino & IoT Enthusiast".to_string(),
                "Problem Solver".to_string(),
            ],
            start_delay_ms: 1000,
            type_delay_ms: 100,
            pause_at_end_ms: 1500,
            delete_delay_ms: 50,
            pause_before_next_ms: 500,
        }
    }
}

// =============================================================================
// Scroll
// =============================================================================

/// Scroll reactor thresholds, in CSS pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    /// Bars reveal once `top <= viewport_height - progress_margin`.
    pub progress_margin: f64,
    /// Extra look-ahead subtracted from section offsets for the active link.
    pub nav_look_ahead: f64,
    /// Header gets a shadow past this offset.
    pub shadow_threshold: f64,
    /// Header may hide on downward scroll past this offset.
    pub hide_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            progress_margin: 50.0,
            nav_look_ahead: 100.0,
            shadow_threshold: 50.0,
            hide_threshold: 200.0,
        }
    }
}

// =============================================================================
// Fade-in
// =============================================================================

/// IntersectionObserver options for section fade-in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FadeInConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

// =============================================================================
// Notifications
// =============================================================================

/// Toast timeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationConfig {
    /// Delay between insertion and slide-in.
    pub slide_in_delay_ms: u32,
    /// Time from insertion until slide-out starts.
    pub hold_ms: u32,
    /// Time from slide-out until removal.
    pub exit_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            slide_in_delay_ms: 10,
            hold_ms: 4000,
            exit_ms: 300,
        }
    }
}

// =============================================================================
// Page
// =============================================================================

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub typing: TypingConfig,
    pub scroll: ScrollConfig,
    pub fade_in: FadeInConfig,
    pub notification: NotificationConfig,
    /// Literal year in `.copyright` replaced by the current year.
    pub copyright_placeholder: String,
    pub log_level: LevelFilter,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            typing: TypingConfig::default(),
            scroll: ScrollConfig::default(),
            fade_in: FadeInConfig::default(),
            notification: NotificationConfig::default(),
            copyright_placeholder: "2026".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl PageConfig {
    /// Check invariants the reactors rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typing.phrases.is_empty() {
            return Err(ConfigError::EmptyPhraseList);
        }
        if let Some(index) = self.typing.phrases.iter().position(|p| p.is_empty()) {
            return Err(ConfigError::EmptyPhrase(index));
        }
        if !(0.0..=1.0).contains(&self.fade_in.threshold) {
            return Err(ConfigError::InvalidThreshold(self.fade_in.threshold));
        }
        Ok(())
    }
}
