//! Configuration types for ladder-diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are styled. All types implement [`serde::Deserialize`] for flexible
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Controls visual styling options such as background
//!   color and the reference grid.
//!
//! # Example
//!
//! ```
//! # use rungview::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert!(config.style().show_grid());
//! ```

use serde::Deserialize;

use rungview_core::color::Color;

/// Top-level application configuration.
///
/// Currently holds only the [`StyleConfig`] section; a single root keeps the
/// on-disk format stable as sections are added.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for diagrams, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Whether the reference grid is drawn behind the rungs.
    #[serde(default = "default_show_grid")]
    show_grid: bool,
}

fn default_show_grid() -> bool {
    true
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            show_grid: default_show_grid(),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns whether the reference grid should be drawn.
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }
}
