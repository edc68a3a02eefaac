use figment::providers::{Env, Serialized};
use figment::Figment;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

use crate::error::{ConfigError, WalkResult};
use crate::layout::GridLayout;
use crate::traversal::TraversalKind;

/// Prefix for environment variables read by [`Config::load`].
pub const ENV_PREFIX: &str = "GRIDWALK_";

/// How the binary prints level sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// One line per level, followed by the grid annotated with levels.
    #[default]
    Text,
    Json,
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Breadth-first or depth-first
    pub traversal: TraversalKind,
    /// Canvas side, in pixels
    pub canvas_size: u32,
    /// Cell side, in pixels. Must divide `canvas_size`.
    pub cell_size: u32,
    /// Start pixel on the canvas
    pub start_x: i32,
    pub start_y: i32,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            traversal: TraversalKind::default(),
            canvas_size: 900,
            cell_size: 30,
            start_x: 0,
            start_y: 0,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads defaults overridden by `GRIDWALK_*` environment variables.
    pub fn load() -> Result<Config, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// The provider stack used by [`Config::load`].
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Extracts and validates a configuration from an arbitrary provider stack.
    pub fn from_figment(figment: Figment) -> Result<Config, ConfigError> {
        let config: Config = figment.extract()?;
        if config.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".to_string()));
        }
        if config.canvas_size < config.cell_size {
            return Err(ConfigError::Invalid(format!(
                "canvas_size ({}) must be at least cell_size ({})",
                config.canvas_size, config.cell_size
            )));
        }
        Ok(config)
    }

    /// The start pixel as a vector.
    pub fn start_pixel(&self) -> IVec2 {
        IVec2::new(self.start_x, self.start_y)
    }

    /// Builds the canvas layout this configuration describes.
    pub fn layout(&self) -> WalkResult<GridLayout> {
        GridLayout::new(self.canvas_size, self.cell_size)
    }
}
