use crate::components::Side;
use crate::error::ConfigError;
use crate::params::Params;
use serde::Deserialize;

/// Game configuration
///
/// Every field has a default from [`Params`], so a TOML file only needs to
/// name the values it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub grid: f32,
    pub paddle_height_cells: f32,
    pub paddle_speed: f32,
    pub ball_speed: f32,
    pub restart_ball_speed: f32,
    pub win_score: u32,
    pub recenter_delay: f32,
    pub opponent_miss_odds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::FIELD_WIDTH,
            height: Params::FIELD_HEIGHT,
            grid: Params::GRID,
            paddle_height_cells: Params::PADDLE_HEIGHT_CELLS,
            paddle_speed: Params::PADDLE_SPEED,
            ball_speed: Params::BALL_SPEED,
            restart_ball_speed: Params::RESTART_BALL_SPEED,
            win_score: Params::WIN_SCORE,
            recenter_delay: Params::RECENTER_DELAY,
            opponent_miss_odds: Params::OPPONENT_MISS_ODDS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document and validate the result
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        tracing::debug!(?config, "Loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.grid > 0.0) {
            return Err(ConfigError::invalid("grid", "must be positive"));
        }
        if !(self.width > 4.0 * self.grid) {
            return Err(ConfigError::invalid(
                "width",
                "must leave room for both paddles",
            ));
        }
        if !(self.paddle_height_cells > 0.0) {
            return Err(ConfigError::invalid("paddle_height_cells", "must be positive"));
        }
        if !(self.height > 2.0 * self.grid + self.paddle_height()) {
            return Err(ConfigError::invalid(
                "height",
                "must fit a paddle between the walls",
            ));
        }
        if self.paddle_speed < 0.0 {
            return Err(ConfigError::invalid("paddle_speed", "must not be negative"));
        }
        if self.recenter_delay < 0.0 {
            return Err(ConfigError::invalid("recenter_delay", "must not be negative"));
        }
        if self.win_score == 0 {
            return Err(ConfigError::invalid("win_score", "must be at least 1"));
        }
        if self.opponent_miss_odds == 0 {
            return Err(ConfigError::invalid("opponent_miss_odds", "must be at least 1"));
        }
        Ok(())
    }

    pub fn paddle_width(&self) -> f32 {
        self.grid
    }

    pub fn paddle_height(&self) -> f32 {
        self.grid * self.paddle_height_cells
    }

    pub fn ball_size(&self) -> f32 {
        self.grid
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.grid * 2.0,
            Side::Right => self.width - self.grid * 3.0,
        }
    }

    /// Lowest top edge a paddle may have without entering the bottom wall
    pub fn max_paddle_y(&self) -> f32 {
        self.height - self.grid - self.paddle_height()
    }

    /// Clamp paddle Y (top edge) between the walls
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        if y < self.grid {
            self.grid
        } else if y > self.max_paddle_y() {
            self.max_paddle_y()
        } else {
            y
        }
    }
}
