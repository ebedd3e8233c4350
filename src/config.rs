//! Startup-time constants for one round.

use std::time::Duration;

use crossterm::event::KeyCode;

use crate::error::{FlappyError, Result};
use crate::random::RandomRange;

/// Geometry and tuning for a round, in logical screen units.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub gravity: i32,
    pub jump_impulse: i32,
    pub pipe_width: i32,
    pub pipe_distance: i32,
    pub gap: i32,
    pub upper_height_range: RandomRange,
    pub scroll_speed: i32,
    pub player_x: i32,
    pub player_start_y: i32,
    // pipe hitbox
    pub body_width: i32,
    pub body_height: i32,
    // floor line and gate probe centre
    pub body_extent: i32,
    pub obstacle_count: usize,
    pub jump_key: KeyCode,
    pub frame_sleep: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 400,
            screen_height: 800,
            gravity: 1,
            jump_impulse: 50,
            pipe_width: 52,
            pipe_distance: 320,
            gap: 180,
            upper_height_range: RandomRange::new(100, 200),
            scroll_speed: 1,
            player_x: 170,
            player_start_y: 100,
            body_width: 34,
            body_height: 24,
            body_extent: 50,
            obstacle_count: 2,
            jump_key: KeyCode::Char(' '),
            frame_sleep: Duration::from_millis(10),
        }
    }
}

impl GameConfig {
    /// Lowest `y` the player body may occupy; reaching it ends the round.
    pub fn floor_y(&self) -> i32 {
        self.screen_height - self.body_extent
    }

    pub fn player_center_x(&self) -> i32 {
        self.player_x + self.body_extent / 2
    }

    /// Both pipes of every pair must end up with a non-negative height.
    pub fn validate(&self) -> Result<()> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(FlappyError::Config(format!(
                "screen must be positive, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.upper_height_range.is_empty() || self.upper_height_range.min < 0 {
            return Err(FlappyError::Config(format!(
                "upper height range [{}, {}] is empty or negative",
                self.upper_height_range.min, self.upper_height_range.max
            )));
        }
        if self.upper_height_range.max + self.gap > self.screen_height {
            return Err(FlappyError::Config(format!(
                "gap {} plus upper height {} exceeds screen height {}",
                self.gap, self.upper_height_range.max, self.screen_height
            )));
        }
        if self.body_extent > self.screen_height || self.body_extent < 0 {
            return Err(FlappyError::Config(format!(
                "body extent {} does not fit a screen of height {}",
                self.body_extent, self.screen_height
            )));
        }
        if !(0..=self.floor_y()).contains(&self.player_start_y) {
            return Err(FlappyError::Config(format!(
                "player start y {} is outside [0, {}]",
                self.player_start_y,
                self.floor_y()
            )));
        }
        if self.pipe_width <= 0 || self.scroll_speed <= 0 {
            return Err(FlappyError::Config(
                "pipe width and scroll speed must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
