//! Axis-aligned overlap tests for lethal hits and scoring gates.

use crate::config::GameConfig;
use crate::obstacles::ObstaclePair;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Closed-interval overlap: rectangles that only touch along an edge still overlap,
    /// and zero-width probes work as vertical segments.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let disjoint = other.x > self.x + self.w
            || self.x > other.x + other.w
            || other.y > self.y + self.h
            || self.y > other.y + other.h;
        !disjoint
    }
}

pub fn player_rect(y: i32, config: &GameConfig) -> Rect {
    Rect::new(config.player_x, y, config.body_width, config.body_height)
}

pub fn upper_rect(pair: &ObstaclePair, config: &GameConfig) -> Rect {
    Rect::new(pair.x, 0, config.pipe_width, pair.upper_height)
}

pub fn lower_rect(pair: &ObstaclePair, config: &GameConfig) -> Rect {
    Rect::new(
        pair.x,
        config.screen_height - pair.lower_height,
        config.pipe_width,
        pair.lower_height,
    )
}

// ── Gate probes ─────────────────────────────────────────────────────────────

/// Zero-width column through the pair's centre spanning its gap.
pub fn gate_column(pair: &ObstaclePair, config: &GameConfig) -> Rect {
    Rect::new(
        pair.x + config.pipe_width / 2,
        pair.upper_height,
        0,
        config.screen_height - pair.upper_height - pair.lower_height,
    )
}

/// Zero-width column through the player's centre spanning the whole screen,
/// so any gap height is crossed.
pub fn player_probe(config: &GameConfig) -> Rect {
    Rect::new(config.player_center_x(), 0, 0, config.screen_height)
}

pub fn is_lethal(player_y: i32, pair: &ObstaclePair, config: &GameConfig) -> bool {
    let player = player_rect(player_y, config);
    player.overlaps(&upper_rect(pair, config)) || player.overlaps(&lower_rect(pair, config))
}

pub fn crosses_gate(pair: &ObstaclePair, config: &GameConfig) -> bool {
    player_probe(config).overlaps(&gate_column(pair, config))
}
