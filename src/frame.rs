//! Side-effect descriptions produced by one tick and applied by the frame driver.

use crate::collision::Rect;

// ── Render ──────────────────────────────────────────────────────────────────

/// Opaque handle to a sprite the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    Background,
    PipeDown, // upper pipe
    PipeUp,   // lower pipe
    Bird(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TextStyle {
    pub const WHITE: TextStyle = TextStyle {
        r: 255,
        g: 255,
        b: 255,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    Clear,
    Copy {
        texture: Texture,
        src: Rect,
        dst: Rect,
    },
    Text {
        font: Font,
        text: String,
        style: TextStyle,
        dst: Rect,
    },
    Present,
}

// ── Audio ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Scored1,
    Scored2,
    GameOver,
}

impl AudioCue {
    pub const SCORED: [AudioCue; 2] = [AudioCue::Scored1, AudioCue::Scored2];
}

/// Everything a tick asks the outside world to do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub render: Vec<RenderCommand>,
    pub audio: Vec<AudioCue>,
    pub quit: bool,
}
