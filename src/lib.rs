//! Flappy Bird for the terminal.
//!
//! The round itself (physics, pipes, collisions, scoring and the
//! Intro/Playing/GameOver machine) is a pure fixed-step transition,
//! [`GameState::tick`], that returns render and audio commands instead of
//! performing them. [`FrameDriver`] threads the single live state through
//! each frame and hands those commands to the terminal and audio backends.

pub mod audio;
pub mod collision;
pub mod config;
pub mod driver;
pub mod error;
pub mod frame;
pub mod input;
pub mod obstacles;
pub mod physics;
pub mod random;
pub mod render;
pub mod scoring;
pub mod state;

pub use config::GameConfig;
pub use driver::{Clock, ControlFlow, FrameDriver, SystemClock};
pub use error::{FlappyError, Result};
pub use frame::{AudioCue, Frame, RenderCommand};
pub use input::{InputEvent, InputSource, Intent};
pub use state::{GamePhase, GameState};
