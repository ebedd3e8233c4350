use std::io;

use thiserror::Error;

/// Everything that can stop the game from starting or keep a frame from reaching the terminal.
#[derive(Debug, Error)]
pub enum FlappyError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not open an audio output stream: {0}")]
    AudioStream(#[from] rodio::StreamError),

    #[error("could not queue a sound: {0}")]
    AudioPlay(#[from] rodio::PlayError),

    #[error("invalid game configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FlappyError>;
