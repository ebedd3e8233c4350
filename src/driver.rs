//! Per-frame orchestration: drain input, tick, then hand render and audio
//! commands to the backends.

use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{info, trace};

use crate::audio::AudioPlayer;
use crate::config::GameConfig;
use crate::error::Result;
use crate::input::{InputEvent, InputSource};
use crate::render::{Renderer, dispatch};
use crate::state::GameState;

/// Monotonic per-frame timestamp source.
pub trait Clock {
    fn now(&mut self) -> Instant;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Owns the single live [`GameState`] and everything a frame touches.
pub struct FrameDriver<I, R, A, C, G> {
    config: GameConfig,
    state: GameState,
    input: I,
    renderer: R,
    audio: A,
    clock: C,
    rng: G,
    last_frame: Option<Instant>,
    frames: u64,
}

impl<I, R, A, C, G> FrameDriver<I, R, A, C, G>
where
    I: InputSource,
    R: Renderer,
    A: AudioPlayer,
    C: Clock,
    G: Rng,
{
    pub fn new(
        config: GameConfig,
        input: I,
        renderer: R,
        audio: A,
        clock: C,
        mut rng: G,
    ) -> Self {
        let state = GameState::new(&config, &mut rng);
        Self {
            config,
            state,
            input,
            renderer,
            audio,
            clock,
            rng,
            last_frame: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn run_frame(&mut self) -> Result<ControlFlow> {
        let events = self.input.drain()?;
        for ev in &events {
            if let InputEvent::Resize(cols, rows) = *ev {
                self.renderer.resize(cols, rows);
            }
        }

        let now = self.clock.now();
        let dt = self
            .last_frame
            .map_or(Duration::ZERO, |prev| now.saturating_duration_since(prev));
        self.last_frame = Some(now);

        let state = std::mem::take(&mut self.state);
        let (state, frame) = state.tick(&events, dt, &self.config, &mut self.rng);
        self.state = state;
        self.frames += 1;

        if frame.quit {
            info!(frames = self.frames, "quit requested");
            return Ok(ControlFlow::Quit);
        }

        dispatch(&mut self.renderer, &frame.render)?;
        for cue in frame.audio {
            self.audio.play_once(cue);
        }
        trace!(
            frame = self.frames,
            elapsed_us = dt.as_micros() as u64,
            "frame done"
        );
        Ok(ControlFlow::Continue)
    }

    pub fn run(&mut self) -> Result<()> {
        while self.run_frame()? == ControlFlow::Continue {
            thread::sleep(self.config.frame_sleep);
        }
        Ok(())
    }
}
