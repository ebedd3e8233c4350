//! The round state machine: Intro, then Playing, then GameOver.

use std::time::Duration;

use rand::Rng;
use tracing::{info, trace};

use crate::collision::{Rect, is_lethal, lower_rect, player_rect, upper_rect};
use crate::config::GameConfig;
use crate::frame::{AudioCue, Font, Frame, RenderCommand, TextStyle, Texture};
use crate::input::{InputEvent, Intent};
use crate::obstacles::ObstacleField;
use crate::physics;
use crate::scoring::score_gates;

/// Wing frames cycled by the bird sprite.
pub const ANIMATION_FRAMES: u8 = 3;

const PIPE_SPRITE_SRC: Rect = Rect::new(0, 0, 52, 320);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    Intro,
    Playing,
    GameOver,
}

/// The bird. `x` never changes; only `y` is integrated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerBody {
    pub x: i32,
    pub y: i32,
    pub alive: bool,
}

/// Everything that changes during a round, owned by the frame driver and
/// threaded through [`GameState::tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: PlayerBody,
    pub obstacles: ObstacleField,
    pub score: u32,
    /// Cosmetic wing frame, `0..ANIMATION_FRAMES`.
    pub animation_frame: u8,
}

impl GameState {
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        Self {
            phase: GamePhase::Intro,
            player: PlayerBody {
                x: config.player_x,
                y: config.player_start_y,
                alive: true,
            },
            obstacles: ObstacleField::new(config, rng),
            score: 0,
            animation_frame: 0,
        }
    }

    /// Advance the round by one fixed step.
    ///
    /// `dt` is the wall-clock time since the previous frame. It is traced but
    /// never scales motion: each call is exactly one gravity and scroll step.
    pub fn tick<R: Rng>(
        mut self,
        events: &[InputEvent],
        dt: Duration,
        config: &GameConfig,
        rng: &mut R,
    ) -> (GameState, Frame) {
        let intent = Intent::from_events(events, config);
        trace!(
            dt_us = dt.as_micros() as u64,
            ?intent,
            phase = ?self.phase,
            "tick"
        );

        let mut frame = Frame {
            quit: intent.quit,
            ..Frame::default()
        };

        match self.phase {
            GamePhase::Intro => {
                if intent.jump {
                    info!("round started");
                    self.phase = GamePhase::Playing;
                    frame.audio = self.update_playing(true, config, rng);
                }
            }
            GamePhase::Playing => {
                frame.audio = self.update_playing(intent.jump, config, rng);
            }
            // Frozen: jumps are ignored and nothing moves.
            GamePhase::GameOver => {}
        }

        frame.render = match self.phase {
            GamePhase::Intro => intro_screen(config),
            GamePhase::Playing | GamePhase::GameOver => self.play_screen(config),
        };
        (self, frame)
    }

    fn update_playing<R: Rng>(
        &mut self,
        jump: bool,
        config: &GameConfig,
        rng: &mut R,
    ) -> Vec<AudioCue> {
        let outcome = physics::step(self.player.y, jump, config);
        self.player.y = outcome.y;

        self.obstacles.advance(config, rng);

        let hit = self
            .obstacles
            .pairs()
            .iter()
            .any(|pair| is_lethal(self.player.y, pair, config));
        let mut cues = score_gates(&mut self.obstacles, &mut self.score, config, rng);
        if hit || outcome.floor_contact {
            cues.extend(self.end_round(hit));
            return cues;
        }

        self.animation_frame = (self.animation_frame + 1) % ANIMATION_FRAMES;
        cues
    }

    /// The only way into GameOver; the cue is emitted here and nowhere else.
    fn end_round(&mut self, hit_pipe: bool) -> Option<AudioCue> {
        if !self.player.alive {
            return None;
        }
        self.phase = GamePhase::GameOver;
        self.player.alive = false;
        info!(score = self.score, hit_pipe, y = self.player.y, "game over");
        Some(AudioCue::GameOver)
    }

    fn play_screen(&self, config: &GameConfig) -> Vec<RenderCommand> {
        let mut cmds = vec![RenderCommand::Clear, background(config)];
        for pair in self.obstacles.pairs() {
            cmds.push(RenderCommand::Copy {
                texture: Texture::PipeDown,
                src: PIPE_SPRITE_SRC,
                dst: upper_rect(pair, config),
            });
            cmds.push(RenderCommand::Copy {
                texture: Texture::PipeUp,
                src: PIPE_SPRITE_SRC,
                dst: lower_rect(pair, config),
            });
        }
        cmds.push(RenderCommand::Copy {
            texture: Texture::Bird(self.animation_frame),
            src: Rect::new(0, 0, config.body_width, config.body_height),
            dst: player_rect(self.player.y, config),
        });
        let text = self.score.to_string();
        cmds.push(RenderCommand::Text {
            font: Font::Main,
            dst: Rect::new(10, 10, 30 * text.len() as i32, 48),
            text,
            style: TextStyle::WHITE,
        });
        cmds.push(RenderCommand::Present);
        cmds
    }
}

fn background(config: &GameConfig) -> RenderCommand {
    let full = Rect::new(0, 0, config.screen_width, config.screen_height);
    RenderCommand::Copy {
        texture: Texture::Background,
        src: full,
        dst: full,
    }
}

/// Static title card shown until the first jump.
fn intro_screen(config: &GameConfig) -> Vec<RenderCommand> {
    let line_h = 170 / 3 - 25;
    let left = config.screen_width / 2 - 130;
    let mid = config.screen_height / 2;
    vec![
        RenderCommand::Clear,
        background(config),
        RenderCommand::Text {
            font: Font::Main,
            text: "flappybird!".to_string(),
            style: TextStyle::WHITE,
            dst: Rect::new(left, mid - 2 * line_h, 770 / 5, line_h),
        },
        RenderCommand::Text {
            font: Font::Main,
            text: "Press Space to start".to_string(),
            style: TextStyle::WHITE,
            dst: Rect::new(left, mid - line_h, 770 / 3, line_h),
        },
        RenderCommand::Present,
    ]
}
