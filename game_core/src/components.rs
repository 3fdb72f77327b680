use glam::Vec2;

use crate::config::{Config, Params};
use crate::resources::GameRng;

/// Playfield side, also identifies the player defending it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Display name used where no player name has been entered
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Frozen ball at the center, waiting for a serve
    pub fn centered(config: &Config) -> Self {
        Self::new(config.center(), Vec2::ZERO)
    }

    /// Recenter and reseed velocity; each axis sign is drawn independently
    pub fn serve(&mut self, config: &Config, scale: f32, rng: &mut GameRng) {
        self.pos = config.center();
        let speed = config.ball_initial_speed * scale;
        self.vel = Vec2::new(
            Params::SERVE_DIR_X * speed * rng.sign(),
            Params::SERVE_DIR_Y * speed * rng.sign(),
        );
    }

    pub fn freeze(&mut self) {
        self.vel = Vec2::ZERO;
    }
}

/// Read-only view of a paddle, consumed by the ball step
#[derive(Debug, Clone, Copy)]
pub struct PaddleSnapshot {
    pub center_y: f32,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub center_y: f32,
}

impl Paddle {
    /// Spawn vertically centered
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            center_y: config.playfield_height / 2.0,
        }
    }

    pub fn snapshot(&self) -> PaddleSnapshot {
        PaddleSnapshot {
            center_y: self.center_y,
        }
    }
}

/// Held-key state for one paddle; each side owns its own copy
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleKeys {
    pub up: bool,
    pub down: bool,
}
