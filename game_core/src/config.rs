use glam::Vec2;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (pixel space)
    pub const PLAYFIELD_WIDTH: f32 = 960.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 14.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_SPEED: f32 = 360.0;

    // Ball
    pub const BALL_RADIUS: f32 = 9.0;
    pub const BALL_INITIAL_SPEED: f32 = 480.0;

    // Serve direction components; each axis sign is re-drawn per serve
    pub const SERVE_DIR_X: f32 = 0.7;
    pub const SERVE_DIR_Y: f32 = 0.3;

    // Score
    pub const WIN_SCORE: u8 = 5;

    // Frame timing
    pub const MAX_DT: f32 = 0.05;
    pub const RESET_DELAY_MS: u64 = 700;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_initial_speed: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_initial_speed: Params::BALL_INITIAL_SPEED,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center of the playfield (ball spawn)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.playfield_width / 2.0, self.playfield_height / 2.0)
    }

    /// X of the right paddle's boundary plane; the left plane is `paddle_width`
    pub fn right_paddle_plane(&self) -> f32 {
        self.playfield_width - self.paddle_width
    }

    /// Clamp paddle center Y so the paddle never exits the playfield
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.playfield_height - half_height)
    }
}

/// Per-match serve speed multiplier, picked before the match starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn scale(self) -> f32 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.4,
        }
    }
}
