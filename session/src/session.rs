//! Frame-driven game session
//!
//! Owns the ball, paddles, key state and match lifecycle, and advances them
//! once per host animation frame. All asynchrony is data: the post-score
//! serve is a stored deadline checked on the next tick, so tearing the
//! session down (or starting a new match) cancels it by dropping the field.

use game_core::{
    move_ball, move_paddle, Ball, Config, Difficulty, GameRng, Match, MatchResult, Paddle,
    PaddleKeys, Params, Side,
};
use leaderboard::{make_id, Leaderboard, LeaderboardEntry, StorageBackend};

use crate::input::{LEFT_KEYS, RIGHT_KEYS};
use crate::trail::BallTrail;

/// Abstract host clock (monotonic, milliseconds)
pub trait Environment {
    fn now_ms(&self) -> u64;
}

/// Wall-clock environment for native hosts
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn now_ms(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Per-frame state published to the renderer; one-way data flow out of the
/// core, no feedback into physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub score_left: u8,
    pub score_right: u8,
    pub awaiting_start: bool,
    pub winner: Option<Side>,
}

/// One local two-player game: physics loop, match lifecycle and leaderboard
/// hand-off, driven by `tick()` from the host's frame scheduler.
pub struct GameSession {
    pub env: Box<dyn Environment>,
    pub config: Config,
    pub difficulty: Difficulty,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub left_keys: PaddleKeys,
    pub right_keys: PaddleKeys,
    pub match_state: Match,
    pub rng: GameRng,
    pub leaderboard: Leaderboard,
    pub trail: BallTrail,
    /// Deadline for the deferred post-score serve
    pending_reset: Option<u64>,
    /// Finished match waiting for a winner name
    pending_result: Option<MatchResult>,
    last_tick_ms: Option<u64>,
}

impl GameSession {
    pub fn new(env: Box<dyn Environment>, backend: Box<dyn StorageBackend>) -> Self {
        let config = Config::new();
        let ball = Ball::centered(&config);
        let left_paddle = Paddle::new(Side::Left, &config);
        let right_paddle = Paddle::new(Side::Right, &config);
        let match_state = Match::new(config.win_score);

        Self {
            env,
            config,
            difficulty: Difficulty::default(),
            ball,
            left_paddle,
            right_paddle,
            left_keys: PaddleKeys::default(),
            right_keys: PaddleKeys::default(),
            match_state,
            rng: GameRng::default(),
            leaderboard: Leaderboard::new(backend),
            trail: BallTrail::default(),
            pending_reset: None,
            pending_result: None,
            last_tick_ms: None,
        }
    }

    /// Reseed the serve rng, mainly for deterministic tests
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = GameRng::new(seed);
        self
    }

    /// Route a raw key-down event to whichever side has it mapped
    pub fn handle_key_down(&mut self, key: &str) {
        LEFT_KEYS.apply_key_down(key, &mut self.left_keys);
        RIGHT_KEYS.apply_key_down(key, &mut self.right_keys);
    }

    /// Route a raw key-up event to whichever side has it mapped
    pub fn handle_key_up(&mut self, key: &str) {
        LEFT_KEYS.apply_key_up(key, &mut self.left_keys);
        RIGHT_KEYS.apply_key_up(key, &mut self.right_keys);
    }

    /// Serve speed is fixed for the duration of a match
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.match_state.awaiting_start() {
            self.difficulty = difficulty;
        }
    }

    /// Advance one frame. Paddles always move; the ball integrates only
    /// while a match is running and no post-score reset is pending.
    pub fn tick(&mut self) {
        let now = self.env.now_ms();
        let dt = match self.last_tick_ms {
            Some(prev) => (now.saturating_sub(prev) as f32 / 1000.0).min(Params::MAX_DT),
            None => 0.0,
        };
        self.last_tick_ms = Some(now);

        move_paddle(&mut self.left_paddle, self.left_keys, dt, &self.config);
        move_paddle(&mut self.right_paddle, self.right_keys, dt, &self.config);
        self.trail.sample(now, self.ball.pos.x, self.ball.pos.y);

        if self.match_state.awaiting_start() {
            return;
        }

        if let Some(deadline) = self.pending_reset {
            // Integration stays suspended until the serve fires; a second
            // scoring event cannot slip in during the freeze window
            if now >= deadline {
                self.pending_reset = None;
                self.ball
                    .serve(&self.config, self.difficulty.scale(), &mut self.rng);
            }
            return;
        }

        // Paddle positions as of the start of this frame
        let left = self.left_paddle.snapshot();
        let right = self.right_paddle.snapshot();
        let result = move_ball(self.ball, dt, Some(&left), Some(&right), &self.config);
        self.ball = result.ball;

        if let Some(side) = result.scored {
            self.ball.freeze();
            self.park_ball(side);

            if let Some(finished) = self.match_state.handle_score(side, now) {
                log::info!(
                    "match finished: {} wins {}-{} in {}ms",
                    finished.winner.label(),
                    finished.winner_score(),
                    finished.loser_score(),
                    finished.duration_ms
                );
                self.pending_result = Some(finished);
            } else {
                self.pending_reset = Some(now + Params::RESET_DELAY_MS);
            }
        }
    }

    /// Start the next match: valid only while awaiting start. Any unsaved
    /// result and any pending serve are discarded.
    pub fn begin_match(&mut self) {
        if !self.match_state.awaiting_start() {
            return;
        }
        let now = self.env.now_ms();
        if self.pending_result.take().is_some() {
            log::debug!("unsaved match result discarded");
        }
        self.pending_reset = None;
        self.trail.clear();
        self.match_state.begin(now);
        self.ball
            .serve(&self.config, self.difficulty.scale(), &mut self.rng);
        log::info!("match started, first to {}", self.config.win_score);
    }

    /// True while a finished match is waiting for its winner name
    pub fn winner_needs_name(&self) -> bool {
        self.pending_result.is_some()
    }

    /// Record the finished match under `name` (falling back to the winner
    /// side's label) and hand it to the leaderboard.
    pub fn submit_winner(&mut self, name: &str) {
        let Some(result) = self.pending_result.take() else {
            return;
        };
        let now = self.env.now_ms();
        let winner = result.winner;
        let trimmed = name.trim();
        let player = if trimmed.is_empty() {
            winner.label().to_string()
        } else {
            trimmed.to_string()
        };

        let entry = LeaderboardEntry {
            id: make_id(now, &mut self.rng.0),
            player,
            opponent: Some(winner.opposite().label().to_string()),
            score: u32::from(result.winner_score()),
            opponent_score: u32::from(result.loser_score()),
            duration_ms: result.duration_ms,
            created_at: now,
        };
        self.leaderboard.add(entry);
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            ball_x: self.ball.pos.x,
            ball_y: self.ball.pos.y,
            paddle_left_y: self.left_paddle.center_y,
            paddle_right_y: self.right_paddle.center_y,
            score_left: self.match_state.left_score(),
            score_right: self.match_state.right_score(),
            awaiting_start: self.match_state.awaiting_start(),
            winner: self.match_state.winner_side(),
        }
    }

    /// Park the frozen ball fully outside the playfield on the exit side,
    /// so the renderer never shows it teleporting through the middle.
    fn park_ball(&mut self, scored: Side) {
        let r = self.config.ball_radius;
        self.ball.pos.x = match scored {
            // Right scored: the ball exited on the left
            Side::Right => -3.0 * r,
            Side::Left => self.config.playfield_width + 3.0 * r,
        };
    }
}
