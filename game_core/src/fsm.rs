//! Match State Machine
//!
//! Tracks scores, the win condition and match timing. Loops between
//! awaiting-start and in-progress; time enters only as explicit `now_ms`
//! arguments so the machine stays deterministic under test.

use crate::components::Side;
use crate::resources::Score;

/// Result of a finished match, handed to the leaderboard collaborator
/// once a winner name has been collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Side,
    pub left_score: u8,
    pub right_score: u8,
    pub duration_ms: u64,
}

impl MatchResult {
    /// Points scored by the winner
    pub fn winner_score(&self) -> u8 {
        match self.winner {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    /// Points scored by the losing side
    pub fn loser_score(&self) -> u8 {
        match self.winner {
            Side::Left => self.right_score,
            Side::Right => self.left_score,
        }
    }
}

/// Match lifecycle: awaiting-start (initial) -> in-progress -> awaiting-start
pub struct Match {
    score: Score,
    awaiting_start: bool,
    winner: Option<Side>,
    started_at_ms: u64,
    last_duration_ms: Option<u64>,
    win_score: u8,
}

impl Match {
    pub fn new(win_score: u8) -> Self {
        Self {
            score: Score::new(),
            awaiting_start: true,
            winner: None,
            started_at_ms: 0,
            last_duration_ms: None,
            win_score,
        }
    }

    pub fn left_score(&self) -> u8 {
        self.score.left
    }

    pub fn right_score(&self) -> u8 {
        self.score.right
    }

    pub fn awaiting_start(&self) -> bool {
        self.awaiting_start
    }

    /// Winning side of the last finished match, until the next `begin`
    pub fn winner_side(&self) -> Option<Side> {
        self.winner
    }

    pub fn last_duration_ms(&self) -> Option<u64> {
        self.last_duration_ms
    }

    /// Start (or restart) a match: zero the scores, clear the winner and
    /// record the start timestamp. Only meaningful while awaiting start.
    pub fn begin(&mut self, now_ms: u64) {
        if !self.awaiting_start {
            return;
        }
        self.score = Score::new();
        self.winner = None;
        self.last_duration_ms = None;
        self.started_at_ms = now_ms;
        self.awaiting_start = false;
    }

    /// Record a point for `side`. Scoring events that arrive while awaiting
    /// start (before the first serve, or in-flight after a win) are
    /// discarded, not queued. Returns the finished match when this point
    /// meets the win condition.
    pub fn handle_score(&mut self, side: Side, now_ms: u64) -> Option<MatchResult> {
        if self.awaiting_start {
            return None;
        }

        self.score.increment(side);

        let winner = self.score.has_winner(self.win_score)?;
        let duration_ms = now_ms.saturating_sub(self.started_at_ms);
        self.winner = Some(winner);
        self.last_duration_ms = Some(duration_ms);
        self.awaiting_start = true;

        Some(MatchResult {
            winner,
            left_score: self.score.left,
            right_score: self.score.right,
            duration_ms,
        })
    }
}
