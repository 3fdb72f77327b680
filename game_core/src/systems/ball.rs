use crate::components::{Ball, PaddleSnapshot, Side};
use crate::config::Config;

/// Outcome of one physics step for the ball
#[derive(Debug, Clone, Copy)]
pub struct StepResult {
    pub ball: Ball,
    /// Side awarded the point, if the ball fully exited the playfield
    pub scored: Option<Side>,
}

/// Vertical-overlap test between the ball and a paddle's span.
/// Horizontal proximity is the caller's responsibility.
pub fn paddle_overlaps_ball(
    ball_y: f32,
    paddle_center_y: f32,
    paddle_height: f32,
    ball_radius: f32,
) -> bool {
    (ball_y - paddle_center_y).abs() <= paddle_height / 2.0 + ball_radius
}

/// Pure physics integration for one frame of ball movement.
///
/// Resolves wall bounces before paddle bounces so a corner contact reflects
/// on both axes in the same frame. A `None` paddle means no paddle is present
/// on that side and the ball passes through its boundary plane. The returned
/// kinematics in a scoring frame are not clamped to the playfield; the caller
/// freezes and relocates the ball before the next visible frame.
///
/// `dt` must already be clamped by the caller (see `Params::MAX_DT`).
pub fn move_ball(
    ball: Ball,
    dt: f32,
    left_paddle: Option<&PaddleSnapshot>,
    right_paddle: Option<&PaddleSnapshot>,
    config: &Config,
) -> StepResult {
    let radius = config.ball_radius;

    let mut next = Ball::new(ball.pos + ball.vel * dt, ball.vel);

    // Top / bottom walls: clamp and reflect away from the boundary
    if next.pos.y - radius < 0.0 {
        next.pos.y = radius;
        next.vel.y = next.vel.y.abs();
    } else if next.pos.y + radius > config.playfield_height {
        next.pos.y = config.playfield_height - radius;
        next.vel.y = -next.vel.y.abs();
    }

    // Left paddle: only while travelling leftward and past the boundary plane
    if next.vel.x < 0.0 && next.pos.x - radius <= config.paddle_width {
        if let Some(paddle) = left_paddle {
            if paddle_overlaps_ball(next.pos.y, paddle.center_y, config.paddle_height, radius) {
                next.pos.x = config.paddle_width + radius;
                next.vel.x = next.vel.x.abs();
            }
        }
    }

    // Right paddle, mirrored about the right boundary plane
    let right_plane = config.right_paddle_plane();
    if next.vel.x > 0.0 && next.pos.x + radius >= right_plane {
        if let Some(paddle) = right_paddle {
            if paddle_overlaps_ball(next.pos.y, paddle.center_y, config.paddle_height, radius) {
                next.pos.x = right_plane - radius;
                next.vel.x = -next.vel.x.abs();
            }
        }
    }

    // Scoring: the trailing edge must fully cross the side boundary
    let scored = if next.pos.x + radius < 0.0 {
        Some(Side::Right)
    } else if next.pos.x - radius > config.playfield_width {
        Some(Side::Left)
    } else {
        None
    };

    StepResult { ball: next, scored }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use glam::Vec2;

    // Geometry used by the original physics tests
    fn test_config() -> Config {
        Config {
            playfield_width: 900.0,
            playfield_height: 600.0,
            paddle_width: 14.0,
            paddle_height: 120.0,
            ball_radius: 9.0,
            ..Config::default()
        }
    }

    fn step(
        ball: Ball,
        dt: f32,
        left: Option<PaddleSnapshot>,
        right: Option<PaddleSnapshot>,
    ) -> StepResult {
        move_ball(ball, dt, left.as_ref(), right.as_ref(), &test_config())
    }

    #[test]
    fn test_advances_linearly_with_no_collisions() {
        let ball = Ball::new(Vec2::new(450.0, 300.0), Vec2::new(100.0, 50.0));
        let result = step(ball, 0.5, None, None);

        assert!(approx_eq!(f32, result.ball.pos.x, 500.0, epsilon = 0.001));
        assert!(approx_eq!(f32, result.ball.pos.y, 325.0, epsilon = 0.001));
        assert_eq!(result.ball.vel, ball.vel, "Velocity unchanged in free flight");
        assert!(result.scored.is_none());
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let ball = Ball::new(Vec2::new(450.0, 300.0), Vec2::new(100.0, 50.0));
        let result = step(ball, 0.0, None, None);

        assert_eq!(result.ball.pos, ball.pos);
        assert_eq!(result.ball.vel, ball.vel);
        assert!(result.scored.is_none());
    }

    #[test]
    fn test_bounces_off_top_wall() {
        let ball = Ball::new(Vec2::new(100.0, 10.0), Vec2::new(0.0, -200.0));
        let result = step(ball, 0.2, None, None);

        assert_eq!(result.ball.pos.y, test_config().ball_radius, "Clamped to radius");
        assert!(result.ball.vel.y > 0.0, "Ball leaves the top wall downward");
    }

    #[test]
    fn test_bounces_off_bottom_wall() {
        let config = test_config();
        let ball = Ball::new(
            Vec2::new(100.0, config.playfield_height - 5.0),
            Vec2::new(0.0, 300.0),
        );
        let result = step(ball, 0.2, None, None);

        assert_eq!(result.ball.pos.y, config.playfield_height - config.ball_radius);
        assert!(result.ball.vel.y < 0.0, "Ball leaves the bottom wall upward");
    }

    #[test]
    fn test_wall_reflection_sign_holds_for_downward_reading() {
        // A ball already reflected off the top keeps vy > 0 on repeat contact
        let ball = Ball::new(Vec2::new(100.0, 5.0), Vec2::new(0.0, 50.0));
        let result = step(ball, 0.01, None, None);
        assert!(result.ball.vel.y > 0.0);
    }

    #[test]
    fn test_collides_with_left_paddle_when_overlapping_vertically() {
        let config = test_config();
        let ball = Ball::new(
            Vec2::new(config.paddle_width + config.ball_radius + 5.0, 250.0),
            Vec2::new(-400.0, 0.0),
        );
        let result = step(ball, 0.05, Some(PaddleSnapshot { center_y: 250.0 }), None);

        assert!(result.ball.vel.x > 0.0, "Reflected rightward");
        assert_eq!(result.ball.pos.x, config.paddle_width + config.ball_radius);
        assert!(result.scored.is_none(), "A paddle bounce never scores");
    }

    #[test]
    fn test_collides_with_right_paddle_when_overlapping_vertically() {
        let config = test_config();
        let start_x = config.right_paddle_plane() - config.ball_radius - 5.0;
        let ball = Ball::new(Vec2::new(start_x, 260.0), Vec2::new(500.0, 0.0));
        let result = step(ball, 0.05, None, Some(PaddleSnapshot { center_y: 260.0 }));

        assert!(result.ball.vel.x < 0.0, "Reflected leftward");
        assert_eq!(
            result.ball.pos.x,
            config.right_paddle_plane() - config.ball_radius
        );
        assert!(result.scored.is_none());
    }

    #[test]
    fn test_misses_paddle_outside_vertical_span() {
        let config = test_config();
        let ball = Ball::new(
            Vec2::new(config.paddle_width + config.ball_radius + 5.0, 400.0),
            Vec2::new(-400.0, 0.0),
        );
        // Paddle far above the ball's path
        let result = step(ball, 0.05, Some(PaddleSnapshot { center_y: 100.0 }), None);

        assert!(result.ball.vel.x < 0.0, "No bounce when overlap test fails");
    }

    #[test]
    fn test_does_not_bounce_when_moving_away_from_paddle() {
        let config = test_config();
        let ball = Ball::new(
            Vec2::new(config.paddle_width + config.ball_radius, 300.0),
            Vec2::new(400.0, 0.0),
        );
        let result = step(ball, 0.01, Some(PaddleSnapshot { center_y: 300.0 }), None);

        assert!(result.ball.vel.x > 0.0, "Ball moving away is left alone");
    }

    #[test]
    fn test_registers_score_for_right_when_ball_fully_exits_left() {
        let ball = Ball::new(Vec2::new(10.0, 300.0), Vec2::new(-1000.0, 0.0));
        let result = step(ball, 0.05, None, None);

        assert_eq!(result.scored, Some(Side::Right));
    }

    #[test]
    fn test_registers_score_for_left_when_ball_fully_exits_right() {
        let config = test_config();
        let ball = Ball::new(
            Vec2::new(config.playfield_width - 10.0, 300.0),
            Vec2::new(1000.0, 0.0),
        );
        let result = step(ball, 0.05, None, None);

        assert_eq!(result.scored, Some(Side::Left));
    }

    #[test]
    fn test_no_score_until_trailing_edge_fully_crosses() {
        let config = test_config();
        // Lands at x = -5: past the edge but the trailing edge (x + r = 4) has not crossed
        let ball = Ball::new(Vec2::new(5.0, 300.0), Vec2::new(-200.0, 0.0));
        let result = move_ball(ball, 0.05, None, None, &config);

        assert!(result.ball.pos.x < 0.0);
        assert!(result.scored.is_none(), "Partial exit is not a score");
    }

    #[test]
    fn test_does_not_bounce_if_paddle_not_provided() {
        let config = test_config();
        let ball = Ball::new(
            Vec2::new(config.paddle_width + config.ball_radius + 2.0, 300.0),
            Vec2::new(-500.0, 0.0),
        );
        let result = step(ball, 0.1, None, None);

        assert!(result.ball.vel.x < 0.0, "Missing paddle means pass-through");
    }

    #[test]
    fn test_paddle_bounce_excludes_scoring_on_that_side() {
        let config = test_config();
        // Fast enough to fully cross the left edge in one frame if unblocked
        let ball = Ball::new(Vec2::new(30.0, 300.0), Vec2::new(-2000.0, 0.0));
        let blocked = step(ball, 0.05, Some(PaddleSnapshot { center_y: 300.0 }), None);
        let unblocked = step(ball, 0.05, None, None);

        assert!(blocked.scored.is_none(), "Bounce prevents passing the boundary");
        assert!(blocked.ball.vel.x > 0.0);
        assert_eq!(unblocked.scored, Some(Side::Right));
    }

    #[test]
    fn test_corner_contact_reflects_both_axes() {
        let config = test_config();
        // Heading into the top-left corner where the paddle is waiting
        let ball = Ball::new(
            Vec2::new(config.paddle_width + config.ball_radius + 4.0, 12.0),
            Vec2::new(-300.0, -300.0),
        );
        let result = step(ball, 0.05, Some(PaddleSnapshot { center_y: 40.0 }), None);

        assert!(result.ball.vel.x > 0.0, "New vx from the paddle");
        assert!(result.ball.vel.y > 0.0, "New vy from the wall");
        assert_eq!(result.ball.pos.y, config.ball_radius);
        assert_eq!(result.ball.pos.x, config.paddle_width + config.ball_radius);
    }

    #[test]
    fn test_overlap_predicate_boundary() {
        // Exactly at half-height + radius counts as contact
        assert!(paddle_overlaps_ball(369.0, 300.0, 120.0, 9.0));
        assert!(!paddle_overlaps_ball(369.1, 300.0, 120.0, 9.0));
        assert!(paddle_overlaps_ball(231.0, 300.0, 120.0, 9.0));
    }

    #[test]
    fn test_step_is_deterministic() {
        let ball = Ball::new(Vec2::new(120.0, 80.0), Vec2::new(-340.0, 260.0));
        let left = PaddleSnapshot { center_y: 90.0 };
        let a = step(ball, 0.016, Some(left), None);
        let b = step(ball, 0.016, Some(left), None);

        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
        assert_eq!(a.scored, b.scored);
    }
}
