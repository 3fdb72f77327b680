use crate::components::{Paddle, PaddleKeys};
use crate::config::Config;

/// Movement delta for one frame of held-key input.
/// Both keys held (or neither) is a tie and moves nothing.
pub fn paddle_delta(keys: PaddleKeys, speed: f32, dt: f32) -> f32 {
    match (keys.up, keys.down) {
        (true, false) => -speed * dt,
        (false, true) => speed * dt,
        _ => 0.0,
    }
}

/// Apply paddle movement based on held keys, clamped to the playfield
pub fn move_paddle(paddle: &mut Paddle, keys: PaddleKeys, dt: f32, config: &Config) {
    let delta = paddle_delta(keys, config.paddle_speed, dt);
    if delta != 0.0 {
        paddle.center_y = config.clamp_paddle_y(paddle.center_y + delta);
    }
}
