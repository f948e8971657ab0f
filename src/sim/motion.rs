//! Ball motion
//!
//! One fixed Euler step per tick. There is no delta time: the frame driver is
//! assumed to run at a constant rate.

use glam::Vec2;

use super::state::Ball;

/// Position after one tick
#[inline]
pub fn next_position(pos: Vec2, vel: Vec2) -> Vec2 {
    pos + vel
}

/// Commit one tick of motion to the ball
pub fn integrate(ball: &mut Ball) {
    ball.pos = next_position(ball.pos, ball.vel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_adds_velocity() {
        let mut ball = Ball {
            pos: Vec2::new(240.0, 350.0),
            vel: Vec2::new(3.0, -3.0),
            radius: 10.0,
        };
        integrate(&mut ball);
        assert_eq!(ball.pos, Vec2::new(243.0, 347.0));
        integrate(&mut ball);
        assert_eq!(ball.pos, Vec2::new(246.0, 344.0));
        assert_eq!(ball.vel, Vec2::new(3.0, -3.0));
    }
}
