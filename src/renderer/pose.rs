//! Squash and stretch pose
//!
//! Turns the ball's velocity and bounce phase into the affine parameters used
//! to draw it. Nothing here writes back to the simulation.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::consts::{MAX_STRETCH, SPEED_DIVISOR};
use crate::sim::Ball;
use crate::{heading, lerp};

/// Where and how to draw the ball this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallPose {
    pub center: Vec2,
    /// Rotation aligning the stretch axis with the direction of travel
    pub angle: f32,
    /// Scale along the travel axis; the cross axis uses the reciprocal
    pub stretch: f32,
}

/// Speed-driven elongation, 1.0 at rest up to `1.0 + MAX_STRETCH`
#[inline]
pub fn speed_stretch(speed: f32) -> f32 {
    1.0 + (speed / SPEED_DIVISOR).min(MAX_STRETCH)
}

/// Bump curve over the bounce, zero at both ends and peaking mid-bounce
#[inline]
pub fn bounce_factor(percent: f32) -> f32 {
    (percent * PI).sin() * percent * (1.0 - percent) * 4.0
}

/// Shift one of two headings by a full turn so blending between them takes
/// the short way around
pub fn reconcile_angles(mut prev: f32, mut next: f32) -> (f32, f32) {
    if prev - next > PI {
        next += TAU;
    } else if prev - next < -PI {
        prev += TAU;
    }
    (prev, next)
}

/// Compute the draw pose for the ball's current state
pub fn ball_pose(ball: &Ball) -> BallPose {
    let speed = ball.vel.length();
    let mut stretch = speed_stretch(speed);
    let mut center = ball.pos;
    let mut angle = heading(ball.vel);

    if let Some(bounce) = ball.bounce {
        let percent = bounce.percent();

        // Incoming direction is the reverse of the velocity at contact
        let (prev, next) = reconcile_angles(heading(bounce.start_vel) + PI, heading(ball.vel));

        let factor = bounce_factor(percent);
        center.y += factor * ball.radius() * (stretch - 1.0);
        stretch = lerp(stretch, 1.0 / stretch, factor);
        angle = lerp(prev, next, percent);
    }

    BallPose {
        center,
        angle,
        stretch,
    }
}
