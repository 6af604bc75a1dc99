//! Per-frame simulation step
//!
//! Advances the ball by one display frame: bounce timer, gravity, Euler
//! integration, wall contacts and air resistance.

use super::state::{Ball, Bounce, SimState};
use crate::consts::*;

/// Wall axis hit during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState) {
    let ball = &mut state.ball;
    ball.advance_bounce();

    // Pointer or deformation owns the ball this frame
    if ball.dragging || ball.is_bouncing() {
        return;
    }

    ball.vel.y += GRAVITY;
    ball.pos += ball.vel;

    let r = ball.radius();
    let (width, height) = (state.viewport.width, state.viewport.height);

    if ball.pos.x - r < 0.0 || ball.pos.x + r > width {
        wall_contact(ball, Axis::Horizontal);
        ball.pos.x = clamp_to_extent(ball.pos.x, r, width);
    }

    // Runs after the horizontal check; on a corner hit this bounce replaces that one
    if ball.pos.y - r < 0.0 || ball.pos.y + r > height {
        wall_contact(ball, Axis::Vertical);
        ball.pos.y = clamp_to_extent(ball.pos.y, r, height);
    }

    ball.vel *= DRAG;
}

/// Reflect and damp the velocity component on `axis`, starting a deformation
fn wall_contact(ball: &mut Ball, axis: Axis) {
    log::debug!("wall contact {:?} at {} with velocity {}", axis, ball.pos, ball.vel);
    ball.bounce = Some(Bounce::new(ball.vel));
    match axis {
        Axis::Horizontal => ball.vel.x = -ball.vel.x * RESTITUTION,
        Axis::Vertical => ball.vel.y = -ball.vel.y * RESTITUTION,
    }
}

/// Keep a center coordinate at least `r` away from both ends of `[0, extent]`.
/// An extent smaller than the diameter pins the ball at `r`.
#[inline]
fn clamp_to_extent(v: f32, r: f32, extent: f32) -> f32 {
    v.min(extent - r).max(r)
}
