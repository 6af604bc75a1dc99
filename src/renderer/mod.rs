//! Rendering module
//!
//! Pure pose math plus a thin drawing-surface seam. The canvas backend is
//! only compiled for wasm32.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod pose;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use pose::{BallPose, ball_pose, bounce_factor, reconcile_angles, speed_stretch};
pub use surface::{CommandRecorder, DrawCommand, DrawingSurface};

use crate::consts::BALL_COLOR;
use crate::sim::{Ball, SimState};

/// Clear the viewport and draw the ball
pub fn draw_frame<S: DrawingSurface>(surface: &mut S, state: &SimState) {
    surface.clear(state.viewport.width, state.viewport.height);
    draw_ball(surface, &state.ball);
}

/// Draw the ball squashed/stretched along its direction of travel
pub fn draw_ball<S: DrawingSurface>(surface: &mut S, ball: &Ball) {
    let pose = ball_pose(ball);

    surface.save();
    surface.translate(pose.center.x, pose.center.y);
    surface.rotate(pose.angle);
    // Reciprocal cross-axis scale keeps the apparent area constant
    surface.scale(pose.stretch, 1.0 / pose.stretch);
    surface.fill_circle(ball.radius(), BALL_COLOR);
    surface.restore();
}
