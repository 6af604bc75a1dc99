//! Squash Ball - a draggable canvas ball with squash-and-stretch bounces
//!
//! Core modules:
//! - `sim`: Per-frame physics and pointer input (no rendering or platform dependencies)
//! - `renderer`: Squash/stretch pose and the drawing surface abstraction
//! - `app`: Event queue + frame driver tying input, simulation and rendering together

pub mod app;
pub mod renderer;
pub mod sim;

pub use app::App;

use glam::Vec2;

/// Fixed simulation constants (all per-frame, pixels)
pub mod consts {
    /// Downward acceleration added to vy each free frame
    pub const GRAVITY: f32 = 0.5;
    /// Multiplicative air resistance applied each free frame
    pub const DRAG: f32 = 0.98;
    /// Fraction of velocity kept (reversed) on wall contact
    pub const RESTITUTION: f32 = 0.8;
    /// Length of the squash/stretch animation after a wall contact
    pub const DEFORM_FRAMES: u32 = 10;

    /// Speed that maps to one unit of stretch
    pub const SPEED_DIVISOR: f32 = 50.0;
    /// Upper bound on speed-driven stretch (1.0 + this)
    pub const MAX_STRETCH: f32 = 0.5;

    pub const BALL_RADIUS: f32 = 80.0;
    pub const BALL_COLOR: &str = "blue";
}

/// Linear blend from `a` to `b` by `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Direction of a vector in radians; a zero vector points along +x
#[inline]
pub fn heading(v: Vec2) -> f32 {
    if v == Vec2::ZERO {
        0.0
    } else {
        v.y.atan2(v.x)
    }
}
