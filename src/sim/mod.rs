//! Simulation module
//!
//! Ball physics and pointer input. Pure and deterministic:
//! - One tick per display frame, velocities in pixels/frame
//! - No rendering or platform dependencies

pub mod input;
pub mod state;
pub mod tick;

pub use input::{EventQueue, HostEvent, handle_event};
pub use state::{Ball, Bounce, SimState, Viewport};
pub use tick::tick;
