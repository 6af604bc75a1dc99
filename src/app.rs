//! Frame driver
//!
//! Owns the simulation state and the host event queue. Each frame drains
//! queued input, advances physics one step, then redraws.

use crate::renderer::{DrawingSurface, draw_frame};
use crate::sim::{EventQueue, HostEvent, SimState, Viewport, tick};

pub struct App {
    state: SimState,
    events: EventQueue,
    frames: u64,
}

impl App {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            state: SimState::new(Viewport::new(width, height)),
            events: EventQueue::new(),
            frames: 0,
        }
    }

    /// Queue a host event for the next frame
    pub fn push_event(&mut self, event: HostEvent) {
        self.events.push(event);
    }

    /// Run one display frame
    pub fn frame<S: DrawingSurface>(&mut self, surface: &mut S) {
        self.events.apply(&mut self.state);
        tick(&mut self.state);
        draw_frame(surface, &self.state);
        self.frames += 1;
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
