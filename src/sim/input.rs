//! Pointer and viewport input
//!
//! Host callbacks never touch the state directly: they enqueue a `HostEvent`
//! and the frame loop drains the queue before the next tick, so every event
//! that arrived since the last frame is fully applied before physics runs.

use std::collections::VecDeque;

use glam::Vec2;

use super::state::{SimState, Viewport};

/// An input event delivered by the host, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    PointerDown(Vec2),
    /// Delivered globally, also outside the canvas while a button is held
    PointerMove(Vec2),
    PointerUp,
    Resize { width: f32, height: f32 },
}

/// Apply a single event to the state
pub fn handle_event(state: &mut SimState, event: HostEvent) {
    match event {
        HostEvent::PointerDown(p) => pointer_down(state, p),
        HostEvent::PointerMove(p) => pointer_move(state, p),
        HostEvent::PointerUp => pointer_up(state),
        HostEvent::Resize { width, height } => {
            state.viewport = Viewport::new(width, height);
            log::info!("Viewport resized to {}x{}", width, height);
        }
    }
}

/// Grab the ball if the pointer lands on it
fn pointer_down(state: &mut SimState, p: Vec2) {
    if !state.ball.contains(p) {
        return;
    }
    state.ball.dragging = true;
    state.ball.bounce = None;
    state.last_pointer = p;
    log::debug!("Drag started at {}", p);
}

/// Teleport the held ball to the pointer; velocity is the delta since the last move
fn pointer_move(state: &mut SimState, p: Vec2) {
    if !state.ball.dragging {
        return;
    }
    state.ball.vel = p - state.last_pointer;
    state.ball.pos = p;
    state.last_pointer = p;
}

/// Release; the last drag delta becomes the throw velocity
fn pointer_up(state: &mut SimState) {
    if state.ball.dragging {
        log::debug!("Thrown with velocity {}", state.ball.vel);
    }
    state.ball.dragging = false;
}

/// FIFO of host events waiting for the next frame
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<HostEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: HostEvent) {
        self.pending.push_back(event);
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain every pending event into `state` in arrival order
    pub fn apply(&mut self, state: &mut SimState) {
        for event in self.pending.drain(..) {
            handle_event(state, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Bounce;
    use crate::sim::tick;

    fn state_with_ball_at(x: f32, y: f32) -> SimState {
        let mut state = SimState::new(Viewport::new(800.0, 600.0));
        state.ball.pos = Vec2::new(x, y);
        state
    }

    #[test]
    fn test_pointer_down_outside_ball_is_ignored() {
        let mut state = state_with_ball_at(100.0, 100.0);
        handle_event(&mut state, HostEvent::PointerDown(Vec2::new(300.0, 300.0)));
        assert!(!state.ball.dragging);

        handle_event(&mut state, HostEvent::PointerMove(Vec2::new(310.0, 300.0)));
        assert_eq!(state.ball.pos, Vec2::new(100.0, 100.0));
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_drag_throw_uses_last_delta() {
        let mut state = state_with_ball_at(100.0, 100.0);
        handle_event(&mut state, HostEvent::PointerDown(Vec2::new(100.0, 100.0)));
        assert!(state.ball.dragging);

        handle_event(&mut state, HostEvent::PointerMove(Vec2::new(125.0, 100.0)));
        handle_event(&mut state, HostEvent::PointerMove(Vec2::new(150.0, 100.0)));
        handle_event(&mut state, HostEvent::PointerUp);

        assert!(!state.ball.dragging);
        assert_eq!(state.ball.vel, Vec2::new(25.0, 0.0));
        assert_eq!(state.ball.pos, Vec2::new(150.0, 100.0));
    }

    #[test]
    fn test_drag_cancels_bounce() {
        let mut state = state_with_ball_at(400.0, 300.0);
        state.ball.bounce = Some(Bounce::new(Vec2::new(4.0, 9.0)));
        assert_eq!(state.ball.bounce_timer(), 1);

        handle_event(&mut state, HostEvent::PointerDown(Vec2::new(420.0, 310.0)));
        assert!(state.ball.dragging);
        assert_eq!(state.ball.bounce_timer(), 0);
        assert!(state.ball.bounce.is_none());
        assert_eq!(state.last_pointer, Vec2::new(420.0, 310.0));
    }

    #[test]
    fn test_pointer_up_keeps_position() {
        let mut state = state_with_ball_at(400.0, 300.0);
        state.ball.vel = Vec2::new(1.0, 2.0);
        handle_event(&mut state, HostEvent::PointerUp);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_resize_leaves_ball_alone() {
        let mut state = state_with_ball_at(700.0, 500.0);
        handle_event(
            &mut state,
            HostEvent::Resize {
                width: 300.0,
                height: 200.0,
            },
        );
        assert_eq!(state.viewport, Viewport::new(300.0, 200.0));
        assert_eq!(state.ball.pos, Vec2::new(700.0, 500.0));
    }

    #[test]
    fn test_queue_applies_in_order_before_tick() {
        let mut state = state_with_ball_at(100.0, 100.0);
        let mut queue = EventQueue::new();
        queue.push(HostEvent::PointerDown(Vec2::new(100.0, 100.0)));
        queue.push(HostEvent::PointerMove(Vec2::new(110.0, 95.0)));
        assert!(!queue.is_empty());

        queue.apply(&mut state);
        assert!(queue.is_empty());

        // Still held, so the tick leaves the ball where the pointer put it
        tick(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(110.0, 95.0));
        assert_eq!(state.ball.vel, Vec2::new(10.0, -5.0));
    }
}
