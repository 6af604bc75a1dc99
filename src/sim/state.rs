//! Ball and simulation state
//!
//! One `SimState` value is owned by the frame loop and handed by reference to
//! the input handlers, the tick and the renderer.

use glam::Vec2;

use crate::consts::*;

/// An in-progress squash/stretch deformation after a wall contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    /// Frames since the contact, starting at 1
    pub timer: u32,
    /// Frame count after which the deformation ends
    pub max: u32,
    /// Velocity at the instant of contact
    pub start_vel: Vec2,
}

impl Bounce {
    pub fn new(start_vel: Vec2) -> Self {
        Self {
            timer: 1,
            max: DEFORM_FRAMES,
            start_vel,
        }
    }

    /// Progress through the deformation in (0, 1]
    pub fn percent(&self) -> f32 {
        if self.max == 0 {
            1.0
        } else {
            self.timer as f32 / self.max as f32
        }
    }
}

/// The ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    radius: f32,
    /// Held by the pointer; physics is suspended
    pub dragging: bool,
    /// `None` when not bouncing
    pub bounce: Option<Bounce>,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            dragging: false,
            bounce: None,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Frames into the current bounce, 0 when not bouncing
    pub fn bounce_timer(&self) -> u32 {
        self.bounce.map_or(0, |b| b.timer)
    }

    pub fn is_bouncing(&self) -> bool {
        self.bounce.is_some()
    }

    /// A wall contact happened on the most recent tick. Also true when the
    /// contact lands on the same tick the previous bounce ran out.
    pub fn bounce_started(&self) -> bool {
        self.bounce_timer() == 1
    }

    /// Whether `point` lies on or inside the ball
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.radius
    }

    /// Step the deformation timer, ending the bounce once it runs past `max`
    pub fn advance_bounce(&mut self) {
        if let Some(bounce) = &mut self.bounce {
            bounce.timer += 1;
            if bounce.timer > bounce.max {
                self.bounce = None;
            }
        }
    }
}

/// Drawing surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Everything the frame loop mutates
#[derive(Debug, Clone)]
pub struct SimState {
    pub ball: Ball,
    pub viewport: Viewport,
    /// Pointer position at the previous drag event
    pub last_pointer: Vec2,
}

impl SimState {
    /// A resting ball in the middle of the viewport
    pub fn new(viewport: Viewport) -> Self {
        Self {
            ball: Ball::new(viewport.center(), BALL_RADIUS),
            viewport,
            last_pointer: Vec2::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centers_ball() {
        let state = SimState::new(Viewport::new(800.0, 600.0));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.ball.radius(), BALL_RADIUS);
        assert!(!state.ball.dragging);
        assert_eq!(state.ball.bounce_timer(), 0);
    }

    #[test]
    fn test_contains_edge_is_inclusive() {
        let ball = Ball::new(Vec2::new(100.0, 100.0), 10.0);
        assert!(ball.contains(Vec2::new(110.0, 100.0)));
        assert!(ball.contains(Vec2::new(100.0, 100.0)));
        assert!(!ball.contains(Vec2::new(110.1, 100.0)));
    }

    #[test]
    fn test_advance_bounce_runs_full_length() {
        let mut ball = Ball::new(Vec2::ZERO, 10.0);
        ball.bounce = Some(Bounce::new(Vec2::new(3.0, 4.0)));

        for expected in 2..=DEFORM_FRAMES {
            ball.advance_bounce();
            assert_eq!(ball.bounce_timer(), expected);
        }
        ball.advance_bounce();
        assert_eq!(ball.bounce_timer(), 0);
        assert!(ball.bounce.is_none());

        // Idle when not bouncing
        ball.advance_bounce();
        assert!(ball.bounce.is_none());
    }

    #[test]
    fn test_percent_guards_zero_max() {
        let bounce = Bounce {
            timer: 1,
            max: 0,
            start_vel: Vec2::ZERO,
        };
        assert_eq!(bounce.percent(), 1.0);
        assert_eq!(Bounce::new(Vec2::X).percent(), 0.1);
    }
}
