//! Drawing surface abstraction
//!
//! The renderer only needs a 2D context with a transform stack and a filled
//! circle primitive. `CommandRecorder` captures calls for tests and headless runs.

/// Minimal 2D drawing context
pub trait DrawingSurface {
    /// Clear `[0, width] x [0, height]`
    fn clear(&mut self, width: f32, height: f32);
    /// Push the current transform
    fn save(&mut self);
    /// Pop back to the last saved transform
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, sx: f32, sy: f32);
    /// Fill a circle of `radius` at the transformed origin
    fn fill_circle(&mut self, radius: f32, color: &str);
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Rotate(f32),
    Scale { sx: f32, sy: f32 },
    FillCircle { radius: f32, color: String },
}

/// Surface that records every call instead of drawing
#[derive(Debug, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded commands, leaving the recorder empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawingSurface for CommandRecorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, radians: f32) {
        self.commands.push(DrawCommand::Rotate(radians));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.commands.push(DrawCommand::Scale { sx, sy });
    }

    fn fill_circle(&mut self, radius: f32, color: &str) {
        self.commands.push(DrawCommand::FillCircle {
            radius,
            color: color.to_string(),
        });
    }
}
