//! The bare window: creates a fullscreen context and a single buffer.

use std::sync::Arc;

use glow::HasContext;

use crate::abs::{App, WindowConfig};
use crate::scenes::{Frame, Scene};

pub const WINDOW: WindowConfig = WindowConfig {
    width: 2560,
    height: 1600,
    fullscreen: true,
    ..WindowConfig::DEFAULT
};

/// Holds the one buffer handle the program generates.
pub struct ContextCreation {
    gl: Arc<glow::Context>,
    buffer: glow::Buffer,
}

impl ContextCreation {
    pub fn new(app: &App) -> Result<Self, String> {
        let buffer = unsafe { app.gl.create_buffer()? };
        log::info!("generated buffer {buffer:?}");
        Ok(Self {
            gl: Arc::clone(&app.gl),
            buffer,
        })
    }
}

impl Scene for ContextCreation {
    fn render(&mut self, _gl: &glow::Context, _frame: &Frame) {}
}

impl Drop for ContextCreation {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_fullscreen() {
        assert!(WINDOW.fullscreen);
        assert_eq!((WINDOW.width, WINDOW.height), (2560, 1600));
        assert_eq!(WINDOW.gl_version, (3, 2));
    }
}
