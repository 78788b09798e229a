//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context, and the [`WindowConfig`] used to create it.

use std::sync::Arc;

use glow::HasContext;

use crate::input;

/// Window and context settings.
///
/// The context is always a forward compatible core profile and the window is
/// never resizable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub gl_version: (u8, u8),
    pub depth_bits: u8,
    pub stencil_bits: u8,
}

impl WindowConfig {
    pub const DEFAULT: WindowConfig = WindowConfig {
        title: "Testing",
        width: 800,
        height: 600,
        fullscreen: false,
        gl_version: (3, 2),
        depth_bits: 0,
        stencil_bits: 0,
    };
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
    should_close: bool,
}

impl App {
    /// Creates the window and makes its OpenGL context current.
    pub fn new(config: &WindowConfig) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(config.gl_version.0, config.gl_version.1);
        gl_attr.set_context_flags().forward_compatible().set();
        gl_attr.set_double_buffer(true);
        gl_attr.set_depth_size(config.depth_bits);
        gl_attr.set_stencil_size(config.stencil_bits);

        let mut builder = video_subsystem.window(config.title, config.width, config.height);
        builder.opengl();
        if config.fullscreen {
            builder.fullscreen();
        } else {
            builder.position_centered();
        }
        let window = builder.build().map_err(|e| e.to_string())?;

        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;
        if let Err(e) = video_subsystem.gl_set_swap_interval(sdl2::video::SwapInterval::VSync) {
            log::warn!("vsync unavailable: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        // Some loaders leave an INVALID_ENUM behind on 3.2+ core contexts.
        unsafe {
            gl.get_error();
        }
        log::info!(
            "{}x{} window with OpenGL {}",
            config.width,
            config.height,
            unsafe { gl.get_parameter_string(glow::VERSION) }
        );

        let event_pump = sdl.event_pump()?;

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl: Arc::new(gl),
            event_pump,
            should_close: false,
        })
    }

    /// Drains pending events, latching a close request if one arrives.
    pub fn poll_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            if input::close_requested(&event) {
                log::debug!("close requested by {event:?}");
                self.should_close = true;
            }
        }
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Size of the default framebuffer in pixels.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    pub fn swap(&self) {
        self.window.gl_swap_window();
    }
}
