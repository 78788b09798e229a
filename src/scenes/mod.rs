//! Module providing the `Scene` trait, the frame loop and all tutorial scenes.

use std::time::{Duration, Instant};

use glow::HasContext;

use crate::abs::{App, ShaderProgram, Texture, WindowConfig, check_error};

pub mod context_creation;
pub mod depth;
pub mod drawing;
pub mod transform;

/// Per-frame information handed to a scene.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Time since the frame loop started.
    pub elapsed: Duration,
}

/// The Scene trait defines the common interface for all tutorial scenes.
pub trait Scene {
    /// Renders one frame. The viewport already covers the whole window.
    fn render(&mut self, gl: &glow::Context, frame: &Frame);
}

/// Images blended by the textured scenes, with their texture unit and sampler name.
pub const SAMPLE_TEXTURES: [(&str, u32, &str); 2] = [
    ("sample.png", 0, "texKitten"),
    ("sample2.png", 1, "texPuppy"),
];

/// Loads [`SAMPLE_TEXTURES`] from the working directory, binds each to its
/// unit and points the matching sampler of `program` at it.
///
/// `program` must be in use.
pub fn load_sample_textures(app: &App, program: &ShaderProgram) -> Result<Vec<Texture>, String> {
    let mut textures = Vec::with_capacity(SAMPLE_TEXTURES.len());
    for (path, unit, sampler) in SAMPLE_TEXTURES {
        let texture = Texture::from_png(&app.gl, path)?;
        texture.bind(unit);
        program.set_uniform(sampler, unit as i32);
        log::info!(
            "{path} ({}x{}) bound to unit {unit}",
            texture.width(),
            texture.height()
        );
        textures.push(texture);
    }
    check_error(&app.gl, "textures");
    Ok(textures)
}

/// Opens a window, builds a scene in it and drives the frame loop until the
/// window is asked to close.
pub fn run<S, F>(config: &WindowConfig, setup: F) -> Result<(), String>
where
    S: Scene,
    F: FnOnce(&App) -> Result<S, String>,
{
    let mut app = App::new(config)?;
    let mut scene = setup(&app)?;
    log::info!("{} ready", std::any::type_name::<S>());

    let start = Instant::now();
    loop {
        app.poll_events();
        if app.should_close() {
            break;
        }

        let (width, height) = app.drawable_size();
        unsafe {
            app.gl.viewport(0, 0, width as i32, height as i32);
        }

        let frame = Frame {
            elapsed: start.elapsed(),
        };
        scene.render(&app.gl, &frame);

        check_error(&app.gl, "main loop");
        app.swap();
    }

    log::info!("closing after {:.1}s", start.elapsed().as_secs_f32());
    Ok(())
}
