//! A spinning textured cube standing on a floor that reflects it.
//!
//! The reflection is confined to the floor with the stencil buffer: the floor
//! writes 1 into the stencil, then the mirrored cube is only drawn where the
//! stencil equals 1.

use std::mem::offset_of;

use glam::{Mat4, Vec2, Vec3};
use glow::HasContext;

use crate::abs::{App, Mesh, ShaderProgram, Texture, Vertex, VertexAttribute, WindowConfig};
use crate::math;
use crate::scenes::{Frame, Scene, load_sample_textures};

pub const WINDOW: WindowConfig = WindowConfig {
    depth_bits: 24,
    stencil_bits: 8,
    ..WindowConfig::DEFAULT
};

const VERTEX_SHADER: &str = include_str!("../shaders/depth/vert.glsl");
const FRAGMENT_SHADER: &str = include_str!("../shaders/depth/frag.glsl");

pub const EYE: Vec3 = Vec3::new(2.2, 3.2, 2.2);
pub const UP: Vec3 = Vec3::new(0.0, 0.0, 0.5);

/// Tint applied to the reflected cube.
pub const REFLECTION_TINT: Vec3 = Vec3::splat(0.3);

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeVertex {
    pub position: Vec3,
    pub color: Vec3,
    pub texcoord: Vec2,
}

impl Vertex for CubeVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute {
            name: "position",
            components: 3,
            offset: offset_of!(CubeVertex, position),
        },
        VertexAttribute {
            name: "color",
            components: 3,
            offset: offset_of!(CubeVertex, color),
        },
        VertexAttribute {
            name: "texcoord",
            components: 2,
            offset: offset_of!(CubeVertex, texcoord),
        },
    ];
}

/// Vertex ranges of the cube and the floor inside [`VERTICES`].
pub const CUBE: std::ops::Range<usize> = 0..36;
pub const FLOOR: std::ops::Range<usize> = 36..42;

const fn white(x: f32, y: f32, z: f32, u: f32, v: f32) -> CubeVertex {
    CubeVertex {
        position: Vec3::new(x, y, z),
        color: Vec3::ONE,
        texcoord: Vec2::new(u, v),
    }
}

const fn black(x: f32, y: f32, z: f32, u: f32, v: f32) -> CubeVertex {
    CubeVertex {
        position: Vec3::new(x, y, z),
        color: Vec3::ZERO,
        texcoord: Vec2::new(u, v),
    }
}

#[rustfmt::skip]
pub const VERTICES: [CubeVertex; 42] = [
    white(-0.5, -0.5, -0.5, 0.0, 0.0),
    white( 0.5, -0.5, -0.5, 1.0, 0.0),
    white( 0.5,  0.5, -0.5, 1.0, 1.0),
    white( 0.5,  0.5, -0.5, 1.0, 1.0),
    white(-0.5,  0.5, -0.5, 0.0, 1.0),
    white(-0.5, -0.5, -0.5, 0.0, 0.0),

    white(-0.5, -0.5,  0.5, 0.0, 0.0),
    white( 0.5, -0.5,  0.5, 1.0, 0.0),
    white( 0.5,  0.5,  0.5, 1.0, 1.0),
    white( 0.5,  0.5,  0.5, 1.0, 1.0),
    white(-0.5,  0.5,  0.5, 0.0, 1.0),
    white(-0.5, -0.5,  0.5, 0.0, 0.0),

    white(-0.5,  0.5,  0.5, 1.0, 0.0),
    white(-0.5,  0.5, -0.5, 1.0, 1.0),
    white(-0.5, -0.5, -0.5, 0.0, 1.0),
    white(-0.5, -0.5, -0.5, 0.0, 1.0),
    white(-0.5, -0.5,  0.5, 0.0, 0.0),
    white(-0.5,  0.5,  0.5, 1.0, 0.0),

    white( 0.5,  0.5,  0.5, 1.0, 0.0),
    white( 0.5,  0.5, -0.5, 1.0, 1.0),
    white( 0.5, -0.5, -0.5, 0.0, 1.0),
    white( 0.5, -0.5, -0.5, 0.0, 1.0),
    white( 0.5, -0.5,  0.5, 0.0, 0.0),
    white( 0.5,  0.5,  0.5, 1.0, 0.0),

    white(-0.5, -0.5, -0.5, 0.0, 1.0),
    white( 0.5, -0.5, -0.5, 1.0, 1.0),
    white( 0.5, -0.5,  0.5, 1.0, 0.0),
    white( 0.5, -0.5,  0.5, 1.0, 0.0),
    white(-0.5, -0.5,  0.5, 0.0, 0.0),
    white(-0.5, -0.5, -0.5, 0.0, 1.0),

    white(-0.5,  0.5, -0.5, 0.0, 1.0),
    white( 0.5,  0.5, -0.5, 1.0, 1.0),
    white( 0.5,  0.5,  0.5, 1.0, 0.0),
    white( 0.5,  0.5,  0.5, 1.0, 0.0),
    white(-0.5,  0.5,  0.5, 0.0, 0.0),
    white(-0.5,  0.5, -0.5, 0.0, 1.0),

    // floor
    black(-1.0, -1.0, -0.5, 0.0, 0.0),
    black( 1.0, -1.0, -0.5, 1.0, 0.0),
    black( 1.0,  1.0, -0.5, 1.0, 1.0),
    black( 1.0,  1.0, -0.5, 1.0, 1.0),
    black(-1.0,  1.0, -0.5, 0.0, 1.0),
    black(-1.0, -1.0, -0.5, 0.0, 0.0),
];

pub struct Depth {
    mesh: Mesh,
    _textures: Vec<Texture>,
    program: ShaderProgram,
}

impl Depth {
    pub fn new(app: &App) -> Result<Self, String> {
        unsafe {
            app.gl.enable(glow::DEPTH_TEST);
        }

        let program =
            ShaderProgram::from_sources(&app.gl, VERTEX_SHADER, FRAGMENT_SHADER, "outColor")?;
        let mesh = Mesh::new(&app.gl, &program, &VERTICES, &[], glow::TRIANGLES)?;

        program.use_program();
        mesh.bind();
        program.validate()?;
        crate::abs::check_error(&app.gl, "program");

        program.set_uniform("overrideColor", Vec3::ONE);
        crate::abs::check_error(&app.gl, "overrideColor uniform");

        let textures = load_sample_textures(app, &program)?;

        program.set_uniform("view", math::look_at(EYE, Vec3::ZERO, UP));
        program.set_uniform("proj", math::projection());
        crate::abs::check_error(&app.gl, "matrices");

        Ok(Self {
            mesh,
            _textures: textures,
            program,
        })
    }

    fn draw_cube(&self, model: Mat4) {
        self.program.set_uniform("model", model);
        self.mesh.draw_range(CUBE.start, CUBE.len());
    }
}

impl Scene for Depth {
    fn render(&mut self, gl: &glow::Context, frame: &Frame) {
        unsafe {
            gl.clear_color(1.0, 1.0, 1.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let model = math::spin(frame.elapsed);
        self.draw_cube(model);

        unsafe {
            gl.enable(glow::STENCIL_TEST);

            // floor marks the stencil and leaves depth alone
            gl.stencil_func(glow::ALWAYS, 1, 0xFF);
            gl.stencil_op(glow::KEEP, glow::KEEP, glow::REPLACE);
            gl.stencil_mask(0xFF);
            gl.depth_mask(false);
            gl.clear(glow::STENCIL_BUFFER_BIT);
        }
        self.mesh.draw_range(FLOOR.start, FLOOR.len());

        unsafe {
            gl.stencil_func(glow::EQUAL, 1, 0xFF);
            gl.stencil_mask(0x00);
            gl.depth_mask(true);
        }
        self.program.set_uniform("overrideColor", REFLECTION_TINT);
        self.draw_cube(math::mirror_below(model));
        self.program.set_uniform("overrideColor", Vec3::ONE);

        unsafe {
            gl.disable(glow::STENCIL_TEST);
        }
    }
}
