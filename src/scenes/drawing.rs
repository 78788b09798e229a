//! A flat-colored square made of two triangles.

use std::mem::offset_of;

use glam::{Vec2, Vec3};
use glow::HasContext;

use crate::abs::{App, Mesh, ShaderProgram, Vertex, VertexAttribute, WindowConfig};
use crate::scenes::{Frame, Scene};

pub const WINDOW: WindowConfig = WindowConfig::DEFAULT;

const VERTEX_SHADER: &str = include_str!("../shaders/drawing/vert.glsl");
const FRAGMENT_SHADER: &str = include_str!("../shaders/drawing/frag.glsl");

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorVertex {
    pub position: Vec2,
    pub color: Vec3,
}

impl Vertex for ColorVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute {
            name: "position",
            components: 2,
            offset: offset_of!(ColorVertex, position),
        },
        VertexAttribute {
            name: "color",
            components: 3,
            offset: offset_of!(ColorVertex, color),
        },
    ];
}

const fn vertex(x: f32, y: f32, r: f32, g: f32, b: f32) -> ColorVertex {
    ColorVertex {
        position: Vec2::new(x, y),
        color: Vec3::new(r, g, b),
    }
}

pub const VERTICES: [ColorVertex; 6] = [
    vertex(-0.5, 0.5, 1.0, 0.0, 0.0),  // top left
    vertex(0.5, 0.5, 0.0, 1.0, 0.0),   // top right
    vertex(0.5, -0.5, 0.0, 0.0, 1.0),  // bottom right
    vertex(0.5, -0.5, 0.0, 0.0, 1.0),  // bottom right
    vertex(-0.5, -0.5, 1.0, 1.0, 1.0), // bottom left
    vertex(-0.5, 0.5, 1.0, 0.0, 0.0),  // top left
];

pub struct Drawing {
    // Declared first so the mesh is released before the program.
    mesh: Mesh,
    _program: ShaderProgram,
}

impl Drawing {
    pub fn new(app: &App) -> Result<Self, String> {
        let program =
            ShaderProgram::from_sources(&app.gl, VERTEX_SHADER, FRAGMENT_SHADER, "outColor")?;
        let mesh = Mesh::new(&app.gl, &program, &VERTICES, &[], glow::TRIANGLES)?;

        program.use_program();
        mesh.bind();
        program.validate()?;
        crate::abs::check_error(&app.gl, "program");

        Ok(Self {
            mesh,
            _program: program,
        })
    }
}

impl Scene for Drawing {
    fn render(&mut self, gl: &glow::Context, _frame: &Frame) {
        unsafe {
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.mesh.draw();
    }
}
