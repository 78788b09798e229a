//! A textured quad drawn through an element buffer, spinning around Z.

use std::mem::offset_of;

use glam::{Vec2, Vec3};
use glow::HasContext;

use crate::abs::{App, Mesh, ShaderProgram, Texture, Vertex, VertexAttribute, WindowConfig};
use crate::math;
use crate::scenes::{Frame, Scene, load_sample_textures};

pub const WINDOW: WindowConfig = WindowConfig::DEFAULT;

const VERTEX_SHADER: &str = include_str!("../shaders/transform/vert.glsl");
const FRAGMENT_SHADER: &str = include_str!("../shaders/transform/frag.glsl");

pub const EYE: Vec3 = Vec3::new(1.2, 1.2, 1.2);
pub const UP: Vec3 = Vec3::Z;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadVertex {
    pub position: Vec2,
    pub color: Vec3,
    pub texcoord: Vec2,
}

impl Vertex for QuadVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute {
            name: "position",
            components: 2,
            offset: offset_of!(QuadVertex, position),
        },
        VertexAttribute {
            name: "color",
            components: 3,
            offset: offset_of!(QuadVertex, color),
        },
        VertexAttribute {
            name: "texcoord",
            components: 2,
            offset: offset_of!(QuadVertex, texcoord),
        },
    ];
}

const fn vertex(position: [f32; 2], color: [f32; 3], texcoord: [f32; 2]) -> QuadVertex {
    QuadVertex {
        position: Vec2::from_array(position),
        color: Vec3::from_array(color),
        texcoord: Vec2::from_array(texcoord),
    }
}

pub const VERTICES: [QuadVertex; 4] = [
    vertex([-0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),  // top left
    vertex([0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),   // top right
    vertex([0.5, -0.5], [0.0, 0.0, 1.0], [1.0, 0.0]),  // bottom right
    vertex([-0.5, -0.5], [1.0, 1.0, 1.0], [0.0, 0.0]), // bottom left
];

pub const ELEMENTS: [u32; 6] = [0, 1, 2, 2, 3, 0];

pub struct Transform {
    mesh: Mesh,
    _textures: Vec<Texture>,
    program: ShaderProgram,
}

impl Transform {
    pub fn new(app: &App) -> Result<Self, String> {
        let program =
            ShaderProgram::from_sources(&app.gl, VERTEX_SHADER, FRAGMENT_SHADER, "outColor")?;
        let mesh = Mesh::new(&app.gl, &program, &VERTICES, &ELEMENTS, glow::TRIANGLES)?;

        program.use_program();
        mesh.bind();
        program.validate()?;
        crate::abs::check_error(&app.gl, "program");

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
}

impl Scene for Transform {
    fn render(&mut self, gl: &glow::Context, frame: &Frame) {
        self.program.set_uniform("model", math::spin(frame.elapsed));

        unsafe {
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.mesh.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_tightly_packed() {
        assert_eq!(QuadVertex::stride(), 7 * 4);
        let offsets: Vec<usize> = QuadVertex::ATTRIBUTES.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 2 * 4, 5 * 4]);
    }

    #[test]
    fn test_shader_declares_every_attribute() {
        for attribute in QuadVertex::ATTRIBUTES {
            let decl = format!("in vec{} {};", attribute.components, attribute.name);
            assert!(VERTEX_SHADER.contains(&decl), "missing `{decl}`");
        }
        for uniform in ["model", "view", "proj"] {
            assert!(VERTEX_SHADER.contains(&format!("uniform mat4 {uniform};")));
        }
        for (_, _, sampler) in crate::scenes::SAMPLE_TEXTURES {
            assert!(FRAGMENT_SHADER.contains(&format!("uniform sampler2D {sampler};")));
        }
    }

    #[test]
    fn test_elements_cover_the_quad() {
        assert!(ELEMENTS.iter().all(|&i| (i as usize) < VERTICES.len()));
        let mut used = ELEMENTS.to_vec();
        used.sort();
        used.dedup();
        assert_eq!(used, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_texcoords_follow_positions() {
        // The image is flipped on upload, so texcoord (0, 0) is the bottom left.
        for v in &VERTICES {
            assert_eq!(v.texcoord, v.position + Vec2::splat(0.5));
        }
    }
}
