//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing mesh data on the GPU side.
//! Vertices should implement the [`Vertex`] trait.

use std::sync::Arc;

use glow::HasContext;

use crate::abs::ShaderProgram;

/// A single `f32` vector attribute inside an interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Name of the `in` variable in the vertex shader.
    pub name: &'static str,
    pub components: i32,
    /// Byte offset from the start of the vertex.
    pub offset: usize,
}

/// Trait that defines the layout of a vertex.
pub trait Vertex: Sized {
    /// Attributes in the order they appear in memory.
    const ATTRIBUTES: &'static [VertexAttribute];

    /// Distance in bytes between two consecutive vertices.
    fn stride() -> i32 {
        std::mem::size_of::<Self>() as i32
    }

    /// Sets up the vertex attribute pointers for the vertex.
    ///
    /// Locations are looked up by name in `program`; the vertex array must be bound.
    fn vertex_attribs(gl: &glow::Context, program: &ShaderProgram) -> Result<(), String> {
        for attribute in Self::ATTRIBUTES {
            let location = program
                .attrib_location(attribute.name)
                .ok_or_else(|| format!("attribute `{}` not found in program", attribute.name))?;
            unsafe {
                gl.enable_vertex_attrib_array(location);
                gl.vertex_attrib_pointer_f32(
                    location,
                    attribute.components,
                    glow::FLOAT,
                    false,
                    Self::stride(),
                    attribute.offset as i32,
                );
            }
            crate::abs::check_error(gl, &format!("{} attrib pointer", attribute.name));
        }
        Ok(())
    }
}

fn as_bytes<T>(data: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, std::mem::size_of_val(data)) }
}

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    draw_mode: u32,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    vertex_count: usize,
    index_count: usize,
}

impl Mesh {
    /// Creates a new mesh from the given vertex and index data.
    ///
    /// An element buffer is only created when `indices` is not empty.
    pub fn new<V: Vertex>(
        gl: &Arc<glow::Context>,
        program: &ShaderProgram,
        vertices: &[V],
        indices: &[u32],
        draw_mode: u32,
    ) -> Result<Self, String> {
        unsafe {
            let vao = gl.create_vertex_array()?;
            gl.bind_vertex_array(Some(vao));
            crate::abs::check_error(gl, "vertex array object");

            let vbo = gl.create_buffer()?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, as_bytes(vertices), glow::STATIC_DRAW);
            crate::abs::check_error(gl, "vertex data");

            let ebo = if indices.is_empty() {
                None
            } else {
                let ebo = gl.create_buffer()?;
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                gl.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    as_bytes(indices),
                    glow::STATIC_DRAW,
                );
                crate::abs::check_error(gl, "element data");
                Some(ebo)
            };

            let mesh = Self {
                gl: Arc::clone(gl),
                draw_mode,
                vao,
                vbo,
                ebo,
                vertex_count: vertices.len(),
                index_count: indices.len(),
            };

            V::vertex_attribs(gl, program)?;

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Ok(mesh)
        }
    }

    /// Binds the vertex array so the attached program can be validated against it.
    pub fn bind(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
        }
    }

    /// Draws the whole mesh, through the element buffer if there is one.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            if self.ebo.is_some() {
                self.gl.draw_elements(
                    self.draw_mode,
                    self.index_count as i32,
                    glow::UNSIGNED_INT,
                    0,
                );
            } else {
                self.gl
                    .draw_arrays(self.draw_mode, 0, self.vertex_count as i32);
            }
            self.gl.bind_vertex_array(None);
        }
    }

    /// Draws `count` vertices starting at `first`, ignoring the element buffer.
    pub fn draw_range(&self, first: usize, count: usize) {
        debug_assert!(first + count <= self.vertex_count);
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl
                .draw_arrays(self.draw_mode, first as i32, count as i32);
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                self.gl.delete_buffer(ebo);
            }
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
