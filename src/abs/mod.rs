//! Thin owning wrappers over the OpenGL objects the tutorials use:
//! the window and context, shaders, meshes and textures.

pub mod app;
pub mod debug;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use debug::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
