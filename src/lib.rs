//! Small OpenGL tutorial programs.
//!
//! Each binary under `src/bin` opens a window, uploads a bit of static vertex
//! data and draws it until the window is closed. The shared plumbing lives here.

pub mod abs;
pub mod input;
pub mod logging;
pub mod math;
pub mod scenes;
