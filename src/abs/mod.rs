//! Thin owners of the SDL window and the OpenGL objects the lessons create:
//! application setup, shader management and mesh handling.

pub mod app;
pub mod mesh;
pub mod shader;

pub use app::*;
pub use mesh::*;
pub use shader::*;
