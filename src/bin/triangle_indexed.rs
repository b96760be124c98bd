//! The orange triangle again, this time drawn through an element buffer.

use std::process::ExitCode;

use gl_triangles::abs::Mesh;
use gl_triangles::lesson;
use gl_triangles::vertex::{TRIANGLE, TRIANGLE_INDICES};

fn main() -> ExitCode {
    lesson::launch("FirstWindow", gl_triangles::inline_shaders!("basic"), |gl| {
        Mesh::indexed(gl, &TRIANGLE, &TRIANGLE_INDICES, glow::TRIANGLES)
    })
}
