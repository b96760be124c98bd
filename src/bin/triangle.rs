//! A single orange triangle drawn straight from a vertex buffer.

use std::process::ExitCode;

use gl_triangles::abs::Mesh;
use gl_triangles::lesson;
use gl_triangles::vertex::TRIANGLE;

fn main() -> ExitCode {
    lesson::launch("Triangle", gl_triangles::inline_shaders!("basic"), |gl| {
        Mesh::new(gl, &TRIANGLE, glow::TRIANGLES)
    })
}
