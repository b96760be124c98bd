//! Per-vertex colors, interpolated across the triangle.

use std::process::ExitCode;

use gl_triangles::abs::Mesh;
use gl_triangles::lesson;
use gl_triangles::vertex::COLORED_TRIANGLE;

fn main() -> ExitCode {
    lesson::launch("Colored Triangle", gl_triangles::inline_shaders!("colored"), |gl| {
        Mesh::new(gl, &COLORED_TRIANGLE, glow::TRIANGLES)
    })
}
