//! Two triangles sharing an edge. Four vertices, six indices.

use std::process::ExitCode;

use gl_triangles::abs::Mesh;
use gl_triangles::lesson;
use gl_triangles::vertex::{RECTANGLE, RECTANGLE_INDICES};

fn main() -> ExitCode {
    lesson::launch("Rectangle", gl_triangles::inline_shaders!("basic"), |gl| {
        Mesh::indexed(gl, &RECTANGLE, &RECTANGLE_INDICES, glow::TRIANGLES)
    })
}
