//! The colored triangle with its shaders read from disk at startup.
//!
//! Editing the files under `shaders/colored` and restarting picks up the change without a
//! rebuild.

use std::path::PathBuf;
use std::process::ExitCode;

use gl_triangles::abs::Mesh;
use gl_triangles::lesson::{self, ShaderSources};
use gl_triangles::vertex::COLORED_TRIANGLE;

fn main() -> ExitCode {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("shaders/colored");
    let shaders = ShaderSources::Files {
        vertex: dir.join("vert.glsl"),
        fragment: dir.join("frag.glsl"),
    };

    lesson::launch("Shader Files", shaders, |gl| {
        Mesh::new(gl, &COLORED_TRIANGLE, glow::TRIANGLES)
    })
}
