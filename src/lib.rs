//! Small OpenGL lessons that each draw a single triangle.
//!
//! The window bootstrap, shader build, geometry upload and render loop live here once; the
//! binaries under `src/bin` only pick their shaders and geometry.

pub mod abs;
pub mod config;
pub mod input;
pub mod lesson;
pub mod logging;
pub mod render_loop;
pub mod vertex;

/// Builds inline [`lesson::ShaderSources`] from a directory under `shaders/`.
#[macro_export]
macro_rules! inline_shaders {
    ($name:literal) => {
        $crate::lesson::ShaderSources::Inline {
            vertex: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/", $name, "/vert.glsl")),
            fragment: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/", $name, "/frag.glsl")),
        }
    };
}
