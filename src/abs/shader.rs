//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders,
//! and the [`ShaderError`] diagnostics reported when a stage fails to compile or a program fails
//! to link.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use glow::HasContext;

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The GL enum passed to `glCreateShader`.
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "VERTEX",
            ShaderStage::Fragment => "FRAGMENT",
        }
    }
}

/// Why a shader or program could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// The driver refused to hand out a shader or program object.
    Create(String),
    Compile { stage: ShaderStage, log: String },
    Link { log: String },
    /// A shader source file could not be read.
    Io { path: String, message: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Create(message) => {
                write!(f, "ERROR::SHADER::CREATION_FAILED\n{}", message)
            }
            ShaderError::Compile { stage, log } => {
                write!(f, "ERROR::SHADER::{}::COMPILATION_FAILED\n{}", stage.label(), log)
            }
            ShaderError::Link { log } => {
                write!(f, "ERROR::SHADER::PROGRAM::LINKING_FAILED\n{}", log)
            }
            ShaderError::Io { path, message } => {
                write!(f, "ERROR::SHADER::FILE_NOT_SUCCESSFULLY_READ\n{}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// Reads GLSL source from disk.
pub fn read_shader_source(path: impl AsRef<Path>) -> Result<String, ShaderError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| ShaderError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<glow::Context>, stage: ShaderStage, source: &str) -> Result<Self, ShaderError> {
        unsafe {
            let shader = gl.create_shader(stage.gl_enum()).map_err(ShaderError::Create)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(ShaderError::Compile { stage, log });
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Compiles stages and links them into a program.
///
/// [`link_lenient`] only talks to this trait, so which stages reach the linker and which
/// diagnostics come out do not depend on a live GL context.
pub trait ShaderBackend {
    type Shader;
    type Program;

    fn compile(&self, stage: ShaderStage, source: &str) -> Result<Self::Shader, ShaderError>;

    /// Links `shaders` into a new program. The program is returned even when linking fails,
    /// together with the info log. `Err` means no program object could be created.
    fn link(&self, shaders: &[Self::Shader]) -> Result<(Self::Program, Option<String>), String>;
}

/// Compiles every stage and links whatever compiled, collecting diagnostics instead of failing.
///
/// A stage that fails to compile is left out of the link. A program that fails to link is still
/// returned; drawing with it produces nothing visible. `None` is returned only when no program
/// object could be created at all. The compiled stages are dropped before returning.
pub fn link_lenient<B: ShaderBackend>(
    backend: &B,
    sources: &[(ShaderStage, String)],
) -> (Option<B::Program>, Vec<ShaderError>) {
    let mut errors = Vec::new();

    let shaders: Vec<B::Shader> = sources
        .iter()
        .filter_map(|(stage, source)| match backend.compile(*stage, source) {
            Ok(shader) => Some(shader),
            Err(e) => {
                errors.push(e);
                None
            }
        })
        .collect();

    match backend.link(&shaders) {
        Ok((program, log)) => {
            if let Some(log) = log {
                errors.push(ShaderError::Link { log });
            }
            (Some(program), errors)
        }
        Err(e) => {
            errors.push(ShaderError::Create(e));
            (None, errors)
        }
    }
}

/// [`ShaderBackend`] over a live GL context.
pub struct GlShaderBackend<'a> {
    gl: &'a Arc<glow::Context>,
}

impl<'a> GlShaderBackend<'a> {
    pub fn new(gl: &'a Arc<glow::Context>) -> Self {
        Self { gl }
    }
}

impl ShaderBackend for GlShaderBackend<'_> {
    type Shader = Shader;
    type Program = ShaderProgram;

    fn compile(&self, stage: ShaderStage, source: &str) -> Result<Shader, ShaderError> {
        Shader::new(self.gl, stage, source)
    }

    fn link(&self, shaders: &[Shader]) -> Result<(ShaderProgram, Option<String>), String> {
        let gl = self.gl;
        unsafe {
            let program = gl.create_program()?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            let log = if gl.get_program_link_status(program) {
                None
            } else {
                Some(gl.get_program_info_log(program))
            };

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok((
                ShaderProgram {
                    gl: Arc::clone(gl),
                    id: program,
                },
                log,
            ))
        }
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Builds a program with [`link_lenient`] on the given context.
    pub fn build_lenient(
        gl: &Arc<glow::Context>,
        sources: &[(ShaderStage, String)],
    ) -> (Option<Self>, Vec<ShaderError>) {
        link_lenient(&GlShaderBackend::new(gl), sources)
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
