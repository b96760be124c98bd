//! Bootstrap shared by the lesson binaries.
//!
//! A lesson only supplies its shaders and a function building its mesh; [`launch`] does the
//! rest: logging, config, window, shader build, render loop and teardown.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use glam::Vec4;
use glow::HasContext;

use crate::abs::{App, Mesh, ShaderError, ShaderProgram, ShaderStage, read_shader_source};
use crate::config::{CONFIG_FILE, WindowConfig};
use crate::render_loop::{self, Scene};

/// Process status for a failed window or GL loader initialization (`-1` truncated to a byte).
pub const INIT_FAILURE: u8 = 255;

/// Where a lesson's two shader stages come from.
#[derive(Debug, Clone)]
pub enum ShaderSources {
    Inline {
        vertex: &'static str,
        fragment: &'static str,
    },
    /// Read from disk when the lesson starts.
    Files { vertex: PathBuf, fragment: PathBuf },
}

impl ShaderSources {
    /// Resolves the sources of both stages. A file that cannot be read is reported and its
    /// stage left out.
    pub fn load(&self) -> (Vec<(ShaderStage, String)>, Vec<ShaderError>) {
        match self {
            ShaderSources::Inline { vertex, fragment } => (
                vec![
                    (ShaderStage::Vertex, vertex.to_string()),
                    (ShaderStage::Fragment, fragment.to_string()),
                ],
                Vec::new(),
            ),
            ShaderSources::Files { vertex, fragment } => {
                let mut sources = Vec::new();
                let mut errors = Vec::new();
                for (stage, path) in [(ShaderStage::Vertex, vertex), (ShaderStage::Fragment, fragment)] {
                    match read_shader_source(path) {
                        Ok(source) => sources.push((stage, source)),
                        Err(e) => errors.push(e),
                    }
                }
                (sources, errors)
            }
        }
    }
}

/// The GL calls a [`TriangleScene`] makes each frame.
pub trait RenderTarget {
    type Program;
    type Mesh;

    fn clear(&self, color: Vec4);

    /// Binds `program`, or program 0 when there is none.
    fn use_program(&self, program: Option<&Self::Program>);

    fn draw(&self, mesh: &Self::Mesh);

    fn viewport(&self, width: i32, height: i32);

    /// Switches between filled and outlined polygons.
    fn set_wireframe(&self, wireframe: bool);
}

/// [`RenderTarget`] over a live GL context.
pub struct GlTarget {
    gl: Arc<glow::Context>,
}

impl GlTarget {
    pub fn new(gl: &Arc<glow::Context>) -> Self {
        Self { gl: Arc::clone(gl) }
    }
}

impl RenderTarget for GlTarget {
    type Program = ShaderProgram;
    type Mesh = Mesh;

    fn clear(&self, color: Vec4) {
        unsafe {
            self.gl.clear_color(color.x, color.y, color.z, color.w);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn use_program(&self, program: Option<&ShaderProgram>) {
        match program {
            Some(program) => program.use_program(),
            None => unsafe { self.gl.use_program(None) },
        }
    }

    fn draw(&self, mesh: &Mesh) {
        mesh.draw();
    }

    fn viewport(&self, width: i32, height: i32) {
        unsafe {
            self.gl.viewport(0, 0, width, height);
        }
    }

    fn set_wireframe(&self, wireframe: bool) {
        let mode = if wireframe { glow::LINE } else { glow::FILL };
        unsafe {
            self.gl.polygon_mode(glow::FRONT_AND_BACK, mode);
        }
    }
}

/// One mesh drawn with one program over a flat clear color.
pub struct TriangleScene<T: RenderTarget = GlTarget> {
    target: T,
    program: Option<T::Program>,
    mesh: T::Mesh,
    clear_color: Vec4,
}

impl<T: RenderTarget> TriangleScene<T> {
    pub fn new(target: T, program: Option<T::Program>, mesh: T::Mesh, clear_color: Vec4) -> Self {
        Self {
            target,
            program,
            mesh,
            clear_color,
        }
    }

    pub fn set_wireframe(&self, wireframe: bool) {
        self.target.set_wireframe(wireframe);
    }
}

impl<T: RenderTarget> Scene for TriangleScene<T> {
    fn render(&mut self) {
        self.target.clear(self.clear_color);
        self.target.use_program(self.program.as_ref());
        self.target.draw(&self.mesh);
    }

    fn resize(&mut self, width: i32, height: i32) {
        self.target.viewport(width, height);
    }
}

/// Runs a lesson to completion and returns the process exit code.
pub fn launch<F>(default_title: &str, shaders: ShaderSources, build_mesh: F) -> ExitCode
where
    F: FnOnce(&Arc<glow::Context>) -> Result<Mesh, String>,
{
    if let Err(e) = crate::logging::init() {
        eprintln!("Failed to install logger: {}", e);
    }

    let config = WindowConfig::load_or_default(CONFIG_FILE);
    let title = config.title_or(default_title);

    let mut app = match App::new(title, &config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Failed to create window: {}", e);
            return ExitCode::from(INIT_FAILURE);
        }
    };

    let (sources, mut errors) = shaders.load();
    let (program, build_errors) = ShaderProgram::build_lenient(&app.gl, &sources);
    errors.extend(build_errors);
    for e in &errors {
        log::error!("{}", e);
    }

    let mesh = match build_mesh(&app.gl) {
        Ok(mesh) => mesh,
        Err(e) => {
            log::error!("Failed to upload geometry: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::debug!(
        "Uploaded {} mesh drawing {} elements",
        if mesh.is_indexed() { "indexed" } else { "array" },
        mesh.count()
    );

    let mut scene = TriangleScene::new(GlTarget::new(&app.gl), program, mesh, config.clear_color());
    scene.set_wireframe(config.wireframe);

    let (width, height) = app.window.drawable_size();
    scene.resize(width as i32, height as i32);

    let stats = render_loop::run(&mut app, &mut scene);
    log::info!("Window closed after {} frames", stats.frames);

    drop(scene);
    drop(app);
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::input::WindowEvent;
    use crate::render_loop::Surface;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Vec4),
        UseProgram(Option<u32>),
        Draw(&'static str),
        Viewport(i32, i32),
        Wireframe(bool),
    }

    #[derive(Default)]
    struct RecordingTarget {
        calls: RefCell<Vec<Call>>,
    }

    impl RenderTarget for &RecordingTarget {
        type Program = u32;
        type Mesh = &'static str;

        fn clear(&self, color: Vec4) {
            self.calls.borrow_mut().push(Call::Clear(color));
        }

        fn use_program(&self, program: Option<&u32>) {
            self.calls.borrow_mut().push(Call::UseProgram(program.copied()));
        }

        fn draw(&self, mesh: &&'static str) {
            self.calls.borrow_mut().push(Call::Draw(*mesh));
        }

        fn viewport(&self, width: i32, height: i32) {
            self.calls.borrow_mut().push(Call::Viewport(width, height));
        }

        fn set_wireframe(&self, wireframe: bool) {
            self.calls.borrow_mut().push(Call::Wireframe(wireframe));
        }
    }

    /// Closes after `frames` polls.
    struct CountdownSurface {
        frames: u32,
    }

    impl Surface for CountdownSurface {
        fn poll_events(&mut self) -> Vec<WindowEvent> {
            self.frames -= 1;
            if self.frames == 0 {
                vec![WindowEvent::Resized(640, 480), WindowEvent::CloseRequested]
            } else {
                Vec::new()
            }
        }

        fn swap_buffers(&mut self) {}
    }

    const TEAL: Vec4 = Vec4::new(0.2, 0.3, 0.3, 1.0);

    #[test]
    fn test_render_clears_then_draws() {
        let target = RecordingTarget::default();
        let mut scene = TriangleScene::new(&target, Some(7), "triangle", TEAL);

        scene.render();

        assert_eq!(
            *target.calls.borrow(),
            vec![Call::Clear(TEAL), Call::UseProgram(Some(7)), Call::Draw("triangle")]
        );
    }

    #[test]
    fn test_missing_program_binds_zero_and_still_draws() {
        let target = RecordingTarget::default();
        let mut scene = TriangleScene::new(&target, None, "triangle", TEAL);

        scene.render();

        assert_eq!(
            *target.calls.borrow(),
            vec![Call::Clear(TEAL), Call::UseProgram(None), Call::Draw("triangle")]
        );
    }

    #[test]
    fn test_loop_without_program_runs_every_frame() {
        let target = RecordingTarget::default();
        let mut scene = TriangleScene::new(&target, None, "triangle", TEAL);
        scene.set_wireframe(true);
        let mut surface = CountdownSurface { frames: 3 };

        let stats = render_loop::run(&mut surface, &mut scene);

        assert_eq!(stats.frames, 3);
        let calls = target.calls.borrow();
        assert_eq!(calls[0], Call::Wireframe(true));
        let frame = [Call::Clear(TEAL), Call::UseProgram(None), Call::Draw("triangle")];
        for chunk in calls[1..10].chunks(3) {
            assert_eq!(chunk, frame);
        }
        assert_eq!(calls[10..], [Call::Viewport(640, 480)]);
    }

    #[test]
    fn test_inline_sources_load_both_stages() {
        let shaders = ShaderSources::Inline {
            vertex: "vert",
            fragment: "frag",
        };
        let (sources, errors) = shaders.load();
        assert!(errors.is_empty());
        assert_eq!(
            sources,
            vec![
                (ShaderStage::Vertex, "vert".to_string()),
                (ShaderStage::Fragment, "frag".to_string())
            ]
        );
    }

    #[test]
    fn test_missing_file_skips_stage() {
        let dir = std::env::temp_dir().join(format!("gl-triangles-lesson-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let vertex = dir.join("vert.glsl");
        std::fs::write(&vertex, "#version 330 core\n").unwrap();

        let shaders = ShaderSources::Files {
            vertex: vertex.clone(),
            fragment: dir.join("frag.glsl"),
        };
        let (sources, errors) = shaders.load();

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].0, ShaderStage::Vertex);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ShaderError::Io { .. }));
        assert!(errors[0].to_string().starts_with("ERROR::SHADER::FILE_NOT_SUCCESSFULLY_READ"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_bundled_shader_files_exist() {
        let shaders = ShaderSources::Files {
            vertex: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/colored/vert.glsl")),
            fragment: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/colored/frag.glsl")),
        };
        let (sources, errors) = shaders.load();
        assert!(errors.is_empty(), "{:?}", errors);
        assert!(sources.iter().all(|(_, s)| s.contains("#version 330 core")));
    }
}
