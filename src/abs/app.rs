//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glow::HasContext;

use crate::config::WindowConfig;
use crate::input::WindowEvent;
use crate::render_loop::Surface;

/// Entry points `glow` calls while it builds its context. Without them it cannot report a
/// version and aborts.
const REQUIRED_GL_SYMBOLS: [&str; 2] = ["glGetString", "glGetIntegerv"];

/// Returns the required GL entry points that `loader` cannot resolve.
pub fn missing_gl_symbols<T>(loader: impl Fn(&str) -> *const T) -> Vec<&'static str> {
    REQUIRED_GL_SYMBOLS
        .into_iter()
        .filter(|name| loader(name).is_null())
        .collect()
}

/// Whether a context reporting `reported` can serve a request for `requested`.
pub fn version_satisfies(reported: (u32, u32), requested: (u8, u8)) -> bool {
    reported >= (requested.0 as u32, requested.1 as u32)
}

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// Dropping it destroys the GL context and the window, then shuts SDL down, so every GPU
/// resource created from [`App::gl`] must be dropped first.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a new [`App`] with a window titled `title`, sized and versioned from `config`.
    pub fn new(title: &str, config: &WindowConfig) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        let (major, minor) = config.gl_version;
        gl_attr.set_context_version(major, minor);

        let window = video_subsystem
            .window(title, config.width, config.height)
            .opengl()
            .resizable()
            .build()
            .map_err(|e| format!("Failed to create window: {}", e))?;

        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;

        if let Err(e) = video_subsystem.gl_set_swap_interval(if config.vsync { 1 } else { 0 }) {
            log::warn!("Could not set swap interval: {}", e);
        }

        let missing = missing_gl_symbols(|s| video_subsystem.gl_get_proc_address(s));
        if !missing.is_empty() {
            return Err(format!(
                "Failed to load OpenGL function pointers: {} not found",
                missing.join(", ")
            ));
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let version = gl.version();
        if !version_satisfies((version.major, version.minor), config.gl_version) {
            return Err(format!(
                "Failed to load OpenGL {}.{}: context reports {}.{}",
                major, minor, version.major, version.minor
            ));
        }

        unsafe {
            log::info!(
                "OpenGL {} on {} ({})",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER),
                gl.get_parameter_string(glow::VENDOR)
            );
        }

        let event_pump = sdl.event_pump()?;
        let gl = Arc::new(gl);

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }
}

impl Surface for App {
    fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.event_pump
            .poll_iter()
            .filter_map(|event| WindowEvent::from_sdl(&event))
            .collect()
    }

    fn swap_buffers(&mut self) {
        self.window.gl_swap_window();
    }

    fn is_key_held(&self, scancode: sdl2::keyboard::Scancode) -> bool {
        self.event_pump.keyboard_state().is_scancode_pressed(scancode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_without_symbols_is_rejected() {
        let missing = missing_gl_symbols(|_| std::ptr::null::<()>());
        assert_eq!(missing, vec!["glGetString", "glGetIntegerv"]);
    }

    #[test]
    fn test_loader_missing_get_string() {
        let resolved = 0x1000usize as *const ();
        let missing = missing_gl_symbols(|name| {
            if name == "glGetString" {
                std::ptr::null()
            } else {
                resolved
            }
        });
        assert_eq!(missing, vec!["glGetString"]);
    }

    #[test]
    fn test_loader_with_symbols_passes() {
        let resolved = 0x1000usize as *const ();
        assert!(missing_gl_symbols(|_| resolved).is_empty());
    }

    #[test]
    fn test_version_check() {
        assert!(version_satisfies((3, 3), (3, 3)));
        assert!(version_satisfies((4, 6), (3, 3)));
        assert!(version_satisfies((4, 0), (3, 3)));
        assert!(!version_satisfies((3, 2), (3, 3)));
        assert!(!version_satisfies((2, 1), (3, 3)));
    }
}
