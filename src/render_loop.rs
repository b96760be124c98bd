//! The per-frame loop shared by every lesson.
//!
//! The loop only talks to a [`Surface`] (something that produces events and presents frames)
//! and a [`Scene`] (something that draws), so it runs the same against a real SDL window or a
//! scripted stand-in.

use sdl2::keyboard::Scancode;

use crate::input::{WindowEvent, WindowState};

/// A window that can be presented to and polled for events.
pub trait Surface {
    /// Drains every pending event without blocking.
    fn poll_events(&mut self) -> Vec<WindowEvent>;

    /// Presents the back buffer.
    fn swap_buffers(&mut self);

    /// Whether the key is held down right now, regardless of when it was pressed.
    fn is_key_held(&self, _scancode: Scancode) -> bool {
        false
    }
}

/// Something drawn once per frame.
pub trait Scene {
    /// Clears the framebuffer and issues the frame's draw call.
    fn render(&mut self);

    /// Called when the drawable size changes.
    fn resize(&mut self, _width: i32, _height: i32) {}
}

/// Counters gathered while the loop ran.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
}

/// Runs until the window is asked to close.
///
/// Each iteration checks whether Escape is held, renders once, swaps once and then drains events.
/// A held Escape still lets the current frame finish; a close request seen while draining ends
/// the loop before the next frame.
pub fn run<S: Surface, R: Scene>(surface: &mut S, scene: &mut R) -> FrameStats {
    let mut state = WindowState::new();
    let mut stats = FrameStats::default();

    while !state.should_close() {
        if surface.is_key_held(Scancode::Escape) {
            state.request_close();
        }

        scene.render();
        surface.swap_buffers();
        stats.frames += 1;

        for event in surface.poll_events() {
            if let Some((width, height)) = state.handle(event) {
                log::debug!("Framebuffer resized to {}x{}", width, height);
                scene.resize(width, height);
            }
        }
    }

    stats
}
