//! Window events and the open/closed window state.

use sdl2::event::{Event, WindowEvent as SdlWindowEvent};
use sdl2::keyboard::Keycode;

/// The subset of platform events the lessons react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window's close button was pressed, or the platform asked the app to quit.
    CloseRequested,
    KeyPressed(Keycode),
    /// The drawable size changed to the given width and height in pixels.
    Resized(i32, i32),
}

impl WindowEvent {
    /// Converts an SDL event, dropping everything the lessons ignore.
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match *event {
            Event::Quit { .. }
            | Event::Window {
                win_event: SdlWindowEvent::Close,
                ..
            } => Some(Self::CloseRequested),
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => Some(Self::KeyPressed(keycode)),
            Event::Window {
                win_event: SdlWindowEvent::SizeChanged(width, height),
                ..
            } => Some(Self::Resized(width, height)),
            _ => None,
        }
    }
}

/// Tracks whether the window should close.
#[derive(Debug, Default)]
pub struct WindowState {
    should_close: bool,
}

impl WindowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    pub fn request_close(&mut self) {
        self.should_close = true;
    }

    /// Applies an event. Returns the new size for resize events so the caller can update the
    /// viewport.
    pub fn handle(&mut self, event: WindowEvent) -> Option<(i32, i32)> {
        match event {
            WindowEvent::CloseRequested | WindowEvent::KeyPressed(Keycode::Escape) => {
                self.request_close();
                None
            }
            WindowEvent::KeyPressed(_) => None,
            WindowEvent::Resized(width, height) => Some((width, height)),
        }
    }
}
